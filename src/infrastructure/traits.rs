use async_trait::async_trait;

use crate::core::{LikeCount, PostId, Score, UserId};
use crate::error::AppResult;
use crate::infrastructure::active_user_ranking::RankedUser;
use crate::models::{Message, Post, User};

/// Public operations on the social graph.
/// Mutations validate every referenced id before changing anything.
#[async_trait]
pub trait SocialOperations: Send + Sync {
    async fn add_user(&self, user_id: UserId, name: &str) -> AppResult<()>;
    async fn create_post(&self, author: UserId, content: &str) -> AppResult<PostId>;
    async fn like_post(&self, user_id: UserId, post_id: PostId) -> AppResult<LikeCount>;
    async fn unlike_post(&self, user_id: UserId, post_id: PostId) -> AppResult<LikeCount>;
    async fn comment_on_post(&self, user_id: UserId, post_id: PostId, text: &str) -> AppResult<()>;
    async fn send_message(&self, sender: UserId, receiver: UserId, text: &str) -> AppResult<()>;
    async fn drain_messages(&self, user_id: UserId) -> AppResult<Vec<Message>>;
    async fn peek_messages(&self, user_id: UserId) -> AppResult<Vec<Message>>;
    async fn view_post(&self, user_id: UserId, post_id: PostId) -> AppResult<()>;
    async fn go_back(&self, user_id: UserId) -> AppResult<Option<PostId>>;
    async fn find_post_by_like_count(&self, likes: LikeCount) -> AppResult<PostId>;
    async fn posts_for_token(&self, token: &str) -> Vec<PostId>;
    async fn is_trending(&self, post_id: PostId) -> bool;
    async fn top_trending(&self, k: usize) -> Vec<(PostId, LikeCount)>;
    async fn top_active(&self, k: usize) -> Vec<RankedUser>;
    async fn engagement_score(&self, user_id: UserId) -> AppResult<Score>;
    async fn list_users(&self) -> Vec<User>;
    async fn list_posts(&self) -> Vec<Post>;
}
