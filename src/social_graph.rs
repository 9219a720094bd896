// Social Graph - single entry point over the stores and derived views
//
// Every component sits behind its own lock. An operation takes all the locks it
// needs up front, always in this order:
//   users -> posts -> keywords -> trending -> ranking -> mailboxes -> history
// It validates every id, mutates, and then releases everything together, so readers
// never see a like count that the trending index has not caught up with.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, instrument};

use crate::config::TrendingConfig;
use crate::core::{LikeCount, PostId, Score, UserId};
use crate::error::{AppError, AppResult};
use crate::infrastructure::active_user_ranking::{ActiveUserRanking, RankedUser};
use crate::infrastructure::engagement::{EngagementAction, EngagementPolicy};
use crate::infrastructure::keyword_index::KeywordIndex;
use crate::infrastructure::like_search;
use crate::infrastructure::mailbox::MailboxStore;
use crate::infrastructure::post_store::PostStore;
use crate::infrastructure::traits::SocialOperations;
use crate::infrastructure::trending_index::TrendingIndex;
use crate::infrastructure::user_store::UserStore;
use crate::infrastructure::view_history::ViewHistory;
use crate::models::{Message, Post, User};

#[derive(Clone)]
pub struct SocialGraph {
    users: Arc<RwLock<UserStore>>,
    posts: Arc<RwLock<PostStore>>,
    keywords: Arc<RwLock<KeywordIndex>>,
    trending: Arc<RwLock<TrendingIndex>>,
    ranking: Arc<RwLock<ActiveUserRanking>>,
    mailboxes: Arc<Mutex<MailboxStore>>,
    history: Arc<Mutex<ViewHistory>>,
}

impl std::fmt::Debug for SocialGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SocialGraph").finish_non_exhaustive()
    }
}

impl Default for SocialGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SocialGraph {
    pub fn new() -> Self {
        Self::with_config(&TrendingConfig::default())
    }

    pub fn with_config(trending: &TrendingConfig) -> Self {
        Self {
            users: Arc::new(RwLock::new(UserStore::new())),
            posts: Arc::new(RwLock::new(PostStore::new())),
            keywords: Arc::new(RwLock::new(KeywordIndex::new())),
            trending: Arc::new(RwLock::new(TrendingIndex::new(trending.min_likes))),
            ranking: Arc::new(RwLock::new(ActiveUserRanking::new())),
            mailboxes: Arc::new(Mutex::new(MailboxStore::new())),
            history: Arc::new(Mutex::new(ViewHistory::new())),
        }
    }

    #[instrument(skip(self, name))]
    pub async fn add_user(&self, user_id: UserId, name: &str) -> AppResult<()> {
        let mut users = self.users.write().await;
        users.add(user_id, name)?;
        info!("Created user {} ({})", user_id, name);
        Ok(())
    }

    /// Store the post, attach it to its author and index its tokens
    #[instrument(skip(self, content))]
    pub async fn create_post(&self, author: UserId, content: &str) -> AppResult<PostId> {
        let mut users = self.users.write().await;
        let mut posts = self.posts.write().await;
        let mut keywords = self.keywords.write().await;

        users.require(author)?;
        let post_id = posts.create(author, content);
        users.record_post(author, post_id)?;
        let tokens = keywords.index_post(post_id, content);

        info!(
            "User {} created post {} ({} tokens, {} indexed overall)",
            author,
            post_id,
            tokens,
            keywords.token_count()
        );
        Ok(post_id)
    }

    /// Returns the post's new like count
    #[instrument(skip(self))]
    pub async fn like_post(&self, user_id: UserId, post_id: PostId) -> AppResult<LikeCount> {
        let mut users = self.users.write().await;
        let mut posts = self.posts.write().await;
        let mut trending = self.trending.write().await;
        let mut ranking = self.ranking.write().await;

        users.require(user_id)?;
        posts.require(post_id)?;

        let likes = posts.like(post_id)?;
        trending.on_like(post_id, likes);
        EngagementPolicy::apply(EngagementAction::Like, user_id, &mut users, &mut ranking)?;

        info!("User {} liked post {} ({} likes)", user_id, post_id, likes);
        Ok(likes)
    }

    /// Returns the post's new like count. Engagement is never taken back.
    #[instrument(skip(self))]
    pub async fn unlike_post(&self, user_id: UserId, post_id: PostId) -> AppResult<LikeCount> {
        let users = self.users.read().await;
        let mut posts = self.posts.write().await;
        let mut trending = self.trending.write().await;

        users.require(user_id)?;
        posts.require(post_id)?;

        let likes = posts.unlike(post_id)?;
        trending.on_unlike(post_id, likes, posts.like_counts());

        info!("User {} unliked post {} ({} likes)", user_id, post_id, likes);
        Ok(likes)
    }

    #[instrument(skip(self, text))]
    pub async fn comment_on_post(
        &self,
        user_id: UserId,
        post_id: PostId,
        text: &str,
    ) -> AppResult<()> {
        let mut users = self.users.write().await;
        let mut posts = self.posts.write().await;
        let mut ranking = self.ranking.write().await;

        users.require(user_id)?;
        posts.require(post_id)?;

        let count = posts.add_comment(post_id, text)?;
        EngagementPolicy::apply(EngagementAction::Comment, user_id, &mut users, &mut ranking)?;

        info!("User {} commented on post {} ({} comments)", user_id, post_id, count);
        Ok(())
    }

    #[instrument(skip(self, text))]
    pub async fn send_message(
        &self,
        sender: UserId,
        receiver: UserId,
        text: &str,
    ) -> AppResult<()> {
        let mut users = self.users.write().await;
        let mut ranking = self.ranking.write().await;
        let mut mailboxes = self.mailboxes.lock().await;

        users.require(sender)?;
        users.require(receiver)?;

        mailboxes.deliver(Message::new(sender, receiver, text.to_string()));
        EngagementPolicy::apply(
            EngagementAction::SendMessage,
            sender,
            &mut users,
            &mut ranking,
        )?;

        info!(
            "User {} sent a message to user {} ({} pending)",
            sender,
            receiver,
            mailboxes.pending(receiver)
        );
        Ok(())
    }

    /// Remove and return the user's queued messages, oldest first
    #[instrument(skip(self))]
    pub async fn drain_messages(&self, user_id: UserId) -> AppResult<Vec<Message>> {
        let users = self.users.read().await;
        let mut mailboxes = self.mailboxes.lock().await;

        users.require(user_id)?;
        Ok(mailboxes.drain(user_id))
    }

    #[instrument(skip(self))]
    pub async fn peek_messages(&self, user_id: UserId) -> AppResult<Vec<Message>> {
        let users = self.users.read().await;
        let mailboxes = self.mailboxes.lock().await;

        users.require(user_id)?;
        Ok(mailboxes.peek(user_id))
    }

    #[instrument(skip(self))]
    pub async fn view_post(&self, user_id: UserId, post_id: PostId) -> AppResult<()> {
        let users = self.users.read().await;
        let posts = self.posts.read().await;
        let mut history = self.history.lock().await;

        users.require(user_id)?;
        posts.require(post_id)?;
        history.record_view(user_id, post_id);
        info!(
            "User {} viewed post {} (history depth {})",
            user_id,
            post_id,
            history.depth(user_id)
        );
        Ok(())
    }

    /// Pop the user's most recently viewed post
    #[instrument(skip(self))]
    pub async fn go_back(&self, user_id: UserId) -> AppResult<Option<PostId>> {
        let users = self.users.read().await;
        let mut history = self.history.lock().await;

        users.require(user_id)?;
        Ok(history.go_back(user_id))
    }

    /// Smallest post id among posts with exactly `likes` likes
    pub async fn find_post_by_like_count(&self, likes: LikeCount) -> AppResult<PostId> {
        let posts = self.posts.read().await;
        like_search::find_post_by_like_count(posts.like_counts(), likes)
            .ok_or_else(|| AppError::NotFound(format!("post with {} likes", likes)))
    }

    pub async fn posts_for_token(&self, token: &str) -> Vec<PostId> {
        self.keywords.read().await.posts_for_token(token).to_vec()
    }

    pub async fn is_trending(&self, post_id: PostId) -> bool {
        self.trending.read().await.is_trending(post_id)
    }

    pub async fn top_trending(&self, k: usize) -> Vec<(PostId, LikeCount)> {
        self.trending.read().await.top_trending(k)
    }

    pub async fn top_active(&self, k: usize) -> Vec<RankedUser> {
        self.ranking.read().await.top_active(k)
    }

    pub async fn engagement_score(&self, user_id: UserId) -> AppResult<Score> {
        Ok(self.users.read().await.require(user_id)?.engagement_score)
    }

    pub async fn list_users(&self) -> Vec<User> {
        self.users.read().await.snapshot()
    }

    pub async fn list_posts(&self) -> Vec<Post> {
        self.posts.read().await.snapshot()
    }
}

#[async_trait]
impl SocialOperations for SocialGraph {
    async fn add_user(&self, user_id: UserId, name: &str) -> AppResult<()> {
        self.add_user(user_id, name).await
    }

    async fn create_post(&self, author: UserId, content: &str) -> AppResult<PostId> {
        self.create_post(author, content).await
    }

    async fn like_post(&self, user_id: UserId, post_id: PostId) -> AppResult<LikeCount> {
        self.like_post(user_id, post_id).await
    }

    async fn unlike_post(&self, user_id: UserId, post_id: PostId) -> AppResult<LikeCount> {
        self.unlike_post(user_id, post_id).await
    }

    async fn comment_on_post(&self, user_id: UserId, post_id: PostId, text: &str) -> AppResult<()> {
        self.comment_on_post(user_id, post_id, text).await
    }

    async fn send_message(&self, sender: UserId, receiver: UserId, text: &str) -> AppResult<()> {
        self.send_message(sender, receiver, text).await
    }

    async fn drain_messages(&self, user_id: UserId) -> AppResult<Vec<Message>> {
        self.drain_messages(user_id).await
    }

    async fn peek_messages(&self, user_id: UserId) -> AppResult<Vec<Message>> {
        self.peek_messages(user_id).await
    }

    async fn view_post(&self, user_id: UserId, post_id: PostId) -> AppResult<()> {
        self.view_post(user_id, post_id).await
    }

    async fn go_back(&self, user_id: UserId) -> AppResult<Option<PostId>> {
        self.go_back(user_id).await
    }

    async fn find_post_by_like_count(&self, likes: LikeCount) -> AppResult<PostId> {
        self.find_post_by_like_count(likes).await
    }

    async fn posts_for_token(&self, token: &str) -> Vec<PostId> {
        self.posts_for_token(token).await
    }

    async fn is_trending(&self, post_id: PostId) -> bool {
        self.is_trending(post_id).await
    }

    async fn top_trending(&self, k: usize) -> Vec<(PostId, LikeCount)> {
        self.top_trending(k).await
    }

    async fn top_active(&self, k: usize) -> Vec<RankedUser> {
        self.top_active(k).await
    }

    async fn engagement_score(&self, user_id: UserId) -> AppResult<Score> {
        self.engagement_score(user_id).await
    }

    async fn list_users(&self) -> Vec<User> {
        self.list_users().await
    }

    async fn list_posts(&self) -> Vec<Post> {
        self.list_posts().await
    }
}
