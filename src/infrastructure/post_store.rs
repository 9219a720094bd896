use std::collections::BTreeMap;

use tracing::debug;

use crate::core::{LikeCount, PostId, UserId};
use crate::error::{AppError, AppResult};
use crate::infrastructure::id_generator::PostIdGenerator;
use crate::models::Post;

/// Owns every post, keyed by id, and hands out post ids
#[derive(Debug, Default)]
pub struct PostStore {
    posts: BTreeMap<PostId, Post>,
    id_generator: PostIdGenerator,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new post and return its id.
    /// The author must already have been validated by the caller.
    pub fn create(&mut self, author: UserId, content: impl Into<String>) -> PostId {
        let id = self.id_generator.next_id();
        self.posts.insert(id, Post::new(id, author, content.into()));
        debug!("Stored post {} by user {}", id, author);
        id
    }

    pub fn get(&self, post_id: PostId) -> Option<&Post> {
        self.posts.get(&post_id)
    }

    pub fn require(&self, post_id: PostId) -> AppResult<&Post> {
        self.posts
            .get(&post_id)
            .ok_or_else(|| AppError::post_not_found(post_id))
    }

    fn require_mut(&mut self, post_id: PostId) -> AppResult<&mut Post> {
        self.posts
            .get_mut(&post_id)
            .ok_or_else(|| AppError::post_not_found(post_id))
    }

    /// Returns the new like count
    pub fn like(&mut self, post_id: PostId) -> AppResult<LikeCount> {
        Ok(self.require_mut(post_id)?.like())
    }

    /// Returns the new like count; a post already at zero stays at zero
    pub fn unlike(&mut self, post_id: PostId) -> AppResult<LikeCount> {
        Ok(self.require_mut(post_id)?.unlike())
    }

    /// Returns the number of comments after appending
    pub fn add_comment(&mut self, post_id: PostId, text: impl Into<String>) -> AppResult<usize> {
        Ok(self.require_mut(post_id)?.add_comment(text.into()))
    }

    /// Current `(post id, like count)` for every post, in id order
    pub fn like_counts(&self) -> impl Iterator<Item = (PostId, LikeCount)> + '_ {
        self.posts.values().map(|post| (post.id, post.likes))
    }

    pub fn snapshot(&self) -> Vec<Post> {
        self.posts.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
