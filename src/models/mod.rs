// Social graph data model: users, posts and direct messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{LikeCount, PostId, Score, UserId};

/// A post. Content is immutable once created; likes and comments change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author: UserId,
    pub content: String,
    pub likes: LikeCount,
    pub comments: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(id: PostId, author: UserId, content: String) -> Self {
        Self {
            id,
            author,
            content,
            likes: 0,
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn like(&mut self) -> LikeCount {
        self.likes = self.likes.saturating_add(1);
        self.likes
    }

    /// Decrement with a floor at zero
    pub fn unlike(&mut self) -> LikeCount {
        self.likes = self.likes.saturating_sub(1);
        self.likes
    }

    pub fn add_comment(&mut self, comment: String) -> usize {
        self.comments.push(comment);
        self.comments.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Authored posts in creation order
    pub posts: Vec<PostId>,
    pub engagement_score: Score,
}

impl User {
    pub fn new(id: UserId, name: String) -> Self {
        Self {
            id,
            name,
            posts: Vec::new(),
            engagement_score: 0,
        }
    }

    pub fn increase_engagement(&mut self, amount: Score) -> Score {
        self.engagement_score = self.engagement_score.saturating_add(amount);
        self.engagement_score
    }
}

/// Direct message sitting in the receiver's queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: UserId,
    pub receiver: UserId,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    pub fn new(sender: UserId, receiver: UserId, content: String) -> Self {
        Self {
            sender,
            receiver,
            content,
            sent_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlike_floors_at_zero() {
        let mut post = Post::new(PostId::new(1), UserId::new(1), "hi".to_string());
        assert_eq!(post.unlike(), 0);
        assert_eq!(post.like(), 1);
        assert_eq!(post.unlike(), 0);
        assert_eq!(post.unlike(), 0);
    }

    #[test]
    fn test_comments_keep_order() {
        let mut post = Post::new(PostId::new(1), UserId::new(1), "hi".to_string());
        post.add_comment("first".to_string());
        post.add_comment("second".to_string());
        assert_eq!(post.comments, vec!["first", "second"]);
    }

    #[test]
    fn test_post_json_shape() {
        let post = Post::new(PostId::new(4), UserId::new(2), "hello".to_string());
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["id"], 4);
        assert_eq!(value["author"], 2);
        assert_eq!(value["likes"], 0);
        assert!(value["comments"].as_array().unwrap().is_empty());
    }
}
