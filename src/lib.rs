// Social Graph - users, posts and messages with derived keyword, trending and
// active-user views kept in sync on every write

// Core types and primitives
pub mod core;

// Data model
pub mod models;

// Stores, indexes and rankings
pub mod infrastructure;

// Unified entry point
pub mod social_graph;

// Common utilities
pub mod config;
pub mod error;

// Re-exports for convenience
pub use crate::core::{LikeCount, PostId, Score, UserId};
pub use error::{AppError, AppResult};
pub use infrastructure::{RankedUser, SocialOperations, MIN_LIKES_TRENDING};
pub use models::{Message, Post, User};
pub use social_graph::SocialGraph;
