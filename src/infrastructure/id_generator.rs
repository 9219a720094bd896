// Post ID Generator - sequential ids owned by a single post store

use std::sync::atomic::{AtomicI64, Ordering};

use crate::core::PostId;

/// Sequential id generator.
/// Each `PostStore` owns its own instance, so two stores never share a counter.
#[derive(Debug)]
pub struct PostIdGenerator {
    next: AtomicI64,
}

impl PostIdGenerator {
    /// Generator whose first id is 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: i64) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }

    /// Hand out the next id
    pub fn next_id(&self) -> PostId {
        PostId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for PostIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
