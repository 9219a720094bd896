use std::collections::{HashMap, HashSet};

use crate::core::PostId;

/// Token -> posts containing it. Filled once per post at creation time.
#[derive(Debug, Default)]
pub struct KeywordIndex {
    postings: HashMap<String, Vec<PostId>>,
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a post under each distinct whitespace-separated token of its content.
    /// Returns the number of distinct tokens.
    pub fn index_post(&mut self, post_id: PostId, content: &str) -> usize {
        let mut seen = HashSet::new();
        for token in content.split_whitespace() {
            if seen.insert(token) {
                self.postings
                    .entry(token.to_string())
                    .or_default()
                    .push(post_id);
            }
        }
        seen.len()
    }

    /// Posts indexed under `token`, in insertion order
    pub fn posts_for_token(&self, token: &str) -> &[PostId] {
        self.postings
            .get(token)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn token_count(&self) -> usize {
        self.postings.len()
    }
}
