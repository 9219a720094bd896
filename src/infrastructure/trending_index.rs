// Trending posts - lazily invalidated max-heap plus an authoritative member set
//
// Adding a post is cheap: push once when it crosses the threshold and never touch
// its heap entry again, even as likes keep coming in. Removal is only possible on
// unlike, and there the whole index is rebuilt from the post store. The member set,
// not the heap, answers "is this post trending".

use std::collections::{BinaryHeap, HashSet};
use std::num::NonZeroU32;

use tracing::{debug, info};

use crate::core::{LikeCount, PostId};

/// Default minimum like count for a post to be trending
pub const MIN_LIKES_TRENDING: LikeCount = 5;

/// `MIN_LIKES_TRENDING` as a threshold. Thresholds are non-zero: posts start at
/// zero likes and creating a post never touches the index.
pub const DEFAULT_MIN_LIKES: NonZeroU32 = match NonZeroU32::new(MIN_LIKES_TRENDING) {
    Some(min_likes) => min_likes,
    None => panic!("MIN_LIKES_TRENDING must be non-zero"),
};

/// Heap entry. Ordered by like count, then post id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct TrendingEntry {
    likes: LikeCount,
    post_id: PostId,
}

#[derive(Debug)]
pub struct TrendingIndex {
    min_likes: LikeCount,
    /// May hold like counts older than the post's current count
    queue: BinaryHeap<TrendingEntry>,
    members: HashSet<PostId>,
    rebuilds: u64,
}

impl Default for TrendingIndex {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LIKES)
    }
}

impl TrendingIndex {
    pub fn new(min_likes: NonZeroU32) -> Self {
        Self {
            min_likes: min_likes.get(),
            queue: BinaryHeap::new(),
            members: HashSet::new(),
            rebuilds: 0,
        }
    }

    /// Record a like. Returns true if the post just became trending.
    pub fn on_like(&mut self, post_id: PostId, likes: LikeCount) -> bool {
        if likes < self.min_likes || self.members.contains(&post_id) {
            return false;
        }
        self.queue.push(TrendingEntry { likes, post_id });
        self.members.insert(post_id);
        debug!("Post {} is trending with {} likes", post_id, likes);
        true
    }

    /// Record an unlike by rebuilding from the full set of current like counts
    pub fn on_unlike<I>(&mut self, post_id: PostId, likes: LikeCount, all_posts: I)
    where
        I: IntoIterator<Item = (PostId, LikeCount)>,
    {
        debug!("Post {} dropped to {} likes, rebuilding trending", post_id, likes);
        self.rebuild(all_posts);
    }

    /// Discard the heap and member set and rescan every post
    pub fn rebuild<I>(&mut self, all_posts: I)
    where
        I: IntoIterator<Item = (PostId, LikeCount)>,
    {
        let min_likes = self.min_likes;
        let (queue, members): (BinaryHeap<_>, HashSet<_>) = all_posts
            .into_iter()
            .filter(|&(_, likes)| likes >= min_likes)
            .map(|(post_id, likes)| (TrendingEntry { likes, post_id }, post_id))
            .unzip();

        self.queue = queue;
        self.members = members;
        self.rebuilds += 1;
        info!(
            "Rebuilt trending index: {} trending posts (rebuild #{})",
            self.members.len(),
            self.rebuilds
        );
    }

    pub fn is_trending(&self, post_id: PostId) -> bool {
        self.members.contains(&post_id)
    }

    /// Up to `k` trending posts in heap order, with the like count recorded when each
    /// entered the heap. Entries for posts no longer in the member set are skipped.
    pub fn top_trending(&self, k: usize) -> Vec<(PostId, LikeCount)> {
        let mut heap = self.queue.clone();
        let mut emitted = HashSet::new();
        let mut top = Vec::with_capacity(k.min(self.members.len()));

        while top.len() < k {
            let Some(entry) = heap.pop() else {
                break;
            };
            if !self.members.contains(&entry.post_id) || !emitted.insert(entry.post_id) {
                continue;
            }
            top.push((entry.post_id, entry.likes));
        }
        top
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
