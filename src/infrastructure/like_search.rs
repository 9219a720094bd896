use crate::core::{LikeCount, PostId};

/// Find a post with exactly `target` likes.
///
/// Sorts a snapshot of `(likes, post id)` ascending and runs a lower-bound binary
/// search on the like count alone, so among several posts with the same count the
/// one with the smallest id is returned.
pub fn find_post_by_like_count<I>(posts: I, target: LikeCount) -> Option<PostId>
where
    I: IntoIterator<Item = (PostId, LikeCount)>,
{
    let mut sorted: Vec<(LikeCount, PostId)> = posts
        .into_iter()
        .map(|(post_id, likes)| (likes, post_id))
        .collect();
    sorted.sort_unstable();

    let first = sorted.partition_point(|&(likes, _)| likes < target);
    match sorted.get(first) {
        Some(&(likes, post_id)) if likes == target => Some(post_id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: i64) -> PostId {
        PostId::new(n)
    }

    #[test]
    fn test_exact_match() {
        let posts = vec![(id(1), 3), (id(2), 0), (id(3), 7)];
        assert_eq!(find_post_by_like_count(posts.clone(), 7), Some(id(3)));
        assert_eq!(find_post_by_like_count(posts.clone(), 0), Some(id(2)));
        assert_eq!(find_post_by_like_count(posts, 4), None);
    }

    #[test]
    fn test_ties_return_smallest_id() {
        let posts = vec![(id(9), 2), (id(4), 2), (id(6), 2), (id(1), 1), (id(2), 5)];
        assert_eq!(find_post_by_like_count(posts, 2), Some(id(4)));
    }

    #[test]
    fn test_empty_and_out_of_range() {
        assert_eq!(find_post_by_like_count(Vec::new(), 0), None);
        let posts = vec![(id(1), 1)];
        assert_eq!(find_post_by_like_count(posts.clone(), 0), None);
        assert_eq!(find_post_by_like_count(posts, 2), None);
    }
}
