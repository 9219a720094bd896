use std::collections::HashMap;

use crate::core::{PostId, UserId};

/// Per-user stack of viewed posts, most recent on top
#[derive(Debug, Default)]
pub struct ViewHistory {
    stacks: HashMap<UserId, Vec<PostId>>,
}

impl ViewHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_view(&mut self, user_id: UserId, post_id: PostId) {
        self.stacks.entry(user_id).or_default().push(post_id);
    }

    /// Pop the most recently viewed post, if any
    pub fn go_back(&mut self, user_id: UserId) -> Option<PostId> {
        self.stacks.get_mut(&user_id).and_then(Vec::pop)
    }

    pub fn depth(&self, user_id: UserId) -> usize {
        self.stacks.get(&user_id).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_lifo() {
        let mut history = ViewHistory::new();
        let user = UserId::new(1);
        history.record_view(user, PostId::new(1));
        history.record_view(user, PostId::new(3));

        assert_eq!(history.depth(user), 2);
        assert_eq!(history.go_back(user), Some(PostId::new(3)));
        assert_eq!(history.go_back(user), Some(PostId::new(1)));
        assert_eq!(history.go_back(user), None);
    }

    #[test]
    fn test_histories_are_per_user() {
        let mut history = ViewHistory::new();
        history.record_view(UserId::new(1), PostId::new(1));

        assert_eq!(history.go_back(UserId::new(2)), None);
        assert_eq!(history.depth(UserId::new(1)), 1);
    }
}
