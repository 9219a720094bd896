use std::collections::BTreeMap;

use tracing::debug;

use crate::core::{PostId, Score, UserId};
use crate::error::{AppError, AppResult};
use crate::models::User;

/// Owns every user and their engagement score
#[derive(Debug, Default)]
pub struct UserStore {
    users: BTreeMap<UserId, User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, user_id: UserId, name: impl Into<String>) -> AppResult<()> {
        if self.users.contains_key(&user_id) {
            return Err(AppError::AlreadyExists(format!("user {}", user_id)));
        }
        self.users.insert(user_id, User::new(user_id, name.into()));
        debug!("Added user {}", user_id);
        Ok(())
    }

    pub fn get(&self, user_id: UserId) -> Option<&User> {
        self.users.get(&user_id)
    }

    pub fn require(&self, user_id: UserId) -> AppResult<&User> {
        self.users
            .get(&user_id)
            .ok_or_else(|| AppError::user_not_found(user_id))
    }

    fn require_mut(&mut self, user_id: UserId) -> AppResult<&mut User> {
        self.users
            .get_mut(&user_id)
            .ok_or_else(|| AppError::user_not_found(user_id))
    }

    /// Append a freshly created post to the author's list
    pub fn record_post(&mut self, user_id: UserId, post_id: PostId) -> AppResult<()> {
        self.require_mut(user_id)?.posts.push(post_id);
        Ok(())
    }

    /// Add points and return the new score
    pub fn award(&mut self, user_id: UserId, points: Score) -> AppResult<Score> {
        Ok(self.require_mut(user_id)?.increase_engagement(points))
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_user_rejected() {
        let mut store = UserStore::new();
        store.add(UserId::new(1), "Ada").unwrap();

        let err = store.add(UserId::new(1), "Someone else").unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists(_)));
        assert_eq!(store.get(UserId::new(1)).unwrap().name, "Ada");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_award_accumulates() {
        let mut store = UserStore::new();
        store.add(UserId::new(7), "Grace").unwrap();

        assert_eq!(store.award(UserId::new(7), 1).unwrap(), 1);
        assert_eq!(store.award(UserId::new(7), 2).unwrap(), 3);
        assert!(matches!(
            store.award(UserId::new(8), 1),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_snapshot_is_ordered_by_id() {
        let mut store = UserStore::new();
        store.add(UserId::new(3), "c").unwrap();
        store.add(UserId::new(1), "a").unwrap();
        store.record_post(UserId::new(1), PostId::new(1)).unwrap();

        let users = store.snapshot();
        assert_eq!(users[0].id, UserId::new(1));
        assert_eq!(users[0].posts, vec![PostId::new(1)]);
        assert_eq!(users[1].id, UserId::new(3));
    }
}
