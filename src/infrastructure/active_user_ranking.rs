// Active users ranked by engagement score
//
// Ordered set of (score, user) kept descending, plus a user -> score map so an
// update can remove the old entry directly instead of scanning for it.
// Users are ranked from their first score change onward; untouched users have no entry.

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::core::{Score, UserId};

/// Ordered by score, then user id
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RankedUser {
    pub score: Score,
    pub user_id: UserId,
}

#[derive(Debug, Default)]
pub struct ActiveUserRanking {
    ordered: BTreeSet<Reverse<RankedUser>>,
    scores: HashMap<UserId, Score>,
}

impl ActiveUserRanking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the user's entry with one carrying `score`
    pub fn on_score_changed(&mut self, user_id: UserId, score: Score) {
        if let Some(old) = self.scores.insert(user_id, score) {
            self.ordered.remove(&Reverse(RankedUser {
                score: old,
                user_id,
            }));
        }
        self.ordered.insert(Reverse(RankedUser { score, user_id }));
    }

    /// First `k` entries, highest score first, ties broken by higher user id
    pub fn top_active(&self, k: usize) -> Vec<RankedUser> {
        self.ordered.iter().take(k).map(|Reverse(entry)| *entry).collect()
    }

    pub fn score_of(&self, user_id: UserId) -> Option<Score> {
        self.scores.get(&user_id).copied()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(score: Score, user: i64) -> RankedUser {
        RankedUser {
            score,
            user_id: UserId::new(user),
        }
    }

    #[test]
    fn test_single_entry_per_user() {
        let mut ranking = ActiveUserRanking::new();
        ranking.on_score_changed(UserId::new(1), 1);
        ranking.on_score_changed(UserId::new(1), 3);
        ranking.on_score_changed(UserId::new(1), 4);

        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking.top_active(5), vec![ranked(4, 1)]);
        assert_eq!(ranking.score_of(UserId::new(1)), Some(4));
    }

    #[test]
    fn test_order_is_score_then_user_descending() {
        let mut ranking = ActiveUserRanking::new();
        ranking.on_score_changed(UserId::new(1), 2);
        ranking.on_score_changed(UserId::new(2), 5);
        ranking.on_score_changed(UserId::new(3), 2);

        assert_eq!(
            ranking.top_active(10),
            vec![ranked(5, 2), ranked(2, 3), ranked(2, 1)]
        );
        assert_eq!(ranking.top_active(1), vec![ranked(5, 2)]);
    }

    #[test]
    fn test_same_score_update_keeps_entry() {
        let mut ranking = ActiveUserRanking::new();
        ranking.on_score_changed(UserId::new(9), 3);
        ranking.on_score_changed(UserId::new(9), 3);

        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking.score_of(UserId::new(9)), Some(3));
    }

    #[test]
    fn test_untouched_users_are_unranked() {
        let ranking = ActiveUserRanking::new();
        assert!(ranking.is_empty());
        assert_eq!(ranking.score_of(UserId::new(1)), None);
    }
}
