use tracing::debug;

use crate::core::{Score, UserId};
use crate::error::AppResult;
use crate::infrastructure::active_user_ranking::ActiveUserRanking;
use crate::infrastructure::user_store::UserStore;

pub const LIKE_POINTS: Score = 1;
pub const COMMENT_POINTS: Score = 2;
pub const MESSAGE_POINTS: Score = 1;

/// Actions that earn the acting user engagement points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementAction {
    Like,
    Comment,
    SendMessage,
}

impl EngagementAction {
    pub fn points(self) -> Score {
        match self {
            EngagementAction::Like => LIKE_POINTS,
            EngagementAction::Comment => COMMENT_POINTS,
            EngagementAction::SendMessage => MESSAGE_POINTS,
        }
    }

    pub fn action_name(self) -> &'static str {
        match self {
            EngagementAction::Like => "like",
            EngagementAction::Comment => "comment",
            EngagementAction::SendMessage => "send_message",
        }
    }
}

/// Fixed scoring rules. Scores only ever go up.
pub struct EngagementPolicy;

impl EngagementPolicy {
    /// Award points for `action` and move the user's ranking entry.
    /// Returns the user's new score.
    pub fn apply(
        action: EngagementAction,
        user_id: UserId,
        users: &mut UserStore,
        ranking: &mut ActiveUserRanking,
    ) -> AppResult<Score> {
        let score = users.award(user_id, action.points())?;
        ranking.on_score_changed(user_id, score);
        debug!(
            "User {} earned {} for {}, score now {}",
            user_id,
            action.points(),
            action.action_name(),
            score
        );
        Ok(score)
    }
}
