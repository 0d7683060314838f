//! Score tracking
//!
//! Breaching a goal line gives the other player a point, and the paddle that
//! conceded serves next. There is no win condition here.

use super::collision::GoalSide;
use super::state::{PaddleId, Score};

/// Credit a goal. Returns the new score and the paddle that serves next.
pub fn on_goal(side: GoalSide, score: Score) -> (Score, PaddleId) {
    match side {
        GoalSide::Top => (
            Score {
                bottom: score.bottom + 1,
                ..score
            },
            PaddleId::Top,
        ),
        GoalSide::Bottom => (
            Score {
                top: score.top + 1,
                ..score
            },
            PaddleId::Bottom,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_goal_scores_for_bottom() {
        let (score, server) = on_goal(GoalSide::Top, Score { top: 2, bottom: 5 });
        assert_eq!(score, Score { top: 2, bottom: 6 });
        assert_eq!(server, PaddleId::Top);
    }

    #[test]
    fn test_bottom_goal_scores_for_top() {
        let (score, server) = on_goal(GoalSide::Bottom, Score::default());
        assert_eq!(score.as_pair(), (1, 0));
        assert_eq!(server, PaddleId::Bottom);
    }
}
