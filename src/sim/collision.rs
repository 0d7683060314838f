//! Collision detection
//!
//! Three independent predicates (walls, paddles, goals) run every frame and
//! their results are concatenated into one small event list. Nothing here
//! changes the state; see `response` for what a hit does to the ball.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Boundaries, GameState, Paddle, PaddleId};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalSide {
    /// `y_min` breached, a point for the bottom player
    Top,
    /// `y_max` breached, a point for the top player
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionEvent {
    BallWall(WallSide),
    BallPaddle(PaddleId),
    BallGoal(GoalSide),
}

/// Events detected in one frame, in detection order (walls, paddles, goals).
/// At most four entries, never the same event twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionEvents(Vec<CollisionEvent>);

impl CollisionEvents {
    pub fn new() -> Self {
        Self(Vec::with_capacity(4))
    }

    pub fn push(&mut self, event: CollisionEvent) {
        if !self.0.contains(&event) {
            self.0.push(event);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CollisionEvent> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, event: CollisionEvent) -> bool {
        self.0.contains(&event)
    }

    /// The goal scored this frame, if any
    pub fn goal(&self) -> Option<GoalSide> {
        self.0.iter().find_map(|event| match event {
            CollisionEvent::BallGoal(side) => Some(*side),
            _ => None,
        })
    }

    pub fn paddle_hit(&self) -> Option<PaddleId> {
        self.0.iter().find_map(|event| match event {
            CollisionEvent::BallPaddle(id) => Some(*id),
            _ => None,
        })
    }

    pub fn wall_hit(&self) -> Option<WallSide> {
        self.0.iter().find_map(|event| match event {
            CollisionEvent::BallWall(side) => Some(*side),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a CollisionEvents {
    type Item = &'a CollisionEvent;
    type IntoIter = std::slice::Iter<'a, CollisionEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<CollisionEvent> for CollisionEvents {
    fn from_iter<T: IntoIterator<Item = CollisionEvent>>(iter: T) -> Self {
        let mut events = Self::new();
        for event in iter {
            events.push(event);
        }
        events
    }
}

/// Check the ball against the side walls. Left is checked first; a board at
/// least as wide as a paddle cannot report both.
pub fn ball_wall_collision(ball_pos: Vec2, ball_radius: f32, bounds: &Boundaries) -> Option<WallSide> {
    if ball_pos.x - ball_radius < bounds.x_min {
        Some(WallSide::Left)
    } else if ball_pos.x + ball_radius > bounds.x_max {
        Some(WallSide::Right)
    } else {
        None
    }
}

/// Check the ball against the goal lines. Top takes precedence.
pub fn ball_goal_collision(ball_pos: Vec2, ball_radius: f32, bounds: &Boundaries) -> Option<GoalSide> {
    if ball_pos.y - ball_radius < bounds.y_min {
        Some(GoalSide::Top)
    } else if ball_pos.y + ball_radius > bounds.y_max {
        Some(GoalSide::Bottom)
    } else {
        None
    }
}

/// Paddles whose rectangle strictly contains the ball centre, in index order
pub fn ball_paddle_collisions<'a>(
    ball_pos: Vec2,
    paddles: &'a [Paddle; 2],
    tuning: &'a Tuning,
) -> impl Iterator<Item = PaddleId> + 'a {
    PaddleId::ALL
        .into_iter()
        .filter(move |id| paddles[id.index()].contains(ball_pos, tuning))
}

/// All collisions active for `state`'s ball this frame
pub fn detect(state: &GameState) -> CollisionEvents {
    let pos = state.ball.pos;
    let radius = state.tuning.ball_radius;

    let mut events = CollisionEvents::new();
    if let Some(side) = ball_wall_collision(pos, radius, &state.bounds) {
        events.push(CollisionEvent::BallWall(side));
    }
    for id in ball_paddle_collisions(pos, &state.paddles, &state.tuning) {
        events.push(CollisionEvent::BallPaddle(id));
    }
    if let Some(side) = ball_goal_collision(pos, radius, &state.bounds) {
        events.push(CollisionEvent::BallGoal(side));
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Ball;

    fn free_ball_at(state: &GameState, x: f32, y: f32) -> GameState {
        GameState {
            ball: Ball {
                pos: Vec2::new(x, y),
                speed: 3.0,
                angle: 0.3,
            },
            serving: crate::sim::ServingPaddle::None,
            ..state.clone()
        }
    }

    #[test]
    fn test_no_collision_mid_board() {
        let state = GameState::new(500.0, 500.0).unwrap();
        let state = free_ball_at(&state, 250.0, 250.0);
        assert!(detect(&state).is_empty());
    }

    #[test]
    fn test_left_wall() {
        let state = GameState::new(500.0, 500.0).unwrap();
        let state = free_ball_at(&state, 5.0 - 0.1, 250.0);
        let events = detect(&state);
        assert_eq!(events.wall_hit(), Some(WallSide::Left));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_right_wall_touching_is_not_a_hit() {
        let bounds = Boundaries::from_size(500.0, 500.0);
        assert_eq!(ball_wall_collision(Vec2::new(495.0, 100.0), 5.0, &bounds), None);
        assert_eq!(
            ball_wall_collision(Vec2::new(495.5, 100.0), 5.0, &bounds),
            Some(WallSide::Right)
        );
    }

    #[test]
    fn test_goals() {
        let bounds = Boundaries::from_size(500.0, 500.0);
        assert_eq!(ball_goal_collision(Vec2::new(100.0, 4.0), 5.0, &bounds), Some(GoalSide::Top));
        assert_eq!(
            ball_goal_collision(Vec2::new(100.0, 496.0), 5.0, &bounds),
            Some(GoalSide::Bottom)
        );
        assert_eq!(ball_goal_collision(Vec2::new(100.0, 250.0), 5.0, &bounds), None);
    }

    #[test]
    fn test_top_goal_wins_on_tiny_board() {
        // Ball taller than the board: both lines breached, only top reported
        let bounds = Boundaries::from_size(500.0, 8.0);
        assert_eq!(ball_goal_collision(Vec2::new(100.0, 4.0), 5.0, &bounds), Some(GoalSide::Top));
    }

    #[test]
    fn test_paddle_hit() {
        let state = GameState::new(500.0, 500.0).unwrap();
        let state = free_ball_at(&state, 260.0, 482.0);
        let events = detect(&state);
        assert_eq!(events.paddle_hit(), Some(PaddleId::Bottom));
        assert!(events.goal().is_none());
    }

    #[test]
    fn test_wall_and_paddle_together() {
        let mut state = GameState::new(500.0, 500.0).unwrap();
        state.paddles[0].pos.x = 30.0;
        let state = free_ball_at(&state, 3.0, 21.0);
        let events = detect(&state);
        let order: Vec<_> = events.iter().copied().collect();
        assert_eq!(
            order,
            vec![
                CollisionEvent::BallWall(WallSide::Left),
                CollisionEvent::BallPaddle(PaddleId::Top)
            ]
        );
    }

    #[test]
    fn test_events_deduplicate() {
        let events: CollisionEvents = [
            CollisionEvent::BallGoal(GoalSide::Top),
            CollisionEvent::BallGoal(GoalSide::Top),
        ]
        .into_iter()
        .collect();
        assert_eq!(events.len(), 1);
    }
}
