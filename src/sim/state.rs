//! Game state and core simulation types
//!
//! Every frame produces a fresh `GameState`; nothing here is mutated after
//! it has been handed to a caller.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::tuning::Tuning;

/// Playable rectangle. Fixed once the board is sized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundaries {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Boundaries {
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            x_min: 0.0,
            x_max: width,
            y_min: 0.0,
            y_max: height,
        }
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x_min && point.x <= self.x_max && point.y >= self.y_min && point.y <= self.y_max
    }

    /// Range a paddle centre may occupy
    pub fn paddle_range(&self, half_width: f32) -> (f32, f32) {
        (self.x_min + half_width, self.x_max - half_width)
    }
}

/// Which paddle. `Top` defends `y_min`, `Bottom` defends `y_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaddleId {
    Top,
    Bottom,
}

impl PaddleId {
    pub const ALL: [PaddleId; 2] = [PaddleId::Top, PaddleId::Bottom];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            PaddleId::Top => 0,
            PaddleId::Bottom => 1,
        }
    }

    pub fn opponent(self) -> PaddleId {
        match self {
            PaddleId::Top => PaddleId::Bottom,
            PaddleId::Bottom => PaddleId::Top,
        }
    }

    /// +1 if this paddle faces increasing y, -1 otherwise
    #[inline]
    pub fn facing(self) -> f32 {
        match self {
            PaddleId::Top => 1.0,
            PaddleId::Bottom => -1.0,
        }
    }

    /// Straight toward the opponent: π/2 for the top paddle, -π/2 for the bottom
    #[inline]
    pub fn launch_angle(self) -> f32 {
        self.facing() * FRAC_PI_2
    }
}

/// Who holds the ball, if anyone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServingPaddle {
    /// Ball pinned to the top paddle (paddle 0)
    Top,
    /// Ball pinned to the bottom paddle (paddle 1)
    Bottom,
    /// Ball in free flight
    None,
}

impl ServingPaddle {
    pub fn paddle(self) -> Option<PaddleId> {
        match self {
            ServingPaddle::Top => Some(PaddleId::Top),
            ServingPaddle::Bottom => Some(PaddleId::Bottom),
            ServingPaddle::None => None,
        }
    }

    pub fn is_held(self) -> bool {
        self.paddle().is_some()
    }
}

impl From<PaddleId> for ServingPaddle {
    fn from(id: PaddleId) -> Self {
        match id {
            PaddleId::Top => ServingPaddle::Top,
            PaddleId::Bottom => ServingPaddle::Bottom,
        }
    }
}

/// The ball. `speed == 0` means it is held by a paddle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Distance per frame
    pub speed: f32,
    /// Radians, 0 = +x, positive rotates toward +y
    pub angle: f32,
}

impl Ball {
    /// Ball resting on `paddle`'s release point, aimed at the opponent
    pub fn held_by(id: PaddleId, paddle: &Paddle, tuning: &Tuning) -> Self {
        Self {
            pos: paddle.release_point(id, tuning),
            speed: 0.0,
            angle: id.launch_angle(),
        }
    }

    /// Velocity vector for this frame
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.speed * self.angle.cos(), self.speed * self.angle.sin())
    }

    pub fn is_held(&self) -> bool {
        self.speed == 0.0
    }
}

/// A paddle. Only `pos.x` changes during play.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
}

impl Paddle {
    pub fn new(x: f32, y: f32) -> Self {
        Self { pos: Vec2::new(x, y) }
    }

    /// Where a ball held by this paddle sits: flush against the face toward the opponent
    pub fn release_point(&self, id: PaddleId, tuning: &Tuning) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y + id.facing() * tuning.release_offset())
    }

    /// Strict containment of a point in the paddle's rectangle
    pub fn contains(&self, point: Vec2, tuning: &Tuning) -> bool {
        let d = (point - self.pos).abs();
        d.x < tuning.paddle_width / 2.0 && d.y < tuning.paddle_height / 2.0
    }

    /// Same paddle moved to `x`, clamped to the board
    pub fn moved_to(&self, x: f32, bounds: &Boundaries, tuning: &Tuning) -> Self {
        let (lo, hi) = bounds.paddle_range(tuning.half_paddle_width());
        Self {
            pos: Vec2::new(x.clamp(lo, hi), self.pos.y),
        }
    }
}

/// Points per player. `top` belongs to the top paddle's player (player 1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub top: u32,
    pub bottom: u32,
}

impl Score {
    pub fn of(&self, id: PaddleId) -> u32 {
        match id {
            PaddleId::Top => self.top,
            PaddleId::Bottom => self.bottom,
        }
    }

    pub fn as_pair(&self) -> (u32, u32) {
        (self.top, self.bottom)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub bounds: Boundaries,
    pub ball: Ball,
    /// Index 0 = top, index 1 = bottom
    pub paddles: [Paddle; 2],
    pub serving: ServingPaddle,
    pub score: Score,
    /// Constants this board was validated against
    pub tuning: Tuning,
    /// Frames simulated since creation
    pub frame: u64,
}

impl GameState {
    /// Create a board of the given size with default tuning
    pub fn new(width: f32, height: f32) -> Result<Self, BoardError> {
        Self::with_tuning(width, height, Tuning::default())
    }

    /// Create a board, rejecting sizes the simulation cannot run on
    pub fn with_tuning(width: f32, height: f32, tuning: Tuning) -> Result<Self, BoardError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(BoardError::InvalidDimension { width, height });
        }
        tuning.validate()?;
        if width < tuning.min_board_width() {
            return Err(BoardError::TooNarrow {
                width,
                min_width: tuning.min_board_width(),
            });
        }
        if height < tuning.min_board_height() {
            return Err(BoardError::TooShort {
                height,
                min_height: tuning.min_board_height(),
            });
        }

        let bounds = Boundaries::from_size(width, height);
        let center_x = (bounds.x_min + bounds.x_max) / 2.0;
        let paddles = [
            Paddle::new(center_x, bounds.y_min + tuning.paddle_inset),
            Paddle::new(center_x, bounds.y_max - tuning.paddle_inset),
        ];
        // Top serves first
        let ball = Ball::held_by(PaddleId::Top, &paddles[0], &tuning);

        log::info!("New {}x{} board, top paddle serves", width, height);

        Ok(Self {
            bounds,
            ball,
            paddles,
            serving: ServingPaddle::Top,
            score: Score::default(),
            tuning,
            frame: 0,
        })
    }

    pub fn paddle(&self, id: PaddleId) -> &Paddle {
        &self.paddles[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_layout() {
        let state = GameState::new(500.0, 400.0).unwrap();
        assert_eq!(state.serving, ServingPaddle::Top);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.paddles[0].pos, Vec2::new(250.0, 20.0));
        assert_eq!(state.paddles[1].pos, Vec2::new(250.0, 380.0));
        // 20 + 5 + 5 + 1
        assert_eq!(state.ball.pos, Vec2::new(250.0, 31.0));
        assert_eq!(state.ball.speed, 0.0);
    }

    #[test]
    fn test_release_points_face_opponent() {
        let tuning = Tuning::default();
        let top = Paddle::new(100.0, 20.0);
        let bottom = Paddle::new(100.0, 480.0);
        assert_eq!(top.release_point(PaddleId::Top, &tuning), Vec2::new(100.0, 31.0));
        assert_eq!(bottom.release_point(PaddleId::Bottom, &tuning), Vec2::new(100.0, 469.0));
    }

    #[test]
    fn test_rejects_bad_boards() {
        assert_eq!(
            GameState::new(0.0, 500.0),
            Err(BoardError::InvalidDimension {
                width: 0.0,
                height: 500.0
            })
        );
        assert!(matches!(
            GameState::new(f32::INFINITY, 500.0),
            Err(BoardError::InvalidDimension { .. })
        ));
        assert_eq!(
            GameState::new(59.0, 500.0),
            Err(BoardError::TooNarrow {
                width: 59.0,
                min_width: 60.0
            })
        );
        assert_eq!(
            GameState::new(500.0, 71.0),
            Err(BoardError::TooShort {
                height: 71.0,
                min_height: 72.0
            })
        );
    }

    #[test]
    fn test_smallest_board_is_accepted() {
        let state = GameState::new(60.0, 72.0).unwrap();
        let (lo, hi) = state.bounds.paddle_range(state.tuning.half_paddle_width());
        assert_eq!(lo, hi);
    }

    #[test]
    fn test_paddle_contains_is_strict() {
        let tuning = Tuning::default();
        let paddle = Paddle::new(100.0, 20.0);
        assert!(paddle.contains(Vec2::new(100.0, 20.0), &tuning));
        assert!(paddle.contains(Vec2::new(129.9, 24.9), &tuning));
        assert!(!paddle.contains(Vec2::new(130.0, 20.0), &tuning));
        assert!(!paddle.contains(Vec2::new(100.0, 25.0), &tuning));
    }

    #[test]
    fn test_paddle_clamped() {
        let tuning = Tuning::default();
        let bounds = Boundaries::from_size(500.0, 500.0);
        let paddle = Paddle::new(250.0, 20.0);
        assert_eq!(paddle.moved_to(-40.0, &bounds, &tuning).pos.x, 30.0);
        assert_eq!(paddle.moved_to(900.0, &bounds, &tuning).pos.x, 470.0);
        assert_eq!(paddle.moved_to(123.0, &bounds, &tuning).pos.y, 20.0);
    }

    #[test]
    fn test_boundaries_contains() {
        let bounds = Boundaries::from_size(10.0, 20.0);
        assert!(bounds.contains(Vec2::new(0.0, 20.0)));
        assert!(!bounds.contains(Vec2::new(10.1, 5.0)));
        assert_eq!(bounds.width(), 10.0);
        assert_eq!(bounds.height(), 20.0);
    }
}
