//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here so a board can be
//! rebalanced from a JSON file without recompiling. Missing fields fall back
//! to the values in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub ball_radius: f32,
    pub serve_speed: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    /// Goal line to paddle centre
    pub paddle_inset: f32,
    pub release_clearance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ball_radius: BALL_RADIUS,
            serve_speed: SERVE_SPEED,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_inset: PADDLE_INSET,
            release_clearance: RELEASE_CLEARANCE,
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[inline]
    pub fn half_paddle_width(&self) -> f32 {
        self.paddle_width / 2.0
    }

    /// Vertical distance from a paddle's centre to the centre of the ball it holds
    #[inline]
    pub fn release_offset(&self) -> f32 {
        self.paddle_height / 2.0 + self.ball_radius + self.release_clearance
    }

    /// Narrowest board on which the paddle clamp range is non-empty
    pub fn min_board_width(&self) -> f32 {
        self.paddle_width
    }

    /// Shortest board on which both held balls sit clear of every goal line
    pub fn min_board_height(&self) -> f32 {
        2.0 * (self.paddle_inset + self.release_offset() + self.ball_radius)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), BoardError> {
        let fields = [
            ("ball_radius", self.ball_radius),
            ("serve_speed", self.serve_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("paddle_inset", self.paddle_inset),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(BoardError::InvalidTuning(name));
            }
        }
        // Zero clearance is allowed, negative would put the ball inside the paddle
        if !self.release_clearance.is_finite() || self.release_clearance < 0.0 {
            return Err(BoardError::InvalidTuning("release_clearance"));
        }
        if 2.0 * self.ball_radius > self.paddle_width {
            return Err(BoardError::BallWiderThanPaddle);
        }
        Ok(())
    }
}
