//! Duel Pong - a two-player top/bottom paddle game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, serve, score)
//! - `tuning`: Data-driven game balance
//! - `settings`: Host preferences (audio volume)
//! - `audio`: Sound cue selection from a simulated frame
//! - `replay`: Scripted headless runs of the simulation

pub mod audio;
pub mod error;
pub mod replay;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{BoardError, ConfigError};
pub use settings::Settings;
pub use sim::{GameState, StepOutcome, TickInput, step};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    /// Speed given to the ball on the frame it is released (units per frame)
    pub const SERVE_SPEED: f32 = 3.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 60.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Horizontal paddle travel per frame while a move key is held
    pub const PADDLE_SPEED: f32 = 5.0;
    /// Distance from a goal line to the centre of the paddle defending it
    pub const PADDLE_INSET: f32 = 20.0;

    /// Gap between a held ball and the face of its paddle
    pub const RELEASE_CLEARANCE: f32 = 1.0;
    /// Extra width added to the paddle when mapping impact offset to tilt.
    /// Keeps the rebound away from horizontal even at the paddle's edge.
    pub const TILT_WIDTH_PADDING: f32 = 20.0;
}

/// Advance a point by `speed` along `angle` (0 = +x, positive rotates toward +y)
#[inline]
pub fn advance(pos: glam::Vec2, speed: f32, angle: f32) -> glam::Vec2 {
    glam::Vec2::new(pos.x + speed * angle.cos(), pos.y + speed * angle.sin())
}
