//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `step` per frame, no internal clock
//! - Each frame returns a new state; the previous one is never mutated
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod input;
pub mod response;
pub mod score;
pub mod serve;
pub mod state;
pub mod tick;

pub use collision::{CollisionEvent, CollisionEvents, GoalSide, WallSide, detect};
pub use input::{Action, InputSnapshot, TickInput};
pub use response::respond;
pub use score::on_goal;
pub use serve::{ServeTransition, next_serve};
pub use state::{Ball, Boundaries, GameState, Paddle, PaddleId, Score, ServingPaddle};
pub use tick::{StepOutcome, step};
