//! Serve state machine
//!
//! `Top`/`Bottom` hold the ball on that paddle until the release input is
//! seen; `None` is free flight and only a goal (see `score`) hands the ball
//! back to a paddle. There is no terminal state.

use super::input::{Action, InputSnapshot};
use super::state::{Ball, Paddle, PaddleId, ServingPaddle};
use crate::tuning::Tuning;

/// Result of the release check for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServeTransition {
    pub serving: ServingPaddle,
    /// Paddle that let go of the ball this frame
    pub launched: Option<PaddleId>,
}

/// Release check: a held ball becomes free when release-serve is active.
/// Free flight is left untouched here.
pub fn next_serve(current: ServingPaddle, input: &(impl InputSnapshot + ?Sized)) -> ServeTransition {
    match current.paddle() {
        Some(id) if input.is_active(Action::ReleaseServe) => {
            log::debug!("{:?} paddle serves", id);
            ServeTransition {
                serving: ServingPaddle::None,
                launched: Some(id),
            }
        }
        _ => ServeTransition {
            serving: current,
            launched: None,
        },
    }
}

/// Ball leaving `id`'s paddle on the release frame: serve speed, straight at the opponent
pub fn launch(id: PaddleId, ball: &Ball, tuning: &Tuning) -> Ball {
    Ball {
        pos: ball.pos,
        speed: tuning.serve_speed,
        angle: id.launch_angle(),
    }
}

/// Ball riding a paddle: pinned to its release point, not moving
pub fn hold(id: PaddleId, paddle: &Paddle, tuning: &Tuning) -> Ball {
    Ball::held_by(id, paddle, tuning)
}
