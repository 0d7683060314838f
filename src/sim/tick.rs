//! Per-frame simulation step
//!
//! Takes the previous committed state and this frame's input snapshot and
//! returns the next state. Order matters:
//! 1. release check (serve)
//! 2. paddle movement
//! 3. tentative ball under the tentative serve state and new paddles
//! 4. collisions, response, scoring; a goal overrides the serve state and
//!    the ball is resolved again as held by the new server
//! 5. commit

use serde::{Deserialize, Serialize};

use super::collision::{CollisionEvents, detect};
use super::input::InputSnapshot;
use super::response::{free_flight, respond};
use super::score::on_goal;
use super::serve::{hold, launch, next_serve};
use super::state::{Ball, GameState, Paddle, PaddleId, ServingPaddle};

/// Everything one frame produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub state: GameState,
    /// Collisions detected on the tentative ball this frame
    pub events: CollisionEvents,
    /// Paddle whose held ball was released this frame
    pub launched: Option<PaddleId>,
}

/// Move both paddles one frame, clamped to the board
fn move_paddles(state: &GameState, input: &(impl InputSnapshot + ?Sized)) -> [Paddle; 2] {
    PaddleId::ALL.map(|id| {
        let paddle = state.paddle(id);
        let dx = input.paddle_direction(id) * state.tuning.paddle_speed;
        paddle.moved_to(paddle.pos.x + dx, &state.bounds, &state.tuning)
    })
}

/// Ball position before collision response
fn resolve_ball(
    old: &Ball,
    serving: ServingPaddle,
    launched: Option<PaddleId>,
    paddles: &[Paddle; 2],
    state: &GameState,
) -> Ball {
    match (serving.paddle(), launched) {
        (Some(id), _) => hold(id, &paddles[id.index()], &state.tuning),
        // Released this frame: leave from where the ball was held
        (None, Some(id)) => free_flight(&launch(id, old, &state.tuning)),
        (None, None) => free_flight(old),
    }
}

/// Advance the game by one frame
pub fn step(old: &GameState, input: &(impl InputSnapshot + ?Sized)) -> StepOutcome {
    let transition = next_serve(old.serving, input);
    let paddles = move_paddles(old, input);
    let tentative = resolve_ball(&old.ball, transition.serving, transition.launched, &paddles, old);

    let probe = GameState {
        ball: tentative,
        paddles,
        ..old.clone()
    };
    let events = detect(&probe);

    // The ball the response rewrites is the one launched this frame, if any
    let prior = match transition.launched {
        Some(id) => launch(id, &old.ball, &old.tuning),
        None => old.ball,
    };

    let (ball, serving, score) = match events.goal() {
        Some(side) => {
            let (score, server) = on_goal(side, old.score);
            log::info!(
                "Goal on {:?} line, score {}-{}, {:?} paddle serves",
                side,
                score.top,
                score.bottom,
                server
            );
            let ball = hold(server, &paddles[server.index()], &old.tuning);
            (ball, ServingPaddle::from(server), score)
        }
        None if transition.serving.is_held() => (tentative, transition.serving, old.score),
        None => {
            let ball = respond(&events, &tentative, &prior, &paddles, &old.tuning);
            if let Some(id) = events.paddle_hit() {
                log::debug!("Ball hit {:?} paddle, new angle {:.3}", id, ball.angle);
            }
            (ball, transition.serving, old.score)
        }
    };

    StepOutcome {
        state: GameState {
            ball,
            paddles,
            serving,
            score,
            frame: old.frame + 1,
            ..old.clone()
        },
        events,
        launched: transition.launched,
    }
}
