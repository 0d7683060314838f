//! Collision response
//!
//! Given the events detected on a tentative ball, rewrite its trajectory.
//! Positions are always recomputed from the previous frame's ball so a
//! bounce never steps the ball twice.

use std::f32::consts::{FRAC_PI_2, PI};

use super::collision::{CollisionEvent, CollisionEvents};
use super::state::{Ball, Paddle};
use crate::consts::TILT_WIDTH_PADDING;
use crate::tuning::Tuning;

/// Plain Euler step along the current heading
#[inline]
pub fn free_flight(ball: &Ball) -> Ball {
    Ball {
        pos: crate::advance(ball.pos, ball.speed, ball.angle),
        ..*ball
    }
}

/// Bounce off a side wall: mirror the heading across the wall normal
pub fn wall_bounce(ball: &Ball, old: &Ball) -> Ball {
    let angle = PI - ball.angle;
    let mut pos = ball.pos;
    pos.x = old.pos.x + old.speed * angle.cos();
    Ball { pos, angle, ..*ball }
}

/// Angular deflection for an impact `offset` units right of the paddle centre
#[inline]
pub fn tilt(offset: f32, paddle_width: f32) -> f32 {
    PI * offset / (paddle_width + TILT_WIDTH_PADDING)
}

/// Bounce off a paddle. The further from centre the ball lands, the more the
/// rebound leans toward that side.
///
/// The outgoing vertical direction comes from the sign of `asin(sin(angle))`,
/// i.e. whether the ball was travelling toward +y, rather than from which
/// paddle was struck.
pub fn paddle_bounce(ball: &Ball, old: &Ball, paddle: &Paddle, tuning: &Tuning) -> Ball {
    let tilt = tilt(ball.pos.x - paddle.pos.x, tuning.paddle_width);
    let angle = if ball.angle.sin().asin() > 0.0 {
        -FRAC_PI_2 + tilt
    } else {
        FRAC_PI_2 - tilt
    };
    let mut pos = ball.pos;
    pos.y = old.pos.y + old.speed * angle.sin();
    Ball { pos, angle, ..*ball }
}

/// Apply every wall and paddle event in order. Later responses overwrite the
/// coordinate they own, so a paddle hit listed after a wall hit sets the final
/// heading. Goal events leave the ball alone; scoring handles them.
pub fn respond(events: &CollisionEvents, ball: &Ball, old: &Ball, paddles: &[Paddle; 2], tuning: &Tuning) -> Ball {
    events.iter().fold(*ball, |ball, event| match event {
        CollisionEvent::BallWall(_) => wall_bounce(&ball, old),
        CollisionEvent::BallPaddle(id) => paddle_bounce(&ball, old, &paddles[id.index()], tuning),
        CollisionEvent::BallGoal(_) => ball,
    })
}
