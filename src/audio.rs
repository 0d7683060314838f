//! Sound cue selection
//!
//! Synthesis belongs to the host. This module only decides which effect a
//! frame deserves, from its collision list and the held-to-free transition.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::{CollisionEvent, StepOutcome};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits a side wall
    WallHit,
    /// Ball crossed a goal line
    Goal,
    /// Held ball released
    Launch,
}

/// One effect to play this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    pub effect: SoundEffect,
    /// 0.0 - 1.0
    pub gain: f32,
}

/// Effects for a frame, loudest first. A goal drowns out any bounce in the
/// same frame.
pub fn cues(outcome: &StepOutcome, settings: &Settings) -> Vec<Cue> {
    let gain = settings.effective_volume();
    if gain <= 0.0 {
        return Vec::new();
    }

    let mut effects = Vec::new();
    if outcome.events.goal().is_some() {
        effects.push(SoundEffect::Goal);
    } else {
        for event in &outcome.events {
            let effect = match event {
                CollisionEvent::BallPaddle(_) => SoundEffect::PaddleHit,
                CollisionEvent::BallWall(_) => SoundEffect::WallHit,
                CollisionEvent::BallGoal(_) => continue,
            };
            if !effects.contains(&effect) {
                effects.push(effect);
            }
        }
    }
    if outcome.launched.is_some() {
        effects.push(SoundEffect::Launch);
    }

    effects
        .into_iter()
        .map(|effect| Cue {
            effect,
            gain: gain * relative_gain(effect),
        })
        .collect()
}

fn relative_gain(effect: SoundEffect) -> f32 {
    match effect {
        SoundEffect::Goal => 1.0,
        SoundEffect::PaddleHit => 0.8,
        SoundEffect::Launch => 0.6,
        SoundEffect::WallHit => 0.5,
    }
}
