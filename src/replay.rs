//! Scripted headless runs
//!
//! A script is a board size, optional tuning and a list of input frames.
//! Running it feeds every frame through [`step`] in order, the same way a
//! live game loop would, and tallies what happened.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::{Action, CollisionEvent, GameState, PaddleId, TickInput, step};
use crate::tuning::Tuning;

/// Actions held for `repeat` consecutive frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptFrame {
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default = "one")]
    pub repeat: u32,
}

fn one() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub tuning: Option<Tuning>,
    pub frames: Vec<ScriptFrame>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serve from the top, then let the ball rally for `frames` frames while
    /// the bottom player drifts right
    pub fn demo(frames: u32) -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            tuning: None,
            frames: vec![
                ScriptFrame {
                    actions: vec![Action::MoveTopLeft],
                    repeat: 3,
                },
                ScriptFrame {
                    actions: vec![Action::ReleaseServe],
                    repeat: 1,
                },
                ScriptFrame {
                    actions: vec![Action::MoveBottomRight],
                    repeat: 20,
                },
                ScriptFrame {
                    actions: Vec::new(),
                    repeat: frames,
                },
            ],
        }
    }

    /// Input snapshots in frame order
    pub fn inputs(&self) -> impl Iterator<Item = TickInput> + '_ {
        self.frames.iter().flat_map(|frame| {
            let input = TickInput::from_actions(&frame.actions);
            std::iter::repeat_n(input, frame.repeat as usize)
        })
    }
}

/// Per-side tallies collected over a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideStats {
    pub paddle_hits: u32,
    pub serves: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayReport {
    pub frames: u64,
    pub wall_hits: u32,
    pub goals: u32,
    pub top: SideStats,
    pub bottom: SideStats,
    pub final_state: GameState,
}

impl ReplayReport {
    fn side(&mut self, id: PaddleId) -> &mut SideStats {
        match id {
            PaddleId::Top => &mut self.top,
            PaddleId::Bottom => &mut self.bottom,
        }
    }
}

/// Build the board and play every scripted frame
pub fn run(script: &Script) -> Result<ReplayReport, ConfigError> {
    let tuning = script.tuning.unwrap_or_default();
    let state = GameState::with_tuning(script.width, script.height, tuning)?;

    let mut report = ReplayReport {
        frames: 0,
        wall_hits: 0,
        goals: 0,
        top: SideStats::default(),
        bottom: SideStats::default(),
        final_state: state,
    };

    for input in script.inputs() {
        let out = step(&report.final_state, &input);
        for event in &out.events {
            match event {
                CollisionEvent::BallWall(_) => report.wall_hits += 1,
                CollisionEvent::BallPaddle(id) => report.side(*id).paddle_hits += 1,
                CollisionEvent::BallGoal(_) => report.goals += 1,
            }
        }
        if let Some(id) = out.launched {
            report.side(id).serves += 1;
        }
        report.frames += 1;
        report.final_state = out.state;
    }

    log::info!(
        "Replayed {} frames: {} goals, score {}-{}",
        report.frames,
        report.goals,
        report.final_state.score.top,
        report.final_state.score.bottom
    );
    Ok(report)
}
