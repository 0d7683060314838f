//! Duel Pong headless entry point
//!
//! Runs a replay script through the simulation and prints the final state.
//!
//! Usage: `duel-pong [script.json] [settings.json]`
//! With no script a built-in serve-and-rally demo is played.

use std::path::Path;
use std::process::ExitCode;

use duel_pong::Settings;
use duel_pong::audio::{SoundEffect, cues};
use duel_pong::replay::{self, Script};
use duel_pong::sim::{GameState, step};

const DEMO_FRAMES: u32 = 600;

fn load_script(path: Option<&str>) -> Result<Script, duel_pong::ConfigError> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            let script = Script::from_json(&json)?;
            log::info!("Loaded script {} ({} segments)", path, script.frames.len());
            Ok(script)
        }
        None => {
            log::info!("No script given, playing {} demo frames", DEMO_FRAMES);
            Ok(Script::demo(DEMO_FRAMES))
        }
    }
}

/// Count the sound cues a host would have played over the script
fn count_cues(script: &Script, settings: &Settings) -> Result<usize, duel_pong::BoardError> {
    let mut state = GameState::with_tuning(script.width, script.height, script.tuning.unwrap_or_default())?;
    let mut played = 0;
    for input in script.inputs() {
        let out = step(&state, &input);
        for cue in cues(&out, settings) {
            if cue.effect == SoundEffect::Goal {
                log::debug!("Frame {}: goal cue at gain {:.2}", out.state.frame, cue.gain);
            }
            played += 1;
        }
        state = out.state;
    }
    Ok(played)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = match args.get(1) {
        Some(path) => Settings::load(Path::new(path)),
        None => Settings::default(),
    };

    let script = match load_script(args.first().map(String::as_str)) {
        Ok(script) => script,
        Err(err) => {
            log::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let report = match replay::run(&script) {
        Ok(report) => report,
        Err(err) => {
            log::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    match count_cues(&script, &settings) {
        Ok(played) => log::info!("{} sound cues", played),
        Err(err) => log::warn!("Skipping cue count: {}", err),
    }

    log::info!(
        "Paddle hits top={} bottom={}, wall hits={}",
        report.top.paddle_hits,
        report.bottom.paddle_hits,
        report.wall_hits
    );

    match serde_json::to_string_pretty(&report.final_state) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Could not serialize final state: {}", err);
            ExitCode::FAILURE
        }
    }
}
