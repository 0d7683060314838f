//! Construction and configuration errors
//!
//! The simulation step itself cannot fail; everything that could make it
//! ill-defined is rejected up front when a board is built.

use std::{error::Error, fmt::Display};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardError {
    /// Board width or height is zero, negative or not finite
    InvalidDimension { width: f32, height: f32 },
    /// A tuning value is zero, negative or not finite
    InvalidTuning(&'static str),
    /// Board is narrower than a paddle, so the paddle clamp range would invert
    TooNarrow { width: f32, min_width: f32 },
    /// Ball is wider than a paddle, so a held ball could touch a wall
    BallWiderThanPaddle,
    /// Board is too short for both serve positions to stay clear of the goals
    TooShort { height: f32, min_height: f32 },
}

impl Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidDimension { width, height } => {
                write!(f, "invalid board dimensions {width}x{height}")
            }
            BoardError::InvalidTuning(field) => write!(f, "invalid tuning value for `{field}`"),
            BoardError::TooNarrow { width, min_width } => {
                write!(f, "board width {width} is narrower than the minimum {min_width}")
            }
            BoardError::BallWiderThanPaddle => Display::fmt("ball is wider than the paddle", f),
            BoardError::TooShort { height, min_height } => {
                write!(f, "board height {height} is shorter than the minimum {min_height}")
            }
        }
    }
}

impl Error for BoardError {}

/// Failure to load a tuning, settings or replay document
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Board(BoardError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "could not read config: {err}"),
            ConfigError::Json(err) => write!(f, "could not parse config: {err}"),
            ConfigError::Board(err) => write!(f, "config describes an invalid board: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io(source) => Some(source),
            ConfigError::Json(source) => Some(source),
            ConfigError::Board(source) => Some(source),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}

impl From<BoardError> for ConfigError {
    fn from(err: BoardError) -> Self {
        ConfigError::Board(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::TooNarrow {
            width: 40.0,
            min_width: 60.0,
        };
        assert_eq!(
            err.to_string(),
            "board width 40 is narrower than the minimum 60"
        );
    }

    #[test]
    fn test_config_error_source() {
        let err = ConfigError::from(BoardError::BallWiderThanPaddle);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("ball is wider than the paddle"));
    }
}
