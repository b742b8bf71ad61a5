//! Error types for input handling, configuration, and algorithm lookup.
//!
//! The seek algorithms themselves are total and never return these.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised outside the algorithm core.
#[derive(Debug, Error)]
pub enum SeekError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid input: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error("unknown algorithm: {0} (expected fcfs, scan, or sstf)")]
    UnknownAlgorithm(String),

    #[error("unknown preset: {0} (expected fcfs, scan, or sstf)")]
    UnknownPreset(String),

    #[error("unsupported playback speed: {0} (expected 0.5, 1, 2, or 3)")]
    InvalidSpeed(f64),
}

impl From<Vec<ValidationError>> for SeekError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SeekError::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, SeekError>;
