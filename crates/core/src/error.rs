//! Error types for the diff engine.

use std::fmt;
use thiserror::Error;

/// Which input a length violation was found on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Top-level error type for diff operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    /// An input exceeds the configured length limit.
    #[error("{side} input is {len} characters, limit is {limit}")]
    InputTooLarge {
        side: Side,
        len: usize,
        limit: usize,
    },

    /// A granularity name that is not character, word or line.
    #[error("invalid granularity: {0:?}")]
    InvalidGranularity(String),

    /// Malformed configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DiffError {
    fn from(err: serde_json::Error) -> Self {
        DiffError::Config(err.to_string())
    }
}

/// Result type for diff operations.
pub type Result<T> = std::result::Result<T, DiffError>;
