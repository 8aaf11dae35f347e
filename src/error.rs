//! Chai Error Types
//!
//! Centralized error handling for the assistant.

use thiserror::Error;

/// Central error type for Chai
#[derive(Error, Debug)]
pub enum ChaiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Roster error: {0}")]
    Roster(String),

    #[error("Audit log error: {0}")]
    Audit(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Chai operations
pub type ChaiResult<T> = Result<T, ChaiError>;

/// Why a challenge instruction could not be parsed.
///
/// The split exists for logging and tests; callers collapse all four
/// variants into the same user-visible help reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("text does not match the challenge grammar")]
    Grammar,

    #[error("unrecognized count token: {0}")]
    Number(String),

    #[error("unrecognized stat phrase: {0}")]
    Stat(String),

    #[error("unparseable reward amount: {0}")]
    Reward(String),
}
