use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid snowflake: {0}")]
    InvalidSnowflake(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
