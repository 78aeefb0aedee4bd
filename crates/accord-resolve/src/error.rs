use thiserror::Error;

use accord_types::Snowflake;

/// Errors produced by user resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("user not found: {0}")]
    NotFound(Snowflake),

    #[error("transport error: {0}")]
    Transport(String),
}

pub type ResolveResult<T> = Result<T, ResolveError>;
