use thiserror::Error;

use accord_resolve::ResolveError;

#[derive(Debug, Error)]
pub enum PremiumError {
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("entitlement has no user id")]
    MissingUserId,

    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),
}

pub type PremiumResult<T> = Result<T, PremiumError>;
