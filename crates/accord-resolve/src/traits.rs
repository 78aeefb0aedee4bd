use async_trait::async_trait;

use accord_types::Snowflake;

use crate::error::ResolveResult;
use crate::user::User;

/// Fetch-by-id interface for user objects.
///
/// Implementations do not cache and do not coalesce concurrent requests for
/// the same id; callers that need either put a layer in front. Failures
/// (not-found, transport) are surfaced as-is.
#[async_trait]
pub trait UserResolver: Send + Sync {
    /// Fetch the user with the given id.
    async fn fetch(&self, id: Snowflake) -> ResolveResult<User>;
}
