use accord_types::Snowflake;

use crate::guild::Guild;

/// Read-only guild lookup.
///
/// All implementations must satisfy these invariants:
/// - `get` is synchronous and non-blocking: a pure read of locally held
///   state, never a network round-trip.
/// - A `None` return means "not cached", which a caller cannot distinguish
///   from "does not exist". Callers that need authority must go through the
///   REST layer instead.
/// - Lookups never mutate the cache.
pub trait GuildCache: Send + Sync {
    /// Look up a guild by id, returning the cached handle if present.
    fn get(&self, id: Snowflake) -> Option<Guild>;

    /// Check whether a guild is currently cached.
    fn contains(&self, id: Snowflake) -> bool {
        self.get(id).is_some()
    }
}
