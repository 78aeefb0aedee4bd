use std::fmt;
use std::sync::Arc;

use accord_cache::GuildCache;
use accord_resolve::UserResolver;

/// Capabilities a record needs to reach its collaborators.
///
/// A `Context` carries exactly two things: a read-only guild lookup and an
/// asynchronous user fetch. Records embed one at construction instead of
/// reaching through a shared client object, so the surface a record can
/// touch stays narrow and explicit.
#[derive(Clone)]
pub struct Context {
    guilds: Arc<dyn GuildCache>,
    users: Arc<dyn UserResolver>,
}

impl Context {
    /// Assemble a context from its two capabilities.
    pub fn new(guilds: Arc<dyn GuildCache>, users: Arc<dyn UserResolver>) -> Self {
        Self { guilds, users }
    }

    /// The guild lookup capability.
    pub fn guilds(&self) -> &dyn GuildCache {
        self.guilds.as_ref()
    }

    /// The user fetch capability.
    pub fn users(&self) -> &dyn UserResolver {
        self.users.as_ref()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").finish_non_exhaustive()
    }
}
