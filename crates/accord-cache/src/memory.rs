use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use accord_types::Snowflake;

use crate::guild::Guild;
use crate::traits::GuildCache;

/// In-memory, HashMap-based guild cache.
///
/// Intended for tests and embedding. All guilds are held in memory behind a
/// `RwLock` for safe concurrent access. Handles are cloned on read.
pub struct InMemoryGuildCache {
    guilds: RwLock<HashMap<Snowflake, Guild>>,
}

impl InMemoryGuildCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self {
            guilds: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or replace a guild handle. Returns the previous handle, if any.
    pub fn insert(&self, guild: Guild) -> Option<Guild> {
        let mut map = self.guilds.write().expect("lock poisoned");
        let previous = map.insert(guild.id, guild.clone());
        debug!(id = %guild.id, name = %guild.name, "guild cached");
        previous
    }

    /// Remove a guild by id. Returns `true` if it was cached.
    pub fn remove(&self, id: Snowflake) -> bool {
        let mut map = self.guilds.write().expect("lock poisoned");
        map.remove(&id).is_some()
    }

    /// Number of guilds currently cached.
    pub fn len(&self) -> usize {
        self.guilds.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.guilds.read().expect("lock poisoned").is_empty()
    }

    /// Remove all guilds from the cache.
    pub fn clear(&self) {
        self.guilds.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryGuildCache {
    fn default() -> Self {
        Self::new()
    }
}

impl GuildCache for InMemoryGuildCache {
    fn get(&self, id: Snowflake) -> Option<Guild> {
        let map = self.guilds.read().expect("lock poisoned");
        map.get(&id).cloned()
    }
}

impl std::fmt::Debug for InMemoryGuildCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryGuildCache")
            .field("guild_count", &count)
            .finish()
    }
}
