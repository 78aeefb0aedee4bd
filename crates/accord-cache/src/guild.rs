use std::fmt;

use serde::{Deserialize, Serialize};

use accord_types::Snowflake;

/// A cached guild handle.
///
/// This is the shape records hand back from synchronous cache lookups. It
/// carries only what the cache observed; the full guild resource lives on
/// the platform side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    /// The guild's identifier.
    pub id: Snowflake,
    /// The guild's display name.
    pub name: String,
}

impl Guild {
    /// Create a guild handle.
    pub fn new(id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Guild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
