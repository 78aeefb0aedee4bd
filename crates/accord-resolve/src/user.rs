use std::fmt;

use serde::{Deserialize, Serialize};

use accord_types::Snowflake;

/// A resolved user object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user's identifier.
    pub id: Snowflake,
    /// The user's account name.
    pub username: String,
    /// Whether the account belongs to an application rather than a person.
    #[serde(default)]
    pub bot: bool,
}

impl User {
    /// Create a user object.
    pub fn new(id: Snowflake, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            bot: false,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.username, self.id)
    }
}
