use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use accord_types::Snowflake;

use crate::error::{ResolveError, ResolveResult};
use crate::traits::UserResolver;
use crate::user::User;

/// Resolver over a fixed set of users.
///
/// Intended for tests and embedding. Ids outside the set resolve to
/// [`ResolveError::NotFound`].
#[derive(Debug, Default)]
pub struct StaticUserResolver {
    users: HashMap<Snowflake, User>,
}

impl StaticUserResolver {
    /// Create an empty resolver (every fetch fails with `NotFound`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver over the given users.
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.id, u)).collect(),
        }
    }

    /// Add a user to the set.
    pub fn insert(&mut self, user: User) {
        self.users.insert(user.id, user);
    }
}

#[async_trait]
impl UserResolver for StaticUserResolver {
    async fn fetch(&self, id: Snowflake) -> ResolveResult<User> {
        match self.users.get(&id) {
            Some(user) => {
                debug!(id = %id, "user resolved");
                Ok(user.clone())
            }
            None => Err(ResolveError::NotFound(id)),
        }
    }
}

/// Resolver whose every fetch fails with a transport error.
///
/// Stands in for an unreachable REST client in tests.
#[derive(Debug)]
pub struct FailingUserResolver {
    message: String,
}

impl FailingUserResolver {
    /// Create a resolver that fails with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl UserResolver for FailingUserResolver {
    async fn fetch(&self, _id: Snowflake) -> ResolveResult<User> {
        Err(ResolveError::Transport(self.message.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_known_user() {
        let resolver =
            StaticUserResolver::from_users([User::new(Snowflake::new(9), "ferris")]);

        let user = resolver.fetch(Snowflake::new(9)).await.unwrap();
        assert_eq!(user.username, "ferris");
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let resolver = StaticUserResolver::new();
        let err = resolver.fetch(Snowflake::new(9)).await.unwrap_err();
        assert_eq!(err, ResolveError::NotFound(Snowflake::new(9)));
    }

    #[tokio::test]
    async fn insert_makes_user_resolvable() {
        let mut resolver = StaticUserResolver::new();
        resolver.insert(User::new(Snowflake::new(7), "late"));

        assert!(resolver.fetch(Snowflake::new(7)).await.is_ok());
    }

    #[tokio::test]
    async fn failing_resolver_surfaces_transport_error() {
        let resolver = FailingUserResolver::new("connection reset");
        let err = resolver.fetch(Snowflake::new(1)).await.unwrap_err();
        assert_eq!(err, ResolveError::Transport("connection reset".into()));
    }
}
