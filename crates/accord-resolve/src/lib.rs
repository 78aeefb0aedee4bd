//! Asynchronous user resolution surface for the Accord SDK.
//!
//! Records that need a full user object fetch it through [`UserResolver`].
//! The production implementation sits on the REST client; this crate defines
//! the contract, the error surface, and in-memory implementations for tests
//! and embedding.

pub mod error;
pub mod memory;
pub mod traits;
pub mod user;

pub use error::{ResolveError, ResolveResult};
pub use memory::{FailingUserResolver, StaticUserResolver};
pub use traits::UserResolver;
pub use user::User;
