//! Entitlement records for the Accord SDK.
//!
//! An [`Entitlement`] mirrors a remote access-grant resource: it says whether
//! a user or a guild currently holds paid access to a SKU. The record is
//! created once from a wire payload and kept in sync by merging partial
//! payloads on top ([`Entitlement::apply`]); classification
//! ([`Entitlement::is_active`] and friends) and relation resolution
//! ([`Entitlement::guild`], [`Entitlement::fetch_user`]) read the merged
//! state.
//!
//! Transport, gateway dispatch, and cache population live elsewhere; records
//! reach their collaborators through the narrow capabilities in [`Context`].

pub mod context;
pub mod entitlement;
pub mod error;
pub mod kind;
pub mod patch;

pub use context::Context;
pub use entitlement::Entitlement;
pub use error::{PremiumError, PremiumResult};
pub use kind::EntitlementKind;
pub use patch::EntitlementPatch;

// Re-export key types
pub use accord_cache::{Guild, GuildCache, InMemoryGuildCache};
pub use accord_resolve::{ResolveError, User, UserResolver};
pub use accord_types::{Snowflake, Timestamp};
