//! Read-only guild cache surface for the Accord SDK.
//!
//! Records that need to surface a guild handle look it up here. The cache is
//! populated elsewhere (by the gateway dispatch layer); this crate only
//! defines the lookup contract and an in-memory implementation for tests and
//! embedding.

pub mod guild;
pub mod memory;
pub mod traits;

pub use guild::Guild;
pub use memory::InMemoryGuildCache;
pub use traits::GuildCache;
