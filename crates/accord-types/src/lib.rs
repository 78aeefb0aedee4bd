//! Foundation types for the Accord SDK.
//!
//! This crate provides the identifier and temporal types shared by every
//! other Accord crate.
//!
//! # Key Types
//!
//! - [`Snowflake`] — 64-bit time-ordered identifier, transported as a decimal string
//! - [`Timestamp`] — millisecond instant parsed from RFC 3339 wire text
//! - [`TypeError`] — parse failures for the above

pub mod error;
pub mod snowflake;
pub mod timestamp;

pub use error::TypeError;
pub use snowflake::Snowflake;
pub use timestamp::Timestamp;
