//! # LCU Common
//!
//! Common types and error taxonomy shared across the LCU crates.
//!
//! This crate provides the foundational pieces the discovery crate and the
//! CLI build upon: the [`Credentials`] record and the discovery error types.

pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::{DiscoveryError, DiscoveryResult};
pub use types::Credentials;
