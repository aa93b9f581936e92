//! envelope/mod.rs
//! Versioned, expiring, integrity-protected token envelope.
//!
//! Notes:
//! - The MAC key is injected per instance; there is no built-in key.
//! - Expiry is absolute and compared against the injected clock.
//! - Leaf library: returns failures, never logs them.

pub mod types;
pub mod seal;
pub mod open;

pub use types::*;
pub use seal::*;
