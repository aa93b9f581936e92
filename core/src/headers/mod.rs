//! headers/mod.rs
//! Envelope header: version byte, absolute expiry, random nonce.
//!
//! Notes:
//! - Fixed-size header (13 bytes) in big-endian order.
//! - The version byte is the format discriminator; every parse dispatches on it.
//! - Header bytes are only read after the envelope tag has been verified.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
