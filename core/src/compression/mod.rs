//! compression/mod.rs
//! Payload compression for sealed envelopes.
//!
//! Notes:
//! - Each payload is compressed as one self-contained stream.
//! - The envelope version selects the codec; nothing else on the wire does.
//! - Inflation is capped so a hostile stream cannot balloon memory.

pub mod types;
pub mod registry;
pub mod codecs;

pub use types::*;
pub use registry::*;
