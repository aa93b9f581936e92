//! stego/mod.rs
//! Self-describing LSB payload channel over decoded pixel data.
//!
//! Notes:
//! - Shared conventions: skip offset and carrier channel. Neither is stored in the image.
//! - Capacity is a precondition: an embed that cannot fit fails and writes nothing.
//! - No cryptography here; seal the payload first when integrity matters.

pub mod types;
pub mod grid;
pub mod codec;

pub use types::*;
pub use grid::*;
pub use codec::*;
