//! compression/codecs/mod.rs
//! Concrete codec implementations resolved by the registry.

pub mod zlib;

pub use zlib::*;
