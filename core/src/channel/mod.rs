// ## `mod.rs`: public facade + re-exports

//! channel: the hidden metadata channel.
//!
//! Composes the LSB pixel codec with the token envelope behind one
//! configured handle. Both codecs stay usable on their own.

pub mod config;
pub mod core;
pub mod io;

pub use config::{AuditConfig, ChannelConfig};
pub use self::core::MetaChannel;
