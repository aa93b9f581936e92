//! telemetry/mod.rs
//! Counters, stage timers and immutable snapshots for the metadata channel.
//!
//! Notes:
//! - Snapshots are plain values; taking one never resets the counters.
//! - Snapshots serialize with serde for export alongside audit records.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
