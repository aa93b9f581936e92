//! imgmeta-core
//!
//! Hidden metadata channel: LSB pixel codec plus authenticated, expiring,
//! compressed tokens. Payloads are opaque bytes and are never interpreted.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod clock;

// Building blocks
pub mod compression;
pub mod headers;
pub mod crypto;
pub mod telemetry;
pub mod audit;

// Codecs
pub mod stego;
pub mod envelope;

// Composed channel
pub mod channel;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::audit::{AuditRecord, AuditSink, JsonLinesSink, MemorySink, NullSink};
    pub use crate::channel::{AuditConfig, ChannelConfig, MetaChannel};
    pub use crate::clock::{Clock, ManualClock, SystemClock};
    pub use crate::crypto::EnvelopeKey;
    pub use crate::envelope::{EnvelopeError, SecureEnvelope};
    pub use crate::stego::{PixelGrid, SteganoCodec, StegoError};
    pub use crate::types::MetaError;
}
