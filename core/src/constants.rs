//! constants.rs
//! Wire-level constants shared by the pixel codec and the token envelope.
//!
//! Both sides of the channel must agree on every value here; none of them
//! are negotiated in-band.

// ---------------------------------------------------------------------------
// Pixel codec
// ---------------------------------------------------------------------------

/// Bits in the length header that precedes every embedded payload.
pub const STEGO_HEADER_BITS: usize = 32;

/// Upper bound on the payload length a header may declare (bytes).
/// A sanity bound against garbage headers, not a negotiated limit.
pub const STEGO_MAX_PAYLOAD_LEN: usize = 4096;

/// Default number of leading pixels left untouched.
pub const DEFAULT_SKIP_OFFSET: usize = 128;

/// Channel index carrying data bits in grids with three or more channels (blue).
pub const CARRIER_CHANNEL_RGB: usize = 2;

// ---------------------------------------------------------------------------
// Token envelope
// ---------------------------------------------------------------------------

/// Current envelope format.
pub const ENVELOPE_V1: u8 = 1;

/// version(1) + expiry(4) + nonce(8)
pub const ENVELOPE_HEADER_LEN: usize = 1 + 4 + 8;

/// Random nonce length.
pub const ENVELOPE_NONCE_LEN: usize = 8;

/// HMAC-SHA-256 tag length.
pub const ENVELOPE_TAG_LEN: usize = 32;

/// Smallest decoded token that can be well formed.
pub const ENVELOPE_MIN_LEN: usize = ENVELOPE_HEADER_LEN + ENVELOPE_TAG_LEN;

/// Cap on inflated payload size (16 MiB).
pub const MAX_DECOMPRESSED_LEN: usize = 16 * 1024 * 1024;

/// Default token lifetime when configuration omits one.
pub const DEFAULT_TTL_SECS: u64 = 3600;

/// Compression codec identifiers, keyed by envelope version.
pub mod codec_ids {
    pub const ZLIB: u16 = 0x0003;
}

/// Default zlib level (balanced).
pub const DEFAULT_LEVEL_ZLIB: u32 = 6;
