//! src/headers/decode.rs
//!
//! Header decoding.
//!
//! Design notes:
//! - The first byte selects the layout; unknown values are rejected before
//!   any other field is read.
//! - Callers must verify the envelope tag before calling this.

use crate::constants::ENVELOPE_NONCE_LEN;
use crate::headers::types::{EnvelopeHeader, EnvelopeVersion, HeaderError};

/// Deserialize a header from the front of `buf`.
///
/// # Returns
/// - `Ok((header, consumed))` with the number of header bytes consumed.
/// - `Err(HeaderError)` on an unknown version or a short buffer.
pub fn decode_header_be(buf: &[u8]) -> Result<(EnvelopeHeader, usize), HeaderError> {
    let raw = *buf.first().ok_or(HeaderError::BufferTooShort { have: 0, need: 1 })?;
    let version = EnvelopeVersion::verify(raw)?;

    let need = version.header_len();
    if buf.len() < need {
        return Err(HeaderError::BufferTooShort { have: buf.len(), need });
    }

    let header = match version {
        EnvelopeVersion::V1 => decode_v1(buf),
    };
    Ok((header, need))
}

fn decode_v1(buf: &[u8]) -> EnvelopeHeader {
    let mut expiry = [0u8; 4];
    expiry.copy_from_slice(&buf[1..5]);                     // 1..5   expiry
    let mut nonce = [0u8; ENVELOPE_NONCE_LEN];
    nonce.copy_from_slice(&buf[5..5 + ENVELOPE_NONCE_LEN]); // 5..13  nonce

    EnvelopeHeader::v1(u32::from_be_bytes(expiry), nonce)
}
