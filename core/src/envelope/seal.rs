//! envelope/seal.rs
//!
//! Wire layout (before base64url, no padding):
//! `version(1) | expiry(4, BE) | nonce(8) | zlib(payload) | tag(32)`
//! where `tag = HMAC-SHA-256(key, everything before it)`.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

use crate::compression::{codec_for_version, create_compressor};
use crate::constants::ENVELOPE_MIN_LEN;
use crate::crypto::{compute_tag, random_nonce};
use crate::envelope::types::{EnvelopeError, SecureEnvelope};
use crate::headers::{encode_header_be, EnvelopeHeader};

/// Absolute expiry for a token sealed at `now`, truncated to 32 bits.
/// Wraps in 2106.
#[inline]
pub fn expiry_from(now: i64, ttl_secs: u64) -> u32 {
    now.wrapping_add(ttl_secs as i64) as u32
}

impl SecureEnvelope {
    /// Seal `payload` into a token valid for `ttl_secs` from now.
    pub fn seal(&self, payload: &[u8], ttl_secs: u64) -> Result<String, EnvelopeError> {
        let expiry = expiry_from(self.clock.now_unix(), ttl_secs);
        let header = EnvelopeHeader::v1(expiry, random_nonce()?);
        self.seal_with_header(&header, payload)
    }

    /// Seal under an explicit header (fixed nonce / expiry).
    pub fn seal_with_header(&self, header: &EnvelopeHeader, payload: &[u8]) -> Result<String, EnvelopeError> {
        let compressor = create_compressor(codec_for_version(header.version), None)
            .map_err(EnvelopeError::CompressionFailure)?;

        let mut out = Vec::with_capacity(ENVELOPE_MIN_LEN + payload.len());
        encode_header_be(header, &mut out);
        compressor
            .compress(payload, &mut out)
            .map_err(EnvelopeError::CompressionFailure)?;

        let tag = compute_tag(&self.key, &out)?;
        out.extend_from_slice(&tag);

        Ok(URL_SAFE_NO_PAD.encode(out))
    }
}
