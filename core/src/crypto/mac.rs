//! crypto/mac.rs
//! HMAC-SHA-256 tagging for envelopes.
//!
//! Design:
//! - The tag covers the exact bytes `version || expiry || nonce || compressed`.
//! - Verification goes through `Mac::verify_slice`, which compares in constant time.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::crypto::key::EnvelopeKey;
use crate::crypto::types::{CryptoError, TAG_LEN_32};

type HmacSha256 = Hmac<Sha256>;

fn keyed(key: &EnvelopeKey) -> Result<HmacSha256, CryptoError> {
    HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|_| CryptoError::InvalidKeyLen { min: EnvelopeKey::MIN_LEN, actual: key.len() })
}

/// Compute the 32-byte tag over `data`.
#[inline]
pub fn compute_tag(key: &EnvelopeKey, data: &[u8]) -> Result<[u8; TAG_LEN_32], CryptoError> {
    let mut mac = keyed(key)?;
    mac.update(data);

    let mut tag = [0u8; TAG_LEN_32];
    tag.copy_from_slice(&mac.finalize().into_bytes());
    Ok(tag)
}

/// Verify `tag` over `data` in constant time.
#[inline]
pub fn verify_tag(key: &EnvelopeKey, data: &[u8], tag: &[u8]) -> Result<(), CryptoError> {
    let mut mac = keyed(key)?;
    mac.update(data);
    mac.verify_slice(tag).map_err(|_| CryptoError::TagMismatch)
}
