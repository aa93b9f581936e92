//! crypto/key.rs
//! Envelope MAC key, injected at construction.
//!
//! Security notes:
//! - The key is deployment configuration, never a compiled-in constant.
//! - Without per-deployment rotation the tag detects accidental corruption,
//!   not an adversary who knows the key.

use std::fmt;

use crate::crypto::types::CryptoError;

#[derive(Clone, PartialEq, Eq)]
pub struct EnvelopeKey {
    bytes: Vec<u8>,
}

impl EnvelopeKey {
    /// Minimum accepted key length in bytes.
    pub const MIN_LEN: usize = 1;

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, CryptoError> {
        let bytes = bytes.into();
        if bytes.len() < Self::MIN_LEN {
            return Err(CryptoError::InvalidKeyLen { min: Self::MIN_LEN, actual: bytes.len() });
        }
        Ok(Self { bytes })
    }

    pub fn from_hex(encoded: &str) -> Result<Self, CryptoError> {
        Self::from_bytes(hex::decode(encoded.trim())?)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Key material never reaches logs.
impl fmt::Debug for EnvelopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvelopeKey")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
