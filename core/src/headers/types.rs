//! headers/types.rs
//! Core header struct, version registry and header errors.

use std::fmt;
use num_enum::TryFromPrimitive;

use crate::constants::{ENVELOPE_HEADER_LEN, ENVELOPE_NONCE_LEN, ENVELOPE_V1};
use crate::utils::enum_name_or_hex;

/// Known envelope layouts.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum EnvelopeVersion {
    V1 = ENVELOPE_V1,
}

impl EnvelopeVersion {
    pub fn verify(raw: u8) -> Result<Self, HeaderError> {
        EnvelopeVersion::try_from_primitive(raw)
            .map_err(|_| HeaderError::UnsupportedVersion { raw })
    }

    /// Length of the header for this layout.
    pub fn header_len(self) -> usize {
        match self {
            EnvelopeVersion::V1 => ENVELOPE_HEADER_LEN,
        }
    }
}

/// Decoded envelope header.
/// - `expiry` is an absolute unix timestamp (seconds), never a duration.
/// - `nonce` diversifies the byte stream only; it is not mixed into the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeHeader {
    pub version: EnvelopeVersion,
    pub expiry: u32,
    pub nonce: [u8; ENVELOPE_NONCE_LEN],
}

impl EnvelopeHeader {
    pub const LEN_V1: usize = ENVELOPE_HEADER_LEN;

    pub fn v1(expiry: u32, nonce: [u8; ENVELOPE_NONCE_LEN]) -> Self {
        Self { version: EnvelopeVersion::V1, expiry, nonce }
    }

    /// True once `now` (unix seconds) is past the expiry.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.expiry as i64
    }
}

#[derive(Debug)]
pub enum HeaderError {
    /// Buffer too short to contain the header.
    BufferTooShort { have: usize, need: usize },

    /// Version byte names no known layout.
    UnsupportedVersion { raw: u8 },
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use HeaderError::*;
        match self {
            BufferTooShort { have, need } =>
                write!(f, "header buffer too short: {} < {}", have, need),
            UnsupportedVersion { raw } =>
                write!(f, "unsupported envelope version: {}",
                    enum_name_or_hex::<EnvelopeVersion>(*raw)),
        }
    }
}

impl std::error::Error for HeaderError {}
