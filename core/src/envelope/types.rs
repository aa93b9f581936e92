use std::fmt;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::compression::CompressionError;
use crate::crypto::{CryptoError, EnvelopeKey};
use crate::headers::{EnvelopeHeader, EnvelopeVersion, HeaderError};
use crate::utils::enum_name_or_hex;

/// Seals and opens expiring, HMAC-protected, compressed tokens.
///
/// - `Send + Sync`: one instance serves any number of threads.
/// - No replay protection: a valid token opens every time until it expires.
#[derive(Clone)]
pub struct SecureEnvelope {
    pub(crate) key: EnvelopeKey,
    pub(crate) clock: Arc<dyn Clock>,
}

impl SecureEnvelope {
    /// Envelope on the wall clock.
    pub fn new(key: EnvelopeKey) -> Self {
        Self::with_clock(key, Arc::new(SystemClock))
    }

    pub fn with_clock(key: EnvelopeKey, clock: Arc<dyn Clock>) -> Self {
        Self { key, clock }
    }
}

impl fmt::Debug for SecureEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureEnvelope")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Successfully opened envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedEnvelope {
    pub header: EnvelopeHeader,
    pub payload: Vec<u8>,
}

#[derive(Debug)]
pub enum EnvelopeError {
    /// Not base64url, or shorter than header + tag.
    MalformedToken(String),

    /// Tag does not match the token body.
    IntegrityFailure,

    /// Current time is past the sealed expiry.
    Expired { expiry: u32, now: i64 },

    /// Authentic token with a layout this build does not know.
    UnsupportedVersion { raw: u8 },

    /// Compressed payload is not a valid stream.
    DecompressionFailure(CompressionError),

    /// Payload could not be compressed while sealing.
    CompressionFailure(CompressionError),

    /// Key or randomness failure.
    Crypto(CryptoError),
}

impl EnvelopeError {
    /// Stable short name, used in audit records and log fields.
    pub fn kind(&self) -> &'static str {
        use EnvelopeError::*;
        match self {
            MalformedToken(_) => "malformed_token",
            IntegrityFailure => "integrity_failure",
            Expired { .. } => "expired",
            UnsupportedVersion { .. } => "unsupported_version",
            DecompressionFailure(_) => "decompression_failure",
            CompressionFailure(_) => "compression_failure",
            Crypto(_) => "crypto",
        }
    }
}

impl fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EnvelopeError::*;
        match self {
            MalformedToken(msg) => write!(f, "malformed token: {}", msg),
            IntegrityFailure => write!(f, "token integrity check failed"),
            Expired { expiry, now } => write!(f, "token expired at {} (now {})", expiry, now),
            UnsupportedVersion { raw } =>
                write!(f, "unsupported envelope version: {}", enum_name_or_hex::<EnvelopeVersion>(*raw)),
            DecompressionFailure(e) => write!(f, "decompression failed: {}", e),
            CompressionFailure(e) => write!(f, "compression failed: {}", e),
            Crypto(e) => write!(f, "crypto error: {}", e),
        }
    }
}

impl std::error::Error for EnvelopeError {}

impl From<HeaderError> for EnvelopeError {
    fn from(e: HeaderError) -> Self {
        match e {
            HeaderError::UnsupportedVersion { raw } => EnvelopeError::UnsupportedVersion { raw },
            other @ HeaderError::BufferTooShort { .. } => EnvelopeError::MalformedToken(other.to_string()),
        }
    }
}

impl From<CryptoError> for EnvelopeError {
    fn from(e: CryptoError) -> Self {
        match e {
            CryptoError::TagMismatch => EnvelopeError::IntegrityFailure,
            other => EnvelopeError::Crypto(other),
        }
    }
}
