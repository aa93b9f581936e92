// ## 📂 File: `src/crypto/types.rs`

use std::fmt;

/// Stable tag length for HMAC-SHA-256.
pub const TAG_LEN_32: usize = 32;

#[derive(Debug)]
pub enum CryptoError {
    /// Key length rejected by the MAC or by key policy.
    InvalidKeyLen { min: usize, actual: usize },

    /// Key material could not be parsed (e.g. bad hex).
    InvalidKeyEncoding(String),

    /// Tag mismatch (authentication failure).
    TagMismatch,

    /// Random source failed to produce bytes.
    Entropy(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CryptoError::*;
        match self {
            InvalidKeyLen { min, actual } =>
                write!(f, "invalid key length: min={}, actual={}", min, actual),
            InvalidKeyEncoding(msg) =>
                write!(f, "invalid key encoding: {}", msg),
            TagMismatch =>
                write!(f, "HMAC tag mismatch"),
            Entropy(msg) =>
                write!(f, "random source failure: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}

impl From<hex::FromHexError> for CryptoError {
    fn from(e: hex::FromHexError) -> Self {
        CryptoError::InvalidKeyEncoding(e.to_string())
    }
}
