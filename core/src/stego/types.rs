use std::fmt;

/// Result of a detailed extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Recovered bytes, possibly a prefix of the declared payload.
    pub payload: Vec<u8>,
    /// Length announced by the header.
    pub declared_len: usize,
}

impl Extraction {
    /// True when the grid ran out before the declared length was read.
    pub fn is_truncated(&self) -> bool {
        self.payload.len() < self.declared_len
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// Grid exhausted before the 32 header bits were read.
    HeaderIncomplete { available: usize },

    /// Length outside `1..=STEGO_MAX_PAYLOAD_LEN` (header on extract, payload on embed).
    InvalidLength { len: usize },

    /// Grid too small for skip + header + payload (in pixels).
    CapacityExceeded { needed: usize, available: usize },
}

impl StegoError {
    pub fn kind(&self) -> &'static str {
        match self {
            StegoError::HeaderIncomplete { .. } => "header_incomplete",
            StegoError::InvalidLength { .. } => "invalid_length",
            StegoError::CapacityExceeded { .. } => "capacity_exceeded",
        }
    }
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use StegoError::*;
        match self {
            HeaderIncomplete { available } =>
                write!(f, "length header incomplete: {} of 32 bits available", available),
            InvalidLength { len } =>
                write!(f, "invalid payload length: {}", len),
            CapacityExceeded { needed, available } =>
                write!(f, "grid too small: need {} pixels, have {}", needed, available),
        }
    }
}

impl std::error::Error for StegoError {}
