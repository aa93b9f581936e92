use std::io;
use crate::{
    crypto::CryptoError,
    envelope::EnvelopeError,
    headers::HeaderError,
    stego::StegoError,
};


/// Unified channel error covering the codecs, image I/O, JSON and configuration.
/// - `From<T>` impls enable `?` across layers.
/// - `kind()` gives a stable short name for logs and audit records.
#[derive(Debug)]
pub enum MetaError {
    /// Pixel codec failure.
    Stego(StegoError),

    /// Token envelope failure.
    Envelope(EnvelopeError),

    /// Image decode/encode failure.
    Image(image::ImageError),

    /// Carrier format cannot hold LSB data (lossy encodings).
    UnsupportedCarrier { format: String },

    /// JSON (de)serialization of a payload record.
    Json(serde_json::Error),

    /// File I/O.
    Io(io::Error),

    /// Invalid or incomplete configuration.
    Config(String),
}

impl MetaError {
    pub fn kind(&self) -> &'static str {
        match self {
            MetaError::Stego(e) => e.kind(),
            MetaError::Envelope(e) => e.kind(),
            MetaError::Image(_) => "image",
            MetaError::UnsupportedCarrier { .. } => "unsupported_carrier",
            MetaError::Json(_) => "json",
            MetaError::Io(_) => "io",
            MetaError::Config(_) => "config",
        }
    }
}

impl std::fmt::Display for MetaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetaError::Stego(e) => write!(f, "stego error: {}", e),
            MetaError::Envelope(e) => write!(f, "envelope error: {}", e),
            MetaError::Image(e) => write!(f, "image error: {}", e),
            MetaError::UnsupportedCarrier { format } =>
                write!(f, "unsupported carrier format: {} (lossy encodings destroy LSB data)", format),
            MetaError::Json(e) => write!(f, "json error: {}", e),
            MetaError::Io(e) => write!(f, "I/O error: {}", e),
            MetaError::Config(msg) => write!(f, "config error: {}", msg),
        }
    }
}

impl std::error::Error for MetaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MetaError::Stego(e) => Some(e),
            MetaError::Envelope(e) => Some(e),
            MetaError::Image(e) => Some(e),
            MetaError::Json(e) => Some(e),
            MetaError::Io(e) => Some(e),
            MetaError::UnsupportedCarrier { .. } | MetaError::Config(_) => None,
        }
    }
}

impl From<StegoError> for MetaError {
    fn from(e: StegoError) -> Self {
        MetaError::Stego(e)
    }
}

impl From<EnvelopeError> for MetaError {
    fn from(e: EnvelopeError) -> Self {
        MetaError::Envelope(e)
    }
}

impl From<HeaderError> for MetaError {
    fn from(e: HeaderError) -> Self {
        MetaError::Envelope(e.into())
    }
}

impl From<CryptoError> for MetaError {
    fn from(e: CryptoError) -> Self {
        MetaError::Envelope(e.into())
    }
}

impl From<image::ImageError> for MetaError {
    fn from(e: image::ImageError) -> Self {
        MetaError::Image(e)
    }
}

impl From<serde_json::Error> for MetaError {
    fn from(e: serde_json::Error) -> Self {
        MetaError::Json(e)
    }
}

impl From<io::Error> for MetaError {
    fn from(e: io::Error) -> Self {
        MetaError::Io(e)
    }
}
