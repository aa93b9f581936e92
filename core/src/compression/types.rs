//! compression/types.rs
//! Codec traits and compression errors.
use std::fmt;

#[derive(Debug)]
pub enum CompressionError {
    UnsupportedCodec { codec_id: u16 },
    CodecProcessFailed { codec: String, msg: String },
    OutputTooLarge { max: usize },
}

impl From<std::io::Error> for CompressionError {
    fn from(e: std::io::Error) -> Self {
        CompressionError::CodecProcessFailed { codec: "io".into(), msg: e.to_string() }
    }
}

impl fmt::Display for CompressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CompressionError::*;
        match self {
            UnsupportedCodec { codec_id } =>
                write!(f, "unsupported compression codec: 0x{:04x}", codec_id),
            CodecProcessFailed { codec, msg } =>
                write!(f, "codec {} process failed: {}", codec, msg),
            OutputTooLarge { max } =>
                write!(f, "decompressed output exceeds {} bytes", max),
        }
    }
}

impl std::error::Error for CompressionError {}

// Send + Sync so one codec instance can serve concurrent callers.
pub trait Compressor: Send + Sync {
    /// Compress `input` as one self-contained stream appended to `out`.
    fn compress(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
}

pub trait Decompressor: Send + Sync {
    /// Inflate one self-contained stream appended to `out`.
    fn decompress(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
}
