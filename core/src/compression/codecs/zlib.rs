//! Zlib (deflate with zlib wrapper) via flate2.

use std::io::{Read, Write};
use flate2::{Compression, write::ZlibEncoder, read::ZlibDecoder};

use crate::compression::types::{Compressor, Decompressor, CompressionError};

pub struct ZlibCompressor {
    level: Compression,
}

impl ZlibCompressor {
    pub fn new(level: u32) -> Self {
        let level = match level {
            0..=9 => Compression::new(level),
            _ => Compression::default(),
        };
        Self { level }
    }
}

impl Compressor for ZlibCompressor {
    fn compress(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut enc = ZlibEncoder::new(Vec::with_capacity(input.len() / 2 + 16), self.level);
        enc.write_all(input)
            .map_err(|e| CompressionError::CodecProcessFailed { codec: "zlib".into(), msg: e.to_string() })?;
        let compressed = enc.finish()
            .map_err(|e| CompressionError::CodecProcessFailed { codec: "zlib".into(), msg: e.to_string() })?;

        out.extend_from_slice(&compressed);
        Ok(())
    }
}

/// Decoder with a hard cap on inflated size.
pub struct ZlibDecompressor {
    limit: usize,
}

impl ZlibDecompressor {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Decompressor for ZlibDecompressor {
    fn decompress(&self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        // Read one byte past the cap so an oversized stream is detectable.
        let mut dec = ZlibDecoder::new(input).take(self.limit as u64 + 1);
        let mut inflated = Vec::new();
        dec.read_to_end(&mut inflated)
            .map_err(|e| CompressionError::CodecProcessFailed { codec: "zlib".into(), msg: e.to_string() })?;

        if inflated.len() > self.limit {
            return Err(CompressionError::OutputTooLarge { max: self.limit });
        }

        out.extend_from_slice(&inflated);
        Ok(())
    }
}
