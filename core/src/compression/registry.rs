//! compression/registry.rs
//! Codec registry and factory functions.

use crate::constants::{codec_ids, DEFAULT_LEVEL_ZLIB, MAX_DECOMPRESSED_LEN};
use crate::compression::types::{Compressor, Decompressor, CompressionError};
use crate::compression::codecs::zlib;
use crate::headers::EnvelopeVersion;

pub struct CodecInfo {
    pub name: &'static str,
    pub default_level: u32,
}

/// Codec bound to an envelope layout. The version byte is the only
/// codec selector on the wire.
pub fn codec_for_version(version: EnvelopeVersion) -> u16 {
    match version {
        EnvelopeVersion::V1 => codec_ids::ZLIB,
    }
}

pub fn resolve(codec_id: u16) -> Result<CodecInfo, CompressionError> {
    match codec_id {
        codec_ids::ZLIB => Ok(CodecInfo { name: "zlib", default_level: DEFAULT_LEVEL_ZLIB }),
        other => Err(CompressionError::UnsupportedCodec { codec_id: other }),
    }
}

pub fn create_compressor(codec_id: u16, level: Option<u32>)
    -> Result<Box<dyn Compressor>, CompressionError>
{
    let info = resolve(codec_id)?;
    match codec_id {
        codec_ids::ZLIB => Ok(Box::new(zlib::ZlibCompressor::new(level.unwrap_or(info.default_level)))),
        other => Err(CompressionError::UnsupportedCodec { codec_id: other }),
    }
}

pub fn create_decompressor(codec_id: u16, limit: Option<usize>)
    -> Result<Box<dyn Decompressor>, CompressionError>
{
    match codec_id {
        codec_ids::ZLIB => Ok(Box::new(zlib::ZlibDecompressor::new(limit.unwrap_or(MAX_DECOMPRESSED_LEN)))),
        other => Err(CompressionError::UnsupportedCodec { codec_id: other }),
    }
}
