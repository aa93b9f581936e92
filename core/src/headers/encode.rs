//! src/headers/encode.rs
//!
//! Header encoding.
//!
//! Design notes:
//! - Big-endian throughout; field order is the wire order.
//! - Dispatches on the header's version so new layouts get their own writer.

use crate::headers::types::{EnvelopeHeader, EnvelopeVersion};

/// Serialize a header into `out`, returning the number of bytes written.
pub fn encode_header_be(h: &EnvelopeHeader, out: &mut Vec<u8>) -> usize {
    match h.version {
        EnvelopeVersion::V1 => encode_v1(h, out),
    }
}

fn encode_v1(h: &EnvelopeHeader, out: &mut Vec<u8>) -> usize {
    let start = out.len();

    out.push(h.version as u8);                      // 0..1   version
    out.extend_from_slice(&h.expiry.to_be_bytes()); // 1..5   expiry (unix secs)
    out.extend_from_slice(&h.nonce);                // 5..13  nonce

    let written = out.len() - start;
    debug_assert_eq!(written, EnvelopeHeader::LEN_V1, "encoding wrote incorrect length");
    written
}
