//! envelope/open.rs
//!
//! Order of checks is fixed: shape, tag, version, expiry, inflate.
//! No field of the token is acted on before the tag verifies.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

use crate::compression::{codec_for_version, create_decompressor};
use crate::constants::{ENVELOPE_MIN_LEN, ENVELOPE_TAG_LEN};
use crate::crypto::verify_tag;
use crate::envelope::types::{EnvelopeError, OpenedEnvelope, SecureEnvelope};
use crate::headers::decode_header_be;

impl SecureEnvelope {
    /// Open a token and return its payload.
    pub fn open(&self, token: &str) -> Result<Vec<u8>, EnvelopeError> {
        self.open_detailed(token).map(|opened| opened.payload)
    }

    /// Open a token and return header and payload.
    pub fn open_detailed(&self, token: &str) -> Result<OpenedEnvelope, EnvelopeError> {
        let raw = URL_SAFE_NO_PAD
            .decode(token.as_bytes())
            .map_err(|e| EnvelopeError::MalformedToken(e.to_string()))?;
        if raw.len() < ENVELOPE_MIN_LEN {
            return Err(EnvelopeError::MalformedToken(format!(
                "token too short: {} < {}",
                raw.len(),
                ENVELOPE_MIN_LEN
            )));
        }

        let (body, tag) = raw.split_at(raw.len() - ENVELOPE_TAG_LEN);
        verify_tag(&self.key, body, tag)?;

        let (header, consumed) = decode_header_be(body)?;

        let now = self.clock.now_unix();
        if header.is_expired_at(now) {
            return Err(EnvelopeError::Expired { expiry: header.expiry, now });
        }

        // Nonce is consumed positionally by the header decoder.
        let decompressor = create_decompressor(codec_for_version(header.version), None)
            .map_err(EnvelopeError::DecompressionFailure)?;
        let mut payload = Vec::new();
        decompressor
            .decompress(&body[consumed..], &mut payload)
            .map_err(EnvelopeError::DecompressionFailure)?;

        Ok(OpenedEnvelope { header, payload })
    }
}
