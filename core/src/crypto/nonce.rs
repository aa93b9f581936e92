// ## 📂 File: `src/crypto/nonce.rs`

//! Random envelope nonces.
//!
//! Design:
//! - One draw from the OS CSPRNG per sealed envelope.
//! - `OsRng` holds no state, so concurrent sealers never contend.
//!
//! Security notes:
//! - The nonce is not mixed into the MAC key. It keeps identical payloads from
//!   producing identical tokens; it does not prevent replay.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::constants::ENVELOPE_NONCE_LEN;
use crate::crypto::types::CryptoError;

#[inline]
pub fn random_nonce() -> Result<[u8; ENVELOPE_NONCE_LEN], CryptoError> {
    let mut nonce = [0u8; ENVELOPE_NONCE_LEN];
    OsRng
        .try_fill_bytes(&mut nonce)
        .map_err(|e| CryptoError::Entropy(e.to_string()))?;
    Ok(nonce)
}
