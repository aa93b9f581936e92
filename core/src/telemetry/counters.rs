// ### `src/telemetry/counters.rs`

//! telemetry/counters.rs
//! Mutable counters collected by the metadata channel.
//!
//! Converted into an immutable TelemetrySnapshot on request.
use serde::{Serialize, Deserialize};
use std::ops::AddAssign;

use crate::constants::STEGO_HEADER_BITS;

#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub tokens_sealed: u64,
    pub tokens_opened: u64,
    pub payloads_embedded: u64,
    pub payloads_extracted: u64,
    pub truncated_extractions: u64,
    pub failures: u64,
    pub bytes_sealed: u64,
    pub bytes_token: u64,
    pub bits_embedded: u64,
}

impl TelemetryCounters {
    /// Record one sealed token.
    pub fn add_seal(&mut self, payload_len: usize, token_len: usize) {
        self.tokens_sealed += 1;
        self.bytes_sealed += payload_len as u64;
        self.bytes_token += token_len as u64;
    }

    /// Record one opened token.
    pub fn add_open(&mut self) {
        self.tokens_opened += 1;
    }

    /// Record one embedded payload (header bits included).
    pub fn add_embed(&mut self, payload_len: usize) {
        self.payloads_embedded += 1;
        self.bits_embedded += (STEGO_HEADER_BITS + payload_len * 8) as u64;
    }

    /// Record one extraction.
    pub fn add_extract(&mut self, truncated: bool) {
        self.payloads_extracted += 1;
        if truncated {
            self.truncated_extractions += 1;
        }
    }

    pub fn add_failure(&mut self) {
        self.failures += 1;
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.tokens_sealed += other.tokens_sealed;
        self.tokens_opened += other.tokens_opened;
        self.payloads_embedded += other.payloads_embedded;
        self.payloads_extracted += other.payloads_extracted;
        self.truncated_extractions += other.truncated_extractions;
        self.failures += other.failures;
        self.bytes_sealed += other.bytes_sealed;
        self.bytes_token += other.bytes_token;
        self.bits_embedded += other.bits_embedded;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
