//! channel/config.rs
//! Deployment-wide conventions for the metadata channel.
//!
//! Lifecycle: built once (from JSON or code), validated, then moved into
//! `MetaChannel::new`. Nothing here is global or mutable after construction.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SKIP_OFFSET, DEFAULT_TTL_SECS};
use crate::crypto::EnvelopeKey;
use crate::types::MetaError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Write audit records to `path` as JSON lines.
    pub enabled: bool,
    pub path: Option<PathBuf>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Leading pixels left untouched by the pixel codec.
    pub skip_offset: usize,

    /// Lifetime of sealed tokens, seconds.
    pub ttl_secs: u64,

    /// Seal payloads before embedding (and open after extraction).
    pub seal: bool,

    /// HMAC key, hex encoded. Required.
    pub key_hex: String,

    pub audit: AuditConfig,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            skip_offset: DEFAULT_SKIP_OFFSET,
            ttl_secs: DEFAULT_TTL_SECS,
            seal: true,
            key_hex: String::new(),
            audit: AuditConfig::default(),
        }
    }
}

// key_hex is secret
impl fmt::Debug for ChannelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelConfig")
            .field("skip_offset", &self.skip_offset)
            .field("ttl_secs", &self.ttl_secs)
            .field("seal", &self.seal)
            .field("key_hex", &"<redacted>")
            .field("audit", &self.audit)
            .finish()
    }
}

impl ChannelConfig {
    pub fn with_key_hex(key_hex: impl Into<String>) -> Self {
        Self { key_hex: key_hex.into(), ..Default::default() }
    }

    pub fn from_json_str(json: &str) -> Result<Self, MetaError> {
        let config: ChannelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, MetaError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), MetaError> {
        if self.key_hex.trim().is_empty() {
            return Err(MetaError::Config("key_hex is required".into()));
        }
        self.envelope_key()?;

        if self.ttl_secs == 0 || self.ttl_secs > u32::MAX as u64 {
            return Err(MetaError::Config(format!(
                "ttl_secs must be in 1..={}, got {}",
                u32::MAX,
                self.ttl_secs
            )));
        }

        if self.audit.enabled && self.audit.path.is_none() {
            return Err(MetaError::Config("audit.enabled requires audit.path".into()));
        }
        Ok(())
    }

    pub fn envelope_key(&self) -> Result<EnvelopeKey, MetaError> {
        EnvelopeKey::from_hex(&self.key_hex)
            .map_err(|e| MetaError::Config(format!("key_hex: {}", e)))
    }
}
