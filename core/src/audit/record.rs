//! audit/record.rs
//! Structured audit records.
//!
//! Records describe what the channel did, never what the payload said:
//! payload bytes are not copied into a record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Seal,
    Open,
    Embed,
    Extract,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AuditOutcome {
    Ok,
    Failed { kind: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub at: DateTime<Utc>,
    pub action: AuditAction,
    pub outcome: AuditOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_len: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AuditRecord {
    pub fn ok(action: AuditAction, payload_len: usize) -> Self {
        Self {
            at: Utc::now(),
            action,
            outcome: AuditOutcome::Ok,
            payload_len: Some(payload_len),
            detail: None,
        }
    }

    pub fn failed(action: AuditAction, kind: &str, detail: impl Into<String>) -> Self {
        Self {
            at: Utc::now(),
            action,
            outcome: AuditOutcome::Failed { kind: kind.to_string() },
            payload_len: None,
            detail: Some(detail.into()),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn is_ok(&self) -> bool {
        self.outcome == AuditOutcome::Ok
    }

    /// One JSON object, newline terminated.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}
