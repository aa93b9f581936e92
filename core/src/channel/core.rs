// ## `core.rs`: stable public API

use std::borrow::Cow;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::{
    audit::{AuditAction, AuditRecord, AuditSink, JsonLinesSink, NullSink},
    channel::config::ChannelConfig,
    envelope::{EnvelopeError, SecureEnvelope},
    stego::{PixelGrid, SteganoCodec},
    telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer},
    types::MetaError,
};

#[derive(Debug, Default)]
struct TelemetryState {
    counters: TelemetryCounters,
    timer: TelemetryTimer,
}

/// Composes the pixel codec and the token envelope.
///
/// - Optionally seals before embedding and opens after extraction.
/// - Logs failures with `tracing` and reports every operation to the audit sink.
/// - Payload contents are returned to the caller untouched and never acted on.
pub struct MetaChannel {
    config: ChannelConfig,
    stego: SteganoCodec,
    envelope: SecureEnvelope,
    audit: Arc<dyn AuditSink>,
    telemetry: Mutex<TelemetryState>,
}

impl std::fmt::Debug for MetaChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetaChannel")
            .field("config", &self.config)
            .field("stego", &self.stego)
            .finish_non_exhaustive()
    }
}

impl MetaChannel {
    /// Build from validated configuration, on the wall clock.
    pub fn new(config: ChannelConfig) -> Result<Self, MetaError> {
        config.validate()?;
        let envelope = SecureEnvelope::new(config.envelope_key()?);

        let audit: Arc<dyn AuditSink> = match (&config.audit.enabled, &config.audit.path) {
            (true, Some(path)) => Arc::new(JsonLinesSink::open(path)?),
            _ => Arc::new(NullSink),
        };

        Ok(Self::from_parts(config, envelope, audit))
    }

    /// Build from explicit parts (custom clock or audit sink).
    pub fn from_parts(config: ChannelConfig, envelope: SecureEnvelope, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            stego: SteganoCodec::new(config.skip_offset),
            config,
            envelope,
            audit,
            telemetry: Mutex::new(TelemetryState::default()),
        }
    }

    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    pub fn stego(&self) -> &SteganoCodec {
        &self.stego
    }

    pub fn envelope(&self) -> &SecureEnvelope {
        &self.envelope
    }

    // -------------------------------------------------------------------
    // Tokens
    // -------------------------------------------------------------------

    /// Seal `payload` with the configured ttl.
    pub fn seal(&self, payload: &[u8]) -> Result<String, MetaError> {
        match self.timed(Stage::Seal, || self.envelope.seal(payload, self.config.ttl_secs)) {
            Ok(token) => {
                self.count(|c| c.add_seal(payload.len(), token.len()));
                debug!(payload_len = payload.len(), token_len = token.len(), "sealed token");
                self.audit(AuditRecord::ok(AuditAction::Seal, payload.len()));
                Ok(token)
            }
            Err(e) => Err(self.fail(AuditAction::Seal, e.into())),
        }
    }

    pub fn open(&self, token: &str) -> Result<Vec<u8>, MetaError> {
        match self.timed(Stage::Open, || self.envelope.open(token)) {
            Ok(payload) => {
                self.count(|c| c.add_open());
                debug!(token_len = token.len(), payload_len = payload.len(), "opened token");
                self.audit(AuditRecord::ok(AuditAction::Open, payload.len()));
                Ok(payload)
            }
            Err(e) => Err(self.fail(AuditAction::Open, e.into())),
        }
    }

    /// Seal a structured record as JSON.
    pub fn seal_json<T: Serialize>(&self, record: &T) -> Result<String, MetaError> {
        let bytes = serde_json::to_vec(record)?;
        self.seal(&bytes)
    }

    /// Open a token and parse its payload as a JSON record.
    pub fn open_json<T: DeserializeOwned>(&self, token: &str) -> Result<T, MetaError> {
        let bytes = self.open(token)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // -------------------------------------------------------------------
    // Pixel grids
    // -------------------------------------------------------------------

    /// Largest raw payload the grid can carry. With sealing enabled the
    /// token, not the payload, must fit.
    pub fn capacity_of<G: PixelGrid + ?Sized>(&self, grid: &G) -> usize {
        self.stego.capacity(grid)
    }

    /// Embed `payload` (sealed first when configured) into `grid` in place.
    pub fn embed<G: PixelGrid + ?Sized>(&self, grid: &mut G, payload: &[u8]) -> Result<(), MetaError> {
        let carried: Cow<'_, [u8]> = if self.config.seal {
            Cow::Owned(self.seal(payload)?.into_bytes())
        } else {
            Cow::Borrowed(payload)
        };

        match self.timed(Stage::Embed, || self.stego.embed(grid, &carried)) {
            Ok(()) => {
                self.count(|c| c.add_embed(carried.len()));
                debug!(
                    carried_len = carried.len(),
                    skip_offset = self.stego.skip_offset(),
                    sealed = self.config.seal,
                    "embedded payload"
                );
                self.audit(AuditRecord::ok(AuditAction::Embed, carried.len()));
                Ok(())
            }
            Err(e) => Err(self.fail(AuditAction::Embed, e.into())),
        }
    }

    /// Extract from `grid` (and open when configured).
    pub fn extract<G: PixelGrid + ?Sized>(&self, grid: &G) -> Result<Vec<u8>, MetaError> {
        let report = match self.timed(Stage::Extract, || self.stego.extract_report(grid)) {
            Ok(report) => report,
            Err(e) => return Err(self.fail(AuditAction::Extract, e.into())),
        };

        let truncated = report.is_truncated();
        self.count(|c| c.add_extract(truncated));
        let mut record = AuditRecord::ok(AuditAction::Extract, report.payload.len());
        if truncated {
            warn!(
                declared_len = report.declared_len,
                recovered_len = report.payload.len(),
                sealed = self.config.seal,
                "embedded payload truncated by grid bounds"
            );
            let detail = format!(
                "truncated: declared {}, recovered {}",
                report.declared_len,
                report.payload.len()
            );
            // A partial token can never open.
            record = if self.config.seal {
                AuditRecord::failed(AuditAction::Extract, "truncated", detail)
            } else {
                record.with_detail(detail)
            };
        } else {
            debug!(payload_len = report.payload.len(), "extracted payload");
        }
        self.audit(record);

        if !self.config.seal {
            return Ok(report.payload);
        }

        match String::from_utf8(report.payload) {
            Ok(token) => self.open(&token),
            Err(_) => Err(self.fail(
                AuditAction::Open,
                EnvelopeError::MalformedToken("embedded token is not UTF-8".into()).into(),
            )),
        }
    }

    // -------------------------------------------------------------------
    // Telemetry
    // -------------------------------------------------------------------

    pub fn telemetry(&self) -> TelemetrySnapshot {
        let state = self.telemetry.lock().unwrap_or_else(|e| e.into_inner());
        TelemetrySnapshot::from(&state.counters, &state.timer)
    }

    // -------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------

    pub(crate) fn timed<T>(&self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let t = Instant::now();
        let out = f();
        let dur = t.elapsed();
        self.telemetry
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .timer
            .add_stage_time(stage, dur);
        out
    }

    fn count(&self, f: impl FnOnce(&mut TelemetryCounters)) {
        let mut state = self.telemetry.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut state.counters);
    }

    fn audit(&self, record: AuditRecord) {
        if let Err(e) = self.audit.record(&record) {
            warn!(error = %e, action = ?record.action, "audit sink rejected record");
        }
    }

    /// Count, log and audit a failure, then hand it back.
    pub(crate) fn fail(&self, action: AuditAction, err: MetaError) -> MetaError {
        self.count(|c| c.add_failure());
        warn!(action = ?action, kind = err.kind(), error = %err, "metadata channel operation failed");
        self.audit(AuditRecord::failed(action, err.kind(), err.to_string()));
        err
    }
}
