// ## src/telemetry/snapshot.rs

use std::time::Duration;
use serde::{Serialize, Deserialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{TelemetryTimer, StageTimes};

/// Immutable telemetry snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub counters: TelemetryCounters,
    /// Token text bytes per sealed payload byte.
    pub token_expansion: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let token_expansion = if counters.bytes_sealed > 0 {
            counters.bytes_token as f64 / counters.bytes_sealed as f64
        } else {
            0.0
        };

        Self {
            counters: counters.clone(),
            token_expansion,
            elapsed: timer.elapsed(),
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    /// Stage times can never exceed the wall time since the timer started.
    pub fn sanity_check(&self) -> bool {
        self.total_stage_time() <= self.elapsed
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
