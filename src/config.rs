//! Sequencer timing parameters.
//!
//! Defaults match the board's proven values: 30 s fail-safe ceiling, 50 ms
//! handshake poll, 5 s guard interval before the rail is actually cut.

use serde::{Deserialize, Serialize};

/// Timing knobs for the shutdown handshake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequencerConfig {
    /// Maximum time to wait for the compute module to confirm shutdown
    /// before the rail is cut anyway (milliseconds).
    pub failsafe_timeout_ms: u32,
    /// How often the running signal is sampled while waiting (milliseconds).
    pub poll_interval_ms: u32,
    /// Extra settling time after the handshake completes or times out, so
    /// in-flight shutdown work (filesystem flush) can finish (milliseconds).
    pub guard_interval_ms: u32,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            failsafe_timeout_ms: 30_000,
            poll_interval_ms: 50,
            guard_interval_ms: 5_000,
        }
    }
}
