//! Error types for the power-sequencing firmware.
//!
//! The sequencing operations themselves are deliberately infallible — a
//! handshake timeout is the designed recovery path, not an error — so the
//! only fallible surfaces are pin configuration at init and the RTC bus.
//! All variants are `Copy` so they pass through the init path without
//! allocation.

use core::fmt;

/// Errors from configuring a logical line on the pin backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    /// The underlying GPIO driver rejected the configuration (esp_err_t).
    ConfigFailed(i32),
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
        }
    }
}

impl core::error::Error for PinError {}
