//! Port traits — the boundary between the sequencing core and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ PowerSequencer (domain)
//! ```
//!
//! Driven adapters (real GPIO, in-memory simulation, RTC driver, clocks)
//! implement these traits.  The [`PowerSequencer`](crate::sequencer::PowerSequencer)
//! consumes them via generics, so the sequencing logic has exactly one code
//! path and never knows whether it is talking to hardware or to a fake.

use crate::error::PinError;
use crate::pins::{Direction, Line};
use crate::rtc::WakeAlarmConfig;

// ───────────────────────────────────────────────────────────────
// Pin access port (driven adapter: domain ↔ GPIO)
// ───────────────────────────────────────────────────────────────

/// Primitive digital-I/O capability over the board's logical lines.
///
/// Contract: `read_level` on a [`Direction::Output`] line returns the last
/// driven level.  Real GPIO adapters keep a shadow of the output latch to
/// honor this; the simulated adapter gets it for free.
pub trait PinPort {
    /// Configure a logical line's direction.  Called once per line at init.
    fn configure(&mut self, line: Line, direction: Direction) -> Result<(), PinError>;

    /// Drive an output line to the given level.
    fn write_level(&mut self, line: Line, high: bool);

    /// Sample a line's current level.
    fn read_level(&self, line: Line) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: domain ↔ time)
// ───────────────────────────────────────────────────────────────

/// Monotonic time plus blocking delay.
///
/// The real implementation sleeps; the simulated one advances a virtual
/// counter instantly, which is what makes the fail-safe poll loop in
/// `wait_for_shutdown` timing-insensitive on the host.
pub trait Clock {
    /// Milliseconds since boot (monotonic).
    fn now_ms(&self) -> u64;

    /// Block the calling thread for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

// ───────────────────────────────────────────────────────────────
// RTC wake-alarm port (driven adapter: domain → RTC)
// ───────────────────────────────────────────────────────────────

/// The wake-alarm RTC, reduced to the one operation the core needs.
///
/// Returns `true` when the configuration was accepted and armed.  No retry
/// policy lives here — a `false` is surfaced to the caller as-is.
pub trait RtcWakePort {
    fn set_config(&mut self, config: &WakeAlarmConfig) -> bool;
}
