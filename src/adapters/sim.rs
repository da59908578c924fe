//! In-memory simulation adapters.
//!
//! [`SimPins`] replaces the board's GPIO with a level table plus a tiny
//! behavioral model of a cooperative compute module; [`SimClock`] replaces
//! wall-clock time with a virtual counter.  Install both and the entire
//! sequencer — including the fail-safe poll loop — runs deterministically
//! on the host with no hardware and no real delays.

use crate::error::PinError;
use crate::pins::{Direction, Line};
use crate::ports::{Clock, PinPort};

/// Simulated pin backend.
///
/// The modeled unit is perfectly cooperative:
/// - the running signal mirrors the unit's power rail (a powered unit is
///   treated as running — the rail's commanded level is the proxy), and
/// - driving the shutdown-request line high completes the whole shutdown
///   immediately: both rails drop and the running signal deasserts.
///
/// Adversarial behavior (a unit that ignores the request, boot-time noise)
/// is exercised in tests with bare line fakes instead.
pub struct SimPins {
    levels: [bool; Line::COUNT],
    configured: [Option<Direction>; Line::COUNT],
}

impl SimPins {
    pub fn new() -> Self {
        Self {
            levels: [false; Line::COUNT],
            configured: [None; Line::COUNT],
        }
    }

    /// Test hook: force a raw line level, bypassing the unit model.  Used
    /// by harnesses to emulate external events such as a power drop.
    pub fn force_level(&mut self, line: Line, high: bool) {
        self.levels[line.index()] = high;
    }

    /// Raw level of a line, without the running-signal aliasing applied by
    /// [`PinPort::read_level`].
    pub fn level(&self, line: Line) -> bool {
        self.levels[line.index()]
    }

    pub fn is_configured(&self, line: Line) -> bool {
        self.configured[line.index()].is_some()
    }
}

impl Default for SimPins {
    fn default() -> Self {
        Self::new()
    }
}

impl PinPort for SimPins {
    fn configure(&mut self, line: Line, direction: Direction) -> Result<(), PinError> {
        self.configured[line.index()] = Some(direction);
        Ok(())
    }

    fn write_level(&mut self, line: Line, high: bool) {
        self.levels[line.index()] = high;
        match line {
            // Simulated immediate shutdown: the modeled unit honors the
            // request before the write even returns.
            Line::ShutdownRequest if high => {
                self.levels[Line::UnitPowerEnable.index()] = false;
                self.levels[Line::ExpansionPowerEnable.index()] = false;
            }
            // A fresh power-on clears any previous shutdown request.
            Line::UnitPowerEnable if high => {
                self.levels[Line::ShutdownRequest.index()] = false;
            }
            _ => {}
        }
    }

    fn read_level(&self, line: Line) -> bool {
        match line {
            // Running-signal proxy: the unit is "running" while its rail
            // is commanded on.
            Line::RunningSignal => self.levels[Line::UnitPowerEnable.index()],
            other => self.levels[other.index()],
        }
    }
}

/// Virtual monotonic clock: `delay_ms` advances time instantly.
pub struct SimClock {
    now_ms: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self { now_ms: 0 }
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SimClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn delay_ms(&mut self, ms: u32) {
        self.now_ms += u64::from(ms);
    }
}
