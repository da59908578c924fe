//! Mock hardware for integration tests.
//!
//! [`BareLines`] is a raw line table with no unit model behind it — unlike
//! the library's `SimPins` it never reacts to a shutdown request, which is
//! exactly what the adversarial tests (stubborn unit, boot-time noise)
//! need.  It records every write so tests can assert on the full command
//! history.

use powerseq::error::PinError;
use powerseq::pins::{Direction, Line};
use powerseq::ports::{PinPort, RtcWakePort};
use powerseq::rtc::WakeAlarmConfig;

// ── Bare line table ───────────────────────────────────────────

pub struct BareLines {
    levels: [bool; Line::COUNT],
    pub writes: Vec<(Line, bool)>,
}

#[allow(dead_code)]
impl BareLines {
    pub fn new() -> Self {
        Self {
            levels: [false; Line::COUNT],
            writes: Vec::new(),
        }
    }

    /// Force a line level from the harness side (e.g. the unit raising or
    /// dropping its running signal).
    pub fn set_line(&mut self, line: Line, high: bool) {
        self.levels[line.index()] = high;
    }

    pub fn level(&self, line: Line) -> bool {
        self.levels[line.index()]
    }

    /// Number of writes the sequencer issued to the given line.
    pub fn writes_to(&self, line: Line) -> usize {
        self.writes.iter().filter(|(l, _)| *l == line).count()
    }
}

impl Default for BareLines {
    fn default() -> Self {
        Self::new()
    }
}

impl PinPort for BareLines {
    fn configure(&mut self, _line: Line, _direction: Direction) -> Result<(), PinError> {
        Ok(())
    }

    fn write_level(&mut self, line: Line, high: bool) {
        self.levels[line.index()] = high;
        self.writes.push((line, high));
    }

    fn read_level(&self, line: Line) -> bool {
        self.levels[line.index()]
    }
}

// ── Recording RTC ─────────────────────────────────────────────

pub struct MockRtc {
    /// What `set_config` answers.
    pub verdict: bool,
    /// Every configuration the sequencer handed over.
    pub configs: Vec<WakeAlarmConfig>,
}

#[allow(dead_code)]
impl MockRtc {
    pub fn accepting() -> Self {
        Self {
            verdict: true,
            configs: Vec::new(),
        }
    }

    pub fn declining() -> Self {
        Self {
            verdict: false,
            configs: Vec::new(),
        }
    }
}

impl RtcWakePort for MockRtc {
    fn set_config(&mut self, config: &WakeAlarmConfig) -> bool {
        self.configs.push(*config);
        self.verdict
    }
}
