//! The power-sequencing core.
//!
//! Owns the commanded state of the two supply rails and the shutdown
//! handshake with the attached compute module:
//!
//! ```text
//!  RUNNING ──[request_shutdown / wait_for_shutdown]──▶ SHUTDOWN REQUESTED
//!     ▲                                                      │
//!     │                                     [running deasserts, or the
//!     │                                      fail-safe timeout expires]
//!     │                                                      ▼
//!     └──────────[set_unit_power(true)]──────────────────── OFF
//! ```
//!
//! The sequencer never branches on a simulation flag.  It talks to the
//! board exclusively through the [`PinPort`] and [`Clock`] ports; whichever
//! adapter pair is installed at construction decides whether real GPIO is
//! driven or an in-memory model reacts.  Both paths see identical flag
//! bookkeeping.

use log::{info, warn};

use crate::config::SequencerConfig;
use crate::error::PinError;
use crate::pins::Line;
use crate::ports::{Clock, PinPort, RtcWakePort};
use crate::rtc::WakeAlarmConfig;

/// Single-owner, single-threaded power sequencer.
///
/// Created once at boot and handed the board's pin and clock adapters on
/// each call, so tests can instantiate independent sequencers over
/// independent fakes.
pub struct PowerSequencer {
    config: SequencerConfig,
    /// Last commanded state of the compute-module rail.
    unit_powered: bool,
    /// Last commanded state of the expansion rail.
    expansion_powered: bool,
    /// Latched once the running signal has been seen high since the unit
    /// was last powered.  Guards the forced power-cut in [`check_status`]:
    /// a unit that never confirmed running is assumed to still be booting.
    unit_seen_running: bool,
}

impl PowerSequencer {
    pub fn new(config: SequencerConfig) -> Self {
        Self {
            config,
            unit_powered: false,
            expansion_powered: false,
            unit_seen_running: false,
        }
    }

    /// Configure every logical line and force both rails off.
    ///
    /// The compute module and the expansion header start de-energized
    /// regardless of which pin backend is installed; the shutdown-request
    /// line starts deasserted.
    pub fn init(&mut self, pins: &mut impl PinPort) -> Result<(), PinError> {
        for line in Line::ALL {
            pins.configure(line, line.direction())?;
        }

        self.set_unit_power(pins, false);
        self.set_expansion_power(pins, false);
        pins.write_level(Line::ShutdownRequest, false);
        self.unit_seen_running = false;

        info!("sequencer: lines configured, both rails off");
        Ok(())
    }

    // ── Rail control ──────────────────────────────────────────

    /// Switch the compute-module rail.  Cannot fail; the flag always
    /// reflects the last commanded value.
    pub fn set_unit_power(&mut self, pins: &mut impl PinPort, enable: bool) {
        pins.write_level(Line::UnitPowerEnable, enable);
        self.unit_powered = enable;
        info!("unit rail {}", if enable { "on" } else { "off" });
    }

    /// Switch the expansion-header rail.  Same contract as
    /// [`set_unit_power`](Self::set_unit_power); the two rails are
    /// independent and carry no policy of their own.
    pub fn set_expansion_power(&mut self, pins: &mut impl PinPort, enable: bool) {
        pins.write_level(Line::ExpansionPowerEnable, enable);
        self.expansion_powered = enable;
        info!("expansion rail {}", if enable { "on" } else { "off" });
    }

    // ── Shutdown handshake ────────────────────────────────────

    /// Assert the shutdown-request line.  Does not wait and does not cut
    /// power — pair with [`check_status`](Self::check_status) or use
    /// [`wait_for_shutdown`](Self::wait_for_shutdown) instead.
    pub fn request_shutdown(&mut self, pins: &mut impl PinPort) {
        pins.write_level(Line::ShutdownRequest, true);
        // The installed backend may complete the shutdown on its own (the
        // simulated unit powers down the moment it sees the request), so
        // re-sync the commanded flags from the rail lines.
        self.sync_rail_flags(pins);
        info!("shutdown requested (unit_powered={})", self.unit_powered);
    }

    /// Sample the running signal.
    ///
    /// Returns `true` (and latches `unit_seen_running`) while the compute
    /// module asserts its running line.  Returns `false` when it does not;
    /// if `force_shutdown_if_not_running` is set AND the unit had
    /// previously been seen running, the rail is cut and the latch cleared
    /// — the unit went quiet without an observed shutdown command.  A unit
    /// never seen running is treated as still booting and keeps its power:
    /// a single low reading during boot must not kill it.
    pub fn check_status(
        &mut self,
        pins: &mut impl PinPort,
        force_shutdown_if_not_running: bool,
    ) -> bool {
        if pins.read_level(Line::RunningSignal) {
            self.unit_seen_running = true;
            return true;
        }

        // Not handshaking — either still booting or already halted.
        if force_shutdown_if_not_running && self.unit_seen_running {
            warn!("unit stopped handshaking, cutting power");
            self.set_unit_power(pins, false);
            self.unit_seen_running = false;
        }
        false
    }

    /// Command an orderly shutdown and block until the unit's rail is cut.
    ///
    /// Asserts the shutdown request, polls the running signal every
    /// `poll_interval_ms` until it deasserts or `failsafe_timeout_ms`
    /// elapses, waits the guard interval so in-flight shutdown work can
    /// finish, then de-energizes the rail unconditionally.  The fail-safe
    /// ceiling is the recovery path, not an error: the sequencer always
    /// regains control of the rail, cooperative unit or not.  Worst-case
    /// blocking time is `failsafe_timeout_ms + guard_interval_ms`.
    ///
    /// `force_shutdown` is accepted for interface compatibility with
    /// [`check_status`](Self::check_status); the final power cut here is
    /// unconditional either way.
    pub fn wait_for_shutdown(
        &mut self,
        pins: &mut impl PinPort,
        clock: &mut impl Clock,
        force_shutdown: bool,
    ) {
        let _ = force_shutdown;

        pins.write_level(Line::ShutdownRequest, true);
        self.sync_rail_flags(pins);

        let start = clock.now_ms();
        while pins.read_level(Line::RunningSignal) {
            let elapsed = clock.now_ms().saturating_sub(start);
            if elapsed >= u64::from(self.config.failsafe_timeout_ms) {
                warn!(
                    "fail-safe timeout after {} ms, unit still asserting running",
                    elapsed
                );
                break;
            }
            clock.delay_ms(self.config.poll_interval_ms);
        }

        // Guard interval: let the unit finish flushing before the cut.
        clock.delay_ms(self.config.guard_interval_ms);
        self.set_unit_power(pins, false);
        info!("shutdown sequence complete, unit rail de-energized");
    }

    // ── Wake alarm ────────────────────────────────────────────

    /// Build the canonical wake-alarm configuration and hand it to the RTC.
    ///
    /// Returns exactly the RTC's verdict; no retry and no sequencer state
    /// change.  Recovery policy on `false` belongs to the caller.
    pub fn arm_wake_alarm(&self, rtc: &mut impl RtcWakePort) -> bool {
        let armed = rtc.set_config(&WakeAlarmConfig::wake_alarm());
        if armed {
            info!("wake alarm armed");
        } else {
            warn!("RTC declined wake-alarm configuration");
        }
        armed
    }

    // ── State queries ─────────────────────────────────────────

    pub fn unit_powered(&self) -> bool {
        self.unit_powered
    }

    pub fn expansion_powered(&self) -> bool {
        self.expansion_powered
    }

    pub fn unit_seen_running(&self) -> bool {
        self.unit_seen_running
    }

    fn sync_rail_flags(&mut self, pins: &mut impl PinPort) {
        self.unit_powered = pins.read_level(Line::UnitPowerEnable);
        self.expansion_powered = pins.read_level(Line::ExpansionPowerEnable);
    }
}
