//! Wake-alarm configuration record for the DS1374 RTC.
//!
//! The record mirrors the DS1374 control register field-for-field; the
//! sequencer only ever requests one canonical shape of it (alarm counter
//! armed, interrupt enabled) but the driver accepts any combination.

/// What the 24-bit down counter is used as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterMode {
    /// Counter reload resets the MCU — not used by the sequencer.
    Watchdog,
    /// Counter expiry pulses the interrupt line: the wake alarm.
    Alarm,
}

/// Where the watchdog reset pulse is routed when `CounterMode::Watchdog`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchdogRouting {
    IntPin,
    RstPin,
}

/// Square-wave output rate select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareWaveRate {
    Hz1,
    Hz4096,
    Hz8192,
    Hz32768,
}

/// One-shot configuration handed to the RTC wake service.
///
/// Constructed fresh per call; it has no lifecycle beyond the single
/// [`RtcWakePort::set_config`](crate::ports::RtcWakePort::set_config) it is
/// built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WakeAlarmConfig {
    pub enable_oscillator: bool,
    pub enable_counter: bool,
    pub counter_mode: CounterMode,
    pub enable_square_wave: bool,
    pub watchdog_routing: WatchdogRouting,
    pub square_wave_rate: SquareWaveRate,
    pub enable_alarm_interrupt: bool,
}

impl WakeAlarmConfig {
    /// The canonical wake-alarm configuration: oscillator running, counter
    /// armed as an alarm (not watchdog), square wave off, alarm interrupt
    /// enabled so expiry pulses the MCU's alarm line.
    pub fn wake_alarm() -> Self {
        Self {
            enable_oscillator: true,
            enable_counter: true,
            counter_mode: CounterMode::Alarm,
            enable_square_wave: false,
            watchdog_routing: WatchdogRouting::IntPin,
            square_wave_rate: SquareWaveRate::Hz1,
            enable_alarm_interrupt: true,
        }
    }
}
