//! Logical line map for the companion power board.
//!
//! Single source of truth — every adapter references this module rather than
//! hard-coding GPIO numbers.  Change a pin here and it propagates everywhere.
//!
//! Numbers match the board schematic: the supervising MCU sits between the
//! supply rails and the attached compute module and owns the shutdown
//! handshake lines.

/// Direction a logical line is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

/// The seven logical lines the sequencer knows about.
///
/// `SupplyVoltage`, `PowerButton` and `AlarmPulse` are configured at init so
/// the board comes up in a defined state, but the sequencing core itself
/// never drives them — voltage monitoring and button/interrupt handling live
/// in the surrounding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// Output, active high: energizes the compute-module rail.
    UnitPowerEnable,
    /// Output, active high: energizes the expansion-header rail.
    ExpansionPowerEnable,
    /// Output, active high: asks the compute module to shut down.
    ShutdownRequest,
    /// Input, active high: the compute module asserts this while running.
    RunningSignal,
    /// Input: analog supply-voltage monitor (unused by the core).
    SupplyVoltage,
    /// Input, active low: user power button (unused by the core).
    PowerButton,
    /// Input, active low: RTC alarm pulse (unused by the core).
    AlarmPulse,
}

impl Line {
    pub const COUNT: usize = 7;

    /// Every line, in configuration order.
    pub const ALL: [Line; Line::COUNT] = [
        Line::UnitPowerEnable,
        Line::ExpansionPowerEnable,
        Line::ShutdownRequest,
        Line::RunningSignal,
        Line::SupplyVoltage,
        Line::PowerButton,
        Line::AlarmPulse,
    ];

    /// Stable index for adapter-side level tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// GPIO number on the supervising MCU.
    pub const fn gpio_num(self) -> i32 {
        match self {
            Line::UnitPowerEnable => 16,
            Line::ExpansionPowerEnable => 4,
            Line::ShutdownRequest => 17,
            Line::RunningSignal => 7,
            Line::SupplyVoltage => 20,
            Line::PowerButton => 3,
            Line::AlarmPulse => 2,
        }
    }

    pub const fn direction(self) -> Direction {
        match self {
            Line::UnitPowerEnable | Line::ExpansionPowerEnable | Line::ShutdownRequest => {
                Direction::Output
            }
            Line::RunningSignal | Line::SupplyVoltage | Line::PowerButton | Line::AlarmPulse => {
                Direction::Input
            }
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Line::UnitPowerEnable => "unit_power_enable",
            Line::ExpansionPowerEnable => "expansion_power_enable",
            Line::ShutdownRequest => "shutdown_request",
            Line::RunningSignal => "running_signal",
            Line::SupplyVoltage => "supply_voltage",
            Line::PowerButton => "power_button",
            Line::AlarmPulse => "alarm_pulse",
        }
    }
}

// ---------------------------------------------------------------------------
// I²C bus to the DS1374 wake-alarm RTC
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 14;
pub const I2C_SCL_GPIO: i32 = 15;
