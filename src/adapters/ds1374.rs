//! DS1374 RTC driver — the control-register subset the wake alarm needs.
//!
//! Generic over [`embedded_hal::i2c::I2c`], so the same driver runs against
//! the ESP-IDF I²C master on target and a recording bus fake in tests.  The
//! DS1374's 24-bit down counter doubles as watchdog or alarm; the sequencer
//! only ever arms it as an alarm, but the encoder covers every field of
//! [`WakeAlarmConfig`].

use embedded_hal::i2c::I2c;
use log::warn;

use crate::ports::RtcWakePort;
use crate::rtc::{CounterMode, SquareWaveRate, WakeAlarmConfig, WatchdogRouting};

/// Fixed 7-bit bus address of the DS1374.
pub const DS1374_ADDR: u8 = 0x68;

/// Control register (07h).
const REG_CONTROL: u8 = 0x07;

// Control register bits.
const CTRL_EOSC: u8 = 0x80; // 1 = oscillator stopped
const CTRL_WACE: u8 = 0x40; // watchdog/alarm counter enable
const CTRL_WD_ALM: u8 = 0x20; // 1 = watchdog, 0 = alarm
const CTRL_WDSTR: u8 = 0x10; // watchdog reset steering: 1 = RST pin
const CTRL_RS2: u8 = 0x08; // square-wave rate select
const CTRL_RS1: u8 = 0x04;
const CTRL_SQWE: u8 = 0x02; // square-wave output enable
const CTRL_AIE: u8 = 0x01; // alarm interrupt enable

/// Map a [`WakeAlarmConfig`] onto the control register.
fn encode_control(config: &WakeAlarmConfig) -> u8 {
    let mut ctl = 0u8;
    if !config.enable_oscillator {
        ctl |= CTRL_EOSC;
    }
    if config.enable_counter {
        ctl |= CTRL_WACE;
    }
    if config.counter_mode == CounterMode::Watchdog {
        ctl |= CTRL_WD_ALM;
    }
    if config.watchdog_routing == WatchdogRouting::RstPin {
        ctl |= CTRL_WDSTR;
    }
    ctl |= match config.square_wave_rate {
        SquareWaveRate::Hz1 => 0,
        SquareWaveRate::Hz4096 => CTRL_RS1,
        SquareWaveRate::Hz8192 => CTRL_RS2,
        SquareWaveRate::Hz32768 => CTRL_RS1 | CTRL_RS2,
    };
    if config.enable_square_wave {
        ctl |= CTRL_SQWE;
    }
    if config.enable_alarm_interrupt {
        ctl |= CTRL_AIE;
    }
    ctl
}

pub struct Ds1374<I2C> {
    i2c: I2C,
    addr: u8,
}

impl<I2C: I2c> Ds1374<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            addr: DS1374_ADDR,
        }
    }

    /// Hand the bus back, e.g. to share it with other devices at teardown.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> RtcWakePort for Ds1374<I2C> {
    fn set_config(&mut self, config: &WakeAlarmConfig) -> bool {
        let ctl = encode_control(config);
        match self.i2c.write(self.addr, &[REG_CONTROL, ctl]) {
            Ok(()) => true,
            Err(_) => {
                warn!("ds1374: control register write failed");
                false
            }
        }
    }
}
