//! Companion power-board firmware — main entry point.
//!
//! Wires the real adapters (GPIO pins, monotonic clock, DS1374 over I²C)
//! into the sequencing core and runs a minimal supervision loop: poll the
//! handshake once a second, and start an orderly shutdown when the power
//! button is pressed.  Anything fancier — scheduled wake cycles, button
//! debouncing, supply-voltage monitoring — belongs to the surrounding
//! application, not this loop.

#![deny(unused_must_use)]

use anyhow::Result;
use log::{info, warn};

use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::FromValueType;

use powerseq::adapters::ds1374::Ds1374;
use powerseq::adapters::gpio::GpioPins;
use powerseq::adapters::time::MonotonicClock;
use powerseq::config::SequencerConfig;
use powerseq::pins::Line;
use powerseq::ports::{Clock, PinPort};
use powerseq::sequencer::PowerSequencer;

fn main() -> Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("powerseq v{}", env!("CARGO_PKG_VERSION"));

    let peripherals = Peripherals::take()?;

    // I²C bus to the DS1374 wake-alarm RTC (pins::I2C_SDA_GPIO / I2C_SCL_GPIO).
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio14,
        peripherals.pins.gpio15,
        &I2cConfig::new().baudrate(100.kHz().into()),
    )?;
    let mut rtc = Ds1374::new(i2c);

    let mut pins = GpioPins::new();
    let mut clock = MonotonicClock::new();
    let mut sequencer = PowerSequencer::new(SequencerConfig::default());
    sequencer
        .init(&mut pins)
        .map_err(|e| anyhow::anyhow!("pin init failed: {e}"))?;

    if !sequencer.arm_wake_alarm(&mut rtc) {
        warn!("continuing without a wake alarm");
    }

    sequencer.set_unit_power(&mut pins, true);
    sequencer.set_expansion_power(&mut pins, true);

    loop {
        // Power button is active low.
        if !pins.read_level(Line::PowerButton) {
            info!("power button pressed, starting shutdown handshake");
            sequencer.wait_for_shutdown(&mut pins, &mut clock, true);
            sequencer.set_expansion_power(&mut pins, false);
        }

        sequencer.check_status(&mut pins, true);
        clock.delay_ms(1_000);
    }
}
