//! Real GPIO pin backend over raw ESP-IDF sys calls.
//!
//! Output lines keep a shadow of the driven latch so `read_level` on an
//! output honors the [`PinPort`] contract without touching the pad's input
//! buffer.  Inputs are configured without internal pulls — the board carries
//! external pull resistors on the handshake and button lines.

use esp_idf_svc::sys::*;
use log::info;

use crate::error::PinError;
use crate::pins::{Direction, Line};
use crate::ports::PinPort;

pub struct GpioPins {
    driven: [bool; Line::COUNT],
}

impl GpioPins {
    pub fn new() -> Self {
        Self {
            driven: [false; Line::COUNT],
        }
    }
}

impl Default for GpioPins {
    fn default() -> Self {
        Self::new()
    }
}

impl PinPort for GpioPins {
    fn configure(&mut self, line: Line, direction: Direction) -> Result<(), PinError> {
        let mode = match direction {
            Direction::Input => gpio_mode_t_GPIO_MODE_INPUT,
            Direction::Output => gpio_mode_t_GPIO_MODE_OUTPUT,
        };
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << line.gpio_num(),
            mode,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        // SAFETY: gpio_config validates the descriptor; called from the
        // single init path before the control loop starts.
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK {
            return Err(PinError::ConfigFailed(ret));
        }
        if direction == Direction::Output {
            // SAFETY: pin was just configured as an output.
            unsafe { gpio_set_level(line.gpio_num(), 0) };
            self.driven[line.index()] = false;
        }
        info!("gpio: {} configured as {:?}", line.name(), direction);
        Ok(())
    }

    fn write_level(&mut self, line: Line, high: bool) {
        // SAFETY: gpio_set_level writes to an already-configured output
        // pin; single-threaded main-loop access only.
        unsafe { gpio_set_level(line.gpio_num(), u32::from(high)) };
        self.driven[line.index()] = high;
    }

    fn read_level(&self, line: Line) -> bool {
        match line.direction() {
            Direction::Output => self.driven[line.index()],
            // SAFETY: gpio_get_level is a read-only register access on an
            // already-configured input pin.
            Direction::Input => (unsafe { gpio_get_level(line.gpio_num()) }) != 0,
        }
    }
}
