//! Concrete port implementations.
//!
//! `gpio` drives the real board and only exists for the ESP-IDF target;
//! `sim` is the in-memory stand-in that lets the whole sequencer run on the
//! host.  `ds1374` and `time` are dual-target.

pub mod ds1374;
#[cfg(target_os = "espidf")]
pub mod gpio;
pub mod sim;
pub mod time;
