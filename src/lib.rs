//! Power-sequencing firmware library for the companion power board.
//!
//! The board supervises the supply rails of an attached compute module and
//! mediates the cooperative shutdown handshake with it.  The core lives in
//! [`sequencer`]; everything hardware-shaped sits behind the port traits in
//! [`ports`], with real and simulated implementations under [`adapters`].
//! ESP-IDF-specific code is confined to cfg-gated adapters, so the full
//! logic is exercised by host-side tests.

#![deny(unused_must_use)]

pub mod adapters;
pub mod config;
pub mod error;
pub mod pins;
pub mod ports;
pub mod rtc;
pub mod sequencer;
