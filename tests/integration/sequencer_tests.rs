//! Integration tests for the power-sequencing core.
//!
//! The cooperative-unit paths run against the library's `SimPins` /
//! `SimClock` simulation adapters; the adversarial paths (unit that never
//! boots, unit that ignores the shutdown request) use the bare line table
//! from `mock_hw`.

use crate::mock_hw::BareLines;
use powerseq::adapters::sim::{SimClock, SimPins};
use powerseq::config::SequencerConfig;
use powerseq::pins::Line;
use powerseq::ports::Clock;
use powerseq::sequencer::PowerSequencer;

fn make_sim() -> (PowerSequencer, SimPins, SimClock) {
    let mut seq = PowerSequencer::new(SequencerConfig::default());
    let mut pins = SimPins::new();
    seq.init(&mut pins).unwrap();
    (seq, pins, SimClock::new())
}

// ── Construction ─────────────────────────────────────────────

#[test]
fn init_leaves_both_rails_off() {
    let (seq, pins, _clock) = make_sim();

    assert!(!seq.unit_powered());
    assert!(!seq.expansion_powered());
    assert!(!seq.unit_seen_running());
    assert!(!pins.level(Line::UnitPowerEnable));
    assert!(!pins.level(Line::ExpansionPowerEnable));
    assert!(!pins.level(Line::ShutdownRequest));
}

#[test]
fn init_configures_every_line() {
    let (_seq, pins, _clock) = make_sim();
    for line in Line::ALL {
        assert!(pins.is_configured(line), "{} not configured", line.name());
    }
}

// ── Rail control ─────────────────────────────────────────────

#[test]
fn rail_flags_track_last_command() {
    let (mut seq, mut pins, _clock) = make_sim();

    seq.set_unit_power(&mut pins, true);
    seq.set_expansion_power(&mut pins, true);
    seq.set_expansion_power(&mut pins, false);
    assert!(seq.unit_powered());
    assert!(!seq.expansion_powered());

    seq.set_unit_power(&mut pins, false);
    assert!(!seq.unit_powered());
    assert!(!pins.level(Line::UnitPowerEnable));
}

#[test]
fn rails_are_independent() {
    let (mut seq, mut pins, _clock) = make_sim();

    seq.set_expansion_power(&mut pins, true);
    assert!(!seq.unit_powered(), "expansion rail must not touch the unit");
    assert!(pins.level(Line::ExpansionPowerEnable));
    assert!(!pins.level(Line::UnitPowerEnable));
}

// ── Status polling and the observed-running latch ────────────

#[test]
fn never_booted_unit_keeps_power_across_forced_checks() {
    // Running signal low from boot: the unit is assumed to still be
    // booting, so a forced check must never cut its rail.
    let mut pins = BareLines::new();
    let mut seq = PowerSequencer::new(SequencerConfig::default());
    seq.init(&mut pins).unwrap();

    seq.set_unit_power(&mut pins, true);
    for _ in 0..20 {
        assert!(!seq.check_status(&mut pins, true));
        assert!(seq.unit_powered(), "boot-noise guard violated");
        assert!(pins.level(Line::UnitPowerEnable));
    }
}

#[test]
fn silence_after_observed_running_cuts_power_and_clears_latch() {
    let mut pins = BareLines::new();
    let mut seq = PowerSequencer::new(SequencerConfig::default());
    seq.init(&mut pins).unwrap();
    seq.set_unit_power(&mut pins, true);

    pins.set_line(Line::RunningSignal, true);
    assert!(seq.check_status(&mut pins, true));
    assert!(seq.unit_seen_running());

    pins.set_line(Line::RunningSignal, false);
    assert!(!seq.check_status(&mut pins, true));
    assert!(!seq.unit_powered());
    assert!(!pins.level(Line::UnitPowerEnable));
    assert!(!seq.unit_seen_running(), "latch must reset with the cut");
}

#[test]
fn simulated_power_drop_scenario() {
    // The full script from the board's acceptance checklist, on the
    // simulation adapters: power on, confirm running, external power drop,
    // forced check cuts the rail.
    let (mut seq, mut pins, _clock) = make_sim();

    seq.set_unit_power(&mut pins, true);
    assert!(seq.check_status(&mut pins, true));
    assert!(seq.unit_seen_running());

    // Harness emulates the signal drop by forcing the rail level low.
    pins.force_level(Line::UnitPowerEnable, false);

    assert!(!seq.check_status(&mut pins, true));
    assert!(!seq.unit_powered());
}

// ── request_shutdown ─────────────────────────────────────────

#[test]
fn sim_request_shutdown_drops_both_rails_immediately() {
    let (mut seq, mut pins, _clock) = make_sim();
    seq.set_unit_power(&mut pins, true);
    seq.set_expansion_power(&mut pins, true);

    seq.request_shutdown(&mut pins);

    // No polling, no clock involved: the simulated unit shuts down the
    // moment it sees the request and both commanded flags read false.
    assert!(!seq.unit_powered());
    assert!(!seq.expansion_powered());
    assert!(pins.level(Line::ShutdownRequest));
}

// ── wait_for_shutdown ────────────────────────────────────────

#[test]
fn cooperative_shutdown_takes_only_the_guard_interval() {
    let (mut seq, mut pins, mut clock) = make_sim();
    seq.set_unit_power(&mut pins, true);

    seq.wait_for_shutdown(&mut pins, &mut clock, true);

    assert!(!seq.unit_powered());
    assert!(!pins.level(Line::UnitPowerEnable));
    // Running deasserted as soon as the request landed, so the only time
    // spent is the guard interval.
    assert_eq!(clock.now_ms(), 5_000);
}

#[test]
fn stubborn_unit_is_cut_at_the_failsafe_ceiling() {
    // A unit that never deasserts its running signal: the poll loop must
    // exit at the fail-safe timeout and the rail must still be cut.
    let mut pins = BareLines::new();
    let mut clock = SimClock::new();
    let mut seq = PowerSequencer::new(SequencerConfig::default());
    seq.init(&mut pins).unwrap();

    seq.set_unit_power(&mut pins, true);
    pins.set_line(Line::RunningSignal, true); // asserted forever

    seq.wait_for_shutdown(&mut pins, &mut clock, true);

    assert!(!seq.unit_powered());
    assert!(!pins.level(Line::UnitPowerEnable));
    assert_eq!(
        clock.now_ms(),
        35_000,
        "fail-safe timeout plus guard interval, exactly"
    );
}

#[test]
fn wait_for_shutdown_respects_custom_timing() {
    let config = SequencerConfig {
        failsafe_timeout_ms: 200,
        poll_interval_ms: 10,
        guard_interval_ms: 30,
    };
    let mut pins = BareLines::new();
    let mut clock = SimClock::new();
    let mut seq = PowerSequencer::new(config);
    seq.init(&mut pins).unwrap();

    seq.set_unit_power(&mut pins, true);
    pins.set_line(Line::RunningSignal, true);

    seq.wait_for_shutdown(&mut pins, &mut clock, false);

    assert!(!seq.unit_powered());
    assert_eq!(clock.now_ms(), 230);
}

#[test]
fn wait_for_shutdown_leaves_latch_alone() {
    // The observed-running latch only clears through the forced decision
    // in check_status, never as a side effect of the blocking shutdown.
    let mut pins = BareLines::new();
    let mut clock = SimClock::new();
    let mut seq = PowerSequencer::new(SequencerConfig::default());
    seq.init(&mut pins).unwrap();

    seq.set_unit_power(&mut pins, true);
    pins.set_line(Line::RunningSignal, true);
    seq.check_status(&mut pins, false);
    assert!(seq.unit_seen_running());

    pins.set_line(Line::RunningSignal, false);
    seq.wait_for_shutdown(&mut pins, &mut clock, true);

    assert!(!seq.unit_powered());
    assert!(seq.unit_seen_running());
}
