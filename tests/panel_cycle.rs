#![allow(missing_docs)]
//! Host-level tests for the dispatch state and blink timing.

use digit_panel::blink::{BLINK_INTERVAL, BlinkState};
use digit_panel::digit::{self, Digit};
use digit_panel::panel::{INTENSITY, PanelState};
use embassy_time::{Duration, Instant};

#[test]
fn button_a_wraps_nine_to_zero() {
    let mut state = PanelState::new();
    for _ in 0..9 {
        state.press_a();
    }
    assert_eq!(state.digit().value(), 9);
    state.press_a();
    assert_eq!(state.digit().value(), 0);
}

#[test]
fn button_b_wraps_zero_to_nine() {
    let mut state = PanelState::new();
    state.press_b();
    assert_eq!(state.digit().value(), 9);
    state.press_b();
    assert_eq!(state.digit().value(), 8);
}

#[test]
fn startup_frame_shows_digit_zero_at_half_intensity() {
    let state = PanelState::new();
    assert_eq!(state.frame(), digit::render(Digit::ZERO, INTENSITY));
}

#[test]
fn three_up_presses_show_digit_three() {
    let mut state = PanelState::new();
    state.press_a();
    state.press_a();
    let frame = state.press_a();
    assert_eq!(frame, digit::render(Digit::new(3), INTENSITY));
    assert_eq!(frame, state.frame());
}

#[test]
fn blink_toggles_once_per_interval_step() {
    let start = Instant::from_millis(0);
    let mut blink = BlinkState::new(start);
    assert!(!blink.level());

    let mut now = start;
    for expected in [true, false, true, false] {
        now += BLINK_INTERVAL;
        assert_eq!(blink.tick(now), Some(expected));
        assert_eq!(blink.level(), expected);
    }
}

#[test]
fn half_interval_steps_toggle_once_per_boundary() {
    let start = Instant::from_millis(0);
    let mut blink = BlinkState::new(start);
    let half_step = Duration::from_millis(50);

    let mut now = start;
    let mut toggles = 0;
    for _ in 0..8 {
        now += half_step;
        if blink.tick(now).is_some() {
            toggles += 1;
        }
    }
    // 400 ms in 50 ms steps crosses four 100 ms boundaries.
    assert_eq!(toggles, 4);
}

#[test]
fn short_of_the_interval_never_toggles() {
    let start = Instant::from_millis(0);
    let mut blink = BlinkState::new(start);
    assert!(blink.tick(start + Duration::from_millis(99)).is_none());
    assert!(!blink.level());
}

#[test]
fn injected_interval_is_honored() {
    let start = Instant::from_millis(0);
    let mut blink = BlinkState::with_interval(start, Duration::from_millis(250));
    assert!(blink.tick(start + Duration::from_millis(249)).is_none());
    assert_eq!(blink.tick(start + Duration::from_millis(250)), Some(true));
}
