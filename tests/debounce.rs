#![allow(missing_docs)]
//! Host-level tests for the press latch: debounce window, depth-1 pending
//! flag, and the consume/re-arm cycle.

use digit_panel::button::{DEBOUNCE_WINDOW, PressLatch};
use embassy_time::{Duration, Instant};

/// An instant comfortably past the power-on debounce window.
fn epoch() -> Instant {
    Instant::from_millis(10_000)
}

fn at(offset_ms: u64) -> Instant {
    epoch() + Duration::from_millis(offset_ms)
}

#[test]
fn pending_starts_clear() {
    let latch = PressLatch::new();
    assert!(!latch.take_event());
}

#[test]
fn edge_within_window_is_dropped() {
    let latch = PressLatch::new();
    assert!(latch.record_edge(at(0)));
    assert!(!latch.record_edge(at(150)));
    // The first press is still the one delivered.
    assert!(latch.take_event());
    assert!(!latch.take_event());
}

#[test]
fn edge_after_window_is_accepted_once_consumed() {
    let latch = PressLatch::new();
    assert!(latch.record_edge(at(0)));
    assert!(latch.take_event());
    assert!(latch.record_edge(at(250)));
    assert!(latch.take_event());
}

#[test]
fn window_boundary_is_exclusive() {
    let latch = PressLatch::new();
    assert!(latch.record_edge(at(0)));
    assert!(latch.take_event());
    assert!(!latch.record_edge(at(DEBOUNCE_WINDOW.as_millis())));
    assert!(latch.record_edge(at(DEBOUNCE_WINDOW.as_millis() + 1)));
}

#[test]
fn unconsumed_press_drops_later_edges() {
    let latch = PressLatch::new();
    assert!(latch.record_edge(at(0)));
    // Past the window but still pending: nothing queues beyond depth 1.
    assert!(!latch.record_edge(at(500)));
    assert!(latch.take_event());
    // The dropped edge did not move the accepted timestamp, so the next
    // edge is measured against t=0 and clears the window.
    assert!(latch.record_edge(at(700)));
}

#[test]
fn edges_in_the_first_window_after_boot_are_dropped() {
    let latch = PressLatch::new();
    assert!(!latch.record_edge(Instant::from_millis(100)));
    assert!(latch.record_edge(Instant::from_millis(201)));
}
