//! Debounced falling-edge capture for the panel's two push-buttons.
//!
//! The buttons are wired to ground with internal pull-ups, so a press is a
//! falling edge. Edges are detected in interrupt-fed context and handed to
//! the dispatch loop through a [`PressLatch`]: a single-producer
//! single-consumer flag of depth 1, not a queue. A press that arrives
//! while the previous one is still pending, or within the debounce window
//! of the last accepted press, is dropped; dropping is normal control
//! flow, not an error.

use embassy_time::{Duration, Instant};
use portable_atomic::{AtomicBool, AtomicU32, Ordering};

#[cfg(feature = "pico1")]
use embassy_executor::Spawner;
#[cfg(feature = "pico1")]
use embassy_rp::Peri;
#[cfg(feature = "pico1")]
use embassy_rp::gpio::{Input, Pin, Pull};
#[cfg(feature = "pico1")]
use static_cell::StaticCell;

#[cfg(feature = "pico1")]
use crate::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Minimum time between accepted edges on one button.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(200);

// ============================================================================
// PressLatch - the interrupt-to-main-loop handoff
// ============================================================================

/// Single-producer single-consumer press latch.
///
/// The edge watcher (producer) calls [`record_edge`](Self::record_edge);
/// the dispatch loop (consumer) calls [`take_event`](Self::take_event).
/// The producer never blocks, and the release/acquire pairing on the
/// pending flag guarantees that a consumer which observes a pending press
/// also observes the matching timestamp update.
pub struct PressLatch {
    /// Set by the watcher with `Release`, cleared by the dispatch loop
    /// with `Acquire`.
    pending: AtomicBool,
    /// Millisecond timestamp of the last accepted edge. Written only by
    /// the watcher. Wraps every ~49.7 days; the wrapping subtraction in
    /// `record_edge` absorbs that.
    last_accepted_ms: AtomicU32,
}

impl PressLatch {
    /// Creates an idle latch.
    ///
    /// The timestamp starts at zero, so edges inside the first debounce
    /// window after boot are dropped.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
            last_accepted_ms: AtomicU32::new(0),
        }
    }

    /// Records a falling edge observed at `now`.
    ///
    /// Producer side only. Returns whether the edge was accepted; rejected
    /// edges (bounce inside the debounce window, or an unconsumed pending
    /// press) leave the latch untouched.
    pub fn record_edge(&self, now: Instant) -> bool {
        let now_ms = now.as_millis() as u32;
        let last_ms = self.last_accepted_ms.load(Ordering::Relaxed);
        if u64::from(now_ms.wrapping_sub(last_ms)) <= DEBOUNCE_WINDOW.as_millis() {
            return false;
        }
        if self.pending.load(Ordering::Relaxed) {
            return false;
        }
        // Timestamp first: the Release store below publishes it.
        self.last_accepted_ms.store(now_ms, Ordering::Relaxed);
        self.pending.store(true, Ordering::Release);
        true
    }

    /// Consumes the pending press, if any.
    ///
    /// Consumer side only. Atomically reads and clears the flag, returning
    /// its prior value.
    pub fn take_event(&self) -> bool {
        self.pending.swap(false, Ordering::Acquire)
    }
}

impl Default for PressLatch {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// PanelButtons - watch tasks for the A/B pair
// ============================================================================

/// The two panel buttons, watched by background tasks.
///
/// Button A steps the digit up, button B steps it down. Each button gets
/// its own watch task and its own [`PressLatch`]; the dispatch loop polls
/// [`take_a`](Self::take_a) and [`take_b`](Self::take_b).
#[cfg(feature = "pico1")]
pub struct PanelButtons {
    latch_a: &'static PressLatch,
    latch_b: &'static PressLatch,
}

#[cfg(feature = "pico1")]
impl PanelButtons {
    /// Creates the button pair and spawns one watch task per button.
    ///
    /// The pins are configured with internal pull-ups (buttons to ground).
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskSpawn`] if a watch task cannot be spawned, for
    /// example when called a second time.
    pub fn new(
        pin_a: Peri<'static, impl Pin>,
        pin_b: Peri<'static, impl Pin>,
        spawner: Spawner,
    ) -> Result<&'static Self> {
        static LATCH_A: PressLatch = PressLatch::new();
        static LATCH_B: PressLatch = PressLatch::new();
        static BUTTONS_CELL: StaticCell<PanelButtons> = StaticCell::new();

        let input_a = Input::new(pin_a, Pull::Up);
        let input_b = Input::new(pin_b, Pull::Up);
        spawner
            .spawn(button_watch_task(input_a, &LATCH_A))
            .map_err(Error::TaskSpawn)?;
        spawner
            .spawn(button_watch_task(input_b, &LATCH_B))
            .map_err(Error::TaskSpawn)?;

        let instance = BUTTONS_CELL.init(Self {
            latch_a: &LATCH_A,
            latch_b: &LATCH_B,
        });
        Ok(instance)
    }

    /// Consumes a pending button-A press, if any.
    pub fn take_a(&self) -> bool {
        self.latch_a.take_event()
    }

    /// Consumes a pending button-B press, if any.
    pub fn take_b(&self) -> bool {
        self.latch_b.take_event()
    }
}

/// Watches one button line and records debounced falling edges.
///
/// The body stays minimal: the GPIO interrupt wakes the task, the task
/// touches only its own latch, and nothing here can block.
#[cfg(feature = "pico1")]
#[embassy_executor::task(pool_size = 2)]
async fn button_watch_task(mut input: Input<'static>, latch: &'static PressLatch) -> ! {
    loop {
        input.wait_for_falling_edge().await;
        latch.record_edge(Instant::now());
    }
}
