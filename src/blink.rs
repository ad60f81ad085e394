//! Non-blocking blink for the status LED.

use embassy_time::{Duration, Instant};

#[cfg(feature = "pico1")]
use embassy_rp::Peri;
#[cfg(feature = "pico1")]
use embassy_rp::gpio::{Level, Output, Pin};

/// Default toggle interval for the status LED (5 Hz blink).
pub const BLINK_INTERVAL: Duration = Duration::from_millis(100);

/// Time-driven toggle state for the status indicator.
///
/// [`tick`](Self::tick) is called every dispatch iteration and never
/// blocks. `now` must come from a monotonic clock.
pub struct BlinkState {
    interval: Duration,
    last_toggle: Instant,
    level: bool,
}

impl BlinkState {
    /// Creates a blink state starting low at `start`, toggling every
    /// [`BLINK_INTERVAL`].
    #[must_use]
    pub const fn new(start: Instant) -> Self {
        Self::with_interval(start, BLINK_INTERVAL)
    }

    /// Creates a blink state with a caller-chosen interval.
    #[must_use]
    pub const fn with_interval(start: Instant, interval: Duration) -> Self {
        Self {
            interval,
            last_toggle: start,
            level: false,
        }
    }

    /// Current output level.
    #[must_use]
    pub const fn level(&self) -> bool {
        self.level
    }

    /// Advances the state to `now`.
    ///
    /// When at least one interval has elapsed since the last toggle, flips
    /// the level, resets the toggle time to `now`, and returns the new
    /// level; otherwise returns `None`. At most one toggle happens per
    /// call, however far `now` has advanced.
    pub fn tick(&mut self, now: Instant) -> Option<bool> {
        if now.duration_since(self.last_toggle) >= self.interval {
            self.last_toggle = now;
            self.level = !self.level;
            Some(self.level)
        } else {
            None
        }
    }
}

/// The status LED, toggled by a [`BlinkState`].
#[cfg(feature = "pico1")]
pub struct BlinkLed {
    output: Output<'static>,
    state: BlinkState,
}

#[cfg(feature = "pico1")]
impl BlinkLed {
    /// Creates the indicator on `pin`, starting low.
    #[must_use]
    pub fn new(pin: Peri<'static, impl Pin>) -> Self {
        Self {
            output: Output::new(pin, Level::Low),
            state: BlinkState::new(Instant::now()),
        }
    }

    /// Toggles the LED if the blink interval has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(level) = self.state.tick(now) {
            self.output.set_level(Level::from(level));
        }
    }
}
