//! The dispatch loop and the digit state it owns.
//!
//! One cooperative loop drives the whole panel: it ticks the blink
//! indicator, consumes pending button events, and re-renders the digit
//! when one fires. All mutable state lives in [`PanelState`], owned by the
//! loop; the button watch tasks only ever touch their latches.

use crate::digit::{self, Digit};
use crate::led_matrix::Frame;

#[cfg(feature = "pico1")]
use embassy_time::{Instant, Timer};

#[cfg(feature = "pico1")]
use crate::blink::BlinkLed;
#[cfg(feature = "pico1")]
use crate::button::PanelButtons;
#[cfg(feature = "pico1")]
use crate::led_matrix::LedMatrix;

/// Intensity factor applied to every digit color (50%, the board default).
pub const INTENSITY: f32 = 0.5;

/// Digit state owned by the dispatch loop.
///
/// The digit changes only here, in response to consumed button events, so
/// it stays in `0..=9` by construction.
///
/// ```rust
/// use digit_panel::panel::PanelState;
///
/// let mut state = PanelState::new();
/// assert_eq!(state.digit().value(), 0);
/// state.press_b();
/// assert_eq!(state.digit().value(), 9);
/// ```
pub struct PanelState {
    digit: Digit,
}

impl PanelState {
    /// Creates the power-on state: digit 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { digit: Digit::ZERO }
    }

    /// The digit currently displayed.
    #[must_use]
    pub const fn digit(&self) -> Digit {
        self.digit
    }

    /// The frame for the current digit at the panel intensity.
    #[must_use]
    pub fn frame(&self) -> Frame {
        digit::render(self.digit, INTENSITY)
    }

    /// Handles a button-A press: step the digit up, re-render.
    pub fn press_a(&mut self) -> Frame {
        self.digit = self.digit.next();
        self.frame()
    }

    /// Handles a button-B press: step the digit down, re-render.
    pub fn press_b(&mut self) -> Frame {
        self.digit = self.digit.prev();
        self.frame()
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the panel forever.
///
/// Renders digit 0 once, then loops: tick the blink indicator, consume a
/// pending A press (digit up), consume a pending B press (digit down),
/// yield. The 1 ms sleep only hands the executor to the watch tasks;
/// repeat-press suppression comes from the press latches, not from loop
/// pacing.
#[cfg(feature = "pico1")]
pub async fn run(mut matrix: LedMatrix, buttons: &'static PanelButtons, mut blink: BlinkLed) -> ! {
    let mut state = PanelState::new();
    matrix.write_frame(&state.frame()).await;

    loop {
        blink.tick(Instant::now());
        if buttons.take_a() {
            let frame = state.press_a();
            defmt::info!("button A: showing {}", state.digit().value());
            matrix.write_frame(&frame).await;
        }
        if buttons.take_b() {
            let frame = state.press_b();
            defmt::info!("button B: showing {}", state.digit().value());
            matrix.write_frame(&frame).await;
        }
        Timer::after_millis(1).await;
    }
}
