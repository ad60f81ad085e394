//! Device abstractions for the BitDogLab 5x5 digit panel (Pico 1 / RP2040).
//!
//! The panel is a 5x5 WS2812 matrix showing one decimal digit, cycled up and
//! down by two debounced push-buttons while a status LED blinks. The crate
//! splits into a host-testable core and a thin embedded layer:
//!
//! - [`led_matrix`] — frame buffer, WS2812 wire format, serpentine layout,
//!   and (with the `embedded` feature) the PIO transmitter.
//! - [`digit`] — digit glyphs, per-digit colors, and the renderer.
//! - [`button`] — debounced falling-edge capture shared between the GPIO
//!   interrupt context and the dispatch loop.
//! - [`blink`] — non-blocking status-LED toggle.
//! - [`panel`] — the dispatch loop tying everything together.
//!
//! # Glossary
//!
//! - **WS2812**: NeoPixel-style addressable LED. Each LED consumes the first
//!   24 bits of the incoming stream (green-red-blue, MSB first) and passes
//!   the rest downstream; bit values are distinguished by high-pulse width.
//! - **Serpentine wiring**: consecutive panel rows are chained in
//!   alternating left-to-right / right-to-left order, so the logical (x, y)
//!   to LED-index mapping depends on row parity.
//! - **Latch gap**: minimum low-line time after a burst before the LEDs
//!   commit the received colors to their outputs.
#![no_std]

// Compile-time check: firmware builds need the full embedded stack.
#[cfg(all(feature = "pico1", not(feature = "arm")))]
compile_error!("Feature 'pico1' requires feature 'arm' (or just enable 'embedded')");

pub mod blink;
pub mod button;
pub mod digit;
mod error;
pub mod led_matrix;
pub mod panel;
#[cfg(feature = "pico1")]
#[doc(hidden)]
pub mod pio_irqs;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
