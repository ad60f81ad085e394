//! A device abstraction for the panel's 5x5 NeoPixel-style (WS2812) matrix.
//!
//! The matrix is a single 25-LED chain wired serpentine-fashion behind the
//! panel. [`Frame`] holds one full image in physical chain order;
//! [`physical_index`] converts logical `(x, y)` coordinates (top-left
//! origin) to chain positions; with the `embedded` feature, [`LedMatrix`]
//! streams frames onto the data line from a PIO state machine.
//!
//! # Example: light the top-left and bottom-right pixels
//!
//! ```rust
//! use digit_panel::led_matrix::{colors, physical_index, Frame};
//!
//! let mut frame = Frame::new();
//! frame[physical_index(0, 0)] = colors::WHITE;
//! frame[physical_index(4, 4)] = colors::BLUE;
//!
//! // (4, 4) is where the chain starts on this panel.
//! assert_eq!(frame[0], colors::BLUE);
//! ```

use core::ops::{Deref, DerefMut};

use smart_leds::RGB8;

/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;

pub mod layout;
pub mod wire;

pub use layout::LedLayout;

/// RGB color representation re-exported from the `smart_leds` crate.
pub type Rgb = RGB8;

/// Number of LEDs on the panel.
pub const LED_COUNT: usize = 25;

/// Panel width in pixels (columns).
pub const WIDTH: usize = 5;

/// Panel height in pixels (rows).
pub const HEIGHT: usize = 5;

/// How the panel is wired: the data line enters at the bottom-right LED
/// and snakes through the rows in alternating direction.
pub const MATRIX_LAYOUT: LedLayout<LED_COUNT, WIDTH, HEIGHT> =
    LedLayout::serpentine_row_major().rotate_180();

// Inverted once at compile time so (x, y) lookups are O(1) while rendering.
const XY_TO_INDEX: [u16; LED_COUNT] = MATRIX_LAYOUT.xy_to_index();

/// Chain position of the LED at logical `(x, y)`.
///
/// `(0, 0)` is the top-left pixel, `x` grows rightward, `y` grows downward.
/// The mapping is a bijection onto `0..25`. Panics if either coordinate is
/// out of range.
///
/// ```rust
/// use digit_panel::led_matrix::physical_index;
///
/// assert_eq!(physical_index(4, 4), 0); // chain start, bottom-right
/// assert_eq!(physical_index(0, 3), 5); // next row up runs left-to-right
/// assert_eq!(physical_index(0, 0), 24); // chain end, top-left
/// ```
#[must_use]
pub const fn physical_index(x: usize, y: usize) -> usize {
    assert!(x < WIDTH, "x must be within the panel width");
    assert!(y < HEIGHT, "y must be within the panel height");
    XY_TO_INDEX[y * WIDTH + x] as usize
}

/// One full panel image in physical chain order.
///
/// Index 0 is the first LED on the wire. Frames deref to `[Rgb; 25]`, so
/// pixels can be read and written directly; use [`physical_index`] to
/// address them by `(x, y)` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame(pub [Rgb; LED_COUNT]);

impl Frame {
    /// Number of LEDs in this frame.
    pub const LEN: usize = LED_COUNT;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([Rgb::new(0, 0, 0); LED_COUNT])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: Rgb) -> Self {
        Self([color; LED_COUNT])
    }
}

impl Deref for Frame {
    type Target = [Rgb; LED_COUNT];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Frame {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<[Rgb; LED_COUNT]> for Frame {
    fn from(array: [Rgb; LED_COUNT]) -> Self {
        Self(array)
    }
}

impl From<Frame> for [Rgb; LED_COUNT] {
    fn from(frame: Frame) -> Self {
        frame.0
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// PIO transmitter (embedded only)
// ============================================================================

#[cfg(feature = "pico1")]
use embassy_rp::Peri;
#[cfg(feature = "pico1")]
use embassy_rp::clocks::clk_sys_freq;
#[cfg(feature = "pico1")]
use embassy_rp::peripherals::PIO0;
#[cfg(feature = "pico1")]
use embassy_rp::pio::{
    Config, FifoJoin, Pio, PioPin, ShiftConfig, ShiftDirection, StateMachine,
};
#[cfg(feature = "pico1")]
use embassy_time::Timer;
#[cfg(feature = "pico1")]
use fixed::types::U24F8;

#[cfg(feature = "pico1")]
use crate::pio_irqs::Pio0Irqs;
#[cfg(feature = "pico1")]
use crate::{Error, Result};

/// The panel's WS2812 transmitter, driving the data line from PIO0.
///
/// Owns the PIO block and state machine 0 for the life of the program.
/// Writing a frame blocks until the TX FIFO has accepted all 25 words,
/// then waits out the latch gap so back-to-back writes cannot run the
/// reset interval short.
#[cfg(feature = "pico1")]
pub struct LedMatrix {
    sm: StateMachine<'static, PIO0, 0>,
}

#[cfg(feature = "pico1")]
impl LedMatrix {
    /// Claims PIO0 and configures state machine 0 to drive `pin`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PioProgramLoad`] if the WS2812 program cannot be
    /// placed in the PIO instruction memory. This is fatal: the panel
    /// cannot run without its transmitter.
    pub fn new(pio: Peri<'static, PIO0>, pin: Peri<'static, impl PioPin>) -> Result<Self> {
        let Pio {
            mut common,
            mut sm0,
            ..
        } = Pio::new(pio, Pio0Irqs);

        let program = wire::program();
        let loaded = common
            .try_load_program(&program)
            .map_err(|_| Error::PioProgramLoad)?;
        let out_pin = common.make_pio_pin(pin);

        let mut cfg = Config::default();
        cfg.set_out_pins(&[&out_pin]);
        cfg.set_set_pins(&[&out_pin]);
        cfg.use_program(&loaded, &[&out_pin]);

        // Clock the state machine so one wire bit takes CYCLES_PER_BIT
        // cycles at the WS2812 data rate. Measured in kHz to keep the
        // division inside U24F8 range.
        let clock_khz = U24F8::from_num(clk_sys_freq() / 1_000);
        let bit_clock_khz = U24F8::from_num(wire::BIT_RATE_HZ / 1_000 * wire::CYCLES_PER_BIT);
        cfg.clock_divider = clock_khz / bit_clock_khz;

        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 24,
            direction: ShiftDirection::Left,
        };

        sm0.set_config(&cfg);
        sm0.set_enable(true);
        Ok(Self { sm: sm0 })
    }

    /// Streams `frame` to the LEDs in chain order.
    ///
    /// Each pixel is encoded with [`wire::encode`] and pushed into the TX
    /// FIFO, blocking while the FIFO is full; the autopull shift then
    /// clocks out the top 24 bits of every word. Returns after the latch
    /// gap, once the LEDs show the new colors.
    pub async fn write_frame(&mut self, frame: &Frame) {
        for pixel in frame.iter() {
            self.sm
                .tx()
                .wait_push(wire::encode(pixel.r, pixel.g, pixel.b))
                .await;
        }
        Timer::after(wire::LATCH_GAP).await;
    }
}
