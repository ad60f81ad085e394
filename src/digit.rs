//! Digit glyphs, per-digit colors, and the frame renderer.
//!
//! Each digit 0-9 has a fixed 5x5 glyph and a fixed base color. Rendering
//! scales the base color by an intensity factor and places it through the
//! serpentine layout, so the resulting [`Frame`] is already in chain order.

use crate::led_matrix::{Frame, HEIGHT, Rgb, WIDTH, colors, physical_index};

/// Number of displayable digits.
pub const DIGIT_COUNT: usize = 10;

/// Glyph row bitmasks, one `[u8; 5]` per digit. Row 0 is the top of the
/// panel; bit `4 - x` within a row is column `x`, so the literals below
/// read like the panel itself.
const GLYPHS: [[u8; 5]; DIGIT_COUNT] = [
    // 0
    [0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
    // 1
    [0b00100, 0b01100, 0b00100, 0b00100, 0b01110],
    // 2
    [0b01110, 0b10001, 0b00010, 0b00100, 0b11111],
    // 3
    [0b11110, 0b00001, 0b00110, 0b00001, 0b11110],
    // 4
    [0b00110, 0b01010, 0b10010, 0b11111, 0b00010],
    // 5
    [0b11111, 0b10000, 0b11110, 0b00001, 0b11110],
    // 6
    [0b01110, 0b10000, 0b11110, 0b10001, 0b01110],
    // 7
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000],
    // 8
    [0b01110, 0b10001, 0b01110, 0b10001, 0b01110],
    // 9
    [0b01110, 0b10001, 0b01111, 0b00001, 0b01110],
];

/// Base color per digit, before intensity scaling.
const BASE_COLORS: [Rgb; DIGIT_COUNT] = [
    colors::RED,                // 0
    colors::LIME,               // 1
    colors::TURQUOISE,          // 2
    colors::YELLOW,             // 3
    colors::MAGENTA,            // 4
    colors::CYAN,               // 5
    Rgb::new(0xFF, 0x80, 0x00), // 6: orange
    colors::PURPLE,             // 7
    colors::TEAL,               // 8
    colors::OLIVE,              // 9
];

/// A decimal digit shown on the panel.
///
/// Values stay in `0..=9` by construction; [`next`](Self::next) and
/// [`prev`](Self::prev) wrap around, so the dispatch loop can never step
/// out of range.
///
/// ```rust
/// use digit_panel::digit::Digit;
///
/// assert_eq!(Digit::new(9).next(), Digit::ZERO);
/// assert_eq!(Digit::ZERO.prev(), Digit::new(9));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub struct Digit(u8);

impl Digit {
    /// Digit 0, the value displayed at power-on.
    pub const ZERO: Self = Self(0);

    /// Creates a digit. Panics unless `value` is in `0..=9`.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(value < DIGIT_COUNT as u8, "digit must be 0-9");
        Self(value)
    }

    /// The digit's numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The next digit up, wrapping 9 back to 0.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.0 == 9 { Self(0) } else { Self(self.0 + 1) }
    }

    /// The next digit down, wrapping 0 back to 9.
    #[must_use]
    pub const fn prev(self) -> Self {
        if self.0 == 0 { Self(9) } else { Self(self.0 - 1) }
    }

    /// Row bitmasks of this digit's glyph (row 0 = top, bit `4 - x` = column x).
    #[must_use]
    pub const fn glyph(self) -> [u8; 5] {
        GLYPHS[self.0 as usize]
    }

    /// The digit's base color before intensity scaling.
    #[must_use]
    pub const fn base_color(self) -> Rgb {
        BASE_COLORS[self.0 as usize]
    }
}

/// Renders `digit` into a chain-order frame.
///
/// Starts from an all-off frame, so nothing from a previously displayed
/// digit survives. Every set glyph bit becomes the digit's base color
/// scaled by `intensity`; unset bits stay off. Panics unless `intensity`
/// is in `(0, 1]`.
#[must_use]
pub fn render(digit: Digit, intensity: f32) -> Frame {
    assert!(
        intensity > 0.0 && intensity <= 1.0,
        "intensity must be in (0, 1]"
    );
    let color = scale(digit.base_color(), intensity);
    let glyph = digit.glyph();

    let mut frame = Frame::new();
    for y in 0..HEIGHT {
        let row = glyph[y];
        for x in 0..WIDTH {
            if (row >> (WIDTH - 1 - x)) & 1 == 1 {
                frame[physical_index(x, y)] = color;
            }
        }
    }
    frame
}

/// Scales each channel by `intensity` with truncation (no rounding), the
/// panel's integer color pipeline: `floor(channel * intensity)`.
fn scale(color: Rgb, intensity: f32) -> Rgb {
    Rgb::new(
        (f32::from(color.r) * intensity) as u8,
        (f32::from(color.g) * intensity) as u8,
        (f32::from(color.b) * intensity) as u8,
    )
}
