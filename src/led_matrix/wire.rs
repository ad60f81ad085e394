//! WS2812 wire format: the 24-bit color word and the PIO pulse program.
//!
//! The LEDs expect green-red-blue transmission order, most significant bit
//! first, regardless of how callers name their channels. On the line, a `0`
//! bit is a short high pulse followed by a long low, a `1` bit a long high
//! followed by a short low; after the burst the line must stay low for the
//! latch gap before the LEDs display the new colors.

use embassy_time::Duration;
use pio::{Assembler, JmpCondition, OutDestination, SetDestination, SideSet};

/// PIO cycles the line is held high before every data bit.
const T1: u8 = 2;
/// PIO cycles the line carries the data-bit value.
const T2: u8 = 5;
/// PIO cycles the line is held low after every data bit.
const T3: u8 = 3;

/// PIO cycles per transmitted bit.
pub const CYCLES_PER_BIT: u32 = (T1 + T2 + T3) as u32;

/// WS2812 data rate. With [`CYCLES_PER_BIT`] cycles per bit this puts the
/// short pulse at 0.25 us, the long pulse at 0.875 us, and the bit period
/// at 1.25 us.
pub const BIT_RATE_HZ: u32 = 800_000;

/// Low-line time after a burst; the WS2812 needs at least 50 us to latch.
pub const LATCH_GAP: Duration = Duration::from_micros(100);

/// Packs one pixel into its wire word.
///
/// The top three bytes are green, red, blue; the low byte is padding that
/// the transmitter's 24-bit shift never clocks out.
///
/// ```rust
/// use digit_panel::led_matrix::wire::encode;
///
/// assert_eq!(encode(0xFF, 0x00, 0x00), 0x00FF_0000); // red
/// assert_eq!(encode(0x00, 0xFF, 0x00), 0xFF00_0000); // green
/// assert_eq!(encode(0x00, 0x00, 0xFF), 0x0000_FF00); // blue
/// ```
#[must_use]
pub const fn encode(red: u8, green: u8, blue: u8) -> u32 {
    ((green as u32) << 24) | ((red as u32) << 16) | ((blue as u32) << 8)
}

/// Assembles the WS2812 pulse program.
///
/// One side-set pin drives the data line. Each loop iteration shifts one
/// bit out of the OSR into X, holds the line high for `T1` cycles, then
/// either keeps it high (`1`) or drops it (`0`) for `T2` cycles, and
/// finishes low for `T3` cycles while the next bit is fetched.
#[must_use]
pub fn program() -> pio::Program<32> {
    let side_set = SideSet::new(false, 1, false);
    let mut assembler: Assembler<32> = Assembler::new_with_side_set(side_set);

    let mut wrap_target = assembler.label();
    let mut wrap_source = assembler.label();
    let mut do_zero = assembler.label();

    // Runs once at startup: own the data pin.
    assembler.set_with_side_set(SetDestination::PINDIRS, 1, 0);
    assembler.bind(&mut wrap_target);
    // Trailing low of the previous bit while the next bit lands in X.
    assembler.out_with_delay_and_side_set(OutDestination::X, 1, T3 - 1, 0);
    // Leading high pulse, shared by both bit values.
    assembler.jmp_with_delay_and_side_set(JmpCondition::XIsZero, &mut do_zero, T1 - 1, 1);
    // A one: stay high through the data window.
    assembler.jmp_with_delay_and_side_set(JmpCondition::Always, &mut wrap_target, T2 - 1, 1);
    assembler.bind(&mut do_zero);
    // A zero: drop low through the data window.
    assembler.nop_with_delay_and_side_set(T2 - 1, 0);
    assembler.bind(&mut wrap_source);

    assembler.assemble_with_wrap(wrap_source, wrap_target)
}
