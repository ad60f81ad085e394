#![allow(missing_docs)]
//! Host-level tests for the serpentine layout.

use digit_panel::led_matrix::layout::LedLayout;
use digit_panel::led_matrix::{HEIGHT, LED_COUNT, WIDTH, physical_index};

/// The panel's documented wiring formula: rows count from the bottom, and
/// even rows (counted from the bottom) run right to left.
fn wiring_formula(x: usize, y: usize) -> usize {
    let row_from_bottom = HEIGHT - 1 - y;
    let column = if row_from_bottom % 2 == 0 {
        WIDTH - 1 - x
    } else {
        x
    };
    row_from_bottom * WIDTH + column
}

#[test]
fn physical_index_matches_wiring_formula() {
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            assert_eq!(physical_index(x, y), wiring_formula(x, y), "({x}, {y})");
        }
    }
}

#[test]
fn physical_index_is_a_bijection() {
    let mut seen = [false; LED_COUNT];
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let index = physical_index(x, y);
            assert!(index < LED_COUNT);
            assert!(!seen[index], "({x}, {y}) collides at {index}");
            seen[index] = true;
        }
    }
    assert!(seen.iter().all(|&covered| covered));
}

#[test]
fn corners_land_where_the_chain_runs() {
    assert_eq!(physical_index(4, 4), 0); // chain start, bottom-right
    assert_eq!(physical_index(0, 4), 4); // bottom-left
    assert_eq!(physical_index(0, 3), 5); // second row runs left-to-right
    assert_eq!(physical_index(4, 0), 20); // top-right
    assert_eq!(physical_index(0, 0), 24); // chain end, top-left
}

#[test]
fn serpentine_row_major_small_grid() {
    const MAP: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major();
    assert_eq!(
        *MAP.index_to_xy(),
        [(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]
    );
}

#[test]
fn rotate_180_small_grid() {
    const MAP: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major().rotate_180();
    assert_eq!(
        *MAP.index_to_xy(),
        [(2, 1), (1, 1), (0, 1), (0, 0), (1, 0), (2, 0)]
    );
}

#[test]
#[should_panic(expected = "duplicate (x, y) in mapping")]
fn new_panics_on_duplicate_cell() {
    let _ = LedLayout::<3, 3, 1>::new([(0, 0), (1, 0), (1, 0)]);
}

#[test]
#[should_panic(expected = "x out of bounds")]
fn new_panics_on_out_of_bounds_x() {
    let _ = LedLayout::<3, 3, 1>::new([(0, 0), (1, 0), (3, 0)]);
}

#[test]
#[should_panic(expected = "W*H must equal N")]
fn new_panics_on_mismatched_dimensions() {
    let _ = LedLayout::<5, 3, 2>::new([(0, 0), (1, 0), (2, 0), (0, 1), (1, 1)]);
}
