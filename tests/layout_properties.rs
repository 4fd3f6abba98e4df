//! Property tests for grid layout invariants.
#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp)]

use gaugegrid::layout_grid;
use proptest::prelude::*;

fn dimension() -> impl Strategy<Value = f64> {
    1.0f64..4000.0
}

proptest! {
    #[test]
    fn non_positive_count_is_empty(width in dimension(), height in dimension(), count in i32::MIN..=0) {
        let layout = layout_grid(width, height, count).unwrap();
        prop_assert!(layout.cells.is_empty());
    }

    #[test]
    fn grid_holds_every_cell_with_no_removable_row(
        width in dimension(),
        height in dimension(),
        count in 1i32..2000,
    ) {
        let layout = layout_grid(width, height, count).unwrap();
        let (rows, cols, n) = (u64::from(layout.rows), u64::from(layout.cols), u64::from(count.unsigned_abs()));
        prop_assert!(rows >= 1 && cols >= 1);
        prop_assert!(rows * cols >= n);
        prop_assert!((rows - 1) * cols < n);
        prop_assert_eq!(u64::try_from(layout.cells.len()).unwrap(), rows * cols);
    }

    #[test]
    fn cells_are_equal_and_tile_to_hundred_percent(
        width in dimension(),
        height in dimension(),
        count in 1i32..500,
    ) {
        let layout = layout_grid(width, height, count).unwrap();
        let first = layout.cells[0];
        for cell in &layout.cells {
            prop_assert_eq!(cell.width, first.width);
            prop_assert_eq!(cell.height, first.height);
        }
        let row_width = first.width.value() * f64::from(layout.cols);
        let col_height = first.height.value() * f64::from(layout.rows);
        prop_assert!((row_width - 100.0).abs() < 1e-9);
        prop_assert!((col_height - 100.0).abs() < 1e-9);
        prop_assert!((layout.grid_width * f64::from(layout.cols) - width).abs() < 1e-6);
        prop_assert!((layout.grid_height * f64::from(layout.rows) - height).abs() < 1e-6);
    }

    #[test]
    fn placements_are_row_major(
        width in dimension(),
        height in dimension(),
        count in 1i32..500,
    ) {
        let layout = layout_grid(width, height, count).unwrap();
        for pair in layout.cells.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.top <= b.top);
            if a.top == b.top {
                prop_assert!(a.left < b.left);
            }
        }
    }
}
