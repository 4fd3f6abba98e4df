//! Grid layout for rendering several gauge sub-charts in one panel.
//!
//! The container is split into a row-major grid of equal cells. The row/column
//! split follows the container's aspect ratio, then any row the estimate
//! over-allocated is dropped so that as few trailing cells as possible stay
//! empty.

use serde::{Deserialize, Serialize};

use super::cell::{CellPlacement, Percent};
use crate::error::{GridError, Result};

/// A computed grid layout.
///
/// Field names on the wire follow the dashboard's chart-option contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    /// Cell placements in row-major order (`rows * cols` entries)
    #[serde(rename = "gridArray")]
    pub cells: Vec<CellPlacement>,
    /// Pixel width of one cell
    #[serde(rename = "gridWidth")]
    pub grid_width: f64,
    /// Pixel height of one cell
    #[serde(rename = "gridHeight")]
    pub grid_height: f64,
    /// Number of rows; at least 1 whenever there is a cell to render, and 0
    /// only for [`GridLayout::empty`]
    #[serde(rename = "gridNoOfRow")]
    pub rows: u32,
    /// Number of columns; at least 1 whenever there is a cell to render, and 0
    /// only for [`GridLayout::empty`]
    #[serde(rename = "gridNoOfCol")]
    pub cols: u32,
}

impl GridLayout {
    /// The layout returned when there is nothing to render.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: Vec::new(),
            grid_width: 0.0,
            grid_height: 0.0,
            rows: 0,
            cols: 0,
        }
    }

    /// Number of placements (including trailing cells beyond the requested count)
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the layout has no placements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the placement at (row, col)
    #[must_use]
    pub fn cell(&self, row: u32, col: u32) -> Option<&CellPlacement> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let index = usize::try_from(u64::from(row) * u64::from(self.cols) + u64::from(col)).ok()?;
        self.cells.get(index)
    }

    /// The first `count` placements, i.e. the cells that host a sub-chart.
    pub fn occupied_cells(&self, count: i32) -> impl Iterator<Item = &CellPlacement> {
        self.cells.iter().take(usize::try_from(count).unwrap_or(0))
    }

    /// Row-major index of the cell containing pixel `(x, y)` of a
    /// `width` x `height` container.
    ///
    /// Returns `None` for points outside the container or on an empty layout.
    #[must_use]
    pub fn cell_at(&self, x: f64, y: f64, width: f64, height: f64) -> Option<usize> {
        if self.is_empty() || !(0.0..width).contains(&x) || !(0.0..height).contains(&y) {
            return None;
        }
        let col = band_index(x / width, self.cols);
        let row = band_index(y / height, self.rows);
        usize::try_from(u64::from(row) * u64::from(self.cols) + u64::from(col)).ok()
    }
}

/// Index of the band a fraction in `[0, 1)` falls into, out of `bands` equal bands.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped to [0, bands - 1]
fn band_index(fraction: f64, bands: u32) -> u32 {
    let last = bands.saturating_sub(1);
    (fraction * f64::from(bands)).floor().clamp(0.0, f64::from(last)) as u32
}

/// Compute the grid layout for `num_grids` sub-charts in a `width` x `height`
/// pixel container.
///
/// A non-positive `num_grids` yields [`GridLayout::empty`]. The grid always
/// fills `rows * cols` cells, which may be a few more than `num_grids`; use
/// [`GridLayout::occupied_cells`] to take only the ones that host a chart.
///
/// # Errors
/// Returns [`GridError::InvalidArgument`] if `width` or `height` is zero,
/// negative or not finite.
pub fn layout_grid(width: f64, height: f64, num_grids: i32) -> Result<GridLayout> {
    validate_dimension("width", width)?;
    validate_dimension("height", height)?;

    let Ok(count) = u32::try_from(num_grids) else {
        return Ok(GridLayout::empty());
    };
    if count == 0 {
        return Ok(GridLayout::empty());
    }

    let (rows, cols) = grid_dimensions(count, width / height);

    let cell_width = Percent(100.0 / f64::from(cols));
    let cell_height = Percent(100.0 / f64::from(rows));

    let cells = (0..rows)
        .flat_map(|row| {
            (0..cols).map(move |col| CellPlacement {
                left: cell_width * f64::from(col),
                top: cell_height * f64::from(row),
                width: cell_width,
                height: cell_height,
            })
        })
        .collect();

    let layout = GridLayout {
        cells,
        grid_width: width / f64::from(cols),
        grid_height: height / f64::from(rows),
        rows,
        cols,
    };

    tracing::debug!(
        num_grids,
        rows,
        cols,
        grid_width = layout.grid_width,
        grid_height = layout.grid_height,
        "computed grid layout"
    );

    Ok(layout)
}

/// Row and column counts for `count` (> 0) cells at the given aspect ratio.
fn grid_dimensions(count: u32, aspect_ratio: f64) -> (u32, u32) {
    let mut rows = initial_rows(count, aspect_ratio);
    let mut cols = count.div_ceil(rows);

    // Drop rows the estimate over-allocated; rows never goes below 1
    while rows > 1 && u64::from(rows - 1) * u64::from(cols) >= u64::from(count) {
        rows -= 1;
        cols = count.div_ceil(rows);
    }

    (rows, cols)
}

/// Initial row estimate `ceil(sqrt(count / aspect_ratio))`, clamped to `[1, count]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped to [1, count]
fn initial_rows(count: u32, aspect_ratio: f64) -> u32 {
    let estimate = (f64::from(count) / aspect_ratio).sqrt().ceil();
    if estimate.is_nan() {
        return 1;
    }
    estimate.clamp(1.0, f64::from(count)) as u32
}

/// Reject zero, negative and non-finite container dimensions.
pub(super) fn validate_dimension(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        tracing::warn!(name, value, "rejected grid layout dimension");
        Err(GridError::InvalidArgument { name, value })
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_two_by_two_in_wide_container() {
        let layout = layout_grid(400.0, 200.0, 4).unwrap();

        assert_eq!(layout.rows, 2);
        assert_eq!(layout.cols, 2);
        assert_eq!(layout.grid_width, 200.0);
        assert_eq!(layout.grid_height, 100.0);
        assert_eq!(layout.len(), 4);
        for cell in &layout.cells {
            assert_eq!(cell.width, Percent(50.0));
            assert_eq!(cell.height, Percent(50.0));
        }
        assert_eq!(layout.cells[3].left, Percent(50.0));
        assert_eq!(layout.cells[3].top, Percent(50.0));
    }

    #[test]
    fn test_single_cell_fills_container() {
        let layout = layout_grid(100.0, 100.0, 1).unwrap();

        assert_eq!((layout.rows, layout.cols), (1, 1));
        assert_eq!(
            layout.cells,
            vec![CellPlacement {
                left: Percent(0.0),
                top: Percent(0.0),
                width: Percent(100.0),
                height: Percent(100.0),
            }]
        );
        assert_eq!(layout.grid_width, 100.0);
        assert_eq!(layout.grid_height, 100.0);
    }

    #[test_case(0 ; "zero")]
    #[test_case(-1 ; "negative")]
    #[test_case(i32::MIN ; "minimum")]
    fn test_non_positive_count_is_empty(num_grids: i32) {
        let layout = layout_grid(300.0, 100.0, num_grids).unwrap();
        assert!(layout.is_empty());
        assert_eq!(layout, GridLayout::empty());
        assert_eq!((layout.rows, layout.cols), (0, 0));
    }

    #[test_case(300.0, 100.0, 3, 1, 3 ; "wide strip")]
    #[test_case(100.0, 300.0, 3, 3, 1 ; "tall strip")]
    #[test_case(100.0, 100.0, 5, 3, 2 ; "square with trailing cell")]
    #[test_case(100.0, 100.0, 9, 3, 3 ; "perfect square")]
    #[test_case(1000.0, 100.0, 4, 1, 4 ; "very wide")]
    #[test_case(200.0, 100.0, 7, 2, 4 ; "wide with trailing cell")]
    #[test_case(100.0, 400.0, 2, 2, 1 ; "tall pair")]
    #[test_case(30.0, 100.0, 10, 5, 2 ; "tall drops one row")]
    #[test_case(283.632_237_430_914_9, 3324.683_613_258_325, 14, 7, 2 ; "narrow drops six rows")]
    fn test_grid_dimensions(width: f64, height: f64, num_grids: i32, rows: u32, cols: u32) {
        let layout = layout_grid(width, height, num_grids).unwrap();
        assert_eq!((layout.rows, layout.cols), (rows, cols));
        assert_eq!(layout.len(), usize::try_from(rows * cols).unwrap());
    }

    #[test]
    fn test_initial_estimate_clamped_to_count() {
        // sqrt(3 / 0.25) = 3.46 -> 4 rows, clamped to 3 with 1 col
        assert_eq!(grid_dimensions(3, 0.25), (3, 1));
        // sqrt(5 / 1) = 2.24 -> 3 rows, 2 cols; (3 - 1) * 2 < 5 keeps 3 rows
        assert_eq!(grid_dimensions(5, 1.0), (3, 2));
    }

    #[test]
    fn test_reduction_removes_overallocated_rows() {
        // sqrt(10 / 0.3) = 5.77 -> 6 rows, 2 cols; 5 * 2 >= 10 drops one row
        assert_eq!(initial_rows(10, 0.3), 6);
        assert_eq!(grid_dimensions(10, 0.3), (5, 2));
        // 13 rows of 2 cols are cut down to 7
        let aspect = 283.632_237_430_914_9 / 3324.683_613_258_325;
        assert_eq!(initial_rows(14, aspect), 13);
        assert_eq!(grid_dimensions(14, aspect), (7, 2));
    }

    #[test]
    fn test_cell_size_does_not_overflow_for_huge_dimensions() {
        let layout = layout_grid(f64::MAX, 100.0, 1).unwrap();
        assert_eq!(layout.grid_width, f64::MAX);
        assert_eq!(layout.grid_height, 100.0);

        let layout = layout_grid(f64::MAX, f64::MAX, 4).unwrap();
        assert!(layout.grid_width.is_finite());
        assert_eq!(layout.grid_width, f64::MAX / 2.0);
        let rect = layout.cells[3].to_pixels(f64::MAX, f64::MAX);
        assert!(rect.x.is_finite() && rect.width.is_finite());
    }

    #[test]
    fn test_rows_never_reach_zero() {
        assert_eq!(grid_dimensions(1, 1e-300), (1, 1));
        assert_eq!(grid_dimensions(1, f64::INFINITY), (1, 1));
        assert_eq!(grid_dimensions(1, 0.0), (1, 1));
    }

    #[test_case(0.0 ; "zero")]
    #[test_case(-10.0 ; "negative")]
    #[test_case(f64::NAN ; "nan")]
    #[test_case(f64::INFINITY ; "infinite")]
    fn test_invalid_height_rejected(height: f64) {
        let err = layout_grid(100.0, height, 4).unwrap_err();
        match err {
            GridError::InvalidArgument { name, .. } => assert_eq!(name, "height"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_width_rejected_even_when_empty() {
        let err = layout_grid(0.0, 100.0, 0).unwrap_err();
        assert!(matches!(err, GridError::InvalidArgument { name: "width", .. }));
    }

    #[test]
    fn test_cell_lookup() {
        let layout = layout_grid(100.0, 100.0, 5).unwrap();

        // 3 rows x 2 cols
        let cell = layout.cell(1, 1).unwrap();
        assert_eq!(cell.left, Percent(50.0));
        assert_eq!(cell.top, Percent(100.0 / 3.0));
        assert_eq!(layout.cell(2, 0).unwrap().top, Percent(100.0 / 3.0 * 2.0));
        assert!(layout.cell(3, 0).is_none());
        assert!(layout.cell(0, 2).is_none());
    }

    #[test]
    fn test_occupied_cells_skips_trailing() {
        let layout = layout_grid(100.0, 100.0, 5).unwrap();
        assert_eq!(layout.len(), 6);
        assert_eq!(layout.occupied_cells(5).count(), 5);
        assert_eq!(layout.occupied_cells(-3).count(), 0);
        assert_eq!(layout.occupied_cells(100).count(), 6);
    }

    #[test]
    fn test_cell_at() {
        let layout = layout_grid(400.0, 200.0, 4).unwrap();

        assert_eq!(layout.cell_at(0.0, 0.0, 400.0, 200.0), Some(0));
        assert_eq!(layout.cell_at(250.0, 50.0, 400.0, 200.0), Some(1));
        assert_eq!(layout.cell_at(199.9, 150.0, 400.0, 200.0), Some(2));
        assert_eq!(layout.cell_at(399.9, 199.9, 400.0, 200.0), Some(3));
        assert_eq!(layout.cell_at(400.0, 10.0, 400.0, 200.0), None);
        assert_eq!(layout.cell_at(-1.0, 10.0, 400.0, 200.0), None);
        assert_eq!(layout.cell_at(f64::NAN, 10.0, 400.0, 200.0), None);
        assert_eq!(GridLayout::empty().cell_at(1.0, 1.0, 10.0, 10.0), None);
    }

    #[test]
    fn test_serialized_shape() {
        let layout = layout_grid(400.0, 200.0, 2).unwrap();
        let json = serde_json::to_value(&layout).unwrap();

        assert_eq!(json["gridNoOfRow"], 1);
        assert_eq!(json["gridNoOfCol"], 2);
        assert_eq!(json["gridWidth"], 200.0);
        assert_eq!(json["gridHeight"], 200.0);
        assert_eq!(
            json["gridArray"][1],
            serde_json::json!({"left": "50%", "top": "0%", "width": "50%", "height": "100%"})
        );
    }
}
