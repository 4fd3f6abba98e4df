//! Grid layout engine for placing gauge sub-charts in a dashboard panel.
//!
//! This module handles:
//! - Splitting a container into a row-major grid biased by its aspect ratio
//! - Percentage placements for each cell and their pixel rectangles
//! - Hit testing pixel coordinates against the grid
//! - Parsing and validating loosely typed layout requests

mod cell;
mod grid;
mod request;

pub use cell::{CellPlacement, CellRect, Percent};
pub use grid::{layout_grid, GridLayout};
pub use request::GridRequest;
