//! Validated layout requests.
//!
//! Dashboard panels hand over their size and series count as loosely typed
//! values (query parameters, chart options, CLI arguments). [`GridRequest`]
//! is where those are parsed and checked before any layout math runs.

use super::grid::{layout_grid, validate_dimension, GridLayout};
use crate::error::{GridError, Result};

/// A container size and cell count that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRequest {
    width: f64,
    height: f64,
    num_grids: i32,
}

impl GridRequest {
    /// Create a request from typed values.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidArgument`] if `width` or `height` is zero,
    /// negative or not finite. A non-positive `num_grids` is accepted and
    /// yields an empty layout.
    pub fn new(width: f64, height: f64, num_grids: i32) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;
        Ok(Self {
            width,
            height,
            num_grids,
        })
    }

    /// Parse a request from raw string fields.
    ///
    /// Surrounding whitespace is ignored. `num_grids` must be an integer.
    ///
    /// # Errors
    /// Returns [`GridError::Parse`] naming the first field that is not a
    /// number, or [`GridError::InvalidArgument`] if a dimension is invalid.
    pub fn parse(width: &str, height: &str, num_grids: &str) -> Result<Self> {
        let width = parse_field::<f64>("width", width)?;
        let height = parse_field::<f64>("height", height)?;
        let num_grids = parse_field::<i32>("num_grids", num_grids)?;
        Self::new(width, height, num_grids)
    }

    /// Container width in pixels
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Container height in pixels
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Requested number of cells
    #[must_use]
    pub const fn num_grids(&self) -> i32 {
        self.num_grids
    }

    /// Compute the layout for this request.
    ///
    /// # Errors
    /// Propagates errors from [`layout_grid`]; a validated request does not
    /// produce any.
    pub fn layout(&self) -> Result<GridLayout> {
        layout_grid(self.width, self.height, self.num_grids)
    }
}

fn parse_field<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T> {
    raw.trim().parse::<T>().map_err(|_| GridError::Parse {
        name,
        value: raw.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_parse_trims_whitespace() {
        let request = GridRequest::parse(" 400 ", "200.5", "\t4\n").unwrap();
        assert_eq!(request.width(), 400.0);
        assert_eq!(request.height(), 200.5);
        assert_eq!(request.num_grids(), 4);
    }

    #[test_case("wide", "200", "4", "width" ; "width not a number")]
    #[test_case("400", "", "4", "height" ; "empty height")]
    #[test_case("400", "200", "4.5", "num_grids" ; "fractional count")]
    #[test_case("400", "200", "four", "num_grids" ; "count not a number")]
    fn test_parse_rejects(width: &str, height: &str, num_grids: &str, field: &str) {
        match GridRequest::parse(width, height, num_grids) {
            Err(GridError::Parse { name, .. }) => assert_eq!(name, field),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test_case("0", "200" ; "zero width")]
    #[test_case("400", "-1" ; "negative height")]
    #[test_case("inf", "200" ; "infinite width")]
    #[test_case("400", "NaN" ; "nan height")]
    fn test_parse_validates_dimensions(width: &str, height: &str) {
        assert!(matches!(
            GridRequest::parse(width, height, "1"),
            Err(GridError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_negative_count_is_accepted() {
        let request = GridRequest::new(300.0, 100.0, -2).unwrap();
        assert!(request.layout().unwrap().is_empty());
    }

    #[test]
    fn test_layout_from_request() {
        let layout = GridRequest::parse("400", "200", "4").unwrap().layout().unwrap();
        assert_eq!((layout.rows, layout.cols), (2, 2));
    }
}
