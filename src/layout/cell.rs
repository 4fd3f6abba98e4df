//! Cell geometry: percentage values, cell placements and their pixel rectangles.

use std::fmt;
use std::ops::{Add, Div, Mul};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A percentage of the container, e.g. `Percent(50.0)` is half of it.
///
/// Serializes as a CSS-style string (`"50%"`), which is what the dashboard
/// renderer expects for sub-chart positions.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percent(pub f64);

impl Percent {
    /// The raw percentage value (0.0 to 100.0 for in-container positions).
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Resolve this percentage against a length in pixels.
    #[must_use]
    pub fn of(self, length: f64) -> f64 {
        self.0 / 100.0 * length
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Add for Percent {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<f64> for Percent {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Percent {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

impl Serialize for Percent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let number = raw.trim().strip_suffix('%').unwrap_or(raw.trim());
        number
            .trim()
            .parse::<f64>()
            .map(Percent)
            .map_err(|_| de::Error::custom(format!("invalid percentage: {raw:?}")))
    }
}

/// Placement of one sub-chart within the container, in container percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellPlacement {
    /// Offset of the left edge
    pub left: Percent,
    /// Offset of the top edge
    pub top: Percent,
    /// Cell width
    pub width: Percent,
    /// Cell height
    pub height: Percent,
}

impl CellPlacement {
    /// Centre of the cell as `(x, y)` container percentages.
    ///
    /// This is where a gauge hosted in the cell is anchored.
    #[must_use]
    pub fn center(&self) -> (Percent, Percent) {
        (
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }

    /// Resolve the placement to pixels within a `width` x `height` container.
    #[must_use]
    pub fn to_pixels(&self, width: f64, height: f64) -> CellRect {
        CellRect {
            x: self.left.of(width),
            y: self.top.of(height),
            width: self.width.of(width),
            height: self.height.of(height),
        }
    }
}

/// Rectangle representing a cell's bounds in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellRect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (top edge)
    pub y: f64,
    /// Width of the cell
    pub width: f64,
    /// Height of the cell
    pub height: f64,
}

impl CellRect {
    /// True if the point lies inside the rectangle (right and bottom edges exclusive).
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, "0%" ; "zero")]
    #[test_case(50.0, "50%" ; "whole number")]
    #[test_case(100.0 / 3.0, "33.333333333333336%" ; "repeating fraction")]
    #[test_case(12.5, "12.5%" ; "terminating fraction")]
    fn test_percent_display(value: f64, expected: &str) {
        assert_eq!(Percent(value).to_string(), expected);
    }

    #[test]
    fn test_percent_serializes_as_string() {
        let json = serde_json::to_string(&Percent(25.0)).unwrap();
        assert_eq!(json, "\"25%\"");
    }

    #[test]
    fn test_percent_deserialize_accepts_suffix_and_bare_number() {
        let with_suffix: Percent = serde_json::from_str("\"33.5%\"").unwrap();
        let bare: Percent = serde_json::from_str("\" 10 \"").unwrap();
        assert_eq!(with_suffix, Percent(33.5));
        assert_eq!(bare, Percent(10.0));
    }

    #[test]
    fn test_percent_deserialize_rejects_garbage() {
        assert!(serde_json::from_str::<Percent>("\"wide%\"").is_err());
    }

    #[test]
    fn test_center_of_cell() {
        let cell = CellPlacement {
            left: Percent(50.0),
            top: Percent(0.0),
            width: Percent(50.0),
            height: Percent(50.0),
        };
        assert_eq!(cell.center(), (Percent(75.0), Percent(25.0)));
    }

    #[test]
    fn test_to_pixels() {
        let cell = CellPlacement {
            left: Percent(50.0),
            top: Percent(50.0),
            width: Percent(50.0),
            height: Percent(50.0),
        };
        let rect = cell.to_pixels(400.0, 200.0);
        assert_eq!(
            rect,
            CellRect {
                x: 200.0,
                y: 100.0,
                width: 200.0,
                height: 100.0,
            }
        );
        assert!(rect.contains(200.0, 100.0));
        assert!(!rect.contains(400.0, 150.0));
    }
}
