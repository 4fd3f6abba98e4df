//! gaugegrid - grid layout for gauge dashboards
//!
//! Splits a dashboard panel into a row-major grid of equal cells so that
//! several gauge sub-charts can be rendered side by side:
//! - Row/column split biased by the panel's aspect ratio
//! - Percentage placements in the shape chart options expect (`"50%"`)
//! - Per-cell pixel size for sizing each gauge
//!
//! # Usage (Rust)
//!
//! ```
//! let layout = gaugegrid::layout_grid(400.0, 200.0, 4)?;
//! assert_eq!((layout.rows, layout.cols), (2, 2));
//! assert_eq!(layout.cells[3].left.to_string(), "50%");
//! # Ok::<(), gaugegrid::GridError>(())
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { layout_grid_js } from 'gaugegrid';
//! await init();
//! const { gridArray, gridWidth, gridHeight } = layout_grid_js(400, 200, 4);
//! ```

pub mod error;
pub mod layout;

use wasm_bindgen::prelude::*;

pub use error::GridError;
pub use layout::{layout_grid, CellPlacement, CellRect, GridLayout, GridRequest, Percent};

/// Compute a grid layout and return it as a JavaScript object
///
/// The object has the fields `gridArray`, `gridWidth`, `gridHeight`,
/// `gridNoOfRow` and `gridNoOfCol`.
///
/// # Errors
/// Returns an error if `width` or `height` is zero, negative or not finite.
#[wasm_bindgen]
pub fn layout_grid_js(
    width: f64,
    height: f64,
    num_grids: i32,
) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let layout =
        layout_grid(width, height, num_grids).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&layout)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Compute a grid layout and return it as a JSON string
///
/// # Errors
/// Returns an error if `width` or `height` is zero, negative or not finite.
#[wasm_bindgen]
pub fn layout_grid_json(
    width: f64,
    height: f64,
    num_grids: i32,
) -> Result<String, JsValue> {
    let layout =
        layout_grid(width, height, num_grids).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&layout)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
