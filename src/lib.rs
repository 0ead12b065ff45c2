//! matview - windowed matrix viewer core for the web
//!
//! Pans through logically huge two-dimensional matrices (similarity
//! matrices, heatmaps with millions of rows/columns) whose contents cannot
//! be held client-side, by keeping only a bounded window of cells
//! materialized around the current focal cell:
//! - Sliding-window geometry with a fixed background prefetch margin
//! - Overflow detection against the container's bounding box
//! - At-most-one in-flight fetch per view; stale responses discarded
//! - Abstract paged provider (network client, or a deterministic generator)
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { MatrixBrowse } from 'matview';
//! await init();
//! const browser = new MatrixBrowse(options, getMatrixSize, fetchWindow);
//! browser.onWindowLoaded((window, response) => paint(window, response));
//! browser.load();
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod overflow;
pub mod provider;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use error::{MatviewError, Result};

// Re-export the main viewer struct
pub use viewer::MatrixView;

/// Parse a `"row,col"` position string and return it as a JS object.
///
/// # Errors
/// Returns an error if the string is not exactly two non-negative integers
/// separated by a comma.
#[wasm_bindgen(js_name = parsePosition)]
pub fn parse_position_js(text: &str) -> std::result::Result<JsValue, JsValue> {
    let position = geometry::parse_position(text).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&position)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
