//! The abstract paged data provider and its response model.
//!
//! The viewer core never talks to a network; it issues window requests
//! against [`MatrixProvider`] and consumes the JSON-shaped responses defined
//! here. Real deployments implement the trait over a transport;
//! [`SequentialProvider`] is the deterministic in-memory implementation used
//! by the CLI and the tests.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::geometry::{MatrixSize, Window};

/// Callback receiving a full windowed response.
pub type ResponseCallback = Box<dyn FnOnce(MatrixResponse)>;

/// Callback receiving only the `data` field of a response.
pub type DataCallback = Box<dyn FnOnce(Vec<Vec<Value>>)>;

/// Ordered labels for one axis of a windowed response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisLabels {
    /// One label per row/column covered by the request window.
    pub labels: Vec<String>,
}

/// A windowed slice of the remote matrix.
///
/// `data[i][j]` corresponds to row `row1 + i`, column `col1 + j` of the
/// request window. Cell values are raw JSON: the core does not interpret
/// them, it only materializes them for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixResponse {
    /// Authoritative total matrix dimensions.
    pub matrix: MatrixSize,
    /// Labels for the rows covered by the window.
    pub row: AxisLabels,
    /// Labels for the columns covered by the window.
    pub column: AxisLabels,
    /// Cell values, row-major, relative to the window origin.
    pub data: Vec<Vec<Value>>,
}

/// A remote (or in-memory) source of matrix cells.
///
/// Fetches suspend at this boundary only: the fetch methods return
/// immediately and the callback fires on completion. There is no deadline at
/// this layer; a provider that never calls back leaves its viewer fetching
/// until a newer request supersedes it.
pub trait MatrixProvider {
    /// Authoritative total matrix dimensions, if known.
    fn matrix_size(&self) -> Option<MatrixSize>;

    /// Fetch the cells covered by `request` and hand the full response to
    /// `on_response`.
    fn fetch_window(&self, request: Window, on_response: ResponseCallback);

    /// Like [`MatrixProvider::fetch_window`] but the callback receives only
    /// the cell data.
    fn fetch_window_data(&self, request: Window, on_data: DataCallback) {
        self.fetch_window(request, Box::new(move |response| on_data(response.data)));
    }
}

/// Deterministic in-memory provider: cell `(r, c)` holds `r * width + c`,
/// rows are labeled `"row <r>"` and columns `"col <c>"`.
///
/// Responses are produced synchronously, so callbacks fire before the fetch
/// call returns. Tests that need to exercise out-of-order completion wrap a
/// provider that defers its callbacks instead.
pub struct SequentialProvider {
    size: MatrixSize,
}

impl SequentialProvider {
    /// Create a generator for a `height` x `width` matrix.
    #[must_use]
    pub fn new(height: u32, width: u32) -> Self {
        Self {
            size: MatrixSize { width, height },
        }
    }

    /// Build the response for `request`.
    ///
    /// The request origin is clamped at the matrix origin and the far edge
    /// at the last valid index, so a window whose far edge equals the matrix
    /// extent never reads past the data.
    #[must_use]
    pub fn response_for(&self, request: Window) -> MatrixResponse {
        let request = request.clamped_origin();
        let last_row = i64::from(self.size.height) - 1;
        let last_col = i64::from(self.size.width) - 1;
        let row2 = request.row2.min(last_row);
        let col2 = request.col2.min(last_col);

        let mut row_labels = Vec::new();
        let mut col_labels = Vec::new();
        let mut data = Vec::new();
        for r in request.row1..=row2 {
            row_labels.push(format!("row {r}"));
            let mut cells = Vec::new();
            for c in request.col1..=col2 {
                if r == request.row1 {
                    col_labels.push(format!("col {c}"));
                }
                cells.push(Value::from(r * i64::from(self.size.width) + c));
            }
            data.push(cells);
        }

        MatrixResponse {
            matrix: self.size,
            row: AxisLabels { labels: row_labels },
            column: AxisLabels { labels: col_labels },
            data,
        }
    }
}

impl MatrixProvider for SequentialProvider {
    fn matrix_size(&self) -> Option<MatrixSize> {
        Some(self.size)
    }

    fn fetch_window(&self, request: Window, on_response: ResponseCallback) {
        on_response(self.response_for(request));
    }
}
