//! Cell coordinates, extents and rectangular cell windows.
//!
//! The value types here are pure: no clamping policy, no provider state.
//! [`compute_window`] deliberately leaves the window origin unclamped
//! (subtracting the background margin near the matrix origin goes
//! transiently negative); callers that address a provider run the result
//! through [`Window::clamped_origin`] first.

use serde::{Deserialize, Serialize};

use crate::error::{MatviewError, Result};

/// A single cell coordinate in the logical matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Row index (0-based).
    pub row: u32,
    /// Column index (0-based).
    pub col: u32,
}

impl Position {
    /// Create a position at (row, col).
    #[must_use]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// A cell-count extent, e.g. the viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

/// Authoritative total matrix dimensions, as reported by the provider.
///
/// Fetched once lazily and treated as immutable for the session; there is no
/// live-resize support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixSize {
    /// Total number of columns.
    pub width: u32,
    /// Total number of rows.
    pub height: u32,
}

/// Inclusive rectangular cell range (`row1 ≤ row2`, `col1 ≤ col2`).
///
/// `row1`/`col1` are signed because the margin subtraction may take them
/// below zero near the matrix origin. `row2`/`col2` are always clamped to
/// the matrix extent by [`compute_window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    /// Row index of the top-left corner.
    pub row1: i64,
    /// Column index of the top-left corner.
    pub col1: i64,
    /// Row index of the bottom-right corner.
    pub row2: i64,
    /// Column index of the bottom-right corner.
    pub col2: i64,
}

impl Window {
    /// Create a window from corner coordinates.
    #[must_use]
    pub fn new(row1: i64, col1: i64, row2: i64, col2: i64) -> Self {
        Self {
            row1,
            col1,
            row2,
            col2,
        }
    }

    /// Number of rows covered (inclusive bounds).
    #[must_use]
    pub fn height(&self) -> i64 {
        self.row2 - self.row1 + 1
    }

    /// Number of columns covered (inclusive bounds).
    #[must_use]
    pub fn width(&self) -> i64 {
        self.col2 - self.col1 + 1
    }

    /// Clamp the top-left corner at the matrix origin.
    #[must_use]
    pub fn clamped_origin(self) -> Self {
        Self {
            row1: self.row1.max(0),
            col1: self.col1.max(0),
            ..self
        }
    }

    /// Align the window bounds to a `margin`-cell grid: the origin floors,
    /// the far edge ceils and is re-clamped to `matrix` so snapping never
    /// addresses out-of-range cells.
    ///
    /// Snapping trades prefetch precision for fewer distinct windows during
    /// continuous scrolling.
    #[must_use]
    pub fn snapped_to(self, margin: u32, matrix: MatrixSize) -> Self {
        if margin == 0 {
            return self;
        }
        let m = i64::from(margin);
        let floor = |v: i64| v.div_euclid(m) * m;
        let ceil = |v: i64| {
            let rem = v.rem_euclid(m);
            if rem == 0 {
                v
            } else {
                v - rem + m
            }
        };
        Self {
            row1: floor(self.row1),
            col1: floor(self.col1),
            row2: ceil(self.row2).min(i64::from(matrix.height)),
            col2: ceil(self.col2).min(i64::from(matrix.width)),
        }
    }
}

/// Parse a `"row,col"` string into a [`Position`].
///
/// Exactly two non-negative integers separated by a comma; whitespace around
/// either integer is tolerated. This is the canonical encoding for
/// user-supplied window size/position strings.
pub fn parse_position(text: &str) -> Result<Position> {
    let mut parts = text.split(',');
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(MatviewError::Format(text.to_string()));
    };
    let row = row
        .trim()
        .parse::<u32>()
        .map_err(|_| MatviewError::Format(text.to_string()))?;
    let col = col
        .trim()
        .parse::<u32>()
        .map_err(|_| MatviewError::Format(text.to_string()))?;
    Ok(Position { row, col })
}

/// Compute the window that must be materialized around `focal`.
///
/// The background margin widens the window before the focal cell so that
/// small scroll movements do not immediately require a re-fetch; the far
/// edge is clamped to the matrix extent so requests never exceed it.
///
/// Fails with [`MatviewError::UnknownExtent`] if the matrix extent has not
/// been resolved yet, and [`MatviewError::WindowSizeUnavailable`] if no
/// window size is known.
pub fn compute_window(
    focal: Position,
    window_size: Option<Size>,
    background_margin: u32,
    matrix_size: Option<MatrixSize>,
) -> Result<Window> {
    let matrix = matrix_size.ok_or(MatviewError::UnknownExtent)?;
    let size = window_size.ok_or(MatviewError::WindowSizeUnavailable)?;
    let margin = i64::from(background_margin);
    Ok(Window {
        row1: i64::from(focal.row) - margin,
        col1: i64::from(focal.col) - margin,
        row2: (i64::from(focal.row) + i64::from(size.height)).min(i64::from(matrix.height)),
        col2: (i64::from(focal.col) + i64::from(size.width)).min(i64::from(matrix.width)),
    })
}
