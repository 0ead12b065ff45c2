//! Overflow classification for rendered elements against their container.
//!
//! The renderer reports bounding boxes; [`is_overflowing`] decides whether
//! the rendered content has scrolled past the container's edge in a given
//! direction. An overflow is the trigger for "the current window no longer
//! covers the visible area; request a re-window".

use serde::{Deserialize, Serialize};

/// Direction in which an element may have scrolled past its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowDirection {
    /// The element's right edge has passed the container's left edge.
    Left,
    /// The element's left edge has passed the container's right edge.
    Right,
    /// The element's bottom edge has passed the container's top edge.
    Top,
    /// The element's top edge has passed the container's bottom edge.
    Bottom,
}

impl OverflowDirection {
    /// All four directions, in the order overflow checks are usually run.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Parse a direction name (`"left"`, `"right"`, `"top"`, `"bottom"`).
    ///
    /// Unrecognized names yield `None`; overflow checks treat that as "no
    /// overflow" rather than an error.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }
}

/// Axis-aligned bounding box in a shared coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Distance from the coordinate-space origin to the top edge.
    pub top: f64,
    /// Distance from the coordinate-space origin to the left edge.
    pub left: f64,
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
}

impl BoundingBox {
    /// Create a box from its offset and dimensions.
    #[must_use]
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<&web_sys::DomRect> for BoundingBox {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self {
            top: rect.top(),
            left: rect.left(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// True iff `element` has scrolled past `container`'s edge in `direction`.
///
/// Comparisons are strict: an element flush with an edge is not overflowing.
#[must_use]
pub fn is_overflowing(
    element: &BoundingBox,
    container: &BoundingBox,
    direction: OverflowDirection,
) -> bool {
    let top = element.top - container.top;
    let left = element.left - container.left;
    match direction {
        OverflowDirection::Left => left + element.width < 0.0,
        OverflowDirection::Right => left > container.width,
        OverflowDirection::Top => top + element.height < 0.0,
        OverflowDirection::Bottom => top > container.height,
    }
}
