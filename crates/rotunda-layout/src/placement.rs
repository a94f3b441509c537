//! Per-item placement records produced by the arc layout.

use rotunda_core::{Point, Rect, Size, Transform2D};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Stacking order for an item rotated by `angle` radians.
///
/// Strictly increasing in `angle`: two distinct angles never share an
/// order, however close, so items further right render above items further
/// left. The key follows the IEEE 754 total order used by `f32::total_cmp`,
/// with `0.0` mapping to `0`.
#[must_use]
pub fn stack_order_for(angle: f32) -> i64 {
    let bits = angle.to_bits() as i32;
    i64::from(bits ^ (((bits >> 31) as u32) >> 1) as i32)
}

/// Geometry for one visible item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    index: usize,
    size: Size,
    center: Point,
    angle: f32,
    anchor: Point,
    stack_order: i64,
}

impl Placement {
    /// Create a placement; the stacking order follows from `angle`.
    #[must_use]
    pub fn new(index: usize, size: Size, center: Point, angle: f32, anchor: Point) -> Self {
        Self {
            index,
            size,
            center,
            angle,
            anchor,
            stack_order: stack_order_for(angle),
        }
    }

    /// Item index (0-based, stable per item).
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Item size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Center of the unrotated item in content coordinates.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Rotation about the anchor, in radians.
    #[must_use]
    pub const fn angle(&self) -> f32 {
        self.angle
    }

    /// Rotation pivot, normalized to the item's bounding box.
    #[must_use]
    pub const fn anchor(&self) -> Point {
        self.anchor
    }

    /// Rendering order; higher values draw on top.
    #[must_use]
    pub const fn stack_order(&self) -> i64 {
        self.stack_order
    }

    /// Unrotated bounding rectangle.
    #[must_use]
    pub fn frame(&self) -> Rect {
        Rect::from_center(self.center, self.size)
    }

    /// Rotation pivot in content coordinates.
    #[must_use]
    pub fn pivot(&self) -> Point {
        let frame = self.frame();
        Point::new(
            frame.x + self.anchor.x * frame.width,
            frame.y + self.anchor.y * frame.height,
        )
    }

    /// Transform a renderer applies to the unrotated frame.
    #[must_use]
    pub fn transform(&self) -> Transform2D {
        Transform2D::rotate_about(self.angle, self.pivot())
    }
}

/// Inclusive window `[start, end]` of visible item indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRange {
    /// First visible index
    pub start: usize,
    /// Last visible index (inclusive)
    pub end: usize,
}

// A window is never empty; an empty collection has no window at all.
#[allow(clippy::len_without_is_empty)]
impl VisibleRange {
    /// Create a window; `start` must not exceed `end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Number of items in the window.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Whether `index` lies inside the window.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }

    /// Indices covered by the window.
    #[must_use]
    pub const fn indices(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl fmt::Display for VisibleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
