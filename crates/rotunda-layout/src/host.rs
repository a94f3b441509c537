//! The seam between the layout and the view that hosts it.

use rotunda_core::{Point, Rect, Size};

/// Geometry the hosting collection view supplies on demand.
pub trait LayoutHost {
    /// Number of items in the collection.
    fn item_count(&self) -> usize;

    /// Current scroll position; only `x` drives the rotation.
    fn content_offset(&self) -> Point;

    /// Size of the visible window.
    fn viewport_size(&self) -> Size;

    /// Visible window in content coordinates.
    fn bounds(&self) -> Rect {
        let offset = self.content_offset();
        let size = self.viewport_size();
        Rect::new(offset.x, offset.y, size.width, size.height)
    }
}

/// Why cached placements went stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalidation {
    /// Cylinder radius was changed
    RadiusChanged,
    /// Viewport was resized
    BoundsChanged,
    /// Collection scrolled
    OffsetChanged,
    /// Items were inserted or removed
    ItemCountChanged,
}

/// Host geometry captured as plain values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HostSnapshot {
    /// Number of items
    pub item_count: usize,
    /// Scroll position
    pub content_offset: Point,
    /// Viewport size
    pub viewport: Size,
}

impl HostSnapshot {
    /// Snapshot scrolled to the start of the collection.
    #[must_use]
    pub const fn new(item_count: usize, viewport: Size) -> Self {
        Self {
            item_count,
            content_offset: Point::ORIGIN,
            viewport,
        }
    }

    /// Same snapshot scrolled horizontally to `x`.
    #[must_use]
    pub fn scrolled_to(mut self, x: f32) -> Self {
        self.content_offset.x = x;
        self
    }
}

impl LayoutHost for HostSnapshot {
    fn item_count(&self) -> usize {
        self.item_count
    }

    fn content_offset(&self) -> Point {
        self.content_offset
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}
