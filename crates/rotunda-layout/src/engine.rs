//! Arc layout engine.
//!
//! Items sit on the rim of a virtual cylinder of radius `radius`. Every item
//! shares the viewport's center and is rotated about a pivot `radius` below
//! its own center, so scrolling maps to rotation rather than translation.

use rotunda_core::{Point, Rect, Size};
use tracing::{debug, trace};

use crate::config::{validate_radius, ArcLayoutConfig};
use crate::error::{LayoutError, Result};
use crate::host::{Invalidation, LayoutHost};
use crate::placement::{Placement, VisibleRange};

/// Angular spacing between neighbouring items.
#[must_use]
pub fn angle_per_item(item_width: f32, radius: f32) -> f32 {
    (item_width / radius).atan()
}

/// Scrollable content size: one item width per item, viewport height.
#[must_use]
pub fn content_extent(item_count: usize, item_size: Size, viewport_height: f32) -> Size {
    Size::new(item_count as f32 * item_size.width, viewport_height)
}

/// Rotation of the first item once the collection is scrolled fully right.
#[must_use]
pub fn angle_at_extreme(item_count: usize, angle_per_item: f32) -> f32 {
    if item_count > 0 {
        -((item_count - 1) as f32) * angle_per_item
    } else {
        0.0
    }
}

/// Rotation of the first item at `scroll_offset_x`.
///
/// Zero when there is nothing to scroll: one item or fewer, or content no
/// wider than the viewport.
#[must_use]
pub fn current_angle(
    scroll_offset_x: f32,
    viewport_width: f32,
    content_width: f32,
    item_count: usize,
    angle_per_item: f32,
) -> f32 {
    if item_count <= 1 {
        return 0.0;
    }
    let scroll_range = content_width - viewport_width;
    if scroll_range <= 0.0 || !scroll_range.is_finite() {
        debug!(content_width, viewport_width, "no scrollable range, angle pinned to 0");
        return 0.0;
    }
    angle_at_extreme(item_count, angle_per_item) * (scroll_offset_x / scroll_range)
}

/// Half-angle of the viewport as seen from the rotation center.
#[must_use]
pub fn visible_half_angle(viewport: Size, item_size: Size, radius: f32) -> f32 {
    (viewport.width / 2.0).atan2(radius + item_size.height / 2.0 - viewport.height / 2.0)
}

/// Normalized pivot that puts the rotation center `radius` below the item center.
#[must_use]
pub fn anchor_point(item_size: Size, radius: f32) -> Point {
    Point::new(0.5, (item_size.height / 2.0 + radius) / item_size.height)
}

/// Indices whose rotation falls within `[-theta, theta]`.
///
/// `None` for an empty collection. A window that inverts (the collection is
/// overscrolled past either end) collapses to `[0, 0]`.
#[must_use]
pub fn visible_range(
    current_angle: f32,
    angle_per_item: f32,
    theta: f32,
    item_count: usize,
) -> Option<VisibleRange> {
    if item_count == 0 {
        return None;
    }
    let last = (item_count - 1) as f32;
    let start = if current_angle < -theta {
        ((-theta - current_angle) / angle_per_item).floor()
    } else {
        0.0
    };
    let end = ((theta - current_angle) / angle_per_item).ceil();
    if start.is_nan() || end.is_nan() {
        debug!(current_angle, "unresolvable visible window, falling back to [0, 0]");
        return Some(VisibleRange::new(0, 0));
    }
    let end = end.min(last);

    if end < start {
        debug!(start, end, current_angle, "inverted visible window, falling back to [0, 0]");
        return Some(VisibleRange::new(0, 0));
    }
    Some(VisibleRange::new(start as usize, end as usize))
}

/// Everything one layout pass depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcInput {
    /// Scroll position of the host
    pub content_offset: Point,
    /// Visible window size
    pub viewport: Size,
    /// Number of items in the collection
    pub item_count: usize,
    /// Size shared by every item
    pub item_size: Size,
    /// Cylinder radius
    pub radius: f32,
}

impl ArcInput {
    /// Angular spacing between items.
    #[must_use]
    pub fn angle_per_item(&self) -> f32 {
        angle_per_item(self.item_size.width, self.radius)
    }

    /// Scrollable content size.
    #[must_use]
    pub fn content_extent(&self) -> Size {
        content_extent(self.item_count, self.item_size, self.viewport.height)
    }

    /// Rotation of the first item at the current offset.
    #[must_use]
    pub fn current_angle(&self) -> f32 {
        current_angle(
            self.content_offset.x,
            self.viewport.width,
            self.content_extent().width,
            self.item_count,
            self.angle_per_item(),
        )
    }

    /// Visible index window.
    #[must_use]
    pub fn visible_range(&self) -> Option<VisibleRange> {
        visible_range(
            self.current_angle(),
            self.angle_per_item(),
            visible_half_angle(self.viewport, self.item_size, self.radius),
            self.item_count,
        )
    }
}

/// Compute the window and placements for one layout pass.
///
/// Placements are ordered by ascending index.
#[must_use]
pub fn compute_placements(input: &ArcInput) -> (Option<VisibleRange>, Vec<Placement>) {
    let Some(window) = input.visible_range() else {
        return (None, Vec::new());
    };

    let bounds = Rect::new(
        input.content_offset.x,
        input.content_offset.y,
        input.viewport.width,
        input.viewport.height,
    );
    let center = Point::new(bounds.center().x, bounds.mid_y());
    let anchor = anchor_point(input.item_size, input.radius);
    let angle = input.current_angle();
    let step = input.angle_per_item();

    let placements = window
        .indices()
        .map(|i| Placement::new(i, input.item_size, center, angle + step * i as f32, anchor))
        .collect();
    (Some(window), placements)
}

/// Arc layout holding its configuration and the last computed placements.
///
/// # Example
///
/// ```
/// use rotunda_core::Size;
/// use rotunda_layout::{ArcLayoutEngine, HostSnapshot};
///
/// let mut engine = ArcLayoutEngine::with_defaults();
/// let host = HostSnapshot::new(10, Size::new(320.0, 480.0));
///
/// let placements = engine.prepare(&host).unwrap();
/// assert_eq!(placements[0].index(), 0);
/// assert_eq!(placements[0].angle(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct ArcLayoutEngine {
    config: ArcLayoutConfig,
    window: Option<VisibleRange>,
    placements: Vec<Placement>,
    dirty: bool,
}

impl Default for ArcLayoutEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ArcLayoutEngine {
    /// Create an engine from a validated configuration.
    pub fn new(config: ArcLayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            window: None,
            placements: Vec::new(),
            dirty: true,
        })
    }

    /// Engine with the default card size and radius.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            config: ArcLayoutConfig::default(),
            window: None,
            placements: Vec::new(),
            dirty: true,
        }
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &ArcLayoutConfig {
        &self.config
    }

    /// Cylinder radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.config.radius
    }

    /// Change the radius. Cached placements go stale.
    pub fn set_radius(&mut self, radius: f32) -> Result<()> {
        validate_radius(radius)?;
        self.config.radius = radius;
        self.invalidate(Invalidation::RadiusChanged);
        Ok(())
    }

    /// Size shared by every item.
    #[must_use]
    pub const fn item_size(&self) -> Size {
        self.config.item_size
    }

    /// Angular spacing between items at the current radius.
    #[must_use]
    pub fn angle_per_item(&self) -> f32 {
        angle_per_item(self.config.item_size.width, self.config.radius)
    }

    /// Mark cached placements stale.
    pub fn invalidate(&mut self, reason: Invalidation) {
        trace!(?reason, "layout invalidated");
        self.dirty = true;
    }

    /// Whether placements must be recomputed before use.
    #[must_use]
    pub const fn needs_recompute(&self) -> bool {
        self.dirty
    }

    /// Every bounds change, scrolling included, relays out the arc.
    #[must_use]
    pub const fn should_invalidate_for_bounds_change(&self, _new_bounds: Rect) -> bool {
        true
    }

    /// Scrollable content size for the host's current geometry.
    #[must_use]
    pub fn collection_content_size<H: LayoutHost + ?Sized>(&self, host: &H) -> Size {
        content_extent(
            host.item_count(),
            self.config.item_size,
            host.viewport_size().height,
        )
    }

    /// Rotation of the first item for the host's current geometry.
    #[must_use]
    pub fn current_angle<H: LayoutHost + ?Sized>(&self, host: &H) -> f32 {
        self.input(host.content_offset(), host.viewport_size(), host.item_count())
            .current_angle()
    }

    /// Recompute placements from the host's current geometry.
    pub fn prepare<H: LayoutHost + ?Sized>(&mut self, host: &H) -> Result<&[Placement]> {
        self.recompute(host.content_offset(), host.viewport_size(), host.item_count())
    }

    /// Recompute placements from explicit inputs, replacing the cached list.
    pub fn recompute(
        &mut self,
        content_offset: Point,
        viewport: Size,
        item_count: usize,
    ) -> Result<&[Placement]> {
        if !viewport.is_non_negative() {
            return Err(LayoutError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !content_offset.x.is_finite() || !content_offset.y.is_finite() {
            return Err(LayoutError::InvalidOffset {
                x: content_offset.x,
                y: content_offset.y,
            });
        }

        let input = self.input(content_offset, viewport, item_count);
        let (window, placements) = compute_placements(&input);
        trace!(
            item_count,
            offset_x = content_offset.x,
            window = ?window,
            "arc layout recomputed"
        );

        self.window = window;
        self.placements = placements;
        self.dirty = false;
        Ok(&self.placements)
    }

    /// Placement for `index` from the last pass.
    ///
    /// Fails with [`LayoutError::StaleLayout`] until the engine is prepared
    /// again after an invalidation.
    pub fn placement_for_index(&self, index: usize) -> Result<&Placement> {
        self.ensure_fresh()?;
        self.window
            .filter(|w| w.contains(index))
            .and_then(|w| self.placements.get(index - w.start))
            .ok_or_else(|| LayoutError::OutOfRange {
                index,
                window: self.window,
            })
    }

    /// Placements intersecting `rect`.
    ///
    /// The visible window already limits the list, so every cached placement
    /// is returned. Fails with [`LayoutError::StaleLayout`] while the cache
    /// is invalidated.
    pub fn placements_in_rect(&self, _rect: Rect) -> Result<&[Placement]> {
        self.ensure_fresh()?;
        Ok(&self.placements)
    }

    fn ensure_fresh(&self) -> Result<()> {
        if self.dirty {
            Err(LayoutError::StaleLayout)
        } else {
            Ok(())
        }
    }

    /// Placements from the last pass, ordered by index, stale or not.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Visible window from the last pass.
    #[must_use]
    pub const fn visible_range(&self) -> Option<VisibleRange> {
        self.window
    }

    fn input(&self, content_offset: Point, viewport: Size, item_count: usize) -> ArcInput {
        ArcInput {
            content_offset,
            viewport,
            item_count,
            item_size: self.config.item_size,
            radius: self.config.radius,
        }
    }
}
