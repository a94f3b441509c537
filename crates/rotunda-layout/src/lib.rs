#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_const_for_fn)]
//! Arc layout engine for Rotunda collection views.
//!
//! Lays out a horizontally scrolling collection as a carousel: items hang
//! from the rim of a virtual cylinder and the scroll offset turns the
//! cylinder. Each pass yields one [`Placement`] per visible item with a
//! center, a rotation, a rotation pivot and a stacking order.
//!
//! The host view adapts its callbacks to the engine:
//!
//! - content size → [`ArcLayoutEngine::collection_content_size`]
//! - prepare / invalidation → [`ArcLayoutEngine::prepare`]
//! - attributes for an item → [`ArcLayoutEngine::placement_for_index`]
//! - attributes in a rect → [`ArcLayoutEngine::placements_in_rect`]

mod config;
mod engine;
mod error;
mod host;
mod placement;

pub use config::{ArcLayoutConfig, DEFAULT_ITEM_SIZE, DEFAULT_RADIUS};
pub use engine::{
    anchor_point, angle_at_extreme, angle_per_item, compute_placements, content_extent,
    current_angle, visible_half_angle, visible_range, ArcInput, ArcLayoutEngine,
};
pub use error::{LayoutError, Result};
pub use host::{HostSnapshot, Invalidation, LayoutHost};
pub use placement::{stack_order_for, Placement, VisibleRange};
