//! Error types for rotunda-layout.

use crate::placement::VisibleRange;
use thiserror::Error;

/// Errors surfaced by the arc layout engine.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Index lookup outside the last computed visible window.
    #[error("item {index} is outside the visible window {}", describe_window(*.window))]
    OutOfRange {
        index: usize,
        window: Option<VisibleRange>,
    },

    /// Radius is zero, negative or not finite.
    #[error("radius must be finite and positive, got {0}")]
    InvalidRadius(f32),

    /// Item size has a zero, negative or non-finite dimension.
    #[error("item size must be positive, got {width}x{height}")]
    InvalidItemSize { width: f32, height: f32 },

    /// Viewport has a negative or non-finite dimension.
    #[error("viewport size must be non-negative, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    /// Scroll offset is NaN or infinite.
    #[error("content offset must be finite, got ({x}, {y})")]
    InvalidOffset { x: f32, y: f32 },

    /// Queried after an invalidation without preparing again.
    #[error("layout is stale, prepare it before querying placements")]
    StaleLayout,

    /// Layout configuration could not be parsed.
    #[error("invalid layout config: {0}")]
    Config(#[from] serde_yaml_ng::Error),
}

/// Result alias for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

fn describe_window(window: Option<VisibleRange>) -> String {
    window.map_or_else(|| "(empty)".to_string(), |w| w.to_string())
}
