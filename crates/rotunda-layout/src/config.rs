//! Arc layout configuration.

use crate::error::{LayoutError, Result};
use rotunda_core::Size;
use serde::{Deserialize, Serialize};

/// Default item size of a carousel card.
pub const DEFAULT_ITEM_SIZE: Size = Size::new(133.0, 173.0);

/// Default radius of the virtual cylinder.
pub const DEFAULT_RADIUS: f32 = 500.0;

/// Configuration for an [`ArcLayoutEngine`](crate::ArcLayoutEngine).
///
/// ```yaml
/// item_size:
///   width: 133
///   height: 173
/// radius: 500
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcLayoutConfig {
    /// Size shared by every item
    pub item_size: Size,
    /// Radius of the virtual cylinder the items swing on
    pub radius: f32,
}

impl Default for ArcLayoutConfig {
    fn default() -> Self {
        Self {
            item_size: DEFAULT_ITEM_SIZE,
            radius: DEFAULT_RADIUS,
        }
    }
}

impl ArcLayoutConfig {
    /// Create a validated configuration.
    pub fn new(item_size: Size, radius: f32) -> Result<Self> {
        let config = Self { item_size, radius };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that radius and item size are usable.
    pub fn validate(&self) -> Result<()> {
        validate_radius(self.radius)?;
        if !self.item_size.is_positive() {
            return Err(LayoutError::InvalidItemSize {
                width: self.item_size.width,
                height: self.item_size.height,
            });
        }
        Ok(())
    }
}

pub(crate) fn validate_radius(radius: f32) -> Result<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidRadius(radius))
    }
}
