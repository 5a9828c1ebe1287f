//! Mapping section: obstacle map geometry.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::mapping::OccupancyMap2D;

use super::defaults;

/// Mapping configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MappingSection {
    /// Map width (cells)
    #[serde(default = "defaults::map_size")]
    pub width: usize,

    /// Map height (cells)
    #[serde(default = "defaults::map_size")]
    pub height: usize,

    /// Centimeters per cell
    #[serde(default = "defaults::scale_cm")]
    pub scale_cm: f32,

    /// Readings beyond this distance are dropped (cm)
    #[serde(default = "defaults::max_range_cm")]
    pub max_range_cm: f32,
}

impl Default for MappingSection {
    fn default() -> Self {
        Self {
            width: defaults::map_size(),
            height: defaults::map_size(),
            scale_cm: defaults::scale_cm(),
            max_range_cm: defaults::max_range_cm(),
        }
    }
}

impl MappingSection {
    /// Build an empty obstacle map with these settings
    pub fn to_map(&self) -> Result<OccupancyMap2D> {
        Ok(OccupancyMap2D::new(self.width, self.height, self.scale_cm)?
            .with_max_range_cm(self.max_range_cm))
    }
}
