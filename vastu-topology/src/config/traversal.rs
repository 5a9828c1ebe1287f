//! Traversal section: safety bounds for the grid walk.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Traversal configuration section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalSection {
    /// Scans allowed per grid cell before aborting
    #[serde(default = "defaults::steps_per_cell")]
    pub steps_per_cell: usize,

    /// Largest accepted grid side (cells)
    #[serde(default = "defaults::max_dimension")]
    pub max_dimension: usize,
}

impl Default for TraversalSection {
    fn default() -> Self {
        Self {
            steps_per_cell: defaults::steps_per_cell(),
            max_dimension: defaults::max_dimension(),
        }
    }
}
