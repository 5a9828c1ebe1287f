//! Configuration for the traversal engine.

use serde::{Deserialize, Serialize};

/// Capacity and safety limits for one grid-to-graph conversion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Maximum simultaneously pending branch states (backtrack stack depth).
    /// Default: 10
    pub max_pending_branches: usize,

    /// Maximum decision nodes (start, corners, branches, intersections)
    /// remembered for cycle detection.
    /// Default: 32
    pub max_decision_nodes: usize,

    /// Scans allowed per grid cell before the traversal is aborted.
    /// Every cell is entered at most once per neighbor, so 4 is always enough.
    /// Default: 4
    pub steps_per_cell: usize,

    /// Largest accepted row or column count.
    /// Default: 128
    pub max_dimension: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_pending_branches: 10,
            max_decision_nodes: 32,
            steps_per_cell: 4,
            max_dimension: 128,
        }
    }
}

impl TraversalConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for backtrack stack depth.
    pub fn with_max_pending_branches(mut self, max: usize) -> Self {
        self.max_pending_branches = max;
        self
    }

    /// Builder-style setter for visited memo size.
    pub fn with_max_decision_nodes(mut self, max: usize) -> Self {
        self.max_decision_nodes = max;
        self
    }

    /// Builder-style setter for the per-cell step budget.
    pub fn with_steps_per_cell(mut self, steps: usize) -> Self {
        self.steps_per_cell = steps;
        self
    }

    /// Builder-style setter for the largest grid side.
    pub fn with_max_dimension(mut self, max: usize) -> Self {
        self.max_dimension = max;
        self
    }

    /// Step bound for a `rows × cols` grid.
    pub fn step_limit(&self, rows: usize, cols: usize) -> usize {
        self.steps_per_cell
            .saturating_mul(rows.saturating_mul(cols))
            .max(1)
    }
}
