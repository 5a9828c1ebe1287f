//! Capacity section: fixed limits for the traversal and the graph arena.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Capacity configuration section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacitySection {
    /// Backtrack stack depth
    #[serde(default = "defaults::max_pending_branches")]
    pub max_pending_branches: usize,

    /// Visited memo size (decision nodes remembered for cycle detection)
    #[serde(default = "defaults::max_decision_nodes")]
    pub max_decision_nodes: usize,

    /// Graph node capacity
    #[serde(default = "defaults::max_nodes")]
    pub max_nodes: usize,

    /// Graph edge capacity
    #[serde(default = "defaults::max_edges")]
    pub max_edges: usize,
}

impl Default for CapacitySection {
    fn default() -> Self {
        Self {
            max_pending_branches: defaults::max_pending_branches(),
            max_decision_nodes: defaults::max_decision_nodes(),
            max_nodes: defaults::max_nodes(),
            max_edges: defaults::max_edges(),
        }
    }
}
