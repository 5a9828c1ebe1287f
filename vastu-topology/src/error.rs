//! Error types for topology extraction

use crate::core::GridCoord;
use crate::graph::NodeId;

/// Result type alias
pub type Result<T> = std::result::Result<T, TopologyError>;

/// Bounded resource that ran out during a conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    /// Pending branch states awaiting backtracking
    BacktrackStack,
    /// Decision nodes remembered for cycle detection
    VisitedMemo,
    /// Node slots in the graph store
    Nodes,
    /// Edge slots in the graph store
    Edges,
    /// Neighbor slots of a single node
    NodeDegree,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Resource::BacktrackStack => "backtrack stack",
            Resource::VisitedMemo => "visited memo",
            Resource::Nodes => "node storage",
            Resource::Edges => "edge storage",
            Resource::NodeDegree => "node neighbor list",
        };
        f.write_str(name)
    }
}

/// Topology extraction error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// A bounded container is full; the grid is too complex for the configured capacity
    #[error("Capacity exceeded: {resource} is full ({capacity} entries)")]
    CapacityExceeded {
        /// Which container overflowed
        resource: Resource,
        /// Its configured capacity
        capacity: usize,
    },

    /// Empty, ragged or oversized grid
    #[error("Malformed grid: {0}")]
    MalformedGrid(String),

    /// Start cell outside the grid or not traversable
    #[error("Invalid start cell {0}")]
    InvalidStart(GridCoord),

    /// Traversal did not finish within the step bound
    #[error("Iteration limit of {limit} steps reached")]
    IterationLimit {
        /// The step bound that was hit
        limit: usize,
    },

    /// Node id not present in the graph store
    #[error("Unknown node id {0}")]
    UnknownNode(NodeId),
}

impl TopologyError {
    /// Shorthand for [`TopologyError::CapacityExceeded`]
    pub fn capacity(resource: Resource, capacity: usize) -> Self {
        TopologyError::CapacityExceeded { resource, capacity }
    }

    /// True when the caller should retry with a larger capacity
    pub fn is_capacity(&self) -> bool {
        matches!(self, TopologyError::CapacityExceeded { .. })
    }
}
