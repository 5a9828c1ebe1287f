//! Graph store seam between the traversal engine and its output.

use serde::{Deserialize, Serialize};

use crate::core::GridCoord;
use crate::error::Result;

/// Stable small integer handle of a node in a graph store.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct NodeId(pub u16);

impl NodeId {
    /// Index into the store's node arena
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of point of interest a node marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeKind {
    /// Dead end (or an isolated cell)
    Endpoint,
    /// 90° turn
    Corner,
    /// T-junction
    Branch,
    /// Four-way crossing
    Intersection,
    /// Start cell lying in the middle of a straight corridor
    Start,
}

/// Sink for the nodes and edges produced by a traversal.
///
/// Implementations own the topology and decide how much of it they can hold;
/// running out of room must be reported as
/// [`TopologyError::CapacityExceeded`](crate::TopologyError::CapacityExceeded).
pub trait GraphStore {
    /// Register a node at `coord`.
    fn add_node(&mut self, coord: GridCoord, kind: NodeKind) -> Result<NodeId>;

    /// Register a bidirectional corridor of `length` cell steps between two nodes.
    fn add_edge(&mut self, a: NodeId, b: NodeId, length: usize) -> Result<()>;
}
