//! Traversal state types.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, DirectionMask, GridCoord};
use crate::graph::NodeId;

/// Saved branch record: a decision node and the directions still to explore.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraversalState {
    /// Cell of the decision node
    pub coord: GridCoord,
    /// Node emitted for that cell
    pub node: NodeId,
    /// Directions not yet explored from this node
    pub remaining: DirectionMask,
}

impl TraversalState {
    /// Create a new saved state
    pub fn new(coord: GridCoord, node: NodeId, remaining: DirectionMask) -> Self {
        Self {
            coord,
            node,
            remaining,
        }
    }
}

/// Engine state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Classify the current cell
    Scanning,
    /// Move one cell in the given direction
    Stepping(Direction),
    /// Resume from the backtrack stack
    Backtracking,
    /// Reachable component fully explored
    Terminated,
}

/// Summary of one conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Nodes emitted
    pub nodes: usize,
    /// Edges emitted
    pub edges: usize,
    /// Edges that closed onto an already known node
    pub cycles_closed: usize,
    /// Cells scanned
    pub iterations: usize,
    /// Deepest backtrack stack
    pub peak_stack_depth: usize,
    /// Most directions pending across the whole stack at once
    pub peak_pending_branches: usize,
}
