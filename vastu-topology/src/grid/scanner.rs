//! Four-connected neighborhood scanning and cell classification.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, DirectionMask, GridCoord};
use crate::graph::NodeKind;

use super::passability::GridSource;

/// Passability mask of the four neighbors of `coord`.
///
/// Neighbors that fall outside the grid are reported as impassable and are
/// never read from the grid.
pub fn scan_directions<G: GridSource + ?Sized>(grid: &G, coord: GridCoord) -> DirectionMask {
    let (rows, cols) = grid.dimensions();
    let mut mask = DirectionMask::EMPTY;
    for direction in Direction::ALL {
        if let Some(neighbor) = coord.neighbor(direction, rows, cols)
            && grid.is_passable(neighbor)
        {
            mask.insert(direction);
        }
    }
    mask
}

/// Topological role of a cell, derived from its neighbor mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellClass {
    /// No passable neighbors
    Isolated,
    /// One passable neighbor (dead end)
    Endpoint,
    /// Two opposite neighbors: part of a straight corridor
    Corridor,
    /// Two perpendicular neighbors
    Corner,
    /// Three neighbors (T-junction)
    Branch,
    /// All four neighbors
    Intersection,
}

impl CellClass {
    /// Classify from the full (unsuppressed) neighbor mask.
    pub fn from_mask(mask: DirectionMask) -> Self {
        match mask.count() {
            0 => CellClass::Isolated,
            1 => CellClass::Endpoint,
            2 if mask.is_colinear() => CellClass::Corridor,
            2 => CellClass::Corner,
            3 => CellClass::Branch,
            _ => CellClass::Intersection,
        }
    }

    /// Graph node kind emitted for a cell of this class.
    ///
    /// Isolated cells become endpoints (a graph of one node). Corridor cells
    /// have no kind of their own and only become nodes as the start cell.
    pub fn node_kind(self) -> Option<NodeKind> {
        match self {
            CellClass::Isolated | CellClass::Endpoint => Some(NodeKind::Endpoint),
            CellClass::Corridor => None,
            CellClass::Corner => Some(NodeKind::Corner),
            CellClass::Branch => Some(NodeKind::Branch),
            CellClass::Intersection => Some(NodeKind::Intersection),
        }
    }

    /// Corner, branch or intersection: always emitted as a node and kept in
    /// the visited memo. The start cell is treated the same way whatever
    /// its class.
    #[inline]
    pub fn is_decision(self) -> bool {
        matches!(
            self,
            CellClass::Corner | CellClass::Branch | CellClass::Intersection
        )
    }
}
