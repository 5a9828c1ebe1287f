//! Bounded memo of decision nodes already emitted.

use crate::core::GridCoord;
use crate::error::{Resource, Result, TopologyError};
use crate::graph::NodeId;

/// Small bounded set of coordinates promoted to decision nodes.
///
/// Linear scan; the memo only ever holds tens of entries.
#[derive(Clone, Debug)]
pub struct VisitedMemo {
    entries: Vec<(GridCoord, NodeId)>,
    capacity: usize,
}

impl VisitedMemo {
    /// Create an empty memo holding at most `capacity` coordinates
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Whether `coord` has been registered
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.node_at(coord).is_some()
    }

    /// Node registered for `coord`
    pub fn node_at(&self, coord: GridCoord) -> Option<NodeId> {
        self.entries
            .iter()
            .find(|(c, _)| *c == coord)
            .map(|(_, id)| *id)
    }

    /// Register `coord` as node `id`.
    ///
    /// Returns `Ok(false)` if it was already present, and
    /// `CapacityExceeded` if the memo is full.
    pub fn insert(&mut self, coord: GridCoord, id: NodeId) -> Result<bool> {
        if self.contains(coord) {
            return Ok(false);
        }
        if self.entries.len() >= self.capacity {
            return Err(TopologyError::capacity(
                Resource::VisitedMemo,
                self.capacity,
            ));
        }
        self.entries.push((coord, id));
        Ok(true)
    }

    /// Number of registered coordinates
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of coordinates
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget all coordinates
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
