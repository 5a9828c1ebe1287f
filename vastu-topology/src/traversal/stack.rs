//! Bounded stack of pending branch states.

use crate::core::{Direction, GridCoord};
use crate::error::{Resource, Result, TopologyError};

use super::types::TraversalState;

/// Bounded LIFO of [`TraversalState`]s awaiting backtracking.
///
/// Every stored state has a non-empty remaining mask: pushing an empty one is
/// a no-op and retiring the last direction of a state removes it.
#[derive(Clone, Debug)]
pub struct BacktrackStack {
    entries: Vec<TraversalState>,
    capacity: usize,
    peak_depth: usize,
    peak_pending: usize,
}

impl BacktrackStack {
    /// Create an empty stack holding at most `capacity` states
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            peak_depth: 0,
            peak_pending: 0,
        }
    }

    /// Push a state. Fails with `CapacityExceeded` when the stack is full.
    pub fn push(&mut self, state: TraversalState) -> Result<()> {
        if state.remaining.is_empty() {
            return Ok(());
        }
        if self.entries.len() >= self.capacity {
            return Err(TopologyError::capacity(
                Resource::BacktrackStack,
                self.capacity,
            ));
        }
        self.entries.push(state);
        self.peak_depth = self.peak_depth.max(self.entries.len());
        self.peak_pending = self.peak_pending.max(self.pending_directions());
        Ok(())
    }

    /// Remove and return the most recently pushed state
    pub fn pop(&mut self) -> Option<TraversalState> {
        self.entries.pop()
    }

    /// Top state without removing it
    pub fn peek(&self) -> Option<&TraversalState> {
        self.entries.last()
    }

    /// Mutable top state, for narrowing its remaining mask in place
    pub fn peek_mut(&mut self) -> Option<&mut TraversalState> {
        self.entries.last_mut()
    }

    /// Clear `direction` from the pending mask saved for `coord`.
    ///
    /// Used when a corridor closes onto a known node: the direction pointing
    /// back along that corridor is already explored. Returns whether a
    /// pending direction was cleared.
    pub fn retire(&mut self, coord: GridCoord, direction: Direction) -> bool {
        let Some(pos) = self.entries.iter().rposition(|s| s.coord == coord) else {
            return false;
        };
        let cleared = self.entries[pos].remaining.remove(direction);
        if self.entries[pos].remaining.is_empty() {
            self.entries.remove(pos);
        }
        cleared
    }

    /// Number of saved states
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no states are saved
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if another push would fail
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Maximum number of saved states
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Unexplored directions summed over all saved states
    pub fn pending_directions(&self) -> usize {
        self.entries
            .iter()
            .map(|s| s.remaining.count() as usize)
            .sum()
    }

    /// Deepest the stack has been since the last reset
    pub fn peak_depth(&self) -> usize {
        self.peak_depth
    }

    /// Most pending directions seen at once since the last reset
    pub fn peak_pending(&self) -> usize {
        self.peak_pending
    }

    /// Drop all states and reset the peaks
    pub fn clear(&mut self) {
        self.entries.clear();
        self.peak_depth = 0;
        self.peak_pending = 0;
    }
}
