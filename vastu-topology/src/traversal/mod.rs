//! Depth-first grid traversal that extracts corridor topology.
//!
//! The engine walks the passable component containing the start cell as a
//! small state machine:
//!
//! ```text
//!   Scanning ──► Stepping(dir) ──► Scanning ...
//!       │                              ▲
//!       └──► Backtracking ─────────────┘  (pop pending branch)
//!                   │
//!                   └──► Terminated       (stack empty)
//! ```
//!
//! - Corridor cells (exactly two opposite neighbors) are walked through
//!   without emitting anything.
//! - Dead ends become `Endpoint` nodes; corners, T-junctions and crossings
//!   become decision nodes whose unexplored directions are saved on a
//!   bounded [`BacktrackStack`].
//! - Decision nodes are remembered in a bounded [`VisitedMemo`], so a
//!   corridor that loops back onto one closes a cycle with an edge instead
//!   of being walked again.
//!
//! Directions are always tried in the fixed order Up, Right, Down, Left,
//! which makes the emitted node and edge order deterministic.

mod config;
mod engine;
mod memo;
mod stack;
mod types;

pub use config::TraversalConfig;
pub use engine::TraversalEngine;
pub use memo::VisitedMemo;
pub use stack::BacktrackStack;
pub use types::{EngineState, ExtractionStats, TraversalState};
