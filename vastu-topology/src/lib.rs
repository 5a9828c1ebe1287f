//! # VastuTopology
//!
//! Converts a 2D passability grid into a compact topological graph of
//! corridors for path planning on memory-constrained robots.
//!
//! ## Overview
//!
//! A cleaning robot only needs to know where corridors meet, not every free
//! cell. The traversal engine walks the grid from a start cell and emits:
//!
//! - **Nodes** at dead ends, corners, T-junctions and crossings
//! - **Edges** for the straight corridors between them, weighted by length
//!
//! Every buffer involved (backtrack stack, visited memo, graph arena) has a
//! fixed capacity; running out is a reported error, never silent truncation.
//!
//! ## Quick Start
//!
//! ```
//! use vastu_topology::{GridCoord, PassabilityGrid, TopologyConfig, extract_topology};
//!
//! let grid = PassabilityGrid::from_ascii("
//!     ######
//!     #...#
//!     ######
//! ").unwrap();
//!
//! let (graph, stats) =
//!     extract_topology(&grid, GridCoord::new(0, 0), &TopologyConfig::default()).unwrap();
//!
//! assert_eq!(graph.count_by_kind().corner, 4);
//! assert_eq!(stats.cycles_closed, 1);
//! ```
//!
//! ## Pipeline
//!
//! ```text
//!   range sweeps ──► OccupancyMap2D ──► PassabilityGrid ──► TraversalEngine ──► TopologyGraph
//!                     (obstacles)        (GridSource)        (DFS + stack)        (GraphStore)
//! ```
//!
//! ## Coordinate System
//!
//! Grid cells are `(row, col)` with row 0 at the top. Exploration priority
//! is Up, Right, Down, Left.

#![warn(missing_docs)]

// Coordinates and directions
pub mod core;

// Grid access and cell classification
pub mod grid;

// Depth-first grid walk
pub mod traversal;

// Node/edge storage
pub mod graph;

// Obstacle map from range readings
pub mod mapping;

// YAML configuration
pub mod config;

mod error;

// Re-export commonly used types
pub use crate::core::{Direction, DirectionMask, GridCoord};

pub use error::{Resource, Result, TopologyError};

pub use grid::{CellClass, GridSource, PassabilityGrid, scan_directions};

pub use traversal::{
    BacktrackStack, EngineState, ExtractionStats, TraversalConfig, TraversalEngine,
    TraversalState, VisitedMemo,
};

pub use graph::{GraphEdge, GraphNode, GraphStore, KindCounts, NodeId, NodeKind, TopologyGraph};

pub use mapping::{Angle, OccupancyMap2D, RangeSample};

pub use config::{ConfigLoadError, TopologyConfig};

/// Extract the topology reachable from `start` into a fresh graph sized by `config`.
///
/// Shorthand for building a [`TraversalEngine`] and a [`TopologyGraph`] from
/// the same config and running one extraction.
pub fn extract_topology<G: GridSource + ?Sized>(
    grid: &G,
    start: GridCoord,
    config: &TopologyConfig,
) -> Result<(TopologyGraph, ExtractionStats)> {
    let mut engine = TraversalEngine::new(config.to_traversal_config());
    let mut graph = config.to_graph();
    let stats = engine.extract(grid, start, &mut graph)?;
    Ok((graph, stats))
}
