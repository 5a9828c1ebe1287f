//! Topology graph storage.
//!
//! The traversal engine writes its result through the [`GraphStore`] trait;
//! [`TopologyGraph`] is the bundled fixed-capacity arena implementation that
//! a pathfinder can consume directly.

mod arena;
mod store;

pub use arena::{GraphEdge, GraphNode, KindCounts, MAX_NODE_DEGREE, TopologyGraph};
pub use store::{GraphStore, NodeId, NodeKind};
