//! Fixed-capacity arena implementation of [`GraphStore`].

use serde::{Deserialize, Serialize};

use crate::config::TopologyConfig;
use crate::core::GridCoord;
use crate::error::{Resource, Result, TopologyError};

use super::store::{GraphStore, NodeId, NodeKind};

/// A grid cell has at most four neighbors, so no node can have more corridors.
pub const MAX_NODE_DEGREE: usize = 4;

/// A node in the topology graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Arena handle
    pub id: NodeId,
    /// Grid cell the node sits on
    pub coord: GridCoord,
    /// Point-of-interest kind
    pub kind: NodeKind,
    /// Adjacent nodes, one entry per corridor
    neighbors: Vec<NodeId>,
}

impl GraphNode {
    fn new(id: NodeId, coord: GridCoord, kind: NodeKind) -> Self {
        Self {
            id,
            coord,
            kind,
            neighbors: Vec::with_capacity(MAX_NODE_DEGREE),
        }
    }

    /// Adjacent node ids
    #[inline]
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Number of corridors attached to this node
    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// A corridor between two nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// First endpoint (the node the corridor was walked from)
    pub a: NodeId,
    /// Second endpoint
    pub b: NodeId,
    /// Corridor length in cell steps (adjacent nodes = 1)
    pub length: usize,
}

/// Node counts by kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCounts {
    /// Dead ends
    pub endpoint: usize,
    /// Turns
    pub corner: usize,
    /// T-junctions
    pub branch: usize,
    /// Crossings
    pub intersection: usize,
    /// Mid-corridor start cells
    pub start: usize,
}

impl KindCounts {
    /// Total nodes counted
    pub fn total(&self) -> usize {
        self.endpoint + self.corner + self.branch + self.intersection + self.start
    }
}

/// Arena-backed topology graph with fixed node and edge capacity.
///
/// Nodes are addressed by [`NodeId`]s handed out in insertion order; each
/// node keeps a bounded list of its neighbors.
///
/// # Example
///
/// ```
/// use vastu_topology::{GraphStore, GridCoord, NodeKind, TopologyGraph};
///
/// let mut graph = TopologyGraph::with_capacity(8, 8);
/// let a = graph.add_node(GridCoord::new(0, 0), NodeKind::Endpoint).unwrap();
/// let b = graph.add_node(GridCoord::new(0, 5), NodeKind::Endpoint).unwrap();
/// graph.add_edge(a, b, 5).unwrap();
///
/// assert_eq!(graph.neighbors(a), &[b]);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "GraphRecord")]
pub struct TopologyGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    max_nodes: usize,
    max_edges: usize,
}

/// Unchecked serialized form of [`TopologyGraph`].
#[derive(Deserialize)]
struct GraphRecord {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    max_nodes: usize,
    max_edges: usize,
}

impl TryFrom<GraphRecord> for TopologyGraph {
    type Error = TopologyError;

    /// Accept only graphs the arena could have built itself: ids match
    /// positions, every referenced id exists, and no limit is exceeded.
    fn try_from(record: GraphRecord) -> Result<Self> {
        let max_nodes = record.max_nodes.min(u16::MAX as usize + 1);
        if record.nodes.len() > max_nodes {
            return Err(TopologyError::capacity(Resource::Nodes, max_nodes));
        }
        if record.edges.len() > record.max_edges {
            return Err(TopologyError::capacity(Resource::Edges, record.max_edges));
        }

        let count = record.nodes.len();
        let known = |id: NodeId| {
            if id.index() < count {
                Ok(())
            } else {
                Err(TopologyError::UnknownNode(id))
            }
        };
        for (i, node) in record.nodes.iter().enumerate() {
            if node.id.index() != i {
                return Err(TopologyError::UnknownNode(node.id));
            }
            if node.neighbors.len() > MAX_NODE_DEGREE {
                return Err(TopologyError::capacity(
                    Resource::NodeDegree,
                    MAX_NODE_DEGREE,
                ));
            }
            node.neighbors.iter().try_for_each(|&id| known(id))?;
        }
        for edge in &record.edges {
            known(edge.a)?;
            known(edge.b)?;
        }

        Ok(Self {
            nodes: record.nodes,
            edges: record.edges,
            max_nodes,
            max_edges: record.max_edges,
        })
    }
}

impl TopologyGraph {
    /// Create an empty graph. `max_nodes` is clamped to the id range.
    pub fn with_capacity(max_nodes: usize, max_edges: usize) -> Self {
        let max_nodes = max_nodes.min(u16::MAX as usize + 1);
        Self {
            nodes: Vec::with_capacity(max_nodes),
            edges: Vec::with_capacity(max_edges),
            max_nodes,
            max_edges,
        }
    }

    /// Create an empty graph sized by the capacity section of `config`
    pub fn from_config(config: &TopologyConfig) -> Self {
        Self::with_capacity(config.capacity.max_nodes, config.capacity.max_edges)
    }

    /// All nodes, in id order
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// All edges, in discovery order
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Look up a node
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(id.index())
    }

    /// Node sitting on `coord`, if any
    pub fn node_at(&self, coord: GridCoord) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.coord == coord)
    }

    /// Neighbors of `id` (empty for unknown ids)
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(GraphNode::neighbors).unwrap_or(&[])
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Node capacity
    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    /// Edge capacity
    pub fn max_edges(&self) -> usize {
        self.max_edges
    }

    /// Check if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove all nodes and edges, keeping capacity
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Count nodes by kind
    pub fn count_by_kind(&self) -> KindCounts {
        let mut counts = KindCounts::default();
        for node in &self.nodes {
            match node.kind {
                NodeKind::Endpoint => counts.endpoint += 1,
                NodeKind::Corner => counts.corner += 1,
                NodeKind::Branch => counts.branch += 1,
                NodeKind::Intersection => counts.intersection += 1,
                NodeKind::Start => counts.start += 1,
            }
        }
        counts
    }

    /// Nodes as sorted `(coord, kind)` pairs, independent of id assignment
    pub fn node_set(&self) -> Vec<(GridCoord, NodeKind)> {
        let mut set: Vec<_> = self.nodes.iter().map(|n| (n.coord, n.kind)).collect();
        set.sort();
        set
    }

    /// Edges as sorted `(coord, coord, length)` triples with the smaller
    /// coordinate first, independent of id assignment and walk direction
    pub fn edge_set(&self) -> Vec<(GridCoord, GridCoord, usize)> {
        let mut set: Vec<_> = self
            .edges
            .iter()
            .filter_map(|e| {
                let a = self.node(e.a)?.coord;
                let b = self.node(e.b)?.coord;
                Some((a.min(b), a.max(b), e.length))
            })
            .collect();
        set.sort();
        set
    }

    /// Number of cells strictly inside corridors (excluding the end nodes)
    pub fn corridor_cells(&self) -> usize {
        self.edges.iter().map(|e| e.length.saturating_sub(1)).sum()
    }

    fn check_node(&self, id: NodeId) -> Result<()> {
        if id.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(TopologyError::UnknownNode(id))
        }
    }
}

impl Default for TopologyGraph {
    fn default() -> Self {
        Self::with_capacity(64, 128)
    }
}

impl GraphStore for TopologyGraph {
    fn add_node(&mut self, coord: GridCoord, kind: NodeKind) -> Result<NodeId> {
        if self.nodes.len() >= self.max_nodes {
            return Err(TopologyError::capacity(Resource::Nodes, self.max_nodes));
        }
        let id = NodeId(self.nodes.len() as u16);
        self.nodes.push(GraphNode::new(id, coord, kind));
        Ok(id)
    }

    fn add_edge(&mut self, a: NodeId, b: NodeId, length: usize) -> Result<()> {
        self.check_node(a)?;
        self.check_node(b)?;
        if self.edges.len() >= self.max_edges {
            return Err(TopologyError::capacity(Resource::Edges, self.max_edges));
        }
        if self.nodes[a.index()].degree() >= MAX_NODE_DEGREE
            || self.nodes[b.index()].degree() >= MAX_NODE_DEGREE
        {
            return Err(TopologyError::capacity(
                Resource::NodeDegree,
                MAX_NODE_DEGREE,
            ));
        }

        self.nodes[a.index()].neighbors.push(b);
        self.nodes[b.index()].neighbors.push(a);
        self.edges.push(GraphEdge { a, b, length });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_nodes_and_edges() {
        let mut graph = TopologyGraph::with_capacity(4, 4);
        let a = graph.add_node(GridCoord::new(0, 0), NodeKind::Endpoint).unwrap();
        let b = graph.add_node(GridCoord::new(0, 3), NodeKind::Corner).unwrap();

        assert_eq!(a, NodeId(0));
        assert_eq!(b, NodeId(1));

        graph.add_edge(a, b, 3).unwrap();
        assert_eq!(graph.neighbors(a), &[b]);
        assert_eq!(graph.neighbors(b), &[a]);
        assert_eq!(graph.node(b).unwrap().degree(), 1);
        assert_eq!(graph.corridor_cells(), 2);
    }

    #[test]
    fn test_node_capacity() {
        let mut graph = TopologyGraph::with_capacity(1, 4);
        graph.add_node(GridCoord::new(0, 0), NodeKind::Endpoint).unwrap();
        let err = graph
            .add_node(GridCoord::new(0, 1), NodeKind::Endpoint)
            .unwrap_err();
        assert_eq!(err, TopologyError::capacity(Resource::Nodes, 1));
    }

    #[test]
    fn test_edge_capacity() {
        let mut graph = TopologyGraph::with_capacity(4, 1);
        let a = graph.add_node(GridCoord::new(0, 0), NodeKind::Corner).unwrap();
        let b = graph.add_node(GridCoord::new(0, 1), NodeKind::Corner).unwrap();
        graph.add_edge(a, b, 1).unwrap();
        let err = graph.add_edge(b, a, 1).unwrap_err();
        assert_eq!(err, TopologyError::capacity(Resource::Edges, 1));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_degree_capacity() {
        let mut graph = TopologyGraph::with_capacity(8, 8);
        let hub = graph
            .add_node(GridCoord::new(2, 2), NodeKind::Intersection)
            .unwrap();
        for col in 0..MAX_NODE_DEGREE {
            let leaf = graph.add_node(GridCoord::new(0, col), NodeKind::Endpoint).unwrap();
            graph.add_edge(hub, leaf, 2).unwrap();
        }
        let extra = graph.add_node(GridCoord::new(4, 4), NodeKind::Endpoint).unwrap();
        let err = graph.add_edge(hub, extra, 1).unwrap_err();
        assert_eq!(
            err,
            TopologyError::capacity(Resource::NodeDegree, MAX_NODE_DEGREE)
        );
        // Failed insert must not leave a half-linked edge behind
        assert!(graph.neighbors(extra).is_empty());
    }

    #[test]
    fn test_unknown_node() {
        let mut graph = TopologyGraph::default();
        let a = graph.add_node(GridCoord::new(0, 0), NodeKind::Endpoint).unwrap();
        let err = graph.add_edge(a, NodeId(9), 1).unwrap_err();
        assert_eq!(err, TopologyError::UnknownNode(NodeId(9)));
    }

    #[test]
    fn test_edge_set_is_direction_independent() {
        let mut forward = TopologyGraph::default();
        let a = forward.add_node(GridCoord::new(1, 1), NodeKind::Corner).unwrap();
        let b = forward.add_node(GridCoord::new(1, 4), NodeKind::Corner).unwrap();
        forward.add_edge(a, b, 3).unwrap();

        let mut backward = TopologyGraph::default();
        let b2 = backward.add_node(GridCoord::new(1, 4), NodeKind::Corner).unwrap();
        let a2 = backward.add_node(GridCoord::new(1, 1), NodeKind::Corner).unwrap();
        backward.add_edge(b2, a2, 3).unwrap();

        assert_eq!(forward.edge_set(), backward.edge_set());
        assert_eq!(forward.node_set(), backward.node_set());
    }

    #[test]
    fn test_count_by_kind() {
        let mut graph = TopologyGraph::default();
        graph.add_node(GridCoord::new(0, 0), NodeKind::Endpoint).unwrap();
        graph.add_node(GridCoord::new(0, 1), NodeKind::Endpoint).unwrap();
        graph.add_node(GridCoord::new(0, 2), NodeKind::Branch).unwrap();

        let counts = graph.count_by_kind();
        assert_eq!(counts.endpoint, 2);
        assert_eq!(counts.branch, 1);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_deserialize_round_trip() {
        let mut graph = TopologyGraph::with_capacity(4, 4);
        let a = graph.add_node(GridCoord::new(0, 0), NodeKind::Corner).unwrap();
        let b = graph.add_node(GridCoord::new(0, 3), NodeKind::Endpoint).unwrap();
        graph.add_edge(a, b, 3).unwrap();

        let yaml = serde_yaml::to_string(&graph).unwrap();
        let parsed: TopologyGraph = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.edge_set(), graph.edge_set());
        assert_eq!(parsed.neighbors(b), &[a]);
        assert_eq!(parsed.max_edges(), 4);
    }

    #[test]
    fn test_deserialize_rejects_dangling_edge() {
        let yaml = "
nodes:
  - id: 0
    coord: { row: 0, col: 0 }
    kind: Endpoint
    neighbors: []
edges:
  - { a: 0, b: 5, length: 1 }
max_nodes: 4
max_edges: 4
";
        let err = serde_yaml::from_str::<TopologyGraph>(yaml).unwrap_err();
        assert!(err.to_string().contains("Unknown node id #5"), "{}", err);
    }

    #[test]
    fn test_deserialize_rejects_bad_ids_and_limits() {
        let misnumbered = "
nodes:
  - id: 3
    coord: { row: 0, col: 0 }
    kind: Endpoint
    neighbors: []
edges: []
max_nodes: 4
max_edges: 4
";
        assert!(serde_yaml::from_str::<TopologyGraph>(misnumbered).is_err());

        let dangling_neighbor = "
nodes:
  - id: 0
    coord: { row: 0, col: 0 }
    kind: Endpoint
    neighbors: [1]
edges: []
max_nodes: 4
max_edges: 4
";
        assert!(serde_yaml::from_str::<TopologyGraph>(dangling_neighbor).is_err());

        let over_capacity = "
nodes: []
edges:
  - { a: 0, b: 0, length: 1 }
max_nodes: 4
max_edges: 0
";
        let err = serde_yaml::from_str::<TopologyGraph>(over_capacity).unwrap_err();
        assert!(err.to_string().contains("Capacity exceeded"), "{}", err);
    }

    #[test]
    fn test_clear() {
        let mut graph = TopologyGraph::with_capacity(2, 2);
        graph.add_node(GridCoord::new(0, 0), NodeKind::Endpoint).unwrap();
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.max_nodes(), 2);
    }
}
