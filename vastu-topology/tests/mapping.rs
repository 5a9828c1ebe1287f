//! Integration tests for the obstacle map and the map-to-graph pipeline.

mod common;

use approx::assert_relative_eq;
use vastu_topology::{
    Angle, ConfigLoadError, GridCoord, NodeKind, OccupancyMap2D, RangeSample, Resource,
    TopologyConfig, TopologyError, TopologyGraph, TraversalEngine, extract_topology,
};

/// 3×5 map with two pillars either side of the sensor:
///
/// ```text
/// #####
/// #.#.#
/// #####
/// ```
fn pillar_map() -> OccupancyMap2D {
    let mut map = OccupancyMap2D::new(5, 3, 10.0).unwrap();
    assert!(map.set_sensor_position(GridCoord::new(1, 2)));
    assert!(map.mark_obstacle(Angle::from_degrees(90.0), 10.0));
    assert!(map.mark_obstacle(Angle::from_degrees(270.0), 10.0));
    map
}

#[test]
fn test_map_snapshot_to_graph() {
    let map = pillar_map();
    let grid = map.passability().unwrap();
    assert_eq!(grid.to_ascii(), common::grid("#####\n#.#.#\n#####").to_ascii());

    let (graph, stats) =
        extract_topology(&grid, GridCoord::new(0, 0), &TopologyConfig::default()).unwrap();
    assert_eq!(graph.count_by_kind().corner, 4);
    assert_eq!(graph.count_by_kind().branch, 2);
    assert_eq!(stats.cycles_closed, 2);
}

#[test]
fn test_map_is_a_grid_source() {
    let map = pillar_map();
    let snapshot = map.passability().unwrap();

    let mut engine = TraversalEngine::with_defaults();
    let mut direct = TopologyGraph::default();
    let mut copied = TopologyGraph::default();
    engine.extract(&map, GridCoord::new(1, 2), &mut direct).unwrap();
    engine.extract(&snapshot, GridCoord::new(1, 2), &mut copied).unwrap();

    assert_eq!(direct.edge_set(), copied.edge_set());
    assert_eq!(
        direct.node_at(GridCoord::new(1, 2)).unwrap().kind,
        NodeKind::Start
    );
}

#[test]
fn test_obstacle_start_rejected() {
    let map = pillar_map();
    let err =
        extract_topology(&map, GridCoord::new(1, 1), &TopologyConfig::default()).unwrap_err();
    assert_eq!(err, TopologyError::InvalidStart(GridCoord::new(1, 1)));
}

#[test]
fn test_full_sweep_draws_a_ring() {
    let mut map = OccupancyMap2D::new(21, 21, 5.0)
        .unwrap()
        .with_max_range_cm(40.0);
    assert!(map.set_sensor_position(GridCoord::new(10, 10)));

    let samples: Vec<_> = (0..360)
        .map(|deg| RangeSample::new(Angle::from_degrees(deg as f32), 30.0))
        .chain(std::iter::once(RangeSample::new(Angle::ZERO, 90.0)))
        .collect();
    assert_eq!(map.integrate_sweep(&samples), 360);

    // Radius 6 cells in all four compass directions, sensor cell untouched
    for (row, col) in [(16, 10), (4, 10), (10, 16), (10, 4)] {
        assert!(map.is_obstacle(GridCoord::new(row, col)), "({}, {})", row, col);
    }
    assert!(!map.is_obstacle(GridCoord::new(10, 10)));
    // Out-of-range sample skipped
    assert!(!map.is_obstacle(GridCoord::new(19, 10)));

    // The sensor is enclosed: extraction stays inside the ring
    let mut config = TopologyConfig::default();
    config.capacity.max_pending_branches = 256;
    config.capacity.max_decision_nodes = 256;
    config.capacity.max_nodes = 256;
    config.capacity.max_edges = 512;

    let center = GridCoord::new(10, 10);
    let (graph, _) = extract_topology(&map, center, &config).unwrap();
    assert!(graph.nodes().iter().all(|n| n.coord.manhattan_distance(&center) < 12));
}

#[test]
fn test_heading_rotates_sweep() {
    let mut map = OccupancyMap2D::new(21, 21, 5.0).unwrap();
    map.set_sensor_position(GridCoord::new(10, 10));
    map.rotate_sensor(Angle::from_degrees(180.0));

    map.integrate_sweep(&[RangeSample::new(Angle::ZERO, 25.0)]);
    assert!(map.is_obstacle(GridCoord::new(5, 10)));
    assert_relative_eq!(map.sensor_heading().degrees(), 180.0, epsilon = 1e-4);
}

#[test]
fn test_config_capacity_applies() {
    let config = TopologyConfig::from_yaml("capacity:\n  max_nodes: 3\n").unwrap();
    let err = extract_topology(&pillar_map(), GridCoord::new(0, 0), &config).unwrap_err();
    assert_eq!(err, TopologyError::capacity(Resource::Nodes, 3));
}

#[test]
fn test_config_map_geometry() {
    let config =
        TopologyConfig::from_yaml("mapping:\n  width: 8\n  height: 4\n  scale_cm: 2.5\n").unwrap();
    let map = config.to_map().unwrap();
    assert_eq!((map.width(), map.height()), (8, 4));
    assert_relative_eq!(map.scale_cm(), 2.5);
    assert_eq!(map.sensor_position(), GridCoord::new(2, 4));

    let bad = TopologyConfig::from_yaml("mapping: 7").unwrap_err();
    assert!(matches!(bad, ConfigLoadError::Parse(_)));
}
