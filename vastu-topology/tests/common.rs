//! Test utilities for topology extraction.
//!
//! Grids are written as ASCII art: `#` traversable, `.` wall.

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vastu_topology::{
    Direction, ExtractionStats, GridCoord, GridSource, PassabilityGrid, Result, TopologyGraph,
    TraversalConfig, TraversalEngine,
};

/// Parse an ASCII grid.
pub fn grid(text: &str) -> PassabilityGrid {
    PassabilityGrid::from_ascii(text).expect("valid ASCII grid")
}

/// Run one extraction with the given limits and a default-sized graph.
pub fn extract_with(
    config: TraversalConfig,
    grid: &PassabilityGrid,
    start: (usize, usize),
) -> Result<(TopologyGraph, ExtractionStats)> {
    let mut graph = TopologyGraph::with_capacity(1024, 2048);
    let stats = TraversalEngine::new(config).extract(grid, start.into(), &mut graph)?;
    Ok((graph, stats))
}

/// Run one extraction with default limits.
pub fn extract(grid: &PassabilityGrid, start: (usize, usize)) -> (TopologyGraph, ExtractionStats) {
    extract_with(TraversalConfig::default(), grid, start).expect("extraction succeeds")
}

/// Number of traversable cells 4-connected to `start`.
pub fn reachable_cells(grid: &PassabilityGrid, start: GridCoord) -> usize {
    let (rows, cols) = grid.dimensions();
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(cell) = queue.pop_front() {
        for dir in Direction::ALL {
            if let Some(next) = cell.neighbor(dir, rows, cols)
                && grid.is_passable(next)
                && seen.insert(next)
            {
                queue.push_back(next);
            }
        }
    }
    seen.len()
}

/// Random grid where each cell is traversable with probability `density`.
pub fn random_grid(seed: u64, rows: usize, cols: usize, density: f64) -> PassabilityGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = PassabilityGrid::new(rows, cols).expect("non-empty grid");
    for row in 0..rows {
        for col in 0..cols {
            grid.set(GridCoord::new(row, col), rng.random_bool(density));
        }
    }
    grid
}

/// A comb: a spine along row 0 with a tooth hanging down from every odd column.
///
/// ```text
/// #########
/// .#.#.#.#.
/// .#.#.#.#.
/// ```
pub fn comb(teeth: usize, tooth_len: usize) -> PassabilityGrid {
    let cols = teeth * 2 + 1;
    let mut grid = PassabilityGrid::new(tooth_len + 1, cols).expect("non-empty grid");
    for col in 0..cols {
        grid.set(GridCoord::new(0, col), true);
    }
    for tooth in 0..teeth {
        for row in 1..=tooth_len {
            grid.set(GridCoord::new(row, tooth * 2 + 1), true);
        }
    }
    grid
}
