//! Benchmark topology extraction and sweep integration.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use vastu_topology::{
    Angle, GridCoord, OccupancyMap2D, PassabilityGrid, RangeSample, TopologyGraph,
    TraversalConfig, TraversalEngine,
};

/// Corridors along every even row and column: an `n × n` city-block lattice.
fn lattice(n: usize) -> PassabilityGrid {
    let mut grid = PassabilityGrid::new(n, n).unwrap();
    for row in 0..n {
        for col in 0..n {
            grid.set(GridCoord::new(row, col), row % 2 == 0 || col % 2 == 0);
        }
    }
    grid
}

/// Serpentine corridor: long corridors joined by corners, no branches.
fn serpentine(n: usize) -> PassabilityGrid {
    let mut grid = PassabilityGrid::new(n, n).unwrap();
    for row in 0..n {
        for col in 0..n {
            let open = row % 2 == 0
                || (row % 4 == 1 && col == n - 1)
                || (row % 4 == 3 && col == 0);
            grid.set(GridCoord::new(row, col), open);
        }
    }
    grid
}

fn roomy_config() -> TraversalConfig {
    TraversalConfig::default()
        .with_max_pending_branches(4096)
        .with_max_decision_nodes(4096)
}

fn bench_lattice_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_lattice");

    for n in [9usize, 17, 33, 65].iter() {
        let grid = lattice(*n);
        let mut engine = TraversalEngine::new(roomy_config());

        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, _| {
            b.iter(|| {
                let mut graph = TopologyGraph::with_capacity(8192, 16384);
                let stats = engine
                    .extract(black_box(&grid), GridCoord::new(0, 0), &mut graph)
                    .unwrap();
                black_box(stats)
            })
        });
    }

    group.finish();
}

fn bench_serpentine(c: &mut Criterion) {
    let grid = serpentine(64);
    let mut engine = TraversalEngine::new(roomy_config());

    c.bench_function("extract_serpentine_64", |b| {
        b.iter(|| {
            let mut graph = TopologyGraph::with_capacity(1024, 1024);
            let stats = engine
                .extract(black_box(&grid), GridCoord::new(0, 0), &mut graph)
                .unwrap();
            black_box(stats)
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    let mut map = OccupancyMap2D::new(64, 64, 5.0).unwrap();
    let samples: Vec<_> = (0..360)
        .map(|deg| RangeSample::new(Angle::from_degrees(deg as f32), 100.0 + (deg % 40) as f32))
        .collect();

    c.bench_function("integrate_sweep_360pts", |b| {
        b.iter(|| {
            let marked = map.integrate_sweep(black_box(&samples));
            black_box(marked)
        })
    });
}

criterion_group!(benches, bench_lattice_sizes, bench_serpentine, bench_sweep);
criterion_main!(benches);
