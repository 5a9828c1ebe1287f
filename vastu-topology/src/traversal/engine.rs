//! Grid-to-graph traversal state machine.

use log::{debug, trace, warn};

use crate::core::{Direction, DirectionMask, GridCoord};
use crate::error::{Result, TopologyError};
use crate::graph::{GraphStore, NodeId, NodeKind};
use crate::grid::{CellClass, GridSource, scan_directions};

use super::config::TraversalConfig;
use super::memo::VisitedMemo;
use super::stack::BacktrackStack;
use super::types::{EngineState, ExtractionStats, TraversalState};

/// Walks a passability grid and emits its corridor topology into a [`GraphStore`].
///
/// The engine owns all traversal state (backtrack stack, visited memo, last
/// step direction), so one instance can be reused across grids; every call
/// to [`extract`](Self::extract) starts from a clean slate.
///
/// # Example
///
/// ```
/// use vastu_topology::{GridCoord, PassabilityGrid, TopologyGraph, TraversalEngine};
///
/// let grid = PassabilityGrid::from_ascii("
///     .#.
///     ####
///     .#.
/// ").unwrap();
///
/// let mut engine = TraversalEngine::with_defaults();
/// let mut graph = TopologyGraph::default();
/// let stats = engine.extract(&grid, GridCoord::new(1, 1), &mut graph).unwrap();
///
/// assert_eq!(stats.nodes, 5);
/// assert_eq!(stats.edges, 4);
/// ```
#[derive(Clone, Debug)]
pub struct TraversalEngine {
    config: TraversalConfig,
    stack: BacktrackStack,
    memo: VisitedMemo,
    state: EngineState,
    start: GridCoord,
    current: GridCoord,
    /// Direction of the step that reached `current`; `None` right after a
    /// (re)start, when there is nothing to suppress.
    arrived_from: Option<Direction>,
    /// Node the corridor being walked started from.
    origin: Option<NodeId>,
    corridor_len: usize,
    stats: ExtractionStats,
}

impl TraversalEngine {
    /// Create an engine with the given limits
    pub fn new(config: TraversalConfig) -> Self {
        Self {
            stack: BacktrackStack::new(config.max_pending_branches),
            memo: VisitedMemo::new(config.max_decision_nodes),
            config,
            state: EngineState::Terminated,
            start: GridCoord::default(),
            current: GridCoord::default(),
            arrived_from: None,
            origin: None,
            corridor_len: 0,
            stats: ExtractionStats::default(),
        }
    }

    /// Create an engine with default limits
    pub fn with_defaults() -> Self {
        Self::new(TraversalConfig::default())
    }

    /// Engine limits
    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// Current state machine state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Pending branch states
    pub fn stack(&self) -> &BacktrackStack {
        &self.stack
    }

    /// Decision nodes seen so far
    pub fn memo(&self) -> &VisitedMemo {
        &self.memo
    }

    /// Convert the component of `grid` reachable from `start` into nodes and
    /// edges on `store`.
    ///
    /// Fails before touching `store` if the grid is empty or too large, or if
    /// `start` is outside the grid or blocked. Fails part-way with
    /// `CapacityExceeded` when the stack, memo or store runs out of room, and
    /// with `IterationLimit` if the step bound is hit.
    pub fn extract<G, S>(
        &mut self,
        grid: &G,
        start: GridCoord,
        store: &mut S,
    ) -> Result<ExtractionStats>
    where
        G: GridSource + ?Sized,
        S: GraphStore + ?Sized,
    {
        self.validate(grid, start)?;
        self.reset(start);

        let (rows, cols) = grid.dimensions();
        let limit = self.config.step_limit(rows, cols);
        debug!(
            "[Topology] extract: {}x{} grid, start={}, step limit={}",
            rows, cols, start, limit
        );

        match self.run(grid, store, limit) {
            Ok(stats) => {
                debug!(
                    "[Topology] SUCCESS: {} nodes, {} edges, {} cycles, {} scans, peak stack={}",
                    stats.nodes,
                    stats.edges,
                    stats.cycles_closed,
                    stats.iterations,
                    stats.peak_stack_depth
                );
                Ok(stats)
            }
            Err(e) => {
                debug!(
                    "[Topology] FAILED at {} after {} scans: {}",
                    self.current, self.stats.iterations, e
                );
                Err(e)
            }
        }
    }

    fn validate<G: GridSource + ?Sized>(&self, grid: &G, start: GridCoord) -> Result<()> {
        let (rows, cols) = grid.dimensions();
        if rows == 0 || cols == 0 {
            return Err(TopologyError::MalformedGrid(format!(
                "grid must have at least one cell, got {}x{}",
                rows, cols
            )));
        }
        let max = self.config.max_dimension;
        if rows > max || cols > max {
            return Err(TopologyError::MalformedGrid(format!(
                "{}x{} grid exceeds the {} cell limit per axis",
                rows, cols, max
            )));
        }
        if !start.within(rows, cols) || !grid.is_passable(start) {
            return Err(TopologyError::InvalidStart(start));
        }
        Ok(())
    }

    fn reset(&mut self, start: GridCoord) {
        self.stack.clear();
        self.memo.clear();
        self.state = EngineState::Scanning;
        self.start = start;
        self.current = start;
        self.arrived_from = None;
        self.origin = None;
        self.corridor_len = 0;
        self.stats = ExtractionStats::default();
    }

    fn run<G, S>(&mut self, grid: &G, store: &mut S, limit: usize) -> Result<ExtractionStats>
    where
        G: GridSource + ?Sized,
        S: GraphStore + ?Sized,
    {
        let (rows, cols) = grid.dimensions();
        loop {
            self.state = match self.state {
                EngineState::Scanning => {
                    if self.stats.iterations >= limit {
                        return Err(TopologyError::IterationLimit { limit });
                    }
                    self.stats.iterations += 1;
                    self.visit(grid, store)?
                }
                EngineState::Stepping(direction) => self.step(direction, rows, cols),
                EngineState::Backtracking => self.resume(),
                EngineState::Terminated => break,
            };
        }

        self.stats.peak_stack_depth = self.stack.peak_depth();
        self.stats.peak_pending_branches = self.stack.peak_pending();
        Ok(self.stats)
    }

    /// Classify the current cell and decide where to go next.
    fn visit<G, S>(&mut self, grid: &G, store: &mut S) -> Result<EngineState>
    where
        G: GridSource + ?Sized,
        S: GraphStore + ?Sized,
    {
        let coord = self.current;
        let mask = scan_directions(grid, coord);
        let class = CellClass::from_mask(mask);

        let mut open = mask;
        if let Some(arrived) = self.arrived_from {
            open.remove(arrived.reverse());
        }

        if let Some(known) = self.memo.node_at(coord) {
            return self.close_cycle(coord, known, store);
        }

        if coord == self.start || class.is_decision() {
            return self.register(coord, class, open, store);
        }

        match class {
            CellClass::Corridor => Ok(match open.first() {
                Some(direction) => EngineState::Stepping(direction),
                None => EngineState::Backtracking,
            }),
            _ => {
                let id = store.add_node(coord, NodeKind::Endpoint)?;
                self.stats.nodes += 1;
                trace!("[Topology] node {} Endpoint at {}", id, coord);
                self.connect(store, id)?;
                Ok(EngineState::Backtracking)
            }
        }
    }

    /// Emit a decision node (or the start cell) and branch from it.
    fn register<S: GraphStore + ?Sized>(
        &mut self,
        coord: GridCoord,
        class: CellClass,
        open: DirectionMask,
        store: &mut S,
    ) -> Result<EngineState> {
        let kind = class.node_kind().unwrap_or(NodeKind::Start);
        let id = store.add_node(coord, kind)?;
        self.memo.insert(coord, id)?;
        self.stats.nodes += 1;
        trace!("[Topology] node {} {:?} at {}, open={}", id, kind, coord, open);

        self.connect(store, id)?;

        let Some(direction) = open.first() else {
            return Ok(EngineState::Backtracking);
        };
        self.stack
            .push(TraversalState::new(coord, id, open.without(direction)))?;
        Ok(EngineState::Stepping(direction))
    }

    /// A corridor ended on a node that already exists.
    fn close_cycle<S: GraphStore + ?Sized>(
        &mut self,
        coord: GridCoord,
        known: NodeId,
        store: &mut S,
    ) -> Result<EngineState> {
        trace!("[Topology] cycle closes on {} at {}", known, coord);
        self.connect(store, known)?;
        self.stats.cycles_closed += 1;

        // The corridor just walked must not be walked again from this end.
        if let Some(arrived) = self.arrived_from {
            self.stack.retire(coord, arrived.reverse());
        }
        Ok(EngineState::Backtracking)
    }

    /// Close the current corridor on `id` and start a new one from it.
    fn connect<S: GraphStore + ?Sized>(&mut self, store: &mut S, id: NodeId) -> Result<()> {
        if let Some(origin) = self.origin {
            store.add_edge(origin, id, self.corridor_len)?;
            self.stats.edges += 1;
            trace!(
                "[Topology] edge {} -> {} ({} steps)",
                origin, id, self.corridor_len
            );
        }
        self.origin = Some(id);
        self.corridor_len = 0;
        Ok(())
    }

    fn step(&mut self, direction: Direction, rows: usize, cols: usize) -> EngineState {
        match self.current.neighbor(direction, rows, cols) {
            Some(next) => {
                self.current = next;
                self.arrived_from = Some(direction);
                self.corridor_len += 1;
                EngineState::Scanning
            }
            None => {
                warn!(
                    "[Topology] step {:?} from {} leaves the grid, abandoning branch",
                    direction, self.current
                );
                EngineState::Backtracking
            }
        }
    }

    /// Continue from the most recent node that still has unexplored directions.
    fn resume(&mut self) -> EngineState {
        let Some(top) = self.stack.peek_mut() else {
            trace!("[Topology] backtrack stack empty, traversal complete");
            return EngineState::Terminated;
        };

        let saved = *top;
        let Some(direction) = saved.remaining.first() else {
            self.stack.pop();
            return EngineState::Backtracking;
        };

        if saved.remaining.count() > 1 {
            top.remaining.remove(direction);
        } else {
            self.stack.pop();
        }

        trace!(
            "[Topology] resume {} at {} towards {:?}",
            saved.node, saved.coord, direction
        );
        self.current = saved.coord;
        self.origin = Some(saved.node);
        self.corridor_len = 0;
        self.arrived_from = None;
        EngineState::Stepping(direction)
    }
}

impl Default for TraversalEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
