//! Rectangular boolean passability grid.

use serde::{Deserialize, Serialize};

use crate::core::GridCoord;
use crate::error::{Result, TopologyError};

/// Read-only view of a rectangular grid of passable/blocked cells.
///
/// Implementors only need to answer for in-bounds coordinates; the
/// direction scanner never asks about anything outside `dimensions()`.
pub trait GridSource {
    /// Grid size as `(rows, cols)`
    fn dimensions(&self) -> (usize, usize);

    /// Whether the in-bounds cell at `coord` can be traversed
    fn is_passable(&self, coord: GridCoord) -> bool;
}

/// Row-major boolean grid. `true` = traversable corridor cell,
/// `false` = wall or unknown.
///
/// Deserialized grids go through the same shape checks as the constructors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRecord")]
pub struct PassabilityGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

/// Unchecked serialized form of [`PassabilityGrid`].
#[derive(Deserialize)]
struct GridRecord {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl TryFrom<GridRecord> for PassabilityGrid {
    type Error = TopologyError;

    fn try_from(record: GridRecord) -> Result<Self> {
        if record.rows == 0 || record.cols == 0 {
            return Err(TopologyError::MalformedGrid(format!(
                "grid must have at least one cell, got {}x{}",
                record.rows, record.cols
            )));
        }
        let expected = record.rows.checked_mul(record.cols);
        if expected != Some(record.cells.len()) {
            return Err(TopologyError::MalformedGrid(format!(
                "{}x{} grid has {} cells",
                record.rows,
                record.cols,
                record.cells.len()
            )));
        }
        Ok(Self {
            rows: record.rows,
            cols: record.cols,
            cells: record.cells,
        })
    }
}

impl PassabilityGrid {
    /// Create a grid with every cell blocked.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, false)
    }

    /// Create a grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: bool) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(TopologyError::MalformedGrid(format!(
                "grid must have at least one cell, got {}x{}",
                rows, cols
            )));
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        })
    }

    /// Build from nested rows. Every row must have the same length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let first = rows
            .first()
            .ok_or_else(|| TopologyError::MalformedGrid("grid has no rows".to_string()))?;
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(TopologyError::MalformedGrid(
                "grid has no columns".to_string(),
            ));
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(TopologyError::MalformedGrid(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Parse an ASCII drawing: `#` is traversable, `.` is blocked.
    ///
    /// Blank lines and surrounding whitespace are ignored.
    ///
    /// ```
    /// use vastu_topology::PassabilityGrid;
    ///
    /// let grid = PassabilityGrid::from_ascii("
    ///     .#.
    ///     ####
    ///     .#.
    /// ").unwrap();
    /// assert_eq!(grid.dimensions(), (3, 3));
    /// assert_eq!(grid.count_passable(), 5);
    /// ```
    pub fn from_ascii(text: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (line_no, line) in text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .enumerate()
        {
            let row = line
                .chars()
                .map(|c| match c {
                    '#' => Ok(true),
                    '.' => Ok(false),
                    other => Err(TopologyError::MalformedGrid(format!(
                        "unexpected character {:?} on line {}",
                        other, line_no
                    ))),
                })
                .collect::<Result<Vec<bool>>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid size as `(rows, cols)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if a coordinate is inside the grid
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.within(self.rows, self.cols)
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.row * self.cols + coord.col)
    }

    /// Cell value, or `None` outside the grid
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<bool> {
        self.index(coord).and_then(|i| self.cells.get(i).copied())
    }

    /// Set a cell. Returns false if `coord` is outside the grid.
    pub fn set(&mut self, coord: GridCoord, value: bool) -> bool {
        match self.index(coord).and_then(|i| self.cells.get_mut(i)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Number of traversable cells
    pub fn count_passable(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterate over traversable cells in row-major order
    pub fn iter_passable(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(|(i, _)| GridCoord::new(i / self.cols, i % self.cols))
    }

    /// Render back to the `#`/`.` drawing accepted by [`from_ascii`](Self::from_ascii)
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in self.cells.chunks(self.cols) {
            out.extend(row.iter().map(|&c| if c { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }
}

impl GridSource for PassabilityGrid {
    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn is_passable(&self, coord: GridCoord) -> bool {
        self.get(coord).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let grid = PassabilityGrid::from_rows(&[[true, false], [false, true]]).unwrap();
        assert_eq!(grid.dimensions(), (2, 2));
        assert_eq!(grid.get(GridCoord::new(0, 0)), Some(true));
        assert_eq!(grid.get(GridCoord::new(0, 1)), Some(false));
        assert_eq!(grid.get(GridCoord::new(2, 0)), None);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows = vec![vec![true, true], vec![true]];
        let err = PassabilityGrid::from_rows(&rows).unwrap_err();
        assert!(matches!(err, TopologyError::MalformedGrid(_)));
    }

    #[test]
    fn test_empty_rejected() {
        let rows: Vec<Vec<bool>> = Vec::new();
        assert!(PassabilityGrid::from_rows(&rows).is_err());
        assert!(PassabilityGrid::from_rows(&[Vec::<bool>::new()]).is_err());
        assert!(PassabilityGrid::new(0, 4).is_err());
    }

    #[test]
    fn test_ascii_roundtrip() {
        let text = "#.#\n###\n";
        let grid = PassabilityGrid::from_ascii(text).unwrap();
        assert_eq!(grid.count_passable(), 5);
        assert_eq!(grid.to_ascii(), text);
    }

    #[test]
    fn test_ascii_bad_character() {
        let err = PassabilityGrid::from_ascii("#x#").unwrap_err();
        assert!(matches!(err, TopologyError::MalformedGrid(_)));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = PassabilityGrid::new(2, 2).unwrap();
        assert!(grid.set(GridCoord::new(1, 1), true));
        assert!(!grid.set(GridCoord::new(2, 1), true));
        assert!(grid.is_passable(GridCoord::new(1, 1)));
    }

    #[test]
    fn test_deserialize_checks_shape() {
        let err = serde_yaml::from_str::<PassabilityGrid>("rows: 3\ncols: 3\ncells: [true]\n")
            .unwrap_err();
        assert!(err.to_string().contains("Malformed grid"), "{}", err);

        assert!(serde_yaml::from_str::<PassabilityGrid>("rows: 0\ncols: 2\ncells: []\n").is_err());
    }

    #[test]
    fn test_deserialize_valid_grid() {
        let grid = PassabilityGrid::from_ascii("#.\n##").unwrap();
        let yaml = serde_yaml::to_string(&grid).unwrap();
        let parsed: PassabilityGrid = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, grid);
    }

    #[test]
    fn test_iter_passable_row_major() {
        let grid = PassabilityGrid::from_ascii("
            .#
            #.
        ")
        .unwrap();
        let cells: Vec<_> = grid.iter_passable().collect();
        assert_eq!(cells, vec![GridCoord::new(0, 1), GridCoord::new(1, 0)]);
    }
}
