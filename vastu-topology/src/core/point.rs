//! Grid coordinate type.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Grid coordinates (row, column cell indices).
///
/// Row 0 is the top of the grid and grows downward; column 0 is the left edge
/// and grows to the right. "Up" therefore decreases the row index.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct GridCoord {
    /// Row index (vertical, grows downward)
    pub row: usize,
    /// Column index (horizontal, grows to the right)
    pub col: usize,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether this coordinate lies inside a `rows × cols` grid
    #[inline]
    pub fn within(&self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }

    /// Neighbor one cell away in `direction`.
    ///
    /// Returns `None` when the neighbor would fall outside a `rows × cols`
    /// grid, so callers never produce an out-of-range index.
    #[inline]
    pub fn neighbor(&self, direction: Direction, rows: usize, cols: usize) -> Option<GridCoord> {
        let next = match direction {
            Direction::Up => GridCoord::new(self.row.checked_sub(1)?, self.col),
            Direction::Right => GridCoord::new(self.row, self.col.checked_add(1)?),
            Direction::Down => GridCoord::new(self.row.checked_add(1)?, self.col),
            Direction::Left => GridCoord::new(self.row, self.col.checked_sub(1)?),
        };
        next.within(rows, cols).then_some(next)
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for GridCoord {
    fn from((row, col): (usize, usize)) -> Self {
        GridCoord::new(row, col)
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
