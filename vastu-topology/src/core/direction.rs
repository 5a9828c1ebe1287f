//! Cardinal directions and the 4-bit direction mask.

use serde::{Deserialize, Serialize};

/// One of the four grid directions.
///
/// The declaration order is also the exploration priority:
/// Up > Right > Down > Left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards row 0
    Up,
    /// Towards the last column
    Right,
    /// Towards the last row
    Down,
    /// Towards column 0
    Left,
}

impl Direction {
    /// All directions in exploration priority order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Mask bit for this direction (Up = 0b1000 ... Left = 0b0001).
    #[inline]
    pub const fn bit(self) -> u8 {
        match self {
            Direction::Up => 0b1000,
            Direction::Right => 0b0100,
            Direction::Down => 0b0010,
            Direction::Left => 0b0001,
        }
    }

    /// The opposite direction.
    #[inline]
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

/// Set of directions stored in the low 4 bits of a byte.
///
/// A set bit means the neighbor in that direction is passable and has not
/// been excluded for the current step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectionMask(u8);

impl DirectionMask {
    /// No directions.
    pub const EMPTY: DirectionMask = DirectionMask(0);

    /// All four directions.
    pub const ALL: DirectionMask = DirectionMask(0b1111);

    const VERTICAL: u8 = 0b1010;
    const HORIZONTAL: u8 = 0b0101;

    /// Build from raw bits; anything above the low nibble is discarded.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        DirectionMask(bits & 0b1111)
    }

    /// Build from a list of directions.
    pub fn from_directions(directions: &[Direction]) -> Self {
        directions
            .iter()
            .fold(DirectionMask::EMPTY, |mask, &d| mask.with(d))
    }

    /// Raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether `direction` is set.
    #[inline]
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Set `direction`.
    #[inline]
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    /// Clear `direction`. Returns whether it was set.
    #[inline]
    pub fn remove(&mut self, direction: Direction) -> bool {
        let was_set = self.contains(direction);
        self.0 &= !direction.bit();
        was_set
    }

    /// Copy with `direction` set.
    #[inline]
    pub const fn with(self, direction: Direction) -> Self {
        DirectionMask(self.0 | direction.bit())
    }

    /// Copy with `direction` cleared.
    #[inline]
    pub const fn without(self, direction: Direction) -> Self {
        DirectionMask(self.0 & !direction.bit())
    }

    /// Number of set directions (the connectivity degree for a scanned cell).
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// No direction set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Exactly two opposite directions ({Up, Down} or {Right, Left}).
    #[inline]
    pub const fn is_colinear(self) -> bool {
        self.0 == Self::VERTICAL || self.0 == Self::HORIZONTAL
    }

    /// Highest-priority set direction.
    #[inline]
    pub fn first(self) -> Option<Direction> {
        Direction::ALL.into_iter().find(|&d| self.contains(d))
    }

    /// Set directions in priority order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }
}

impl From<Direction> for DirectionMask {
    fn from(direction: Direction) -> Self {
        DirectionMask(direction.bit())
    }
}

impl std::fmt::Display for DirectionMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (direction, symbol) in Direction::ALL.into_iter().zip(['U', 'R', 'D', 'L']) {
            let c = if self.contains(direction) { symbol } else { '-' };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
