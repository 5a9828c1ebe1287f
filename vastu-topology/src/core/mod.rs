//! Core types shared by the grid, traversal and graph modules.
//!
//! ## Coordinates
//!
//! Grids are addressed by [`GridCoord`] as `(row, col)`:
//!
//! ```text
//!   col 0 ──────► col n
//! row 0
//!   │      Up
//!   │   Left · Right
//!   ▼     Down
//! row m
//! ```
//!
//! ## Directions
//!
//! - [`Direction`]: Up, Right, Down, Left (also the exploration priority)
//! - [`DirectionMask`]: 4-bit set of directions, `Up = 0b1000 ... Left = 0b0001`

mod direction;
mod point;

pub use direction::{Direction, DirectionMask};
pub use point::GridCoord;
