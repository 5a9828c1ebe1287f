//! Obstacle map accumulated from range readings.
//!
//! [`OccupancyMap2D`] is the producer side of the pipeline: a sensor sweep
//! marks obstacle cells, and [`OccupancyMap2D::passability`] (or the map
//! itself, as a [`GridSource`](crate::grid::GridSource)) feeds the
//! traversal engine.

mod angle;
mod map2d;

pub use angle::Angle;
pub use map2d::{OccupancyMap2D, RangeSample};
