//! Passability grids and neighborhood scanning.
//!
//! ## Key Components
//!
//! - [`GridSource`]: read-only view the traversal engine consumes
//! - [`PassabilityGrid`]: owned row-major `bool` grid (`true` = traversable)
//! - [`scan_directions`]: boundary-aware 4-neighbor passability mask
//! - [`CellClass`]: degree-based classification of a scanned cell
//!
//! ## Classification
//!
//! ```text
//!   degree 0              → Isolated
//!   degree 1              → Endpoint
//!   degree 2, colinear    → Corridor (not a node)
//!   degree 2, perpendicular → Corner
//!   degree 3              → Branch
//!   degree 4              → Intersection
//! ```

mod passability;
mod scanner;

pub use passability::{GridSource, PassabilityGrid};
pub use scanner::{CellClass, scan_directions};
