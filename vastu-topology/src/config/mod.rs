//! YAML configuration loading.
//!
//! Every field has a default, so a config file only needs the values it
//! changes.
//!
//! ```rust,ignore
//! use vastu_topology::config::TopologyConfig;
//!
//! // configs/topology.yaml if present, otherwise built-in defaults
//! let config = TopologyConfig::load_default()?;
//!
//! let mut engine = TraversalEngine::new(config.to_traversal_config());
//! let mut graph = config.to_graph();
//! ```
//!
//! ## Example YAML
//!
//! ```yaml
//! capacity:
//!   max_pending_branches: 10   # backtrack stack depth
//!   max_decision_nodes: 32     # visited memo size
//!   max_nodes: 64
//!   max_edges: 128
//! traversal:
//!   steps_per_cell: 4
//!   max_dimension: 128
//! mapping:
//!   width: 64
//!   height: 64
//!   scale_cm: 5.0
//!   max_range_cm: 1200.0
//! ```

mod capacity;
mod defaults;
mod error;
mod mapping;
mod topology;
mod traversal;

pub use error::ConfigLoadError;
pub use topology::{DEFAULT_CONFIG_PATH, TopologyConfig};

pub use capacity::CapacitySection;
pub use mapping::MappingSection;
pub use traversal::TraversalSection;
