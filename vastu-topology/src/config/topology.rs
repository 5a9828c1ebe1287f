//! Top-level configuration and conversion methods.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::TopologyGraph;
use crate::mapping::OccupancyMap2D;
use crate::traversal::TraversalConfig;

use super::capacity::CapacitySection;
use super::error::ConfigLoadError;
use super::mapping::MappingSection;
use super::traversal::TraversalSection;

/// Default config location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "configs/topology.yaml";

/// Full configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct TopologyConfig {
    /// Stack, memo and graph limits
    #[serde(default)]
    pub capacity: CapacitySection,

    /// Traversal safety bounds
    #[serde(default)]
    pub traversal: TraversalSection,

    /// Obstacle map geometry
    #[serde(default)]
    pub mapping: MappingSection,
}

impl TopologyConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_yaml(&contents)?;
        debug!("[Config] loaded {}", path.display());
        Ok(config)
    }

    /// Load from the default config path (configs/topology.yaml)
    pub fn load_default() -> std::result::Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            debug!("[Config] {} not found, using defaults", DEFAULT_CONFIG_PATH);
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> std::result::Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Serialize(e.to_string()))
    }

    /// Convert to TraversalConfig for the engine
    pub fn to_traversal_config(&self) -> TraversalConfig {
        TraversalConfig {
            max_pending_branches: self.capacity.max_pending_branches,
            max_decision_nodes: self.capacity.max_decision_nodes,
            steps_per_cell: self.traversal.steps_per_cell,
            max_dimension: self.traversal.max_dimension,
        }
    }

    /// Empty graph arena sized by the capacity section
    pub fn to_graph(&self) -> TopologyGraph {
        TopologyGraph::from_config(self)
    }

    /// Empty obstacle map sized by the mapping section
    pub fn to_map(&self) -> Result<OccupancyMap2D> {
        self.mapping.to_map()
    }
}
