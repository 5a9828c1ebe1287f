//! Errors from reading and writing `configs/topology.yaml`.

use std::path::PathBuf;

/// Config load error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLoadError {
    /// Config file could not be read
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error text
        message: String,
    },
    /// Text is not a valid [`TopologyConfig`](super::TopologyConfig)
    Parse(String),
    /// Config could not be written back out as YAML
    Serialize(String),
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigLoadError::Io { path, message } => {
                write!(f, "cannot read topology config {}: {}", path.display(), message)
            }
            ConfigLoadError::Parse(msg) => write!(f, "invalid topology config: {}", msg),
            ConfigLoadError::Serialize(msg) => write!(f, "cannot serialize topology config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigLoadError {}
