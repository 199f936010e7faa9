//! Error types for graphstep-core.
//!
//! The traversal engine itself never fails: an unknown start node is reported
//! as an empty step sequence. These errors cover the edges of the crate, where
//! graphs, scenarios and configuration are loaded from outside.

use thiserror::Error;

/// Errors raised while loading or resolving traversal inputs.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No built-in sample graph matches the requested name.
    #[error("Unknown sample graph: {0}")]
    UnknownSample(String),

    /// The algorithm name is neither BFS nor DFS.
    #[error("Unknown traversal algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A caller asked for strict validation of a start node that is not a key.
    #[error("Start node '{0}' is not a node of the graph")]
    UnknownStartNode(String),

    /// A scenario fixture is malformed.
    #[error("Scenario error: {0}")]
    Scenario(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for graphstep operations.
pub type Result<T> = std::result::Result<T, Error>;
