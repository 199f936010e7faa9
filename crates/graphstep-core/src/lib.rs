//! # graphstep core
//!
//! Step-by-step breadth-first and depth-first traversal for teaching and
//! visualization.
//!
//! The engine explores a directed graph from a start node and returns, for
//! every newly visited node, the ordered list of nodes visited so far. A
//! renderer animates that sequence; a scenario runner compares its final
//! element with an expected order. The engine itself renders nothing.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphstep_core::graph::{depth_first_steps, Graph};
//!
//! let graph = Graph::new()
//!     .with_edges("A", ["B", "C"])
//!     .with_edges("B", ["A"]);
//!
//! let steps = depth_first_steps(&graph, &"A");
//! assert_eq!(steps, vec![vec!["A"], vec!["A", "B"], vec!["A", "B", "C"]]);
//!
//! // Unknown start nodes produce no steps rather than an error.
//! assert!(depth_first_steps(&graph, &"Z").is_empty());
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(test, allow(clippy::uninlined_format_args, clippy::manual_assert))]

pub mod config;
pub mod error;
pub mod graph;
pub mod samples;
pub mod scenario;
#[cfg(test)]
mod scenario_tests;
pub mod view;

pub use config::{GraphstepConfig, LoggingConfig, VisualizerConfig};
pub use error::{Error, Result};
pub use graph::{breadth_first_steps, depth_first_steps, AdjacencyList, Graph, Steps, Traversal};
pub use samples::SampleGraph;
pub use scenario::{Scenario, ScenarioOutcome, ScenarioSuite};
pub use view::{NodeState, RunInfo, RunSummary, StepRenderer, StepView};
