//! In-memory graph module: adjacency graphs and step-by-step traversal.
//!
//! # Example
//!
//! ```rust
//! use graphstep_core::graph::{breadth_first_steps, depth_first_steps, Graph};
//!
//! let graph = Graph::new()
//!     .with_edges("A", ["B", "C"])
//!     .with_edges("B", ["D", "E"])
//!     .with_edges("C", ["F", "G"]);
//!
//! let bfs = breadth_first_steps(&graph, &"A");
//! assert_eq!(bfs[0], vec!["A"]);
//! assert_eq!(bfs[1], vec!["A", "B"]);
//! assert_eq!(bfs.last().unwrap(), &vec!["A", "B", "C", "D", "E", "F", "G"]);
//!
//! let dfs = depth_first_steps(&graph, &"A");
//! assert_eq!(dfs.last().unwrap(), &vec!["A", "B", "D", "E", "C", "F", "G"]);
//! ```

pub mod traversal;
mod types;


pub use traversal::{breadth_first_steps, depth_first_steps, AdjacencyList, Steps, Traversal};
pub use types::Graph;
