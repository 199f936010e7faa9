//! Insertion-ordered adjacency graph used by samples, scenarios and the CLI.
//!
//! A [`Graph`] maps each node to its ordered list of outgoing neighbors.
//! Neighbors are not required to be keys themselves: a node that only appears
//! in a neighbor list simply has no outgoing edges.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use std::path::Path;

use crate::error::Result;

/// A directed graph stored as ordered adjacency lists.
///
/// Serializes transparently as a JSON object, so `{"A": ["B"], "B": []}`
/// round-trips through [`Graph::from_json_str`]. Key order is preserved,
/// which keeps node listings and sample output stable.
///
/// # Example
///
/// ```rust
/// use graphstep_core::graph::Graph;
///
/// let graph = Graph::new()
///     .with_edges("A", ["B", "C"])
///     .with_edges("B", [])
///     .with_edges("C", []);
///
/// assert_eq!(graph.len(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.successors(&"A"), Some(&["B", "C"][..]));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "N: Serialize",
    deserialize = "N: Deserialize<'de> + Eq + Hash"
))]
pub struct Graph<N> {
    adjacency: IndexMap<N, Vec<N>>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<N: Eq + Hash> Graph<N> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with room for `nodes` adjacency entries.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(nodes),
        }
    }

    /// Sets the adjacency list of `node` (builder pattern).
    #[must_use]
    pub fn with_edges(mut self, node: N, neighbors: impl IntoIterator<Item = N>) -> Self {
        self.insert(node, neighbors);
        self
    }

    /// Sets the adjacency list of `node`, returning the previous list if any.
    ///
    /// Re-inserting an existing key keeps its original position.
    pub fn insert(&mut self, node: N, neighbors: impl IntoIterator<Item = N>) -> Option<Vec<N>> {
        self.adjacency.insert(node, neighbors.into_iter().collect())
    }

    /// Appends a directed edge `from -> to`, creating `from` if needed.
    pub fn add_edge(&mut self, from: N, to: N) {
        self.adjacency.entry(from).or_default().push(to);
    }

    /// Returns `true` if `node` has an adjacency entry.
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Returns the ordered neighbors of `node`, or `None` if it is not a key.
    #[must_use]
    pub fn successors(&self, node: &N) -> Option<&[N]> {
        self.adjacency.get(node).map(Vec::as_slice)
    }

    /// Number of adjacency entries (keys).
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if the graph has no adjacency entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Total number of directed edges, counting duplicates.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Iterates over `(node, neighbors)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &[N])> {
        self.adjacency.iter().map(|(node, nbrs)| (node, nbrs.as_slice()))
    }

    /// Every node of the graph: keys first, then nodes that only appear as
    /// neighbors, each listed once in first-seen order.
    #[must_use]
    pub fn nodes(&self) -> Vec<&N> {
        let mut seen: FxHashSet<&N> = FxHashSet::default();
        let mut nodes = Vec::with_capacity(self.adjacency.len());
        for node in self.adjacency.keys() {
            if seen.insert(node) {
                nodes.push(node);
            }
        }
        for node in self.adjacency.values().flatten() {
            if seen.insert(node) {
                nodes.push(node);
            }
        }
        nodes
    }

    /// Number of distinct nodes, including referenced-only neighbors.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }
}

impl Graph<String> {
    /// Parses a graph from a JSON object of adjacency lists.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a graph from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let graph = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            nodes = graph.len(),
            edges = graph.edge_count(),
            "Loaded graph"
        );
        Ok(graph)
    }

    /// Serializes the graph back to a compact JSON object.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<N: Eq + Hash> PartialEq for Graph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<N: Eq + Hash> Eq for Graph<N> {}

impl<N: Eq + Hash> FromIterator<(N, Vec<N>)> for Graph<N> {
    fn from_iter<I: IntoIterator<Item = (N, Vec<N>)>>(iter: I) -> Self {
        Self {
            adjacency: iter.into_iter().collect(),
        }
    }
}

impl<N> From<IndexMap<N, Vec<N>>> for Graph<N> {
    fn from(adjacency: IndexMap<N, Vec<N>>) -> Self {
        Self { adjacency }
    }
}
