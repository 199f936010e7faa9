//! Step-by-step graph traversal (BFS/DFS) for in-memory graphs.
//!
//! Both algorithms report progress as a sequence of *steps*: after each newly
//! visited node, the ordered list of every node visited so far. Callers can
//! animate the traversal by walking that sequence.
//!
//! Any adjacency map implementing [`AdjacencyList`] can be traversed, including
//! `HashMap`, `BTreeMap`, `IndexMap` and [`Graph`](super::Graph).

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::str::FromStr;

use super::Graph;
use crate::error::Error;

/// Adjacency map that the traversal engine can walk.
pub trait AdjacencyList {
    /// Node identifier type.
    type Node: Clone + Eq + Hash;

    /// Returns the ordered outgoing neighbors of `node`.
    ///
    /// `None` means `node` is not a key of the graph. A node that is a key
    /// but has no neighbors returns an empty slice.
    fn successors(&self, node: &Self::Node) -> Option<&[Self::Node]>;
}

impl<N, S> AdjacencyList for HashMap<N, Vec<N>, S>
where
    N: Clone + Eq + Hash,
    S: BuildHasher,
{
    type Node = N;

    fn successors(&self, node: &N) -> Option<&[N]> {
        self.get(node).map(Vec::as_slice)
    }
}

impl<N> AdjacencyList for BTreeMap<N, Vec<N>>
where
    N: Clone + Ord + Hash,
{
    type Node = N;

    fn successors(&self, node: &N) -> Option<&[N]> {
        self.get(node).map(Vec::as_slice)
    }
}

impl<N, S> AdjacencyList for IndexMap<N, Vec<N>, S>
where
    N: Clone + Eq + Hash,
    S: BuildHasher,
{
    type Node = N;

    fn successors(&self, node: &N) -> Option<&[N]> {
        self.get(node).map(Vec::as_slice)
    }
}

impl<N> AdjacencyList for Graph<N>
where
    N: Clone + Eq + Hash,
{
    type Node = N;

    fn successors(&self, node: &N) -> Option<&[N]> {
        Graph::successors(self, node)
    }
}

/// Traversal algorithm selector.
///
/// Serialized as `"BFS"` / `"DFS"`; lowercase spellings are accepted on input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Traversal {
    /// First-in-first-out frontier.
    #[default]
    #[serde(rename = "BFS", alias = "bfs")]
    BreadthFirst,
    /// Last-in-first-out frontier.
    #[serde(rename = "DFS", alias = "dfs")]
    DepthFirst,
}

impl Traversal {
    /// Both algorithms, BFS first.
    pub const ALL: [Traversal; 2] = [Traversal::BreadthFirst, Traversal::DepthFirst];

    /// Short label: `"BFS"` or `"DFS"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "Breadth-First Search (BFS)",
            Self::DepthFirst => "Depth-First Search (DFS)",
        }
    }

    /// Worst-case `(time, space)` bounds in terms of nodes `V` and edges `E`.
    ///
    /// Every reachable node is visited once and every edge out of it is
    /// examined once; the visited set and frontier hold at most `V` nodes.
    #[must_use]
    pub fn complexity(self) -> (&'static str, &'static str) {
        match self {
            Self::BreadthFirst | Self::DepthFirst => ("O(V + E)", "O(V)"),
        }
    }

    /// Runs this algorithm and returns every step.
    #[must_use]
    pub fn steps<G>(self, graph: &G, start: &G::Node) -> Vec<Vec<G::Node>>
    where
        G: AdjacencyList + ?Sized,
    {
        Steps::new(graph, start, self).collect()
    }

    /// Runs this algorithm and returns only the final visitation order.
    ///
    /// Equal to the last step, or empty when there are no steps.
    #[must_use]
    pub fn final_order<G>(self, graph: &G, start: &G::Node) -> Vec<G::Node>
    where
        G: AdjacencyList + ?Sized,
    {
        Steps::new(graph, start, self).into_final_order()
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Traversal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadth_first" | "breadthfirst" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" | "depth_first" | "depthfirst" => Ok(Self::DepthFirst),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Breadth-first traversal from `start`, one step per newly visited node.
///
/// Returns an empty sequence when `start` is not a key of `graph`.
///
/// # Example
///
/// ```rust
/// use graphstep_core::graph::{breadth_first_steps, Graph};
///
/// let graph = Graph::new()
///     .with_edges("A", ["B", "C"])
///     .with_edges("B", ["D"]);
///
/// let steps = breadth_first_steps(&graph, &"A");
/// assert_eq!(steps.last().unwrap(), &vec!["A", "B", "C", "D"]);
/// assert!(breadth_first_steps(&graph, &"Z").is_empty());
/// ```
#[must_use]
pub fn breadth_first_steps<G>(graph: &G, start: &G::Node) -> Vec<Vec<G::Node>>
where
    G: AdjacencyList + ?Sized,
{
    Traversal::BreadthFirst.steps(graph, start)
}

/// Depth-first traversal from `start`, one step per newly visited node.
///
/// Neighbors are explored left to right in adjacency-list order.
/// Returns an empty sequence when `start` is not a key of `graph`.
#[must_use]
pub fn depth_first_steps<G>(graph: &G, start: &G::Node) -> Vec<Vec<G::Node>>
where
    G: AdjacencyList + ?Sized,
{
    Traversal::DepthFirst.steps(graph, start)
}

/// Discovered-but-not-yet-processed nodes.
#[derive(Debug, Clone)]
enum Frontier<N> {
    Queue(VecDeque<N>),
    Stack(Vec<N>),
}

impl<N: Clone + Eq + Hash> Frontier<N> {
    fn empty(traversal: Traversal) -> Self {
        match traversal {
            Traversal::BreadthFirst => Self::Queue(VecDeque::new()),
            Traversal::DepthFirst => Self::Stack(Vec::new()),
        }
    }

    fn pop(&mut self) -> Option<N> {
        match self {
            Self::Queue(queue) => queue.pop_front(),
            Self::Stack(stack) => stack.pop(),
        }
    }

    fn push(&mut self, node: N) {
        match self {
            Self::Queue(queue) => queue.push_back(node),
            Self::Stack(stack) => stack.push(node),
        }
    }

    /// Adds every unvisited neighbor. The stack receives them in reverse so
    /// they pop in adjacency order.
    fn extend_unvisited(&mut self, neighbors: &[N], visited: &FxHashSet<N>) {
        let unvisited = |node: &&N| !visited.contains(*node);
        match self {
            Self::Queue(queue) => queue.extend(neighbors.iter().filter(unvisited).cloned()),
            Self::Stack(stack) => stack.extend(neighbors.iter().rev().filter(unvisited).cloned()),
        }
    }
}

/// Lazy, restartable step sequence.
///
/// Yields exactly the steps returned by [`breadth_first_steps`] /
/// [`depth_first_steps`], one at a time, so a caller can display progress
/// without materializing the whole sequence.
///
/// # Example
///
/// ```rust
/// use graphstep_core::graph::{Graph, Steps};
///
/// let graph = Graph::new().with_edges("A", ["B"]).with_edges("B", ["A"]);
/// let mut steps = Steps::depth_first(&graph, &"A");
///
/// assert_eq!(steps.next(), Some(vec!["A"]));
/// assert_eq!(steps.visited_order(), &["A"]);
/// assert_eq!(steps.next(), Some(vec!["A", "B"]));
/// assert_eq!(steps.next(), None);
///
/// steps.restart();
/// assert_eq!(steps.count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Steps<'g, G>
where
    G: AdjacencyList + ?Sized,
{
    graph: &'g G,
    start: G::Node,
    traversal: Traversal,
    frontier: Frontier<G::Node>,
    visited: FxHashSet<G::Node>,
    order: Vec<G::Node>,
}

impl<'g, G> Steps<'g, G>
where
    G: AdjacencyList + ?Sized,
{
    /// Creates a step sequence for `traversal` starting at `start`.
    #[must_use]
    pub fn new(graph: &'g G, start: &G::Node, traversal: Traversal) -> Self {
        let mut steps = Self {
            graph,
            start: start.clone(),
            traversal,
            frontier: Frontier::empty(traversal),
            visited: FxHashSet::default(),
            order: Vec::new(),
        };
        steps.seed();
        steps
    }

    /// Breadth-first step sequence.
    #[must_use]
    pub fn breadth_first(graph: &'g G, start: &G::Node) -> Self {
        Self::new(graph, start, Traversal::BreadthFirst)
    }

    /// Depth-first step sequence.
    #[must_use]
    pub fn depth_first(graph: &'g G, start: &G::Node) -> Self {
        Self::new(graph, start, Traversal::DepthFirst)
    }

    /// The algorithm driving this sequence.
    #[must_use]
    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// Nodes visited so far, in visitation order.
    #[must_use]
    pub fn visited_order(&self) -> &[G::Node] {
        &self.order
    }

    /// Rewinds to the initial state; the sequence replays from step one.
    pub fn restart(&mut self) {
        self.frontier = Frontier::empty(self.traversal);
        self.visited.clear();
        self.order.clear();
        self.seed();
    }

    /// Runs to completion and returns the final visitation order.
    #[must_use]
    pub fn into_final_order(mut self) -> Vec<G::Node> {
        while self.advance() {}
        self.order
    }

    fn seed(&mut self) {
        if self.graph.successors(&self.start).is_some() {
            self.frontier.push(self.start.clone());
        } else {
            tracing::debug!(
                algorithm = %self.traversal,
                "Start node is not a key of the graph; no steps"
            );
        }
    }

    /// Processes frontier entries until one node is newly visited.
    /// Returns `false` once the frontier is exhausted.
    fn advance(&mut self) -> bool {
        let graph = self.graph;
        while let Some(node) = self.frontier.pop() {
            if self.visited.contains(&node) {
                continue;
            }
            let neighbors = graph.successors(&node).unwrap_or(&[]);
            self.visited.insert(node.clone());
            self.order.push(node);
            self.frontier.extend_unvisited(neighbors, &self.visited);
            tracing::trace!(
                algorithm = %self.traversal,
                step = self.order.len(),
                "Node visited"
            );
            return true;
        }
        false
    }
}

impl<G> Iterator for Steps<'_, G>
where
    G: AdjacencyList + ?Sized,
{
    type Item = Vec<G::Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            Some(self.order.clone())
        } else {
            None
        }
    }
}

impl<G> FusedIterator for Steps<'_, G> where G: AdjacencyList + ?Sized {}
