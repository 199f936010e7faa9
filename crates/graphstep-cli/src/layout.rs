//! Top-down tree layout for terminal drawing.
//!
//! The root is the first node with no incoming edge, or the first node when
//! every node has one. Each node gets the middle of its horizontal band and
//! splits that band evenly among its not-yet-placed successors.

use rustc_hash::FxHashSet;
use std::hash::Hash;

use graphstep_core::Graph;

/// Horizontal position in `[0, 1]` and depth below the root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Center of the node's band, as a fraction of the full width.
    pub x: f64,
    /// Distance in tree edges from the root.
    pub depth: usize,
}

/// Positions for every node reachable from the layout root.
#[derive(Debug, Clone)]
pub struct TreeLayout<'g, N> {
    root: Option<&'g N>,
    placed: Vec<(&'g N, Position)>,
    unplaced: Vec<&'g N>,
}

impl<'g, N: Eq + Hash> TreeLayout<'g, N> {
    /// Lays out `graph` from its topological root.
    #[must_use]
    pub fn compute(graph: &'g Graph<N>) -> Self {
        let nodes = graph.nodes();
        let Some(root) = find_root(graph, &nodes) else {
            return Self {
                root: None,
                placed: Vec::new(),
                unplaced: Vec::new(),
            };
        };

        let mut placed = Vec::with_capacity(nodes.len());
        let mut seen = FxHashSet::default();
        place(graph, root, 0.0, 1.0, 0, &mut seen, &mut placed);

        let unplaced = nodes.into_iter().filter(|n| !seen.contains(n)).collect();
        Self {
            root: Some(root),
            placed,
            unplaced,
        }
    }

    /// Root of the layout, `None` for an empty graph.
    #[must_use]
    pub fn root(&self) -> Option<&'g N> {
        self.root
    }

    /// Placed nodes grouped by depth, each row sorted left to right.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<(&'g N, f64)>> {
        let depth = self.placed.iter().map(|(_, p)| p.depth + 1).max().unwrap_or(0);
        let mut rows = vec![Vec::new(); depth];
        for (node, pos) in &self.placed {
            rows[pos.depth].push((*node, pos.x));
        }
        for row in &mut rows {
            row.sort_by(|a, b| a.1.total_cmp(&b.1));
        }
        rows
    }

    /// Nodes the root cannot reach, in graph order.
    #[must_use]
    pub fn unplaced(&self) -> &[&'g N] {
        &self.unplaced
    }
}

fn find_root<'g, N: Eq + Hash>(graph: &'g Graph<N>, nodes: &[&'g N]) -> Option<&'g N> {
    let has_incoming: FxHashSet<&N> = graph.iter().flat_map(|(_, succ)| succ).collect();
    nodes
        .iter()
        .copied()
        .find(|n| !has_incoming.contains(n))
        .or_else(|| nodes.first().copied())
}

fn place<'g, N: Eq + Hash>(
    graph: &'g Graph<N>,
    node: &'g N,
    left: f64,
    right: f64,
    depth: usize,
    seen: &mut FxHashSet<&'g N>,
    placed: &mut Vec<(&'g N, Position)>,
) {
    if !seen.insert(node) {
        return;
    }
    placed.push((
        node,
        Position {
            x: (left + right) / 2.0,
            depth,
        },
    ));

    let mut children: Vec<&N> = Vec::new();
    for child in graph.successors(node).unwrap_or(&[]) {
        if !seen.contains(child) && !children.contains(&child) {
            children.push(child);
        }
    }
    if children.is_empty() {
        return;
    }

    #[allow(clippy::cast_precision_loss)]
    let width = (right - left) / children.len() as f64;
    for (i, child) in children.into_iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let band_left = left + width * i as f64;
        place(graph, child, band_left, band_left + width, depth + 1, seen, placed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphstep_core::SampleGraph;

    #[test]
    fn test_binary_tree_layout() {
        let graph = SampleGraph::BinaryTree.graph();
        let layout = TreeLayout::compute(&graph);

        assert_eq!(layout.root().map(String::as_str), Some("A"));
        let rows = layout.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 1);
        assert!((rows[0][0].1 - 0.5).abs() < f64::EPSILON);

        let labels: Vec<&str> = rows[2].iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(labels, ["D", "E", "F", "G"]);
        assert!((rows[2][0].1 - 0.125).abs() < f64::EPSILON);
        assert!(layout.unplaced().is_empty());
    }

    #[test]
    fn test_root_falls_back_to_first_node_when_all_have_parents() {
        let graph = SampleGraph::Cyclic.graph();
        let layout = TreeLayout::compute(&graph);
        assert_eq!(layout.root().map(String::as_str), Some("A"));
        assert!(layout.unplaced().is_empty());
    }

    #[test]
    fn test_root_is_first_node_without_parent() {
        let graph = Graph::new().with_edges("B", ["C"]).with_edges("A", ["B"]);
        let layout = TreeLayout::compute(&graph);
        assert_eq!(layout.root(), Some(&"A"));
        let rows = layout.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2][0].0, &"C");
    }

    #[test]
    fn test_unreachable_nodes_are_unplaced() {
        let graph = Graph::new().with_edges("A", ["B"]).with_edges("X", []);
        let layout = TreeLayout::compute(&graph);
        assert_eq!(layout.root(), Some(&"A"));
        assert_eq!(layout.unplaced(), &[&"X"]);
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<&str> = Graph::new();
        let layout = TreeLayout::compute(&graph);
        assert!(layout.root().is_none());
        assert!(layout.rows().is_empty());
    }
}
