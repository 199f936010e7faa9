//! Terminal renderer for traversal steps.

use colored::Colorize;
use std::io::{self, Write};
use std::time::Duration;

use graphstep_core::{NodeState, RunInfo, RunSummary, StepRenderer, StepView, Traversal};

use crate::layout::TreeLayout;

/// Character columns used for one layout row.
const CANVAS_WIDTH: usize = 48;

/// Output options for [`TerminalRenderer`].
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Pause after each step.
    pub delay: Duration,
    /// Emit ANSI colors.
    pub color: bool,
}

/// Draws each step as a tree of node markers.
///
/// `[X]` is the node visited at this step, `(X)` an earlier visit and a bare
/// label a node not reached yet.
pub struct TerminalRenderer<'g, W> {
    out: W,
    layout: TreeLayout<'g, String>,
    options: RenderOptions,
    traversal: Traversal,
}

impl<'g, W: Write> TerminalRenderer<'g, W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W, layout: TreeLayout<'g, String>, options: RenderOptions) -> Self {
        Self {
            out,
            layout,
            options,
            traversal: Traversal::default(),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, label: &str, state: NodeState) -> String {
        let marked = match state {
            NodeState::Current => format!("[{label}]"),
            NodeState::Visited => format!("({label})"),
            NodeState::Unvisited => format!(" {label} "),
        };
        if !self.options.color {
            return marked;
        }
        match state {
            NodeState::Current => marked.yellow().bold().to_string(),
            NodeState::Visited => marked.green().to_string(),
            NodeState::Unvisited => marked.dimmed().to_string(),
        }
    }

    fn draw_row(&self, row: &[(&String, f64)], view: &StepView<'_, String>) -> String {
        let mut line = String::new();
        let mut column = 0;
        for (node, x) in row {
            let label_width = node.chars().count() + 2;
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_precision_loss
            )]
            let center = (x * CANVAS_WIDTH as f64).round() as usize;
            let target = center.saturating_sub(label_width / 2).max(column);
            line.push_str(&" ".repeat(target - column));
            line.push_str(&self.paint(node, view.state_of(node)));
            column = target + label_width;
        }
        line
    }
}

impl<W: Write> StepRenderer<String> for TerminalRenderer<'_, W> {
    type Error = io::Error;

    fn begin(&mut self, run: &RunInfo<'_, String>) -> io::Result<()> {
        self.traversal = run.traversal;
        let title = format!(
            "{} from node {} ({} nodes)",
            run.traversal.name(),
            run.start,
            run.nodes.len()
        );
        if self.options.color {
            writeln!(self.out, "{}", title.bold())?;
        } else {
            writeln!(self.out, "{title}")?;
        }
        if let Some(root) = self.layout.root() {
            writeln!(self.out, "Tree drawn from root {root}")?;
        }
        writeln!(self.out)
    }

    fn render_step(&mut self, view: &StepView<'_, String>) -> io::Result<()> {
        let current = view.current().map_or("?", String::as_str);
        writeln!(self.out, "Step {}: visiting {current}", view.index())?;

        for row in self.layout.rows() {
            let line = self.draw_row(&row, view);
            writeln!(self.out, "  {}", line.trim_end())?;
        }
        let unplaced = self.layout.unplaced();
        if !unplaced.is_empty() {
            let rest: Vec<String> = unplaced
                .iter()
                .map(|n| self.paint(n, view.state_of(n)))
                .collect();
            writeln!(self.out, "  unreachable from root: {}", rest.join(" "))?;
        }

        writeln!(self.out, "Visited so far: [{}]", view.visited_order().join(", "))?;
        writeln!(self.out)?;
        self.out.flush()?;

        if !self.options.delay.is_zero() {
            std::thread::sleep(self.options.delay);
        }
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> io::Result<()> {
        let done = "Traversal complete.";
        if self.options.color {
            writeln!(self.out, "{}", done.green().bold())?;
        } else {
            writeln!(self.out, "{done}")?;
        }
        writeln!(self.out, "Number of steps: {}", summary.steps)?;
        writeln!(
            self.out,
            "Algorithm run time ({}): {:.3} ms",
            self.traversal.label(),
            summary.elapsed.as_secs_f64() * 1_000.0
        )?;
        let (time, space) = self.traversal.complexity();
        writeln!(self.out, "Complexity: time {time}, space {space}")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphstep_core::view::replay;
    use graphstep_core::SampleGraph;

    fn plain() -> RenderOptions {
        RenderOptions {
            delay: Duration::ZERO,
            color: false,
        }
    }

    #[test]
    fn test_renders_markers_and_summary() {
        let graph = SampleGraph::BinaryTree.graph();
        let start = "A".to_string();
        let steps = Traversal::BreadthFirst.steps(&graph, &start);
        let run = RunInfo {
            traversal: Traversal::BreadthFirst,
            start: &start,
            nodes: graph.nodes(),
        };

        let mut renderer = TerminalRenderer::new(Vec::new(), TreeLayout::compute(&graph), plain());
        let summary = replay(&mut renderer, &run, &steps, Duration::from_micros(1500)).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();

        assert_eq!(summary.steps, 7);
        assert!(text.starts_with("Breadth-First Search (BFS) from node A (7 nodes)"));
        assert!(text.contains("Tree drawn from root A"));
        assert!(text.contains("Step 2: visiting B"));
        assert!(text.contains("(A)"));
        assert!(text.contains("[B]"));
        assert!(text.contains("Visited so far: [A, B]"));
        assert!(text.contains("Traversal complete."));
        assert!(text.contains("Number of steps: 7"));
        assert!(text.contains("Algorithm run time (BFS): 1.500 ms"));
        assert!(text.contains("Complexity: time O(V + E), space O(V)"));
    }

    #[test]
    fn test_unreachable_nodes_are_listed() {
        let graph = graphstep_core::Graph::from_json_str(r#"{"A": ["B"], "X": []}"#).unwrap();
        let start = "A".to_string();
        let steps = Traversal::DepthFirst.steps(&graph, &start);
        let run = RunInfo {
            traversal: Traversal::DepthFirst,
            start: &start,
            nodes: graph.nodes(),
        };
        let mut renderer = TerminalRenderer::new(Vec::new(), TreeLayout::compute(&graph), plain());
        replay(&mut renderer, &run, &steps, Duration::ZERO).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.contains("unreachable from root:  X "));
    }
}
