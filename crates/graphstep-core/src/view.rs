//! Renderer-facing view of a traversal.
//!
//! The engine only produces steps. Anything that draws them implements
//! [`StepRenderer`] and receives an explicit [`StepView`] per call, so no
//! rendering state is shared between runs.

use rustc_hash::FxHashSet;
use serde::Serialize;
use std::hash::Hash;
use std::time::Duration;

use crate::graph::Traversal;

/// How a node should be drawn at a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeState {
    /// Not visited yet.
    Unvisited,
    /// Visited at an earlier step.
    Visited,
    /// Newly visited at this step.
    Current,
}

impl NodeState {
    /// Returns `true` for both `Visited` and `Current`.
    #[must_use]
    pub fn is_visited(self) -> bool {
        !matches!(self, Self::Unvisited)
    }
}

/// One step as seen by a renderer.
#[derive(Debug, Clone)]
pub struct StepView<'a, N> {
    index: usize,
    order: &'a [N],
    visited: FxHashSet<&'a N>,
}

impl<'a, N: Eq + Hash> StepView<'a, N> {
    /// Builds the view of step `index` (1-based) with visitation `order`.
    #[must_use]
    pub fn new(index: usize, order: &'a [N]) -> Self {
        Self {
            index,
            order,
            visited: order.iter().collect(),
        }
    }

    /// 1-based step number.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Nodes visited so far, in visitation order.
    #[must_use]
    pub fn visited_order(&self) -> &'a [N] {
        self.order
    }

    /// The node newly visited at this step.
    #[must_use]
    pub fn current(&self) -> Option<&'a N> {
        self.order.last()
    }

    /// State of a single node at this step.
    #[must_use]
    pub fn state_of(&self, node: &N) -> NodeState {
        if self.current() == Some(node) {
            NodeState::Current
        } else if self.visited.contains(node) {
            NodeState::Visited
        } else {
            NodeState::Unvisited
        }
    }

    /// Classifies every node in `nodes`, preserving their order.
    pub fn classify<'n, I>(&self, nodes: I) -> Vec<(&'n N, NodeState)>
    where
        I: IntoIterator<Item = &'n N>,
        N: 'n,
    {
        nodes
            .into_iter()
            .map(|node| (node, self.state_of(node)))
            .collect()
    }
}

/// What a renderer is told before the first step.
#[derive(Debug, Clone)]
pub struct RunInfo<'a, N> {
    /// Algorithm being replayed.
    pub traversal: Traversal,
    /// Start node requested by the caller.
    pub start: &'a N,
    /// Every node of the graph, in display order.
    pub nodes: Vec<&'a N>,
}

/// What a renderer is told after the last step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Number of steps rendered.
    pub steps: usize,
    /// Time spent inside the traversal algorithm only.
    pub elapsed: Duration,
}

/// Draws a traversal one step at a time.
pub trait StepRenderer<N> {
    /// Error raised by the output sink.
    type Error;

    /// Called once before any step.
    fn begin(&mut self, run: &RunInfo<'_, N>) -> Result<(), Self::Error>;

    /// Called once per step, in order.
    fn render_step(&mut self, view: &StepView<'_, N>) -> Result<(), Self::Error>;

    /// Called once after the last step.
    fn finish(&mut self, summary: &RunSummary) -> Result<(), Self::Error>;
}

/// Replays `steps` through `renderer`, bracketed by `begin` and `finish`.
pub fn replay<N, R>(
    renderer: &mut R,
    run: &RunInfo<'_, N>,
    steps: &[Vec<N>],
    elapsed: Duration,
) -> Result<RunSummary, R::Error>
where
    N: Eq + Hash,
    R: StepRenderer<N> + ?Sized,
{
    renderer.begin(run)?;
    for (i, order) in steps.iter().enumerate() {
        renderer.render_step(&StepView::new(i + 1, order))?;
    }
    let summary = RunSummary {
        steps: steps.len(),
        elapsed,
    };
    renderer.finish(&summary)?;
    Ok(summary)
}
