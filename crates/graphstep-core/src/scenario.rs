//! Scenario runner: literal traversal cases with an expected final order.
//!
//! A scenario runs one algorithm on one graph, takes the last step (or an
//! empty order when there are no steps) as the actual result, and compares it
//! with the expected order. Fixtures are JSON documents of the form
//! `{"scenarios": [{"description", "graph", "start", "algorithm", "expected"}]}`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::graph::{Graph, Traversal};

/// A single traversal case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// What the case demonstrates.
    pub description: String,
    /// Input graph.
    pub graph: Graph<String>,
    /// Start node; need not be a key.
    pub start: String,
    /// Algorithm under test.
    pub algorithm: Traversal,
    /// Expected final visitation order.
    pub expected: Vec<String>,
}

impl Scenario {
    /// Creates a scenario from borrowed literals.
    #[must_use]
    pub fn new(
        description: &str,
        graph: Graph<String>,
        start: &str,
        algorithm: Traversal,
        expected: &[&str],
    ) -> Self {
        Self {
            description: description.to_string(),
            graph,
            start: start.to_string(),
            algorithm,
            expected: expected.iter().map(|n| (*n).to_string()).collect(),
        }
    }

    /// Runs the scenario against the traversal engine.
    #[must_use]
    pub fn run(&self) -> ScenarioOutcome<'_> {
        let steps = self.algorithm.steps(&self.graph, &self.start);
        let actual = steps.last().cloned().unwrap_or_default();
        let passed = actual == self.expected;
        if !passed {
            tracing::warn!(
                description = %self.description,
                algorithm = %self.algorithm,
                ?actual,
                expected = ?self.expected,
                "Scenario failed"
            );
        }
        ScenarioOutcome {
            scenario: self,
            steps: steps.len(),
            actual,
            passed,
        }
    }
}

/// Result of running one [`Scenario`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioOutcome<'a> {
    /// The scenario that was run.
    #[serde(flatten)]
    pub scenario: &'a Scenario,
    /// Number of steps the engine produced.
    pub steps: usize,
    /// Final visitation order actually produced.
    pub actual: Vec<String>,
    /// Whether `actual` equals the expected order.
    pub passed: bool,
}

/// A collection of scenarios, usually loaded from a fixture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSuite {
    /// Cases in execution order.
    pub scenarios: Vec<Scenario>,
}

impl ScenarioSuite {
    /// Parses a suite from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let suite: Self = serde_json::from_str(json)?;
        if suite.scenarios.is_empty() {
            return Err(Error::Scenario("fixture contains no scenarios".to_string()));
        }
        if let Some(blank) = suite
            .scenarios
            .iter()
            .position(|s| s.description.trim().is_empty())
        {
            return Err(Error::Scenario(format!(
                "scenario #{} has an empty description",
                blank + 1
            )));
        }
        Ok(suite)
    }

    /// Reads a suite from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let suite = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            scenarios = suite.scenarios.len(),
            "Loaded scenario fixture"
        );
        Ok(suite)
    }

    /// The built-in demonstration cases.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            scenarios: builtin_scenarios(),
        }
    }

    /// Runs every scenario in order.
    #[must_use]
    pub fn run_all(&self) -> Vec<ScenarioOutcome<'_>> {
        self.scenarios.iter().map(Scenario::run).collect()
    }
}

/// Returns `true` when every outcome passed.
#[must_use]
pub fn all_passed(outcomes: &[ScenarioOutcome<'_>]) -> bool {
    outcomes.iter().all(|o| o.passed)
}

fn chain() -> Graph<String> {
    string_graph(&[("A", &["B"]), ("B", &["C"]), ("C", &[])])
}

fn binary_tree() -> Graph<String> {
    string_graph(&[
        ("A", &["B", "C"]),
        ("B", &["D", "E"]),
        ("C", &["F", "G"]),
        ("D", &[]),
        ("E", &[]),
        ("F", &[]),
        ("G", &[]),
    ])
}

fn two_cycle() -> Graph<String> {
    string_graph(&[("A", &["B"]), ("B", &["A"])])
}

fn pair() -> Graph<String> {
    string_graph(&[("A", &["B"]), ("B", &[])])
}

fn string_graph(entries: &[(&str, &[&str])]) -> Graph<String> {
    entries
        .iter()
        .map(|(node, nbrs)| {
            (
                (*node).to_string(),
                nbrs.iter().map(|n| (*n).to_string()).collect(),
            )
        })
        .collect()
}

/// The demonstration cases: empty graph, single node, chain, binary tree,
/// two-node cycle and unknown start, each under the relevant algorithms.
#[must_use]
pub fn builtin_scenarios() -> Vec<Scenario> {
    use Traversal::{BreadthFirst, DepthFirst};

    let mut scenarios = Vec::with_capacity(12);
    for algorithm in Traversal::ALL {
        scenarios.push(Scenario::new("Empty graph", Graph::new(), "A", algorithm, &[]));
        scenarios.push(Scenario::new(
            "Single-node graph",
            string_graph(&[("A", &[])]),
            "A",
            algorithm,
            &["A"],
        ));
        scenarios.push(Scenario::new(
            "Simple linear graph",
            chain(),
            "A",
            algorithm,
            &["A", "B", "C"],
        ));
    }
    scenarios.push(Scenario::new(
        "Binary tree structure",
        binary_tree(),
        "A",
        BreadthFirst,
        &["A", "B", "C", "D", "E", "F", "G"],
    ));
    scenarios.push(Scenario::new(
        "Binary tree structure",
        binary_tree(),
        "A",
        DepthFirst,
        &["A", "B", "D", "E", "C", "F", "G"],
    ));
    scenarios.push(Scenario::new(
        "Cyclic graph – BFS should not loop infinitely",
        two_cycle(),
        "A",
        BreadthFirst,
        &["A", "B"],
    ));
    scenarios.push(Scenario::new(
        "Cyclic graph – DFS should not loop infinitely",
        two_cycle(),
        "A",
        DepthFirst,
        &["A", "B"],
    ));
    for algorithm in Traversal::ALL {
        scenarios.push(Scenario::new(
            "Invalid start node",
            pair(),
            "Z",
            algorithm,
            &[],
        ));
    }
    scenarios
}
