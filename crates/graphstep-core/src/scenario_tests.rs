//! Tests for the scenario runner.

use crate::error::Error;
use crate::graph::{Graph, Traversal};
use crate::scenario::{all_passed, builtin_scenarios, Scenario, ScenarioSuite};

#[test]
fn test_builtin_scenarios_all_pass() {
    let suite = ScenarioSuite::builtin();
    let outcomes = suite.run_all();
    assert_eq!(outcomes.len(), 12);
    for outcome in &outcomes {
        assert!(
            outcome.passed,
            "{} ({}) expected {:?}, got {:?}",
            outcome.scenario.description,
            outcome.scenario.algorithm,
            outcome.scenario.expected,
            outcome.actual
        );
    }
    assert!(all_passed(&outcomes));
}

#[test]
fn test_builtin_scenarios_cover_both_algorithms() {
    let scenarios = builtin_scenarios();
    let bfs = scenarios
        .iter()
        .filter(|s| s.algorithm == Traversal::BreadthFirst)
        .count();
    assert_eq!(bfs, scenarios.len() / 2);
}

#[test]
fn test_outcome_uses_last_step_as_actual() {
    let graph = Graph::new()
        .with_edges("A".to_string(), ["B".to_string()])
        .with_edges("B".to_string(), []);
    let scenario = Scenario::new("pair", graph, "A", Traversal::DepthFirst, &["A", "B"]);
    let outcome = scenario.run();
    assert!(outcome.passed);
    assert_eq!(outcome.steps, 2);
    assert_eq!(outcome.actual, vec!["A", "B"]);
}

#[test]
fn test_failing_scenario_is_reported() {
    let scenario = Scenario::new(
        "wrong expectation",
        Graph::new().with_edges("A".to_string(), []),
        "A",
        Traversal::BreadthFirst,
        &["B"],
    );
    let outcomes = vec![scenario.run()];
    assert!(!outcomes[0].passed);
    assert_eq!(outcomes[0].actual, vec!["A"]);
    assert!(!all_passed(&outcomes));
}

#[test]
fn test_unknown_start_yields_empty_actual() {
    let scenario = Scenario::new(
        "missing",
        Graph::new().with_edges("A".to_string(), []),
        "Z",
        Traversal::DepthFirst,
        &[],
    );
    let outcome = scenario.run();
    assert!(outcome.passed);
    assert_eq!(outcome.steps, 0);
    assert!(outcome.actual.is_empty());
}

#[test]
fn test_suite_from_json() {
    let suite = ScenarioSuite::from_json_str(
        r#"{
            "scenarios": [
                {
                    "description": "tree",
                    "graph": {"A": ["B", "C"], "B": ["D"]},
                    "start": "A",
                    "algorithm": "dfs",
                    "expected": ["A", "B", "D", "C"]
                }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(suite.scenarios.len(), 1);
    assert_eq!(suite.scenarios[0].algorithm, Traversal::DepthFirst);
    assert!(all_passed(&suite.run_all()));
}

#[test]
fn test_suite_rejects_empty_fixture() {
    let err = ScenarioSuite::from_json_str(r#"{"scenarios": []}"#).unwrap_err();
    assert!(matches!(err, Error::Scenario(_)));
}

#[test]
fn test_suite_rejects_blank_description() {
    let err = ScenarioSuite::from_json_str(
        r#"{"scenarios": [{"description": " ", "graph": {}, "start": "A", "algorithm": "BFS", "expected": []}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Scenario(msg) if msg.contains("#1")));
}

#[test]
fn test_suite_rejects_unknown_algorithm() {
    let err = ScenarioSuite::from_json_str(
        r#"{"scenarios": [{"description": "x", "graph": {}, "start": "A", "algorithm": "A*", "expected": []}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_outcome_serializes_flat() {
    let suite = ScenarioSuite::builtin();
    let outcome = suite.scenarios[0].run();
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["description"], "Empty graph");
    assert_eq!(value["algorithm"], "BFS");
    assert_eq!(value["passed"], true);
    assert_eq!(value["steps"], 0);
}
