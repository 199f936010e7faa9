//! End-to-end tests for the graphstep binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn graphstep() -> Command {
    let mut cmd = Command::cargo_bin("graphstep").expect("binary exists");
    cmd.env_remove("RUST_LOG")
        .env("GRAPHSTEP_VISUALIZER__DELAY_MS", "0")
        .arg("--no-color");
    cmd
}

fn json_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_run_binary_tree_bfs() {
    graphstep()
        .args(["run", "--sample", "binary-tree", "--algorithm", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 7: visiting G"))
        .stdout(predicate::str::contains(
            "Visited so far: [A, B, C, D, E, F, G]",
        ))
        .stdout(predicate::str::contains("Traversal complete."))
        .stdout(predicate::str::contains("Number of steps: 7"))
        .stdout(predicate::str::contains("Algorithm run time (BFS):"))
        .stdout(predicate::str::contains("Tree drawn from root A"))
        .stdout(predicate::str::contains("Complexity: time O(V + E), space O(V)"));
}

#[test]
fn test_run_dfs_with_explanation() {
    graphstep()
        .args(["run", "-s", "binary-tree", "-a", "dfs", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Textual explanation:"))
        .stdout(predicate::str::contains(
            "Step 3: Visited node D. Visited so far: [A, B, D]",
        ));
}

#[test]
fn test_run_json_output() {
    let output = graphstep()
        .args(["run", "--sample", "cyclic", "--algorithm", "dfs", "--format", "json"])
        .output()
        .expect("run graphstep");
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(doc["algorithm"], "DFS");
    assert_eq!(doc["start"], "A");
    let steps = doc["steps"].as_array().expect("steps array");
    assert_eq!(steps.len(), 7);
    assert_eq!(
        steps[6],
        serde_json::json!(["A", "B", "C", "D", "E", "F", "G"])
    );
}

#[test]
fn test_run_graph_file_defaults_to_first_key() {
    let file = json_file(r#"{"X": ["Y"], "Y": ["X"]}"#);
    graphstep()
        .args(["run", "--graph-file"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("from node X"))
        .stdout(predicate::str::contains("Number of steps: 2"));
}

#[test]
fn test_run_rejects_unknown_start() {
    graphstep()
        .args(["run", "--sample", "linear", "--start", "Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Start node 'Z' is not a node of the graph"))
        .stderr(predicate::str::contains("valid start nodes: [A, B, C, D, E, F, G]"));
}

#[test]
fn test_run_rejects_large_delay() {
    graphstep()
        .args(["run", "--delay-ms", "5000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 1000"));
}

#[test]
fn test_run_rejects_unknown_algorithm() {
    graphstep()
        .args(["run", "--algorithm", "dijkstra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dijkstra"));
}

#[test]
fn test_builtin_scenarios_pass() {
    graphstep()
        .arg("scenarios")
        .assert()
        .success()
        .stdout(predicate::str::contains("Binary tree structure"))
        .stdout(predicate::str::contains("12/12 scenarios passed"))
        .stdout(predicate::str::contains("FAIL").not());
}

#[test]
fn test_failing_scenario_file_exits_non_zero() {
    let file = json_file(
        r#"{"scenarios": [{
            "description": "Deliberately wrong",
            "graph": {"A": ["B"], "B": []},
            "start": "A",
            "algorithm": "BFS",
            "expected": ["B", "A"]
        }]}"#,
    );
    graphstep()
        .args(["scenarios", "--file"])
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL"))
        .stderr(predicate::str::contains("1 scenario(s) failed"));
}

#[test]
fn test_scenarios_json_format() {
    let output = graphstep()
        .args(["scenarios", "--format", "json"])
        .output()
        .expect("run graphstep");
    assert!(output.status.success());
    let outcomes: Vec<serde_json::Value> =
        serde_json::from_slice(&output.stdout).expect("json outcomes");
    assert_eq!(outcomes.len(), 12);
    assert!(outcomes.iter().all(|o| o["passed"] == true));
}

#[test]
fn test_samples_lists_every_graph() {
    graphstep()
        .arg("samples")
        .assert()
        .success()
        .stdout(predicate::str::contains("linear"))
        .stdout(predicate::str::contains("binary-tree"))
        .stdout(predicate::str::contains("uneven-tree"))
        .stdout(predicate::str::contains("directed"))
        .stdout(predicate::str::contains("Cyclic Graph"));
}

#[test]
fn test_config_reads_explicit_file() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "[visualizer]\nalgorithm = \"DFS\"\nsample = \"uneven-tree\"").expect("write");
    graphstep()
        .args(["config", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm = \"DFS\""))
        .stdout(predicate::str::contains("sample = \"uneven-tree\""))
        .stdout(predicate::str::contains("delay_ms = 0"));
}

#[test]
fn test_missing_config_file_fails() {
    graphstep()
        .args(["config", "--config", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
