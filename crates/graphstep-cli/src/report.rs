//! Scenario report rendering.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use graphstep_core::ScenarioOutcome;

fn list(nodes: &[String]) -> String {
    format!("[{}]", nodes.join(", "))
}

/// Builds the scenario report table.
pub fn scenario_table(outcomes: &[ScenarioOutcome<'_>], color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Description",
            "Algorithm",
            "Start",
            "Input Graph",
            "Expected",
            "Actual",
            "Result",
        ]);

    for outcome in outcomes {
        let scenario = outcome.scenario;
        let graph = scenario
            .graph
            .to_json_string()
            .unwrap_or_else(|_| String::from("<unprintable>"));
        let (verdict, tint) = if outcome.passed {
            ("PASS", Color::Green)
        } else {
            ("FAIL", Color::Red)
        };
        let result = if color {
            Cell::new(verdict).fg(tint)
        } else {
            Cell::new(verdict)
        };
        table.add_row(vec![
            Cell::new(&scenario.description),
            Cell::new(scenario.algorithm.label()),
            Cell::new(&scenario.start),
            Cell::new(graph),
            Cell::new(list(&scenario.expected)),
            Cell::new(list(&outcome.actual)),
            result,
        ]);
    }
    table
}

/// One-line pass count, e.g. `12/12 scenarios passed`.
#[must_use]
pub fn summary_line(outcomes: &[ScenarioOutcome<'_>]) -> String {
    let passed = outcomes.iter().filter(|o| o.passed).count();
    format!("{passed}/{} scenarios passed", outcomes.len())
}
