//! Subcommand handlers.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use graphstep_core::config::MAX_DELAY_MS;
use graphstep_core::view::replay;
use graphstep_core::{
    scenario::all_passed, Error, Graph, GraphstepConfig, RunInfo, SampleGraph, ScenarioSuite,
    Traversal,
};

use crate::explain::explain_steps;
use crate::layout::TreeLayout;
use crate::render::{RenderOptions, TerminalRenderer};
use crate::report::{scenario_table, summary_line};

/// Output format for `run`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RunFormat {
    /// Animated tree drawing.
    #[default]
    Text,
    /// Single JSON document.
    Json,
}

/// Output format for `scenarios`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Bordered table.
    #[default]
    Table,
    /// JSON array of outcomes.
    Json,
}

/// Arguments of `run`. `None` falls back to the configuration.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub sample: Option<SampleGraph>,
    /// JSON adjacency map; takes precedence over `sample`.
    pub graph_file: Option<PathBuf>,
    pub start: Option<String>,
    pub algorithm: Option<Traversal>,
    pub delay_ms: Option<u64>,
    pub explain: bool,
    pub format: RunFormat,
}

fn load_graph(request: &RunRequest, config: &GraphstepConfig) -> Result<(Graph<String>, String)> {
    if let Some(path) = &request.graph_file {
        let graph = Graph::from_json_file(path)
            .with_context(|| format!("failed to load graph from {}", path.display()))?;
        let start = request
            .start
            .clone()
            .or_else(|| graph.keys().next().cloned())
            .unwrap_or_else(|| config.visualizer.start.clone());
        return Ok((graph, start));
    }

    let sample = request.sample.unwrap_or(config.visualizer.sample);
    let start = match (&request.start, request.sample) {
        (Some(start), _) => start.clone(),
        (None, Some(sample)) => sample.default_start(),
        (None, None) => config.visualizer.start.clone(),
    };
    Ok((sample.graph(), start))
}

/// Traverses one graph and prints each step.
pub fn cmd_run(request: &RunRequest, config: &GraphstepConfig) -> Result<()> {
    let (graph, start) = load_graph(request, config)?;
    let traversal = request.algorithm.unwrap_or(config.visualizer.algorithm);
    let delay_ms = request.delay_ms.unwrap_or(config.visualizer.delay_ms);
    if delay_ms > MAX_DELAY_MS {
        bail!("--delay-ms must be at most {MAX_DELAY_MS}, got {delay_ms}");
    }

    if !graph.contains(&start) {
        let choices: Vec<&str> = graph.keys().map(String::as_str).collect();
        return Err(Error::UnknownStartNode(start))
            .with_context(|| format!("valid start nodes: [{}]", choices.join(", ")));
    }

    let started = Instant::now();
    let steps = traversal.steps(&graph, &start);
    let elapsed = started.elapsed();
    tracing::info!(
        algorithm = %traversal,
        start = %start,
        steps = steps.len(),
        elapsed_us = elapsed.as_micros(),
        "Traversal finished"
    );

    match request.format {
        RunFormat::Json => {
            let mut doc = serde_json::json!({
                "algorithm": traversal.label(),
                "start": start,
                "steps": steps,
                "run_time_ms": elapsed.as_secs_f64() * 1_000.0,
            });
            if request.explain {
                doc["explanation"] = serde_json::json!(explain_steps(&steps));
            }
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        RunFormat::Text => {
            let options = RenderOptions {
                delay: Duration::from_millis(delay_ms),
                color: config.visualizer.color,
            };
            let run = RunInfo {
                traversal,
                start: &start,
                nodes: graph.nodes(),
            };
            let stdout = io::stdout();
            let mut renderer =
                TerminalRenderer::new(stdout.lock(), TreeLayout::compute(&graph), options);
            replay(&mut renderer, &run, &steps, elapsed).context("failed to write steps")?;

            if request.explain {
                let mut out = renderer.into_inner();
                writeln!(out)?;
                writeln!(out, "Textual explanation:")?;
                for line in explain_steps(&steps) {
                    writeln!(out, "  {line}")?;
                }
            }
        }
    }
    Ok(())
}

/// Runs a scenario suite and prints the report. Fails if any scenario fails.
pub fn cmd_scenarios(
    file: Option<&PathBuf>,
    format: ReportFormat,
    config: &GraphstepConfig,
) -> Result<()> {
    let suite = match file {
        Some(path) => ScenarioSuite::from_json_file(path)
            .with_context(|| format!("failed to load scenarios from {}", path.display()))?,
        None => ScenarioSuite::builtin(),
    };
    let outcomes = suite.run_all();

    match format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&outcomes)?),
        ReportFormat::Table => {
            println!("{}", scenario_table(&outcomes, config.visualizer.color));
            let line = summary_line(&outcomes);
            if !config.visualizer.color {
                println!("{line}");
            } else if all_passed(&outcomes) {
                println!("{}", line.green());
            } else {
                println!("{}", line.red());
            }
        }
    }

    if !all_passed(&outcomes) {
        let failed = outcomes.iter().filter(|o| !o.passed).count();
        bail!("{failed} scenario(s) failed");
    }
    Ok(())
}

/// Lists the built-in sample graphs.
pub fn cmd_samples(config: &GraphstepConfig) -> Result<()> {
    for sample in SampleGraph::ALL {
        let graph = sample.graph();
        let name = if config.visualizer.color {
            sample.slug().cyan().to_string()
        } else {
            sample.slug().to_string()
        };
        println!(
            "{name:<12} {} ({} nodes, {} edges)",
            sample.title(),
            graph.node_count(),
            graph.edge_count()
        );
        println!("             {}", graph.to_json_string()?);
    }
    Ok(())
}

/// Prints the effective configuration as TOML.
pub fn cmd_config(config: &GraphstepConfig) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
