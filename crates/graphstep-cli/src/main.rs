//! graphstep - step-by-step BFS and DFS in the terminal.

mod commands;
mod explain;
mod layout;
mod render;
mod report;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use graphstep_core::{GraphstepConfig, SampleGraph, Traversal};

use crate::commands::{ReportFormat, RunFormat, RunRequest};

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Visualize breadth-first and depth-first search one step at a time
#[derive(Parser, Debug)]
#[command(name = "graphstep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./graphstep.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Traverse a graph and print every step
    Run {
        /// Built-in sample graph
        #[arg(short, long, conflicts_with = "graph_file")]
        sample: Option<SampleGraph>,

        /// JSON file holding an adjacency map
        #[arg(short = 'f', long)]
        graph_file: Option<PathBuf>,

        /// Start node
        #[arg(long)]
        start: Option<String>,

        /// Traversal algorithm (bfs or dfs)
        #[arg(short, long)]
        algorithm: Option<Traversal>,

        /// Pause between steps in milliseconds (0 to 1000)
        #[arg(short, long)]
        delay_ms: Option<u64>,

        /// Print a plain-language explanation of each step
        #[arg(short, long)]
        explain: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = RunFormat::Text)]
        format: RunFormat,
    },

    /// Run the scenario suite and print a pass/fail report
    Scenarios {
        /// JSON scenario file (defaults to the built-in suite)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,
    },

    /// List the built-in sample graphs
    Samples,

    /// Print the effective configuration
    Config,
}

/// `RUST_LOG` wins; otherwise the configured level raised by `-v`.
fn init_tracing(config: &GraphstepConfig, verbose: u8) {
    let base = LEVELS
        .iter()
        .position(|l| l.eq_ignore_ascii_case(&config.logging.level))
        .unwrap_or(1);
    let level = LEVELS[(base + usize::from(verbose)).min(LEVELS.len() - 1)];
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GraphstepConfig::load_from_path(path),
        None => GraphstepConfig::load(),
    }
    .context("failed to load configuration")?;
    if cli.no_color {
        config.visualizer.color = false;
    }

    init_tracing(&config, cli.verbose);
    tracing::debug!(command = ?cli.command, "Starting graphstep");

    match cli.command {
        Commands::Run {
            sample,
            graph_file,
            start,
            algorithm,
            delay_ms,
            explain,
            format,
        } => {
            let request = RunRequest {
                sample,
                graph_file,
                start,
                algorithm,
                delay_ms,
                explain,
                format,
            };
            commands::cmd_run(&request, &config)
        }
        Commands::Scenarios { file, format } => {
            commands::cmd_scenarios(file.as_ref(), format, &config)
        }
        Commands::Samples => commands::cmd_samples(&config),
        Commands::Config => commands::cmd_config(&config),
    }
}
