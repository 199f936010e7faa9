//! Layered configuration for the visualizer.
//!
//! Sources, lowest priority first:
//! 1. Built-in defaults
//! 2. `graphstep.toml` in the working directory, or an explicit file
//! 3. Environment variables prefixed with `GRAPHSTEP_` (nested keys use `__`,
//!    e.g. `GRAPHSTEP_VISUALIZER__DELAY_MS=0`)

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::graph::Traversal;
use crate::samples::SampleGraph;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "graphstep.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GRAPHSTEP_";

/// Largest accepted pause between animation steps.
pub const MAX_DELAY_MS: u64 = 1_000;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Settings for one visualizer run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Built-in sample graph to traverse.
    pub sample: SampleGraph,
    /// Start node.
    pub start: String,
    /// Traversal algorithm.
    pub algorithm: Traversal,
    /// Pause between rendered steps, in milliseconds.
    pub delay_ms: u64,
    /// Colorize terminal output.
    pub color: bool,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            sample: SampleGraph::default(),
            start: SampleGraph::default().default_start(),
            algorithm: Traversal::default(),
            delay_ms: 200,
            color: true,
        }
    }
}

/// Logging settings, applied when no `RUST_LOG` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Full graphstep configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphstepConfig {
    /// Visualizer settings.
    pub visualizer: VisualizerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl GraphstepConfig {
    /// Loads defaults, `graphstep.toml` (if present) and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(Figment::new().merge(Toml::file(CONFIG_FILE_NAME)))
    }

    /// Loads defaults, the given file (which must exist) and the environment.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Self::load_from(Figment::new().merge(Toml::file(path)))
    }

    /// Parses a TOML document on top of the defaults, ignoring the environment.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(Self::default())).merge(Toml::string(toml));
        Self::extract(&figment)
    }

    fn load_from(file: Figment) -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(file)
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self::extract(&figment)
    }

    fn extract(figment: &Figment) -> Result<Self> {
        let config: Self = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let vis = &self.visualizer;
        if vis.delay_ms > MAX_DELAY_MS {
            return Err(Error::Config(format!(
                "visualizer.delay_ms must be at most {MAX_DELAY_MS}, got {}",
                vis.delay_ms
            )));
        }
        if vis.start.trim().is_empty() {
            return Err(Error::Config("visualizer.start must not be empty".to_string()));
        }
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::Config(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }
        Ok(())
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}
