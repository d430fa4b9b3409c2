//! Configuration settings for the forward Game of Life simulator

use crate::error::SimulationError;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub side: usize,
    pub steps: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Inline seed bit string; takes precedence over `seed_file`
    pub seed: Option<String>,
    pub seed_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Flat '0'/'1' string, same encoding as the seed
    Bits,
    /// Row-per-line rendering for humans
    Visual,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig { side: 5, steps: 2 },
            input: InputConfig {
                seed: None,
                seed_file: Some(PathBuf::from("input/seeds/blinker.txt")),
            },
            output: OutputConfig {
                format: OutputFormat::Bits,
                output_file: None,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings after CLI overrides have been merged
    pub fn validate(&self) -> Result<()> {
        if self.input.seed.is_none() && self.input.seed_file.is_none() {
            anyhow::bail!(
                "No seed supplied: pass one on the command line, or configure \
                 an inline seed or a seed file"
            );
        }

        if self.input.seed.is_none() {
            if let Some(ref seed_file) = self.input.seed_file {
                if !seed_file.exists() {
                    anyhow::bail!("Seed file does not exist: {}", seed_file.display());
                }
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    ///
    /// Side and steps arrive as signed integers straight from the argument
    /// parser; negative values are rejected here rather than wrapped.
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) -> Result<(), SimulationError> {
        if let Some(side) = cli.side {
            self.simulation.side = non_negative("side", side)?;
        }
        if let Some(steps) = cli.steps {
            self.simulation.steps = non_negative("steps", steps)?;
        }
        if let Some(ref seed) = cli.seed {
            self.input.seed = Some(seed.clone());
            self.input.seed_file = None;
        }
        if let Some(ref seed_file) = cli.seed_file {
            self.input.seed_file = Some(seed_file.clone());
            self.input.seed = None;
        }
        if let Some(format) = cli.format {
            self.output.format = format;
        }
        if let Some(ref output_file) = cli.output_file {
            self.output.output_file = Some(output_file.clone());
        }
        Ok(())
    }
}

/// Convert a decimal-parsed argument to a cell or step count
pub fn non_negative(name: &str, value: i64) -> Result<usize, SimulationError> {
    usize::try_from(value).map_err(|_| {
        SimulationError::InvalidArgument(format!("{name} must be non-negative, got {value}"))
    })
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub side: Option<i64>,
    pub steps: Option<i64>,
    pub seed: Option<String>,
    pub seed_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
}
