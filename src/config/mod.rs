//! Configuration management for the forward simulator

pub mod settings;

pub use settings::{
    non_negative, CliOverrides, InputConfig, OutputConfig, OutputFormat, Settings,
    SimulationConfig,
};
