//! Configuration management for the universe and its front end

pub mod settings;

pub use settings::{
    CliOverrides, OutputConfig, OutputFormat, RenderConfig, SeedStrategy, SeedingConfig,
    Settings, SimulationConfig, UniverseConfig,
};
