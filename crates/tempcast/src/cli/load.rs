//! Load command implementation

use super::Target;
use super::output::{self, OutputFormat, Render};
use anyhow::{Context, Result};
use tempcast_types::{Date, DateTime, Time};

/// Configuration for load command
pub struct LoadConfig {
    pub target: Target,
    /// Canonical or host calendar tuple as a JSON array
    pub tuple: String,
    pub format: OutputFormat,
}

/// Load a value from its tuple and render it
pub fn load(config: &LoadConfig) -> Result<String> {
    match config.target {
        Target::Date => load_as::<Date>(config),
        Target::Time => load_as::<Time>(config),
        Target::DateTime => load_as::<DateTime>(config),
    }
}

fn load_as<T: Render>(config: &LoadConfig) -> Result<String> {
    let wire: T::Wire = serde_json::from_str(&config.tuple)
        .with_context(|| format!("Failed to parse {} tuple: {}", T::NAME, config.tuple))?;

    let value = T::load(wire)?;
    output::render(&value, config.format)
}
