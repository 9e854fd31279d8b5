//! Cast command implementation

use super::Target;
use super::output::{self, OutputFormat, Render};
use anyhow::{Context, Result};
use tempcast_types::{Date, DateTime, Time, Value};

/// Configuration for cast command
pub struct CastConfig {
    pub target: Target,
    pub input: String,
    pub json: bool,
    pub format: OutputFormat,
}

/// Cast the input to the target type and render it
pub fn cast(config: &CastConfig) -> Result<String> {
    match config.target {
        Target::Date => cast_as::<Date>(config),
        Target::Time => cast_as::<Time>(config),
        Target::DateTime => cast_as::<DateTime>(config),
    }
}

fn cast_as<T: Render>(config: &CastConfig) -> Result<String> {
    let input = parse_input(&config.input, config.json)?;
    log::debug!("casting {} to {}", input, T::NAME);

    let value = T::cast(input).with_context(|| format!("Invalid {} input: {}", T::NAME, config.input))?;
    output::render(&value, config.format)
}

/// Turn a command-line argument into a cast input.
///
/// Plain arguments are taken as strings; with `json` set the argument is
/// parsed as a JSON document so maps and tuples can be given.
pub fn parse_input(raw: &str, json: bool) -> Result<Value> {
    if json {
        serde_json::from_str(raw).with_context(|| format!("Failed to parse JSON input: {}", raw))
    } else {
        Ok(Value::from(raw))
    }
}
