//! Compare command implementation

use super::Target;
use super::cast::parse_input;
use anyhow::{Context, Result};
use std::cmp::Ordering;
use tempcast_types::{Date, DateTime, Temporal, Time};

/// Configuration for compare command
pub struct CompareConfig {
    pub target: Target,
    pub left: String,
    pub right: String,
    pub json: bool,
}

/// Compare two inputs of the same type, returning `less`, `equal` or `greater`
pub fn compare(config: &CompareConfig) -> Result<String> {
    let ordering = match config.target {
        Target::Date => compare_as::<Date>(config)?,
        Target::Time => compare_as::<Time>(config)?,
        Target::DateTime => compare_as::<DateTime>(config)?,
    };
    Ok(ordering_name(ordering).to_string())
}

fn compare_as<T: Temporal>(config: &CompareConfig) -> Result<Ordering> {
    let left = T::cast(parse_input(&config.left, config.json)?)
        .with_context(|| format!("Invalid left operand: {}", config.left))?;
    let right = T::cast(parse_input(&config.right, config.json)?)
        .with_context(|| format!("Invalid right operand: {}", config.right))?;

    Ok(tempcast_types::compare(&left, &right))
}

fn ordering_name(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}
