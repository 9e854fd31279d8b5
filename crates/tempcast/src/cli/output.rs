//! Output formatting utilities

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use tempcast_diagnostics::{CastError, ErrorCode, LoadError};
use tempcast_types::{Date, DateTime, DateTuple, ErlDateTime, ErlTime, Temporal, Time};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable form, e.g. `2014-04-17 14:00:00`
    #[default]
    String,
    /// ISO-8601 form, e.g. `2014-04-17T14:00:00Z`
    Iso8601,
    /// Canonical tuple as a JSON array
    Dump,
    /// Host calendar tuple as a JSON array, without microseconds
    Erl,
    /// JSON document produced by serde
    Json,
}

/// A value type the CLI can print in every [`OutputFormat`]
pub trait Render: Temporal + Serialize {
    type Erl: Serialize;

    fn erl(&self) -> Self::Erl;
}

impl Render for Date {
    type Erl = DateTuple;

    fn erl(&self) -> DateTuple {
        self.to_erl()
    }
}

impl Render for Time {
    type Erl = ErlTime;

    fn erl(&self) -> ErlTime {
        self.to_erl()
    }
}

impl Render for DateTime {
    type Erl = ErlDateTime;

    fn erl(&self) -> ErlDateTime {
        self.to_erl()
    }
}

/// Render a value in the requested format
pub fn render<T: Render>(value: &T, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::String => value.to_string(),
        OutputFormat::Iso8601 => value.to_iso8601(),
        OutputFormat::Dump => format_json(&value.dump())?,
        OutputFormat::Erl => format_json(&value.erl())?,
        OutputFormat::Json => format_json(value)?,
    };
    Ok(rendered)
}

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(io::stderr().is_terminal()),
    }
}

/// Format an error for display, including its causes and, for cast and
/// load failures, the help text of their error code
pub fn format_error(error: &anyhow::Error) -> String {
    let mut message = format!("{} {:#}", "Error:".red().bold(), error);
    if let Some(help) = error_code(error).and_then(|code| code.info().help) {
        message.push_str(&format!("\n  {} {}", "help:".cyan(), help));
    }
    message
}

/// Find the code of the first cast or load failure in the error chain
fn error_code(error: &anyhow::Error) -> Option<ErrorCode> {
    error.chain().find_map(|cause| {
        cause
            .downcast_ref::<CastError>()
            .map(CastError::code)
            .or_else(|| cause.downcast_ref::<LoadError>().map(LoadError::code))
    })
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Write output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        writeln!(file, "{}", content)
            .with_context(|| format!("Failed to write to output file: {}", path.display()))?;
        eprintln!(
            "{}",
            format_success(&format!("Output written to {}", path.display()))
        );
    } else {
        println!("{}", content);
    }
    Ok(())
}

/// Serialize a value as compact JSON
pub fn format_json<S: Serialize + ?Sized>(value: &S) -> Result<String> {
    serde_json::to_string(value).context("Failed to serialize JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_includes_causes() {
        colored::control::set_override(false);
        let error = anyhow::anyhow!("inner").context("outer");
        assert_eq!(format_error(&error), "Error: outer: inner");
    }

    #[test]
    fn test_format_error_shows_code_help() {
        colored::control::set_override(false);
        let error = anyhow::Error::from(CastError::new("Date")).context("Invalid Date input: 2014-13-01");
        assert_eq!(
            format_error(&error),
            "Error: Invalid Date input: 2014-13-01: TC0001: cannot cast value to Date\n  \
             help: Accepted inputs are ISO-8601 strings, keyed maps, tuples or an existing value"
        );

        let error = anyhow::Error::from(LoadError::new("Time"));
        assert!(format_error(&error).contains("help: Dates load from (year, month, day)"));
    }

    #[test]
    fn test_render_erl_drops_usec() {
        let time = Time::cast("14:00:00.5").unwrap();
        assert_eq!(render(&time, OutputFormat::Erl).unwrap(), "[14,0,0]");
        assert_eq!(render(&time, OutputFormat::Dump).unwrap(), "[14,0,0,500000]");
    }
}
