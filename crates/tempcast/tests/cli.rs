//! Tests for the CLI subcommands
//!
//! Covers:
//! - Rendering cast results in every output format
//! - Loading tuples in both shapes
//! - Comparing operands
//! - Reading the clock

#![cfg(feature = "cli")]

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempcast::cli::Target;
use tempcast::cli::cast::{CastConfig, cast};
use tempcast::cli::compare::{CompareConfig, compare};
use tempcast::cli::load::{LoadConfig, load};
use tempcast::cli::now::{NowConfig, now};
use tempcast::cli::output::OutputFormat;
use tempcast::{DateTime, Temporal};

fn cast_str(target: Target, input: &str, format: OutputFormat) -> String {
    let config = CastConfig {
        target,
        input: input.to_string(),
        json: false,
        format,
    };
    cast(&config).unwrap_or_else(|e| panic!("cast of '{}' failed: {:#}", input, e))
}

fn cast_json(target: Target, input: &str) -> anyhow::Result<String> {
    cast(&CastConfig {
        target,
        input: input.to_string(),
        json: true,
        format: OutputFormat::Dump,
    })
}

// === Cast ===

#[test]
fn test_cast_datetime_formats() {
    let input = "2014-04-17 14:00:00.030Z";
    assert_snapshot!(cast_str(Target::DateTime, input, OutputFormat::String), @"2014-04-17 14:00:00.030000");
    assert_snapshot!(cast_str(Target::DateTime, input, OutputFormat::Iso8601), @"2014-04-17T14:00:00.030000Z");
    assert_snapshot!(cast_str(Target::DateTime, input, OutputFormat::Dump), @"[[2014,4,17],[14,0,0,30000]]");
    assert_snapshot!(cast_str(Target::DateTime, input, OutputFormat::Erl), @"[[2014,4,17],[14,0,0]]");
    assert_snapshot!(cast_str(Target::DateTime, input, OutputFormat::Json), @r#""2014-04-17T14:00:00.030000Z""#);
}

#[test]
fn test_cast_date_formats() {
    assert_snapshot!(cast_str(Target::Date, "2014-04-17", OutputFormat::String), @"2014-04-17");
    assert_snapshot!(cast_str(Target::Date, "2014-04-17", OutputFormat::Dump), @"[2014,4,17]");
}

#[test]
fn test_cast_time_formats() {
    assert_snapshot!(cast_str(Target::Time, "09:05:03.5", OutputFormat::String), @"09:05:03.500000");
    assert_snapshot!(cast_str(Target::Time, "09:05:03.5", OutputFormat::Dump), @"[9,5,3,500000]");
}

#[rstest]
#[case(Target::Date, r#"{"year": 2014, "month": "04", "day": 17}"#, "[2014,4,17]")]
#[case(Target::Date, "[2014, 4, 17]", "[2014,4,17]")]
#[case(Target::Time, r#"{"hour": 14, "min": 30}"#, "[14,30,0,0]")]
#[case(Target::DateTime, "[[2014, 4, 17], [14, 0, 0, 5]]", "[[2014,4,17],[14,0,0,5]]")]
fn test_cast_json_input(#[case] target: Target, #[case] input: &str, #[case] expected: &str) {
    assert_eq!(cast_json(target, input).unwrap(), expected);
}

#[test]
fn test_cast_rejected_input() {
    let err = cast(&CastConfig {
        target: Target::Date,
        input: "2014-13-01".to_string(),
        json: false,
        format: OutputFormat::String,
    })
    .unwrap_err();
    assert_snapshot!(format!("{:#}", err), @"Invalid Date input: 2014-13-01: TC0001: cannot cast value to Date");
}

#[test]
fn test_cast_malformed_json() {
    let err = cast_json(Target::Date, "{year: 2014}").unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse JSON input"));
}

// === Load ===

#[rstest]
#[case(Target::Date, "[2014, 4, 17]", "2014-04-17")]
#[case(Target::Time, "[14, 0, 0]", "14:00:00")]
#[case(Target::Time, "[14, 0, 0, 500000]", "14:00:00.500000")]
#[case(Target::DateTime, "[[2014, 4, 17], [14, 0, 0]]", "2014-04-17T14:00:00Z")]
#[case(Target::DateTime, "[[2014, 4, 17], [14, 0, 0, 1]]", "2014-04-17T14:00:00.000001Z")]
fn test_load(#[case] target: Target, #[case] tuple: &str, #[case] expected: &str) {
    let config = LoadConfig {
        target,
        tuple: tuple.to_string(),
        format: OutputFormat::Iso8601,
    };
    assert_eq!(load(&config).unwrap(), expected);
}

#[rstest]
#[case(Target::Date, "[2014, 13, 1]")]
#[case(Target::Date, "[2014, 4]")]
#[case(Target::Time, "[24, 0, 0]")]
#[case(Target::DateTime, "[2014, 4, 17]")]
fn test_load_rejected(#[case] target: Target, #[case] tuple: &str) {
    let config = LoadConfig {
        target,
        tuple: tuple.to_string(),
        format: OutputFormat::String,
    };
    assert!(load(&config).is_err());
}

// === Compare ===

#[rstest]
#[case(Target::Date, "2014-04-17", "2014-04-18", "less")]
#[case(Target::Time, "14:00:00", "14:00:00Z", "equal")]
#[case(Target::DateTime, "2014-04-17T14:00:00.5", "2014-04-17 14:00:00", "greater")]
fn test_compare(#[case] target: Target, #[case] left: &str, #[case] right: &str, #[case] expected: &str) {
    let config = CompareConfig {
        target,
        left: left.to_string(),
        right: right.to_string(),
        json: false,
    };
    assert_eq!(compare(&config).unwrap(), expected);
}

#[test]
fn test_compare_rejects_invalid_operand() {
    let config = CompareConfig {
        target: Target::Time,
        left: "14:00:00".to_string(),
        right: "25:00:00".to_string(),
        json: false,
    };
    let err = compare(&config).unwrap_err();
    assert_eq!(err.to_string(), "Invalid right operand: 25:00:00");
}

// === Now ===

#[test]
fn test_now_datetime_truncates_usec() {
    let config = NowConfig {
        target: Target::DateTime,
        local: false,
        usec: false,
        format: OutputFormat::Iso8601,
    };
    let rendered = now(&config).unwrap();
    let parsed = DateTime::cast(rendered.as_str()).unwrap();
    assert_eq!(parsed.usec(), 0);
    assert_eq!(rendered, parsed.to_iso8601());
}

#[rstest]
#[case(Target::Date)]
#[case(Target::Time)]
#[case(Target::DateTime)]
fn test_now_local_with_usec(#[case] target: Target) {
    let config = NowConfig {
        target,
        local: true,
        usec: true,
        format: OutputFormat::Dump,
    };
    assert!(now(&config).is_ok());
}
