//! tempcast error codes following a structured numbering system
//!
//! Error code ranges:
//! - TC0001-TC0099: Conversion failures (cast, load)
//! - TC0100-TC0199: Range violations (guards)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TC{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

use std::collections::HashMap;
use std::sync::LazyLock;

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Conversion errors (0001-0099)
    map.insert(
        1,
        ErrorInfo::new("Cannot cast value")
            .with_help("Accepted inputs are ISO-8601 strings, keyed maps, tuples or an existing value"),
    );
    map.insert(
        2,
        ErrorInfo::new("Cannot load canonical tuple")
            .with_help("Dates load from (year, month, day), times from (hour, min, sec[, usec])"),
    );

    // Range errors (0100-0199)
    map.insert(
        100,
        ErrorInfo::new("Field out of range")
            .with_help("Months are 1-12, days 1-31, hours 0-23, minutes and seconds 0-59"),
    );

    map
});

// Conversion errors
pub const TC0001: ErrorCode = ErrorCode::new(1);
pub const TC0002: ErrorCode = ErrorCode::new(2);

// Range errors
pub const TC0100: ErrorCode = ErrorCode::new(100);
