//! tempcast error types

use crate::{ErrorCode, TC0001, TC0002, TC0100};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A calendar or clock field checked by the range guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Min,
    Sec,
    Usec,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year => write!(f, "year"),
            Self::Month => write!(f, "month"),
            Self::Day => write!(f, "day"),
            Self::Hour => write!(f, "hour"),
            Self::Min => write!(f, "min"),
            Self::Sec => write!(f, "sec"),
            Self::Usec => write!(f, "usec"),
        }
    }
}

/// A single field that failed its range guard.
///
/// This is the typed outcome of the per-type validators. Public cast and
/// load entry points collapse it into [`CastError`] or [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{code}: {field} out of range: {value}")]
pub struct RangeError {
    code: ErrorCode,
    field: Field,
    value: i64,
}

impl RangeError {
    /// Create a range error for `field` holding `value`
    pub const fn new(field: Field, value: i64) -> Self {
        Self {
            code: TC0100,
            field,
            value,
        }
    }

    /// Get the error code
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// The field that violated its range
    pub const fn field(&self) -> Field {
        self.field
    }

    /// The offending value
    pub const fn value(&self) -> i64 {
        self.value
    }
}

/// Opaque cast failure.
///
/// Malformed strings, out-of-range fields and unsupported input shapes are
/// deliberately indistinguishable here; only the target type is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{code}: cannot cast value to {target}")]
pub struct CastError {
    code: ErrorCode,
    target: &'static str,
}

impl CastError {
    /// Create a cast error for the named target type
    pub const fn new(target: &'static str) -> Self {
        Self {
            code: TC0001,
            target,
        }
    }

    /// Get the error code
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Name of the type the cast targeted
    pub const fn target(&self) -> &'static str {
        self.target
    }
}

/// Opaque failure to load a value from its canonical tuple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{code}: cannot load {target} from canonical tuple")]
pub struct LoadError {
    code: ErrorCode,
    target: &'static str,
}

impl LoadError {
    /// Create a load error for the named target type
    pub const fn new(target: &'static str) -> Self {
        Self {
            code: TC0002,
            target,
        }
    }

    /// Get the error code
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Name of the type the load targeted
    pub const fn target(&self) -> &'static str {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_error_display() {
        let err = CastError::new("Date");
        assert_eq!(err.to_string(), "TC0001: cannot cast value to Date");
        assert_eq!(err.code(), TC0001);
        assert_eq!(err.target(), "Date");
    }

    #[test]
    fn test_load_error_display() {
        let err = LoadError::new("Time");
        assert_eq!(err.to_string(), "TC0002: cannot load Time from canonical tuple");
        assert_eq!(err.code(), TC0002);
    }

    #[test]
    fn test_range_error_reports_field() {
        let err = RangeError::new(Field::Month, 13);
        assert_eq!(err.field(), Field::Month);
        assert_eq!(err.value(), 13);
        assert_eq!(err.to_string(), "TC0100: month out of range: 13");
    }
}
