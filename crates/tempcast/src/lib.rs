//! Immutable calendar values for a data-access layer
//!
//! This crate provides:
//! - [`Date`], [`Time`] and [`DateTime`] value types
//! - Casting from strings, keyed maps, tuples and existing values
//! - Dump/load to the canonical tuples persisted by storage backends
//! - Display and ISO-8601 rendering, and same-type comparison
//!
//! # Example
//!
//! ```
//! use tempcast::{DateTime, Temporal};
//!
//! let dt = DateTime::cast("2014-04-17 14:00:00.030Z")?;
//! assert_eq!(dt.dump(), ((2014, 4, 17), (14, 0, 0, 30_000)));
//! assert_eq!(dt.to_iso8601(), "2014-04-17T14:00:00.030000Z");
//! # Ok::<(), tempcast::CastError>(())
//! ```

// Re-export all public APIs from internal crates
pub use tempcast_diagnostics as diagnostics;
pub use tempcast_types as types;

// Convenience re-exports
pub use tempcast_diagnostics::{CastError, CastResult, ErrorCode, LoadError, LoadResult, RangeError};
pub use tempcast_types::{Date, DateTime, Temporal, Time, Value, compare};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
