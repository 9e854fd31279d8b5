//! tempcast diagnostics and error handling
//!
//! This crate provides the error infrastructure shared by the tempcast crates:
//! structured error codes, the opaque cast/load failures returned by the value
//! types, and the field-level range violations reported by their validators.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for cast operations
pub type CastResult<T> = std::result::Result<T, CastError>;

/// Result type for load operations
pub type LoadResult<T> = std::result::Result<T, LoadError>;
