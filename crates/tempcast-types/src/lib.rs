//! tempcast value types
//!
//! This crate defines the immutable calendar values used by a data-access
//! layer and the machinery around them:
//! - [`Date`], [`Time`] and [`DateTime`] value types
//! - Casting from heterogeneous input ([`Value`]) into validated values
//! - Dump/load to the canonical tuples persisted by storage backends
//! - Display and ISO-8601 rendering, and same-type ordering

mod clock;
pub mod date;
pub mod datetime;
pub mod temporal;
pub mod time;
pub mod util;
pub mod value;

pub use date::{Date, DateTuple};
pub use datetime::{DateTime, DateTimeTuple, DateTimeWire, ErlDateTime};
pub use temporal::{Temporal, compare};
pub use time::{ErlTime, Time, TimeTuple, TimeWire};
pub use value::Value;

pub use tempcast_diagnostics::{CastError, CastResult, ErrorCode, Field, LoadError, LoadResult, RangeError};
