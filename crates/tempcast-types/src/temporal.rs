//! The protocol shared by the three value types

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cmp::Ordering;
use std::fmt;

use tempcast_diagnostics::{CastError, CastResult, LoadResult};

use crate::Value;

/// Operations every calendar value type supports.
///
/// `cast` validates arbitrary input, `dump`/`load` convert to and from the
/// canonical tuple persisted by storage backends, and `to_iso8601` renders
/// the machine-readable form. `Display` provides the human-readable form.
pub trait Temporal: Sized + Copy + Eq + fmt::Debug + fmt::Display {
    /// Type name used in failure messages
    const NAME: &'static str;

    /// Canonical tuple produced by [`Temporal::dump`]
    type Dumped: Ord + Copy + fmt::Debug + Serialize;

    /// Every tuple shape [`Temporal::load`] accepts
    type Wire: From<Self::Dumped> + DeserializeOwned;

    /// Cast external input into a validated value
    fn cast(input: impl Into<Value>) -> CastResult<Self>;

    /// Cast, treating invalid input as a programming error.
    ///
    /// # Panics
    ///
    /// Panics with the offending input in the message when the cast fails.
    fn cast_strict(input: impl Into<Value>) -> Self {
        let input = input.into();
        match Self::cast(input.clone()) {
            Ok(value) => value,
            Err(_) => panic!("cannot cast {} to {}", input, Self::NAME),
        }
    }

    /// Convert to the canonical tuple
    fn dump(&self) -> Self::Dumped;

    /// Rebuild a value from one of its tuple shapes
    fn load(wire: impl Into<Self::Wire>) -> LoadResult<Self>;

    /// Render the ISO-8601 form
    fn to_iso8601(&self) -> String;
}

/// Order two values of the same type by comparing their canonical tuples
/// field by field, earliest field first.
pub fn compare<T: Temporal>(a: &T, b: &T) -> Ordering {
    a.dump().cmp(&b.dump())
}

/// Log and build the opaque failure for a rejected cast input
pub(crate) fn reject<T: Temporal>(input: &Value) -> CastError {
    log::trace!("rejected {} cast input: {}", T::NAME, input);
    CastError::new(T::NAME)
}
