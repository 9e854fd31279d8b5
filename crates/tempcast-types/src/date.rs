//! Date value type

use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tempcast_diagnostics::{CastError, CastResult, Field, LoadError, LoadResult, RangeError};

use crate::temporal::{Temporal, compare, reject};
use crate::util::{check_date, date_fields, has_time_suffix, required, tuple_ints, zero_pad};
use crate::{Value, clock};

/// Canonical `(year, month, day)` tuple
pub type DateTuple = (i32, u8, u8);

/// A calendar date without a timezone.
///
/// Month and day are range checked independently of each other and of the
/// real calendar, so `2021-02-30` is a valid `Date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Value")]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl Date {
    /// Build a date from raw integer fields, reporting the first field that
    /// fails the date guard
    pub fn from_parts(year: i64, month: i64, day: i64) -> Result<Self, RangeError> {
        check_date(year, month, day)?;
        let year = i32::try_from(year).map_err(|_| RangeError::new(Field::Year, year))?;
        Ok(Self {
            year,
            month: month as u8,
            day: day as u8,
        })
    }

    /// Year component
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month component (1-12)
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day component (1-31)
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Convert to a host calendar `(year, month, day)` triple
    pub fn to_erl(&self) -> DateTuple {
        (self.year, self.month, self.day)
    }

    /// Build from a host calendar `(year, month, day)` triple
    pub fn from_erl((year, month, day): DateTuple) -> CastResult<Self> {
        Self::from_parts(year.into(), month.into(), day.into()).map_err(|_| CastError::new(Self::NAME))
    }

    /// Current date in UTC
    pub fn utc() -> Self {
        clock::utc_now().date().into()
    }

    /// Current date in the host's local timezone.
    ///
    /// Local time jumps across DST transitions, so two successive calls are
    /// not guaranteed to be ordered.
    #[deprecated(note = "local time is not monotonic across DST transitions, use Date::utc")]
    pub fn local() -> Self {
        clock::local_now().date().into()
    }

    /// Convert to a chrono date, if this date exists in the calendar
    pub fn to_naive_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(self.year, self.month.into(), self.day.into())
    }

    fn cast_value(input: &Value) -> Option<Self> {
        let (year, month, day) = match input {
            Value::Date(date) => return Some(*date),
            Value::String(s) => {
                let (fields, end) = date_fields(s)?;
                let rest = s.get(end..)?;
                if !(rest.is_empty() || has_time_suffix(rest)) {
                    return None;
                }
                fields
            }
            Value::Map(map) => (
                required(map, "year")?,
                required(map, "month")?,
                required(map, "day")?,
            ),
            Value::Tuple(elements) if elements.len() == 3 => {
                let ints = tuple_ints(elements)?;
                (ints[0], ints[1], ints[2])
            }
            _ => return None,
        };
        Self::from_parts(year, month, day).ok()
    }
}

impl Temporal for Date {
    const NAME: &'static str = "Date";

    type Dumped = DateTuple;
    type Wire = DateTuple;

    /// Accepts, in order: a `YYYY-MM-DD` string, a
    /// `YYYY-MM-DD<sep>HH:MM:SS...` string whose time part is skipped, an
    /// existing `Date`, a map with `year`, `month` and `day`, or a
    /// `(year, month, day)` tuple. Fields may be integers or integer strings.
    /// Years outside 0-9999 are read in the signed, extended form `Display`
    /// writes (`-0044-03-15`, `12345-01-02`).
    fn cast(input: impl Into<Value>) -> CastResult<Self> {
        let input = input.into();
        Self::cast_value(&input).ok_or_else(|| reject::<Self>(&input))
    }

    fn dump(&self) -> DateTuple {
        (self.year, self.month, self.day)
    }

    fn load(wire: impl Into<Self::Wire>) -> LoadResult<Self> {
        let (year, month, day) = wire.into();
        Self::from_parts(year.into(), month.into(), day.into()).map_err(|_| LoadError::new(Self::NAME))
    }

    fn to_iso8601(&self) -> String {
        self.to_string()
    }
}

impl From<chrono::NaiveDate> for Date {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            year: date.year(),
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-")?;
        }
        write!(
            f,
            "{}-{}-{}",
            zero_pad(self.year.unsigned_abs().into(), 4),
            zero_pad(self.month.into(), 2),
            zero_pad(self.day.into(), 2)
        )
    }
}

impl FromStr for Date {
    type Err = CastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::cast(s)
    }
}

impl TryFrom<Value> for Date {
    type Error = CastError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::cast(value)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}
