//! DateTime value type

use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tempcast_diagnostics::{CastError, CastResult, LoadError, LoadResult, RangeError};

use crate::temporal::{Temporal, compare, reject};
use crate::time::{ErlTime, TimeTuple};
use crate::util::{date_fields, optional, parse_usec, required, time_fields, tuple_ints};
use crate::{Date, DateTuple, Time, Value, clock};

/// Canonical `((year, month, day), (hour, min, sec, usec))` pair
pub type DateTimeTuple = (DateTuple, TimeTuple);

/// Host calendar `((year, month, day), (hour, min, sec))` pair
pub type ErlDateTime = (DateTuple, ErlTime);

/// The tuple shapes [`DateTime::load`] accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DateTimeWire {
    /// Full precision nested pair
    Micros(DateTimeTuple),
    /// Second precision nested pair, usec defaults to 0
    Seconds(ErlDateTime),
}

impl From<DateTimeTuple> for DateTimeWire {
    fn from(tuple: DateTimeTuple) -> Self {
        Self::Micros(tuple)
    }
}

impl From<ErlDateTime> for DateTimeWire {
    fn from(tuple: ErlDateTime) -> Self {
        Self::Seconds(tuple)
    }
}

/// A date and a time of day, without a timezone.
///
/// The value is composed of a [`Date`] and a [`Time`], each satisfying its
/// own guard. Both are validated before a `DateTime` is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Value")]
pub struct DateTime {
    date: Date,
    time: Time,
}

impl DateTime {
    /// Build a datetime from raw integer fields, reporting the first field
    /// that fails either guard
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        min: i64,
        sec: i64,
        usec: i64,
    ) -> Result<Self, RangeError> {
        Ok(Self {
            date: Date::from_parts(year, month, day)?,
            time: Time::from_parts(hour, min, sec, usec)?,
        })
    }

    /// Build a datetime at midnight of `date`
    pub fn from_date(date: Date) -> Self {
        Self {
            date,
            time: Time::default(),
        }
    }

    /// Combine an existing date and time
    pub fn from_date_and_time(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// Extract the date portion
    pub fn to_date(&self) -> Date {
        self.date
    }

    /// Extract the time portion
    pub fn to_time(&self) -> Time {
        self.time
    }

    /// Year component
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month component (1-12)
    pub fn month(&self) -> u8 {
        self.date.month()
    }

    /// Day component (1-31)
    pub fn day(&self) -> u8 {
        self.date.day()
    }

    /// Hour component (0-23)
    pub fn hour(&self) -> u8 {
        self.time.hour()
    }

    /// Minute component (0-59)
    pub fn minute(&self) -> u8 {
        self.time.minute()
    }

    /// Second component (0-59)
    pub fn sec(&self) -> u8 {
        self.time.sec()
    }

    /// Microsecond component (0-999999)
    pub fn usec(&self) -> u32 {
        self.time.usec()
    }

    /// Convert to a host calendar nested pair, dropping microseconds
    pub fn to_erl(&self) -> ErlDateTime {
        (self.date.to_erl(), self.time.to_erl())
    }

    /// Build from a host calendar nested pair with usec 0
    pub fn from_erl((date, time): ErlDateTime) -> CastResult<Self> {
        Ok(Self {
            date: Date::from_erl(date).map_err(|_| CastError::new(Self::NAME))?,
            time: Time::from_erl(time).map_err(|_| CastError::new(Self::NAME))?,
        })
    }

    /// Current date and time in UTC
    pub fn utc() -> Self {
        clock::utc_now().into()
    }

    /// Current date and time in the host's local timezone.
    ///
    /// Local time jumps across DST transitions, so two successive calls are
    /// not guaranteed to be ordered.
    #[deprecated(note = "local time is not monotonic across DST transitions, use DateTime::utc")]
    pub fn local() -> Self {
        clock::local_now().into()
    }

    /// Canonical tuple for the current UTC time at second precision, for
    /// auto-populated timestamp columns
    pub fn autogenerate() -> DateTimeTuple {
        let (date, (hour, min, sec, _)) = Self::utc().dump();
        (date, (hour, min, sec, 0))
    }

    /// Canonical tuple for the current UTC time carrying microseconds
    pub fn autogenerate_usec() -> DateTimeTuple {
        Self::utc().dump()
    }

    /// Convert to a chrono datetime, if the date exists in the calendar
    pub fn to_naive_datetime(&self) -> Option<chrono::NaiveDateTime> {
        Some(self.date.to_naive_date()?.and_time(self.time.to_naive_time()?))
    }

    fn cast_value(input: &Value) -> Option<Self> {
        let (year, month, day, hour, min, sec, usec) = match input {
            Value::DateTime(datetime) => return Some(*datetime),
            Value::String(s) => {
                let ((year, month, day), end) = date_fields(s)?;
                let rest = s.get(end..)?;
                if !matches!(rest.as_bytes().first(), Some(b' ' | b'T')) {
                    return None;
                }
                let (hour, min, sec) = time_fields(rest.get(1..)?)?;
                let usec = parse_usec(rest.get(9..)?)?;
                (year, month, day, hour, min, sec, i64::from(usec))
            }
            Value::Map(map) => (
                required(map, "year")?,
                required(map, "month")?,
                required(map, "day")?,
                required(map, "hour")?,
                required(map, "min")?,
                optional(map, "sec", 0)?,
                optional(map, "usec", 0)?,
            ),
            Value::Tuple(pair) if pair.len() == 2 => {
                let date = tuple_ints(pair[0].as_tuple()?)?;
                let time = tuple_ints(pair[1].as_tuple()?)?;
                if date.len() != 3 || !(time.len() == 3 || time.len() == 4) {
                    return None;
                }
                let usec = time.get(3).copied().unwrap_or(0);
                (date[0], date[1], date[2], time[0], time[1], time[2], usec)
            }
            _ => return None,
        };
        Self::from_parts(year, month, day, hour, min, sec, usec).ok()
    }
}

impl Temporal for DateTime {
    const NAME: &'static str = "DateTime";

    type Dumped = DateTimeTuple;
    type Wire = DateTimeWire;

    /// Accepts a `YYYY-MM-DD<sep>HH:MM:SS[.ffffff][Z]` string (`<sep>` is a
    /// space or `T`), an existing `DateTime`, a map with `year`, `month`,
    /// `day`, `hour` and `min` (plus optional `sec` and `usec`), or a nested
    /// `((year, month, day), (hour, min, sec[, usec]))` tuple.
    fn cast(input: impl Into<Value>) -> CastResult<Self> {
        let input = input.into();
        Self::cast_value(&input).ok_or_else(|| reject::<Self>(&input))
    }

    fn dump(&self) -> DateTimeTuple {
        (self.date.dump(), self.time.dump())
    }

    fn load(wire: impl Into<Self::Wire>) -> LoadResult<Self> {
        let (date, time) = match wire.into() {
            DateTimeWire::Micros((date, time)) => (Date::load(date), Time::load(time)),
            DateTimeWire::Seconds((date, time)) => (Date::load(date), Time::load(time)),
        };
        match (date, time) {
            (Ok(date), Ok(time)) => Ok(Self { date, time }),
            _ => Err(LoadError::new(Self::NAME)),
        }
    }

    /// Render as `YYYY-MM-DDTHH:MM:SS[.ffffff]Z`.
    ///
    /// The trailing `Z` is always written. The caller is responsible for the
    /// value actually being in UTC.
    fn to_iso8601(&self) -> String {
        format!("{}T{}Z", self.date, self.time)
    }
}

impl From<chrono::NaiveDateTime> for DateTime {
    fn from(datetime: chrono::NaiveDateTime) -> Self {
        Self {
            date: datetime.date().into(),
            time: datetime.time().into(),
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

impl FromStr for DateTime {
    type Err = CastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::cast(s)
    }
}

impl TryFrom<Value> for DateTime {
    type Error = CastError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::cast(value)
    }
}

impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl PartialOrd for DateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(clippy::too_many_arguments)]
    fn datetime(year: i64, month: i64, day: i64, hour: i64, min: i64, sec: i64, usec: i64) -> DateTime {
        DateTime::from_parts(year, month, day, hour, min, sec, usec).unwrap()
    }

    #[test]
    fn test_datetime_display() {
        let dt = datetime(2014, 4, 17, 14, 0, 0, 0);
        assert_eq!(dt.to_string(), "2014-04-17 14:00:00");
        assert_eq!(dt.to_iso8601(), "2014-04-17T14:00:00Z");

        let precise = datetime(2014, 4, 17, 14, 0, 0, 500_000);
        assert_eq!(precise.to_string(), "2014-04-17 14:00:00.500000");
        assert_eq!(precise.to_iso8601(), "2014-04-17T14:00:00.500000Z");
    }

    #[test]
    fn test_datetime_projections() {
        let dt = datetime(2014, 4, 17, 14, 30, 5, 7);
        assert_eq!(dt.to_date().dump(), (2014, 4, 17));
        assert_eq!(dt.to_time().dump(), (14, 30, 5, 7));
        assert_eq!(DateTime::from_date_and_time(dt.to_date(), dt.to_time()), dt);
    }

    #[test]
    fn test_datetime_from_date_zeroes_time() {
        let date = Date::from_parts(2014, 4, 17).unwrap();
        let dt = DateTime::from_date(date);
        assert_eq!(dt.dump(), ((2014, 4, 17), (0, 0, 0, 0)));
    }

    #[test]
    fn test_datetime_autogenerate_drops_usec() {
        let (_, (_, _, _, usec)) = DateTime::autogenerate();
        assert_eq!(usec, 0);
        assert!(DateTime::load(DateTime::autogenerate_usec()).is_ok());
    }

    #[test]
    fn test_datetime_naive_conversion() {
        let dt = datetime(2024, 2, 29, 23, 59, 59, 1);
        let naive = dt.to_naive_datetime().unwrap();
        assert_eq!(DateTime::from(naive), dt);
        assert_eq!(datetime(2021, 2, 30, 0, 0, 0, 0).to_naive_datetime(), None);
    }
}
