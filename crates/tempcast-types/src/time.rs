//! Time value type

use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tempcast_diagnostics::{CastError, CastResult, LoadError, LoadResult, RangeError};

use crate::temporal::{Temporal, compare, reject};
use crate::util::{check_time, optional, parse_usec, required, time_fields, tuple_ints, zero_pad};
use crate::{Value, clock};

/// Canonical `(hour, min, sec, usec)` tuple
pub type TimeTuple = (u8, u8, u8, u32);

/// Host calendar `(hour, min, sec)` triple, without microseconds
pub type ErlTime = (u8, u8, u8);

/// The tuple shapes [`Time::load`] accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TimeWire {
    /// Full precision `(hour, min, sec, usec)`
    Micros(TimeTuple),
    /// Second precision `(hour, min, sec)`, usec defaults to 0
    Seconds(ErlTime),
}

impl From<TimeTuple> for TimeWire {
    fn from(tuple: TimeTuple) -> Self {
        Self::Micros(tuple)
    }
}

impl From<ErlTime> for TimeWire {
    fn from(tuple: ErlTime) -> Self {
        Self::Seconds(tuple)
    }
}

impl TimeWire {
    pub(crate) fn into_tuple(self) -> TimeTuple {
        match self {
            Self::Micros(tuple) => tuple,
            Self::Seconds((hour, min, sec)) => (hour, min, sec, 0),
        }
    }
}

/// A time of day with microsecond precision and no timezone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Value")]
pub struct Time {
    hour: u8,
    min: u8,
    sec: u8,
    usec: u32,
}

impl Time {
    /// Build a time from raw integer fields, reporting the first field that
    /// fails the time guard
    pub fn from_parts(hour: i64, min: i64, sec: i64, usec: i64) -> Result<Self, RangeError> {
        check_time(hour, min, sec, usec)?;
        Ok(Self {
            hour: hour as u8,
            min: min as u8,
            sec: sec as u8,
            usec: usec as u32,
        })
    }

    /// Hour component (0-23)
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute component (0-59)
    pub fn minute(&self) -> u8 {
        self.min
    }

    /// Second component (0-59)
    pub fn sec(&self) -> u8 {
        self.sec
    }

    /// Microsecond component (0-999999)
    pub fn usec(&self) -> u32 {
        self.usec
    }

    /// Convert to a host calendar `(hour, min, sec)` triple.
    ///
    /// Microseconds are dropped on this path; use [`Temporal::dump`] for a
    /// lossless conversion.
    pub fn to_erl(&self) -> ErlTime {
        (self.hour, self.min, self.sec)
    }

    /// Build from a host calendar `(hour, min, sec)` triple with usec 0
    pub fn from_erl((hour, min, sec): ErlTime) -> CastResult<Self> {
        Self::from_parts(hour.into(), min.into(), sec.into(), 0).map_err(|_| CastError::new(Self::NAME))
    }

    /// Current time of day in UTC
    pub fn utc() -> Self {
        clock::utc_now().time().into()
    }

    /// Current time of day in the host's local timezone.
    ///
    /// Local time jumps across DST transitions, so two successive calls are
    /// not guaranteed to be ordered.
    #[deprecated(note = "local time is not monotonic across DST transitions, use Time::utc")]
    pub fn local() -> Self {
        clock::local_now().time().into()
    }

    /// Convert to a chrono time
    pub fn to_naive_time(&self) -> Option<chrono::NaiveTime> {
        chrono::NaiveTime::from_hms_micro_opt(
            self.hour.into(),
            self.min.into(),
            self.sec.into(),
            self.usec,
        )
    }

    fn cast_value(input: &Value) -> Option<Self> {
        let (hour, min, sec, usec) = match input {
            Value::Time(time) => return Some(*time),
            Value::String(s) => {
                let (hour, min, sec) = time_fields(s)?;
                let usec = parse_usec(s.get(8..)?)?;
                (hour, min, sec, i64::from(usec))
            }
            Value::Map(map) => (
                required(map, "hour")?,
                required(map, "min")?,
                optional(map, "sec", 0)?,
                optional(map, "usec", 0)?,
            ),
            Value::Tuple(elements) if elements.len() == 3 || elements.len() == 4 => {
                let ints = tuple_ints(elements)?;
                (ints[0], ints[1], ints[2], ints.get(3).copied().unwrap_or(0))
            }
            _ => return None,
        };
        Self::from_parts(hour, min, sec, usec).ok()
    }
}

impl Temporal for Time {
    const NAME: &'static str = "Time";

    type Dumped = TimeTuple;
    type Wire = TimeWire;

    /// Accepts an `HH:MM:SS[.ffffff][Z]` string, an existing `Time`, a map
    /// with `hour` and `min` (plus optional `sec` and `usec`), or a
    /// `(hour, min, sec)` / `(hour, min, sec, usec)` tuple.
    fn cast(input: impl Into<Value>) -> CastResult<Self> {
        let input = input.into();
        Self::cast_value(&input).ok_or_else(|| reject::<Self>(&input))
    }

    fn dump(&self) -> TimeTuple {
        (self.hour, self.min, self.sec, self.usec)
    }

    fn load(wire: impl Into<Self::Wire>) -> LoadResult<Self> {
        let (hour, min, sec, usec) = wire.into().into_tuple();
        Self::from_parts(hour.into(), min.into(), sec.into(), usec.into())
            .map_err(|_| LoadError::new(Self::NAME))
    }

    fn to_iso8601(&self) -> String {
        self.to_string()
    }
}

impl From<chrono::NaiveTime> for Time {
    fn from(time: chrono::NaiveTime) -> Self {
        use chrono::Timelike;
        // Leap seconds carry nanos >= 1_000_000_000
        let usec = (time.nanosecond() / 1_000).min(999_999);
        Self {
            hour: time.hour() as u8,
            min: time.minute() as u8,
            sec: time.second() as u8,
            usec,
        }
    }
}

/// `HH:MM:SS`, plus a 6-digit fraction only when usec is non-zero
impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            zero_pad(self.hour.into(), 2),
            zero_pad(self.min.into(), 2),
            zero_pad(self.sec.into(), 2)
        )?;
        if self.usec != 0 {
            write!(f, ".{}", zero_pad(self.usec.into(), 6))?;
        }
        Ok(())
    }
}

impl FromStr for Time {
    type Err = CastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::cast(s)
    }
}

impl TryFrom<Value> for Time {
    type Error = CastError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::cast(value)
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_display() {
        let time = Time::from_parts(9, 5, 3, 0).unwrap();
        assert_eq!(time.to_string(), "09:05:03");

        let precise = Time::from_parts(9, 5, 3, 30_000).unwrap();
        assert_eq!(precise.to_string(), "09:05:03.030000");
    }

    #[test]
    fn test_time_wire_shapes() {
        assert_eq!(TimeWire::from((1u8, 2u8, 3u8)).into_tuple(), (1, 2, 3, 0));
        assert_eq!(TimeWire::from((1u8, 2u8, 3u8, 4u32)).into_tuple(), (1, 2, 3, 4));
    }

    #[test]
    fn test_time_from_naive_truncates_nanos() {
        let naive = chrono::NaiveTime::from_hms_nano_opt(14, 0, 0, 123_456_789).unwrap();
        assert_eq!(Time::from(naive).dump(), (14, 0, 0, 123_456));

        let leap = chrono::NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).unwrap();
        assert_eq!(Time::from(leap).dump(), (23, 59, 59, 999_999));
    }

    #[test]
    fn test_time_naive_round_trip() {
        let time = Time::from_parts(23, 59, 59, 999_999).unwrap();
        let naive = time.to_naive_time().unwrap();
        assert_eq!(Time::from(naive), time);
    }
}
