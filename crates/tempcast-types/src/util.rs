//! Shared parsing utilities
//!
//! Zero-padding, integer coercion, the calendar/clock range guards and the
//! fractional-seconds parser used by all three value types.

use indexmap::IndexMap;
use tempcast_diagnostics::{Field, RangeError};

use crate::Value;

/// Render a non-negative integer left-padded with `'0'` to at least `width`
/// characters. Wider values are never truncated.
pub fn zero_pad(value: u64, width: usize) -> String {
    format!("{:0width$}", value, width = width)
}

/// Coerce a cast input to an integer.
///
/// Integers pass through. Strings convert only when the *entire* string is a
/// decimal integer, so `"12a"` yields `None`. Every other input, `nil`
/// included, yields `None`.
pub fn to_i(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(i) => Some(*i),
        Value::String(s) => parse_int(s),
        _ => None,
    }
}

pub(crate) fn parse_int(s: &str) -> Option<i64> {
    s.parse().ok()
}

/// Date guard: month in 1-12 and day in 1-31, independently of each other.
/// The year is unconstrained.
pub fn is_date(year: i64, month: i64, day: i64) -> bool {
    check_date(year, month, day).is_ok()
}

/// Time guard: hour 0-23, min 0-59, sec 0-59, usec 0-999999.
pub fn is_time(hour: i64, min: i64, sec: i64, usec: i64) -> bool {
    check_time(hour, min, sec, usec).is_ok()
}

/// Date guard reporting the first field that violated its range
pub fn check_date(_year: i64, month: i64, day: i64) -> Result<(), RangeError> {
    check_field(Field::Month, month, 1, 12)?;
    check_field(Field::Day, day, 1, 31)
}

/// Time guard reporting the first field that violated its range
pub fn check_time(hour: i64, min: i64, sec: i64, usec: i64) -> Result<(), RangeError> {
    check_field(Field::Hour, hour, 0, 23)?;
    check_field(Field::Min, min, 0, 59)?;
    check_field(Field::Sec, sec, 0, 59)?;
    check_field(Field::Usec, usec, 0, 999_999)
}

fn check_field(field: Field, value: i64, min: i64, max: i64) -> Result<(), RangeError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(RangeError::new(field, value))
    }
}

/// Parse the fractional-seconds remainder that follows the seconds field.
///
/// - `""` and `"Z"` yield 0
/// - `"."` followed by digits and then `""` or `"Z"` yields the digits as
///   microseconds, right-padded to 6 digits; digits beyond the sixth are
///   dropped without rounding
/// - anything else yields `None`
pub fn parse_usec(rest: &str) -> Option<u32> {
    if rest.is_empty() || rest == "Z" {
        return Some(0);
    }

    let fraction = rest.strip_prefix('.')?;
    let end = fraction
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(fraction.len());
    let (digits, tail) = fraction.split_at(end);

    if digits.is_empty() || !(tail.is_empty() || tail == "Z") {
        return None;
    }

    let kept = &digits[..digits.len().min(6)];
    let usec: u32 = kept.parse().ok()?;
    // Pad to 6 digits: "1" -> 100000, "03" -> 30000, "123456" -> 123456
    Some(usec * 10u32.pow((6 - kept.len()) as u32))
}

/// Split a leading `[-]YYYY-MM-DD` into raw integer fields, returning them
/// with the byte offset just past the day.
///
/// The year takes four or more digits and an optional minus sign, the shape
/// `Date`'s `Display` writes for years outside 0-9999. Only the separators
/// are checked here; range checks are left to the guard.
pub(crate) fn date_fields(s: &str) -> Option<((i64, i64, i64), usize)> {
    let bytes = s.as_bytes();
    let sign = usize::from(bytes.first() == Some(&b'-'));
    let digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits < 4 {
        return None;
    }

    let year_end = sign + digits;
    let end = year_end + 6;
    if bytes.len() < end || bytes[year_end] != b'-' || bytes[year_end + 3] != b'-' {
        return None;
    }
    let fields = (
        parse_int(s.get(..year_end)?)?,
        parse_int(s.get(year_end + 1..year_end + 3)?)?,
        parse_int(s.get(year_end + 4..end)?)?,
    );
    Some((fields, end))
}

/// Split the leading `HH:MM:SS` of a string into raw integer fields
pub(crate) fn time_fields(s: &str) -> Option<(i64, i64, i64)> {
    let bytes = s.as_bytes();
    if bytes.len() < 8 || bytes[2] != b':' || bytes[5] != b':' {
        return None;
    }
    Some((
        parse_int(s.get(0..2)?)?,
        parse_int(s.get(3..5)?)?,
        parse_int(s.get(6..8)?)?,
    ))
}

/// Check for the `<sep>HH:MM:SS` shape that follows a date
pub(crate) fn has_time_suffix(rest: &str) -> bool {
    let bytes = rest.as_bytes();
    bytes.len() >= 9 && matches!(bytes[0], b' ' | b'T') && bytes[3] == b':' && bytes[6] == b':'
}

/// Look up a required mapping entry and coerce it with [`to_i`]
pub(crate) fn required(map: &IndexMap<String, Value>, key: &str) -> Option<i64> {
    map.get(key).and_then(to_i)
}

/// Look up an optional mapping entry, falling back to `default` when absent.
/// A present entry that does not coerce still fails.
pub(crate) fn optional(map: &IndexMap<String, Value>, key: &str, default: i64) -> Option<i64> {
    match map.get(key) {
        Some(value) => to_i(value),
        None => Some(default),
    }
}

/// Coerce every element of a tuple with [`to_i`]
pub(crate) fn tuple_ints(elements: &[Value]) -> Option<Vec<i64>> {
    elements.iter().map(to_i).collect()
}
