//! Cast input terms
//!
//! [`Value`] is the dynamic input accepted by every `cast` entry point. It
//! mirrors what a data-access layer receives from the outside world: raw
//! strings and integers, keyed maps coming from form params or JSON, ordered
//! tuples coming from a host calendar API, and already-cast values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Date, DateTime, Time};

/// A dynamic cast input.
///
/// Deserializes from any self-describing format: `null` becomes [`Value::Nil`],
/// integers [`Value::Integer`], strings [`Value::String`], objects
/// [`Value::Map`] and arrays [`Value::Tuple`]. Temporal values are never
/// produced by deserialization; they only enter through the `From` impls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing value
    Nil,
    /// Integer value
    Integer(i64),
    /// String value
    String(String),
    /// Keyed mapping (e.g. `{"year": 2014, "month": "04"}`)
    Map(IndexMap<String, Value>),
    /// Ordered tuple (e.g. `(2014, 4, 17)`)
    Tuple(Vec<Value>),
    /// An already-cast date
    #[serde(skip_deserializing)]
    Date(Date),
    /// An already-cast time
    #[serde(skip_deserializing)]
    Time(Time),
    /// An already-cast datetime
    #[serde(skip_deserializing)]
    DateTime(DateTime),
}

impl Value {
    /// Build a keyed mapping from `(key, value)` pairs
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Build a tuple from its elements
    pub fn tuple<V: Into<Value>>(elements: impl IntoIterator<Item = V>) -> Self {
        Self::Tuple(elements.into_iter().map(Into::into).collect())
    }

    /// Check if this value is nil
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Try to get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as keyed mapping
    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Try to get as tuple elements
    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Self::Tuple(elements) => Some(elements),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Integer(i) => write!(f, "{}", i),
            Self::String(s) => write!(f, "{:?}", s),
            Self::Date(d) => write!(f, "Date({})", d),
            Self::Time(t) => write!(f, "Time({})", t),
            Self::DateTime(dt) => write!(f, "DateTime({})", dt),
            Self::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Self::Tuple(elements) => {
                write!(f, "(")?;
                for (i, elem) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", elem)?;
                }
                write!(f, ")")
            }
        }
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Date> for Value {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl From<Time> for Value {
    fn from(value: Time) -> Self {
        Self::Time(value)
    }
}

impl From<DateTime> for Value {
    fn from(value: DateTime) -> Self {
        Self::DateTime(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(value: IndexMap<String, Value>) -> Self {
        Self::Map(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Tuple(value)
    }
}

impl<A, B> From<(A, B)> for Value
where
    A: Into<Value>,
    B: Into<Value>,
{
    fn from((a, b): (A, B)) -> Self {
        Self::Tuple(vec![a.into(), b.into()])
    }
}

impl<A, B, C> From<(A, B, C)> for Value
where
    A: Into<Value>,
    B: Into<Value>,
    C: Into<Value>,
{
    fn from((a, b, c): (A, B, C)) -> Self {
        Self::Tuple(vec![a.into(), b.into(), c.into()])
    }
}

impl<A, B, C, D> From<(A, B, C, D)> for Value
where
    A: Into<Value>,
    B: Into<Value>,
    C: Into<Value>,
    D: Into<Value>,
{
    fn from((a, b, c, d): (A, B, C, D)) -> Self {
        Self::Tuple(vec![a.into(), b.into(), c.into(), d.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_from_tuples() {
        let value = Value::from((2014, "04", 17));
        assert_eq!(
            value,
            Value::Tuple(vec![
                Value::Integer(2014),
                Value::String("04".to_string()),
                Value::Integer(17),
            ])
        );
    }

    #[test]
    fn test_value_map_preserves_order() {
        let value = Value::map([("year", 2014), ("month", 4)]);
        let map = value.as_map().unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), ["year", "month"]);
    }

    #[test]
    fn test_value_from_option() {
        assert!(Value::from(None::<i64>).is_nil());
        assert_eq!(Value::from(Some(3)), Value::Integer(3));
    }

    #[test]
    fn test_value_display() {
        let value = Value::map([
            ("year", Value::from(2014)),
            ("day", Value::from("17")),
            ("time", Value::from((14, 0, 0))),
        ]);
        assert_eq!(value.to_string(), r#"{year: 2014, day: "17", time: (14, 0, 0)}"#);
        assert_eq!(Value::Nil.to_string(), "nil");
    }
}
