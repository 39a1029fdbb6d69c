//! Output node trait and attribute values.

use std::fmt;

use chrono::{DateTime, Utc};

/// Value of a plain (integer or string) attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Integer(i64),
    Unsigned(u64),
    Text(String),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Integer(v) => write!(f, "{}", v),
            AttributeValue::Unsigned(v) => write!(f, "{}", v),
            AttributeValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Integer(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Integer(i64::from(v))
    }
}

impl From<u64> for AttributeValue {
    fn from(v: u64) -> Self {
        AttributeValue::Unsigned(v)
    }
}

impl From<u32> for AttributeValue {
    fn from(v: u32) -> Self {
        AttributeValue::Unsigned(u64::from(v))
    }
}

impl From<usize> for AttributeValue {
    fn from(v: usize) -> Self {
        AttributeValue::Unsigned(v as u64)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

/// A node of a structured output document.
///
/// The canonical string encodings of booleans and timestamps belong to the
/// implementation, not to the components writing onto the node.
pub trait OutputNode {
    /// Sets an integer or string attribute, replacing any previous value.
    fn set_attribute(&mut self, name: &str, value: impl Into<AttributeValue>);

    /// Sets a boolean attribute.
    fn set_bool_attribute(&mut self, name: &str, value: bool);

    /// Sets a timestamp attribute. `None` means "never" and is written with
    /// the sink's sentinel encoding.
    fn set_time_attribute(&mut self, name: &str, value: Option<DateTime<Utc>>);

    /// Appends a new, empty child named `name` and returns it for population.
    fn append_child(&mut self, name: &str) -> &mut Self;
}
