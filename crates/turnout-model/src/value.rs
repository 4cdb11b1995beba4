//! Dynamic measurement cell values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One cell of a measurement row as supplied by the entry form or a
/// persisted record: a number, free text (possibly a numeric string), or
/// nothing at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
    Absent,
}

impl Value {
    /// Build a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(value.into())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Absent, or text that is empty after trimming. Blank cells are
    /// "not applicable" to the numeric rules and are never coerced.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Absent => true,
            Value::Text(text) => text.trim().is_empty(),
            Value::Number(_) => false,
        }
    }

    /// Numeric coercion shared by every numeric rule: numbers pass
    /// through, text is trimmed and parsed, anything else is `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            Value::Text(text) => text.trim().parse::<f64>().ok(),
            Value::Absent => None,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(number) => write!(f, "{number}"),
            Value::Text(text) => write!(f, "{text}"),
            Value::Absent => Ok(()),
        }
    }
}
