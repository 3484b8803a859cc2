//! The scalar cell type stored in category rows.
//!
//! PDBx values are schema-less: a cell is null, an integer, a float, or
//! text. Parsed files usually arrive as text; the numeric variants exist so
//! programmatic producers (topology bridges, converters) can hand over
//! machine numbers and still get correct numeric formatting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Null marker for "value not reported".
pub const NULL_UNKNOWN: &str = "?";

/// Null marker for "value inapplicable".
pub const NULL_INAPPLICABLE: &str = ".";

/// A single scalar cell in a category table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CifValue {
    /// Machine null; renders as the `?` marker.
    Null,
    /// Machine integer.
    Int(i64),
    /// Machine float.
    Float(f64),
    /// Text, including numeric-looking and marker strings.
    Text(String),
}

impl CifValue {
    /// A fresh `?` null-marker cell, as used for row padding.
    pub fn null_marker() -> Self {
        CifValue::Text(NULL_UNKNOWN.to_string())
    }

    /// True for [`CifValue::Null`] and for the `?` / `.` / empty markers.
    pub fn is_null(&self) -> bool {
        match self {
            CifValue::Null => true,
            CifValue::Text(t) => t == NULL_UNKNOWN || t == NULL_INAPPLICABLE || t.is_empty(),
            _ => false,
        }
    }

    /// Borrow the text content, if this cell is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CifValue::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Display for CifValue {
    /// Plain rendering without quoting rules; `Null` prints as `?`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CifValue::Null => f.write_str(NULL_UNKNOWN),
            CifValue::Int(i) => write!(f, "{i}"),
            CifValue::Float(x) => write!(f, "{x}"),
            CifValue::Text(t) => f.write_str(t),
        }
    }
}

impl From<i64> for CifValue {
    fn from(value: i64) -> Self {
        CifValue::Int(value)
    }
}

impl From<i32> for CifValue {
    fn from(value: i32) -> Self {
        CifValue::Int(i64::from(value))
    }
}

impl From<f64> for CifValue {
    fn from(value: f64) -> Self {
        CifValue::Float(value)
    }
}

impl From<&str> for CifValue {
    fn from(value: &str) -> Self {
        CifValue::Text(value.to_string())
    }
}

impl From<String> for CifValue {
    fn from(value: String) -> Self {
        CifValue::Text(value)
    }
}

impl<T> From<Option<T>> for CifValue
where
    T: Into<CifValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => CifValue::Null,
        }
    }
}
