//! Dynamically typed raw cells.
//!
//! Source tables arrive with arbitrary column types. A [`FieldValue`] holds
//! one cell until the dedup stage coerces it into a comment string or a
//! boolean label.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A raw cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean value
    Boolean(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Text value
    Text(String),
    /// Missing value
    Null,
}

impl FieldValue {
    /// Infer the field value type from a CSV cell.
    ///
    /// Tries boolean, then integer, then float, and falls back to text.
    /// An empty cell is [`FieldValue::Null`].
    pub fn infer(value: &str) -> FieldValue {
        if value.is_empty() {
            return FieldValue::Null;
        }

        // Try boolean
        if value.eq_ignore_ascii_case("true") {
            return FieldValue::Boolean(true);
        }
        if value.eq_ignore_ascii_case("false") {
            return FieldValue::Boolean(false);
        }

        // Try integer
        if let Ok(int_val) = value.parse::<i64>() {
            return FieldValue::Integer(int_val);
        }

        // Try float
        if let Ok(float_val) = value.parse::<f64>() {
            return FieldValue::Float(float_val);
        }

        FieldValue::Text(value.to_string())
    }

    /// Wrap a cell as text without inference; empty cells are `Null`.
    pub fn text_or_null(value: &str) -> FieldValue {
        if value.is_empty() {
            FieldValue::Null
        } else {
            FieldValue::Text(value.to_string())
        }
    }

    /// Whether the value is missing. `NaN` counts as missing.
    pub fn is_null(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Convert to text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Coerce to a comment string. Scalars are stringified (`1.0`, `True`);
    /// missing values yield `None`.
    pub fn to_comment(&self) -> Option<String> {
        if self.is_null() {
            return None;
        }
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Integer(i) => Some(i.to_string()),
            // whole floats keep their ".0"
            FieldValue::Float(f) => Some(format!("{f:?}")),
            FieldValue::Boolean(true) => Some("True".to_string()),
            FieldValue::Boolean(false) => Some("False".to_string()),
            FieldValue::Null => None,
        }
    }

    /// Coerce to a spam label.
    ///
    /// Numbers are spam when non-zero. Text is read case-insensitively from
    /// `true/false`, `1/0`, `yes/no` and `spam/ham`; anything else yields
    /// `None`.
    pub fn to_label(&self) -> Option<bool> {
        if self.is_null() {
            return None;
        }
        match self {
            FieldValue::Boolean(b) => Some(*b),
            FieldValue::Integer(i) => Some(*i != 0),
            FieldValue::Float(f) => Some(*f != 0.0),
            FieldValue::Text(s) => parse_label_text(s.trim()),
            FieldValue::Null => None,
        }
    }
}

fn parse_label_text(text: &str) -> Option<bool> {
    const SPAM: [&str; 4] = ["true", "1", "yes", "spam"];
    const HAM: [&str; 4] = ["false", "0", "no", "ham"];

    if SPAM.iter().any(|s| text.eq_ignore_ascii_case(s)) {
        Some(true)
    } else if HAM.iter().any(|s| text.eq_ignore_ascii_case(s)) {
        Some(false)
    } else {
        None
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Boolean(b) => write!(f, "{b}"),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}
