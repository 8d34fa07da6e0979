//! Reconstructed literal values.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A numeric literal, integer when it fits, float otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{value}"),
            Number::Float(value) => write!(f, "{value}"),
        }
    }
}

/// A literal recovered from typed text.
///
/// Serializes untagged so that JSON output reads like the source literal:
/// `["a", 1, ["b"]]` rather than a tree of variant names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Literal {
    /// No value (empty input or `None`).
    Absent,
    Bool(bool),
    Number(Number),
    Str(String),
    /// Ordered collection (list, tuple or set literal).
    Collection(Vec<Literal>),
}

impl Literal {
    pub fn str(value: impl Into<String>) -> Self {
        Literal::Str(value.into())
    }

    pub fn int(value: i64) -> Self {
        Literal::Number(Number::Int(value))
    }

    /// Returns the elements when this literal is a collection.
    pub fn as_collection(&self) -> Option<&[Literal]> {
        match self {
            Literal::Collection(items) => Some(items),
            _ => None,
        }
    }
}

/// Result of reconstructing a possibly incomplete fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LiteralValue {
    /// Parsed value. For an incomplete collection this holds only the elements
    /// that were fully typed.
    pub value: Literal,

    /// All brackets and quotes of the fragment were closed.
    pub is_complete: bool,

    /// Trailing token still being typed. Always `None` when `is_complete`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<String>,
}

impl LiteralValue {
    pub fn complete(value: Literal) -> Self {
        Self {
            value,
            is_complete: true,
            current_value: None,
        }
    }

    pub fn partial(value: Literal, current_value: Option<String>) -> Self {
        Self {
            value,
            is_complete: false,
            current_value,
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(self.value, Literal::Collection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_serializes_untagged() {
        let literal = Literal::Collection(vec![
            Literal::str("a"),
            Literal::int(1),
            Literal::Collection(vec![Literal::Bool(true)]),
            Literal::Absent,
        ]);
        let json = serde_json::to_string(&literal).unwrap();
        assert_eq!(json, r#"["a",1,[true],null]"#);
    }

    #[test]
    fn test_partial_value_skips_missing_current_value() {
        let value = LiteralValue::partial(Literal::Collection(vec![]), None);
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["isComplete"], false);
        assert!(json.get("currentValue").is_none());
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Int(3).to_string(), "3");
        assert_eq!(Number::Float(1.5).to_string(), "1.5");
    }
}
