use crate::core::parse::{ParseError, Parser, value_kind};
use serde_json::Value;

/// Any JSON string, passed through unchanged.
#[must_use]
pub fn string() -> Parser {
    Parser::new(|value| match value {
        Value::String(_) => Ok(value),
        other => Err(ParseError::mismatch("string", &other)),
    })
}

/// Any JSON number.
#[must_use]
pub fn number() -> Parser {
    Parser::new(|value| match value {
        Value::Number(_) => Ok(value),
        other => Err(ParseError::mismatch("number", &other)),
    })
}

/// A JSON number with no fractional part.
#[must_use]
pub fn integer() -> Parser {
    Parser::new(|value| match &value {
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(value),
        other => Err(ParseError::mismatch("integer", other)),
    })
}

/// A JSON boolean.
#[must_use]
pub fn boolean() -> Parser {
    Parser::new(|value| match value {
        Value::Bool(_) => Ok(value),
        other => Err(ParseError::mismatch("boolean", &other)),
    })
}

/// JSON `null`.
#[must_use]
pub fn null() -> Parser {
    Parser::new(|value| match value {
        Value::Null => Ok(value),
        other => Err(ParseError::mismatch("null", &other)),
    })
}

/// Exactly the given value.
#[must_use]
pub fn literal(expected: Value) -> Parser {
    Parser::new(move |value| {
        if value == expected {
            Ok(value)
        } else {
            Err(ParseError::invalid(format!(
                "expected literal {expected}, got {}",
                value_kind(&value)
            )))
        }
    })
}
