use crate::core::parse::{ParseError, Parser};
use chrono::DateTime;
use serde_json::Value;

/// An RFC 3339 datetime string, passed through unchanged once validated.
#[must_use]
pub fn datetime() -> Parser {
    Parser::new(|value| match value {
        Value::String(s) => match DateTime::parse_from_rfc3339(&s) {
            Ok(_) => Ok(Value::String(s)),
            Err(err) => Err(ParseError::invalid(format!(
                "`{s}` is not an RFC 3339 datetime: {err}"
            ))),
        },
        other => Err(ParseError::mismatch("string", &other)),
    })
}

/// A slug object (`{current: string}`), reshaped to the inner string.
#[must_use]
pub fn slug() -> Parser {
    Parser::new(|value| match value {
        Value::Object(mut map) => match map.remove("current") {
            Some(Value::String(s)) => Ok(Value::String(s)),
            Some(other) => Err(ParseError::mismatch("string", &other).at("current")),
            None => Err(ParseError::invalid("slug object has no `current` field")),
        },
        other => Err(ParseError::mismatch("object", &other)),
    })
}
