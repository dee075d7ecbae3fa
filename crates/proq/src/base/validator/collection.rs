use crate::core::parse::{ParseError, Parser};
use serde_json::Value;

/// Any JSON object, passed through unchanged.
#[must_use]
pub fn object() -> Parser {
    Parser::new(|value| match value {
        Value::Object(_) => Ok(value),
        other => Err(ParseError::mismatch("object", &other)),
    })
}

/// Any JSON array, passed through unchanged.
#[must_use]
pub fn array() -> Parser {
    Parser::new(|value| match value {
        Value::Array(_) => Ok(value),
        other => Err(ParseError::mismatch("array", &other)),
    })
}

/// An array whose every element satisfies `element`; failures carry the
/// offending index.
#[must_use]
pub fn array_of(element: Parser) -> Parser {
    Parser::new(move |value| match value {
        Value::Array(items) => {
            let mut parsed = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                parsed.push(
                    element
                        .parse(item)
                        .map_err(|err| err.at(format!("[{index}]")))?,
                );
            }
            Ok(Value::Array(parsed))
        }
        other => Err(ParseError::mismatch("array", &other)),
    })
}
