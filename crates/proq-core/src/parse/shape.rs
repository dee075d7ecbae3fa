//! Shape helpers backing compiled projection parsers: object-shape logic
//! over the projected keys, conditional merging, and the array/object
//! duality adapter.

use super::{ParseError, Parser};
use serde_json::{Map, Value};

/// Human-readable kind tag for a raw value, used in mismatch errors.
#[must_use]
pub const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

///
/// ShapeField
///
/// One projected key inside the object-shape parser.
///

#[derive(Clone)]
pub(crate) struct ShapeField {
    pub key: String,
    pub parser: Option<Parser>,
}

/// Build the object-shape parser for one projection.
///
/// The parser iterates the projected keys, not the input's: a key with a
/// parser is replaced by the parser's output (failures scoped to the key),
/// a key without one passes through unchanged, and a key absent from the
/// input is omitted from the output, never defaulted. Conditional parsers
/// then run against the same input object and their outputs are merged in
/// declaration order, later entries overwriting earlier ones.
pub(crate) fn object_parser(fields: Vec<ShapeField>, conditionals: Vec<Parser>) -> Parser {
    Parser::new(move |raw| {
        let input = match raw {
            Value::Object(map) => map,
            other => return Err(ParseError::mismatch("object", &other)),
        };

        let mut output = Map::new();
        for field in &fields {
            let Some(value) = input.get(&field.key) else {
                continue;
            };
            let value = match &field.parser {
                Some(parser) => parser
                    .parse(value.clone())
                    .map_err(|err| err.at(&field.key))?,
                None => value.clone(),
            };
            output.insert(field.key.clone(), value);
        }

        for parser in &conditionals {
            let merged = parser.parse(Value::Object(input.clone()))?;
            match merged {
                Value::Object(map) => output.extend(map),
                other => {
                    return Err(ParseError::invalid(format!(
                        "conditional output must be an object, got {}",
                        value_kind(&other)
                    )));
                }
            }
        }

        Ok(Value::Object(output))
    })
}

/// Array/object duality adapter: a list is parsed element-wise, preserving
/// length and order, with the element index added to error paths; anything
/// else goes straight through the inner parser.
pub(crate) fn element_wise(inner: &Parser) -> Parser {
    let inner = inner.clone();

    Parser::new(move |raw| match raw {
        Value::Array(items) => {
            let mut parsed = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                parsed.push(
                    inner
                        .parse(item)
                        .map_err(|err| err.at(format!("[{index}]")))?,
                );
            }
            Ok(Value::Array(parsed))
        }
        other => inner.parse(other),
    })
}
