//! Module: parse
//! Responsibility: parser values, null-tolerant composition, and the shape
//! helpers backing compiled projection parsers.
//! Does not own: projection normalization or query-text assembly.
//! Boundary: everything here is a pure computation over `serde_json::Value`.

mod shape;


pub(crate) use shape::{ShapeField, element_wise, object_parser};
pub use shape::value_kind;

use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use thiserror::Error as ThisError;

///
/// ParseError
///
/// Raised while parsing a concrete response. The `At` variant is added by
/// the shape helpers to scope a failure to the offending field or element;
/// composition never rewraps a stage's error.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ParseError {
    #[error("expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("{message}")]
    Invalid { message: String },

    #[error("`{path}`: {source}")]
    At {
        path: String,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Type mismatch against a raw value, tagged with the value's kind.
    #[must_use]
    pub fn mismatch(expected: &'static str, actual: &Value) -> Self {
        Self::TypeMismatch {
            expected,
            actual: value_kind(actual),
        }
    }

    /// Free-form validation failure.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Scope this error to a field or element path.
    #[must_use]
    pub fn at(self, path: impl Into<String>) -> Self {
        Self::At {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

///
/// Parser
///
/// One validation/transform step over a raw response value. Parsers are
/// cheap to clone (the function is shared) and compose sequentially;
/// absence of a parser means the raw value passes through unchanged.
///

#[derive(Clone)]
pub struct Parser(Arc<dyn Fn(Value) -> Result<Value, ParseError> + Send + Sync>);

impl Parser {
    pub fn new(f: impl Fn(Value) -> Result<Value, ParseError> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Run the parser against one raw value.
    pub fn parse(&self, value: Value) -> Result<Value, ParseError> {
        (self.0)(value)
    }

    /// Sequential composition: `self` first, then `next` on its output.
    /// A failure in either stage propagates unmodified.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        let first = self.clone();
        let second = next.clone();

        Self::new(move |value| second.parse(first.parse(value)?))
    }

    /// Combine two optional parsers. Either side may be absent; a lone
    /// parser is returned unchanged, not wrapped.
    #[must_use]
    pub fn compose(first: Option<&Self>, second: Option<&Self>) -> Option<Self> {
        match (first, second) {
            (None, None) => None,
            (Some(parser), None) | (None, Some(parser)) => Some(parser.clone()),
            (Some(first), Some(second)) => Some(first.then(second)),
        }
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Parser(..)")
    }
}
