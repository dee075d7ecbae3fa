//! Ready-made leaf validators. Each constructor returns a [`Parser`] that
//! validates (and sometimes reshapes) one raw response value, failing with
//! a descriptive error on mismatch. All of them are ordinary parsers; the
//! projection compiler treats them as black boxes.

mod collection;
mod primitive;
mod text;

#[cfg(test)]
mod tests;

pub use collection::{array, array_of, object};
pub use primitive::{boolean, integer, literal, null, number, string};
pub use text::{datetime, slug};

use crate::core::parse::Parser;

/// Pass `null` through untouched; delegate anything else to `inner`.
#[must_use]
pub fn nullable(inner: Parser) -> Parser {
    Parser::new(move |value| {
        if value.is_null() {
            Ok(value)
        } else {
            inner.parse(value)
        }
    })
}
