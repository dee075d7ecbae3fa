//! Module: query::project
//! Responsibility: normalize projection maps and compile them into one
//! brace-block query fragment plus one combined response parser.
//! Does not own: leaf validators or query execution.
//! Boundary: configuration errors raised here are programmer errors and
//! surface before any query text leaves the builder.

mod compile;
mod config;
mod normalize;


pub use config::{FieldConfig, ProjectionMap, is_conditional_key};

use thiserror::Error as ThisError;

///
/// ConfigError
///
/// Invalid projection configuration, detected while compiling. Never
/// retryable and never coerced; the offending keys are always named.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("field `{key}`: unsupported projection value ({category})")]
    UnexpectedField { key: String, category: &'static str },

    #[error("validation required, but these fields have no parser: {}", .keys.join(", "))]
    MissingParsers { keys: Vec<String> },
}
