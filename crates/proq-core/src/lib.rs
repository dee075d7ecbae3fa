//! Core runtime for proq: immutable query nodes, the projection compiler,
//! and the parser machinery exported via the `prelude`.

// public exports are one module level down
pub mod error;
pub mod parse;
pub mod query;

pub use error::Error;

///
/// Prelude
///
/// Prelude contains only domain vocabulary. No shape internals or
/// normalizer types are re-exported here.
///

pub mod prelude {
    pub use crate::{
        error::Error,
        parse::{ParseError, Parser},
        query::{
            Indent, QueryNode, QueryOptions,
            project::{FieldConfig, ProjectionMap},
        },
    };
}
