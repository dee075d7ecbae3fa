//! ## Crate layout
//! - `base`: builtin leaf validators for common response shapes.
//! - `core`: query nodes, the projection compiler, and parser machinery.
//!
//! Build a query with `QueryNode`, describe the fields you want with a
//! `ProjectionMap`, then hand `query()` to your execution client and run
//! `parse()` over the raw JSON it returns.

pub use proq_core as core;

pub mod base;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::core::Error;

///
/// Prelude
///
/// Prelude contains only domain vocabulary plus the builtin validators.
///

pub mod prelude {
    pub use crate::{
        base::validator,
        core::{
            Error,
            parse::{ParseError, Parser},
            query::{
                Indent, QueryNode, QueryOptions,
                project::{FieldConfig, ProjectionMap},
            },
        },
    };
}
