//! Module: query
//! Responsibility: immutable query nodes, fluent pipeline steps, and the
//! projection compiler.
//! Does not own: leaf validators or query execution.
//! Boundary: produces query text and composed parsers; never performs I/O.

pub mod node;
pub mod project;
pub mod steps;


pub use node::{Indent, QueryNode, QueryOptions};
