use crate::{parse::ParseError, query::project::ConfigError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level error. Configuration errors surface while compiling a
/// projection, before any query text is handed to an execution client;
/// parse errors surface only once a concrete response is parsed.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
