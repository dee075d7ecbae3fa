use crate::parse::{ParseError, Parser};
use serde::{Deserialize, Serialize};
use serde_json::Value;

///
/// Indent
///
/// Presentation settings for emitted query text. Formatting never affects
/// query semantics; an empty `newline` selects compact single-line output.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Indent {
    /// Line separator inside projection blocks.
    pub newline: String,
    /// One level of indentation.
    pub space: String,
}

impl Indent {
    /// Single-line output: `{ a, b }`.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            newline: String::new(),
            space: String::new(),
        }
    }

    /// One field per line, indented by `space`.
    #[must_use]
    pub fn pretty(space: impl Into<String>) -> Self {
        Self {
            newline: "\n".to_string(),
            space: space.into(),
        }
    }

    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.newline.is_empty()
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::compact()
    }
}

///
/// QueryOptions
///
/// Behavioral and presentation settings carried by every node in a chain.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct QueryOptions {
    pub indent: Indent,

    /// When set, every projected field must carry an explicit parser.
    pub validation_required: bool,
}

///
/// QueryNode
///
/// Immutable query-under-construction: the accumulated query text plus the
/// composed parser for the eventual response. Every operation takes `&self`
/// and returns a new node; prior nodes are never altered, so any node can
/// serve as the shared base of independent chains.
///

#[derive(Clone, Debug, Default)]
pub struct QueryNode {
    query: String,
    parser: Option<Parser>,
    options: QueryOptions,
}

impl QueryNode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_options(options: QueryOptions) -> Self {
        Self {
            query: String::new(),
            parser: None,
            options,
        }
    }

    /// Accumulated query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Composed response parser; `None` means raw passthrough.
    #[must_use]
    pub const fn parser(&self) -> Option<&Parser> {
        self.parser.as_ref()
    }

    #[must_use]
    pub const fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Append a raw query fragment and, optionally, a parser for the shape
    /// the fragment produces. This is the chain primitive every other
    /// operation is built on, and the escape hatch for fragments the
    /// builder has no dedicated operation for.
    #[must_use]
    pub fn pipe(&self, fragment: &str, parser: Option<Parser>) -> Self {
        Self {
            query: format!("{}{fragment}", self.query),
            parser: Parser::compose(self.parser.as_ref(), parser.as_ref()),
            options: self.options.clone(),
        }
    }

    /// Run the composed parser against a raw response value. Without a
    /// parser the value is returned unchanged.
    pub fn parse(&self, raw: Value) -> Result<Value, ParseError> {
        match &self.parser {
            Some(parser) => parser.parse(raw),
            None => Ok(raw),
        }
    }
}
