use crate::{parse::Parser, query::node::QueryNode};
use derive_more::{Deref, IntoIterator};

/// Reserved prefix marking conditional projection keys. A conditional key
/// routes a self-contained conditional fragment; it never appears as a
/// literal key in the emitted query or in the parsed result.
pub(crate) const CONDITIONAL_KEY_PREFIX: &str = "=>";

/// True when a projection key marks a conditional entry.
#[must_use]
pub fn is_conditional_key(key: &str) -> bool {
    key.starts_with(CONDITIONAL_KEY_PREFIX)
}

///
/// FieldConfig
///
/// The five shapes one projection entry can take. `From` impls keep map
/// construction close to a literal: `true`, a path string, a parser, a
/// `(path, parser)` pair, or a nested builder.
///

#[derive(Clone, Debug)]
pub enum FieldConfig {
    /// Nested sub-projection with its own query and parser.
    Builder(QueryNode),

    /// Naked field-path expression, possibly different from the key.
    Path(String),

    /// `true` includes the field verbatim; `false` omits it entirely.
    Include(bool),

    /// Naked field-path plus an explicit parser.
    PathWith(String, Parser),

    /// Parser bound to the key's own value.
    Parse(Parser),
}

impl FieldConfig {
    /// Short category label used in configuration errors.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Builder(_) => "nested builder",
            Self::Path(_) => "field path",
            Self::Include(_) => "boolean flag",
            Self::PathWith(..) => "field path with parser",
            Self::Parse(_) => "parser",
        }
    }
}

impl From<QueryNode> for FieldConfig {
    fn from(node: QueryNode) -> Self {
        Self::Builder(node)
    }
}

impl From<&str> for FieldConfig {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for FieldConfig {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<bool> for FieldConfig {
    fn from(include: bool) -> Self {
        Self::Include(include)
    }
}

impl From<Parser> for FieldConfig {
    fn from(parser: Parser) -> Self {
        Self::Parse(parser)
    }
}

impl<S: Into<String>> From<(S, Parser)> for FieldConfig {
    fn from((path, parser): (S, Parser)) -> Self {
        Self::PathWith(path.into(), parser)
    }
}

///
/// ProjectionMap
///
/// Ordered result-key → field-configuration map. Inserting an existing key
/// replaces its configuration in place (last write wins, original position
/// kept), matching standard mapping semantics.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator)]
pub struct ProjectionMap {
    #[deref]
    #[into_iterator(owned, ref)]
    entries: Vec<(String, FieldConfig)>,
}

impl ProjectionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one projection entry.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, config: impl Into<FieldConfig>) -> Self {
        let key = key.into();
        let config = config.into();

        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = config,
            None => self.entries.push((key, config)),
        }

        self
    }

    /// Add a conditional branch. When `condition` holds for an item, the
    /// branch projection's fields are flattened into the item's result;
    /// declaration order decides merge order and the last overlapping
    /// branch wins. The generated key carries the condition for error
    /// messages plus an index so equal conditions stay distinct.
    #[must_use]
    pub fn conditional(mut self, condition: &str, branch: &QueryNode) -> Self {
        let key = format!("{CONDITIONAL_KEY_PREFIX}{} {condition}", self.entries.len());
        let node = QueryNode::with_options(branch.options().clone()).pipe(
            &format!("{condition} => {}", branch.query()),
            branch.parser().cloned(),
        );

        self.entries.push((key, FieldConfig::Builder(node)));
        self
    }
}
