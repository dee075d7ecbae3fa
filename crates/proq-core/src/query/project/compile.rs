use super::{
    ConfigError,
    config::{ProjectionMap, is_conditional_key},
    normalize::{NormalizedField, normalize_field},
};
use crate::{
    error::Error,
    parse::{Parser, ShapeField, element_wise, object_parser},
    query::node::{Indent, QueryNode},
};

impl QueryNode {
    /// Project fields out of the current result. Appends one brace-block
    /// fragment and composes one parser mirroring the fragment's shape:
    /// applied element-wise after a list-producing expression, directly
    /// after a single-item one.
    pub fn project(&self, map: ProjectionMap) -> Result<Self, Error> {
        compile(self, map)
    }

    /// Projection driven by a factory. The factory receives a fresh builder
    /// carrying this node's options, scoped to one element of the current
    /// result, and returns the map to compile.
    pub fn project_with(
        &self,
        factory: impl FnOnce(Self) -> ProjectionMap,
    ) -> Result<Self, Error> {
        let scoped = Self::with_options(self.options().clone());

        compile(self, factory(scoped))
    }

    /// Naked projection of a single field path (`.path`). The optional
    /// parser is applied element-wise after a list, directly otherwise.
    #[must_use]
    pub fn project_field(&self, path: &str, parser: Option<Parser>) -> Self {
        self.pipe(
            &format!(".{path}"),
            parser.map(|parser| element_wise(&parser)),
        )
    }
}

fn compile(current: &QueryNode, map: ProjectionMap) -> Result<QueryNode, Error> {
    let mut fields: Vec<NormalizedField> = Vec::new();
    for (key, config) in map {
        if let Some(field) = normalize_field(key, config)? {
            fields.push(field);
        }
    }

    if current.options().validation_required {
        let missing: Vec<String> = fields
            .iter()
            .filter(|field| field.parser.is_none())
            .map(|field| field.key.clone())
            .collect();

        if !missing.is_empty() {
            return Err(ConfigError::MissingParsers { keys: missing }.into());
        }
    }

    let fragment = brace_block(&fields, &current.options().indent);
    let parser = combined_parser(&fields);

    tracing::debug!(
        fields = fields.len(),
        parsed = parser.is_some(),
        "compiled projection"
    );

    Ok(current.pipe(&fragment, parser))
}

/// Comma-join the field fragments inside a brace block, honoring the
/// active indentation style. The empty projection is legal and compiles to
/// an empty block.
fn brace_block(fields: &[NormalizedField], indent: &Indent) -> String {
    if fields.is_empty() {
        return "{}".to_string();
    }

    let fragments: Vec<&str> = fields.iter().map(|field| field.fragment.as_str()).collect();

    if indent.is_compact() {
        format!("{{ {} }}", fragments.join(", "))
    } else {
        let separator = format!(",{}{}", indent.newline, indent.space);

        format!(
            "{{{newline}{space}{body}{newline}}}",
            newline = indent.newline,
            space = indent.space,
            body = fragments.join(&separator),
        )
    }
}

/// Build the combined parser for one projection, or `None` when no field
/// carries a parser (pure passthrough; query compilation still proceeds).
fn combined_parser(fields: &[NormalizedField]) -> Option<Parser> {
    if fields.iter().all(|field| field.parser.is_none()) {
        return None;
    }

    let (conditional, plain): (Vec<&NormalizedField>, Vec<&NormalizedField>) = fields
        .iter()
        .partition(|field| is_conditional_key(&field.key));

    let shape = plain
        .into_iter()
        .map(|field| ShapeField {
            key: field.key.clone(),
            parser: field.parser.clone(),
        })
        .collect();
    let conditionals = conditional
        .into_iter()
        .filter_map(|field| field.parser.clone())
        .collect();

    Some(element_wise(&object_parser(shape, conditionals)))
}
