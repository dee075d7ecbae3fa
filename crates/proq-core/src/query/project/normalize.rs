use super::{
    ConfigError,
    config::{FieldConfig, is_conditional_key},
};
use crate::parse::Parser;

///
/// NormalizedField
///
/// The single canonical shape every field configuration reduces to.
/// Invariant: `fragment` is always valid comma-joined inside a projection
/// brace block.
///

#[derive(Clone, Debug)]
pub(crate) struct NormalizedField {
    pub key: String,
    pub fragment: String,
    pub parser: Option<Parser>,
}

/// Reduce one `(key, config)` entry to its normalized form. `None` means
/// the entry is excluded from the projection entirely; the `false` flag is
/// the only shape that can vanish.
pub(crate) fn normalize_field(
    key: String,
    config: FieldConfig,
) -> Result<Option<NormalizedField>, ConfigError> {
    let conditional = is_conditional_key(&key);

    let field = match config {
        // A conditional entry carries its own routing; the key is only a
        // placeholder and the nested query is emitted verbatim.
        FieldConfig::Builder(node) => {
            let fragment = if conditional {
                node.query().to_string()
            } else {
                shorthand(&key, node.query())
            };

            NormalizedField {
                fragment,
                parser: node.parser().cloned(),
                key,
            }
        }

        config if conditional => {
            return Err(ConfigError::UnexpectedField {
                key,
                category: config.category(),
            });
        }

        FieldConfig::Path(path) => NormalizedField {
            fragment: shorthand(&key, &path),
            parser: None,
            key,
        },

        FieldConfig::Include(false) => return Ok(None),

        FieldConfig::Include(true) => NormalizedField {
            fragment: key.clone(),
            parser: None,
            key,
        },

        FieldConfig::PathWith(path, parser) => NormalizedField {
            fragment: shorthand(&key, &path),
            parser: Some(parser),
            key,
        },

        FieldConfig::Parse(parser) => NormalizedField {
            fragment: key.clone(),
            parser: Some(parser),
            key,
        },
    };

    Ok(Some(field))
}

/// `key` alone when the expression equals the key, else `"<key>": <expr>`.
/// Multi-segment expressions are not interpreted beyond this equality check.
fn shorthand(key: &str, expression: &str) -> String {
    if key == expression {
        key.to_string()
    } else {
        format!("\"{key}\": {expression}")
    }
}
