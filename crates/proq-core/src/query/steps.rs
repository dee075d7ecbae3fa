//! Fluent pipeline steps: formatting-only wrappers over
//! [`QueryNode::pipe`]. Each step appends query text and leaves response
//! parsing to a later projection. Steps live in their own module and extend
//! the node by composition; the node itself knows nothing about them.

use super::node::QueryNode;

impl QueryNode {
    /// Root step selecting every document (`*`).
    #[must_use]
    pub fn star(&self) -> Self {
        self.pipe("*", None)
    }

    /// Append a filter over the current items (`[condition]`).
    #[must_use]
    pub fn filter(&self, condition: &str) -> Self {
        self.pipe(&format!("[{condition}]"), None)
    }

    /// Filter on document type (`[_type == "t"]`).
    #[must_use]
    pub fn filter_by_type(&self, type_name: &str) -> Self {
        self.filter(&format!("_type == \"{type_name}\""))
    }

    /// Append an ordering step (`| order(a asc, b desc)`).
    #[must_use]
    pub fn order(&self, orderings: &[&str]) -> Self {
        self.pipe(&format!(" | order({})", orderings.join(", ")), None)
    }

    /// Index into the current list (`[i]`).
    #[must_use]
    pub fn slice(&self, index: usize) -> Self {
        self.pipe(&format!("[{index}]"), None)
    }

    /// Range slice; `inclusive` selects `..` over `...`.
    #[must_use]
    pub fn slice_range(&self, start: usize, end: usize, inclusive: bool) -> Self {
        let dots = if inclusive { ".." } else { "..." };

        self.pipe(&format!("[{start}{dots}{end}]"), None)
    }

    /// First element of the current list (`[0]`).
    #[must_use]
    pub fn first(&self) -> Self {
        self.slice(0)
    }

    /// Follow a reference (`->`).
    #[must_use]
    pub fn deref(&self) -> Self {
        self.pipe("->", None)
    }
}
