//! Heading element

use super::super::traits::SchemaNode;
use super::inline::Inline;

/// A section heading
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    /// The depth of the heading; defaults to the top level
    pub level: i64,
    /// The heading text as inline content
    pub content: Vec<Inline>,
    pub id: Option<String>,
}

impl Heading {
    /// Level assumed when the encoded form omits the attribute
    pub const DEFAULT_LEVEL: i64 = 1;

    pub fn new(level: i64, content: Vec<Inline>) -> Self {
        Self {
            level,
            content,
            id: None,
        }
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}

impl SchemaNode for Heading {
    fn node_type(&self) -> &'static str {
        "Heading"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
