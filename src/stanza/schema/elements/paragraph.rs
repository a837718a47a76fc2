//! Paragraph element
//!
//! The workhorse block: an ordered sequence of inline content. The
//! `content` sequence is required by the schema but may be empty, so a
//! freshly constructed paragraph with no inlines is valid and encodes
//! with an explicit empty sequence.

use super::super::traits::SchemaNode;
use super::inline::Inline;

/// A paragraph of inline content
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    /// The inline content of the paragraph, in order
    pub content: Vec<Inline>,
    pub id: Option<String>,
}

impl Paragraph {
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content, id: None }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl SchemaNode for Paragraph {
    fn node_type(&self) -> &'static str {
        "Paragraph"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
