//! Text element
//!
//! Plain textual content, the leaf of every inline tree. Everything the
//! schema renders as prose bottoms out in a `Text` node, so most trees
//! contain far more of these than of any other variant.

use super::super::traits::SchemaNode;

/// Plain text content with no markup
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// The text content itself
    pub value: String,
    pub id: Option<String>,
}

impl Text {
    pub fn new(value: String) -> Self {
        Self { value, id: None }
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl SchemaNode for Text {
    fn node_type(&self) -> &'static str {
        "Text"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
