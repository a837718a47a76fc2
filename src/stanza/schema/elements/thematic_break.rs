//! Thematic break element

use super::super::traits::SchemaNode;

/// A thematic break between blocks, conventionally a horizontal rule
#[derive(Debug, Clone, PartialEq)]
pub struct ThematicBreak {
    pub id: Option<String>,
}

impl ThematicBreak {
    pub fn new() -> Self {
        Self { id: None }
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}

impl Default for ThematicBreak {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaNode for ThematicBreak {
    fn node_type(&self) -> &'static str {
        "ThematicBreak"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
