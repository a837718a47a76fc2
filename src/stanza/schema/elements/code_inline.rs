//! Inline code element

use super::super::traits::SchemaNode;

/// A fragment of code rendered inline
#[derive(Debug, Clone, PartialEq)]
pub struct CodeInline {
    /// The code fragment, verbatim
    pub code: String,
    /// The language of the code, when known
    pub programming_language: Option<String>,
    pub id: Option<String>,
}

impl CodeInline {
    pub fn new(code: String) -> Self {
        Self {
            code,
            programming_language: None,
            id: None,
        }
    }

    pub fn with_language(mut self, language: String) -> Self {
        self.programming_language = Some(language);
        self
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}

impl SchemaNode for CodeInline {
    fn node_type(&self) -> &'static str {
        "CodeInline"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
