//! Link element
//!
//! A hyperlink wrapping inline content. The `target` is required and kept
//! verbatim; `title` and `rel` are the optional HTML-equivalent attributes.

use super::super::traits::SchemaNode;
use super::inline::Inline;

/// A hyperlink to another resource
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// The content to render inside the link
    pub content: Vec<Inline>,
    /// The target of the link
    pub target: String,
    /// A title for the link, advisory only
    pub title: Option<String>,
    /// The relation between the document and the target
    pub rel: Option<String>,
    pub id: Option<String>,
}

impl Link {
    pub fn new(content: Vec<Inline>, target: String) -> Self {
        Self {
            content,
            target,
            title: None,
            rel: None,
            id: None,
        }
    }

    pub fn with_title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_rel(mut self, rel: String) -> Self {
        self.rel = Some(rel);
        self
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}

impl SchemaNode for Link {
    fn node_type(&self) -> &'static str {
        "Link"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
