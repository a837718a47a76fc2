//! Citation element
//!
//! A reference to another creative work, by target identifier (a DOI, a
//! bibliography key, a URL). The optional `citation_intent` tags carry the
//! factual or rhetorical relationship being asserted, drawn from the
//! closed [CitationIntent](super::super::citation_intent::CitationIntent)
//! set; the optional `content` holds rendered citation text such as
//! "(Smith et al., 2024)".

use super::super::citation_intent::CitationIntent;
use super::super::traits::SchemaNode;
use super::inline::Inline;

/// A citation of another creative work
#[derive(Debug, Clone, PartialEq)]
pub struct Citation {
    /// The identifier of the work being cited
    pub target: String,
    /// The type or nature of the citation
    pub citation_intent: Option<Vec<CitationIntent>>,
    /// Rendered citation content, when available
    pub content: Option<Vec<Inline>>,
    pub id: Option<String>,
}

impl Citation {
    pub fn new(target: String) -> Self {
        Self {
            target,
            citation_intent: None,
            content: None,
            id: None,
        }
    }

    pub fn with_intents(mut self, intents: Vec<CitationIntent>) -> Self {
        self.citation_intent = Some(intents);
        self
    }

    pub fn with_content(mut self, content: Vec<Inline>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}

impl SchemaNode for Citation {
    fn node_type(&self) -> &'static str {
        "Citation"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
