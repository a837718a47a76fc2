//! Article element
//!
//! The primary creative work: a standalone document with a body of block
//! content plus the metadata shared by the `CreativeWork` family (title,
//! description) and its own `keywords`. The schema declares articles
//! frozen: once published into a tree they are not edited in place,
//! suggested edits are expressed as suggestion nodes inside the content.

use super::super::traits::SchemaNode;
use super::block::Block;
use super::inline::Inline;

/// An article, the root of most documents
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    /// The title of the work as inline content
    pub title: Option<Vec<Inline>>,
    /// A one-line description of the work
    pub description: Option<String>,
    /// The body of the article
    pub content: Vec<Block>,
    /// Keywords or tags describing the work
    pub keywords: Option<Vec<String>>,
    pub id: Option<String>,
}

impl Article {
    pub fn new(content: Vec<Block>) -> Self {
        Self {
            title: None,
            description: None,
            content,
            keywords: None,
            id: None,
        }
    }

    pub fn with_title(mut self, title: Vec<Inline>) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = Some(keywords);
        self
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}

impl SchemaNode for Article {
    fn node_type(&self) -> &'static str {
        "Article"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
