//! Quote block element
//!
//! Quoted block content. Unlike marks, the children here are blocks, so
//! quote blocks nest arbitrarily deep trees of block content.

use super::super::traits::SchemaNode;
use super::block::Block;

/// A section quoted from elsewhere
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteBlock {
    /// The quoted block content
    pub content: Vec<Block>,
    pub id: Option<String>,
}

impl QuoteBlock {
    pub fn new(content: Vec<Block>) -> Self {
        Self { content, id: None }
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}

impl SchemaNode for QuoteBlock {
    fn node_type(&self) -> &'static str {
        "QuoteBlock"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
