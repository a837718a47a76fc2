//! Comment element
//!
//! A comment on an item, e.g. on an article or a part of one. Comments
//! thread: `parent_item` points at the comment being replied to. The
//! back-link is an owned, by-value copy of the parent, not a shared
//! pointer into the tree, so comment chains are always acyclic and
//! bounded by their encoded depth.

use super::super::traits::SchemaNode;
use super::block::Block;
use super::inline::Inline;

/// A comment on an item
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    /// The title of the comment, rarely present
    pub title: Option<Vec<Inline>>,
    /// A one-line description of the comment
    pub description: Option<String>,
    /// The body of the comment
    pub content: Vec<Block>,
    /// The parent comment this comment replies to
    pub parent_item: Option<Box<Comment>>,
    /// The part or facet of the item being commented on
    pub comment_aspect: Option<String>,
    pub id: Option<String>,
}

impl Comment {
    pub fn new(content: Vec<Block>) -> Self {
        Self {
            title: None,
            description: None,
            content,
            parent_item: None,
            comment_aspect: None,
            id: None,
        }
    }

    pub fn with_parent(mut self, parent: Comment) -> Self {
        self.parent_item = Some(Box::new(parent));
        self
    }

    pub fn with_aspect(mut self, aspect: String) -> Self {
        self.comment_aspect = Some(aspect);
        self
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }

    /// The number of ancestors in the reply chain
    pub fn thread_depth(&self) -> usize {
        match &self.parent_item {
            Some(parent) => 1 + parent.thread_depth(),
            None => 0,
        }
    }
}

impl SchemaNode for Comment {
    fn node_type(&self) -> &'static str {
        "Comment"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_depth_counts_the_reply_chain() {
        let root = Comment::new(Vec::new());
        assert_eq!(root.thread_depth(), 0);

        let reply = Comment::new(Vec::new()).with_parent(root);
        let nested = Comment::new(Vec::new()).with_parent(reply);
        assert_eq!(nested.thread_depth(), 2);
    }
}
