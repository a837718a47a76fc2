//! CreativeWork family
//!
//! Groups the work-level variants (articles, comments) behind one wrapper
//! and exposes the attributes the family shares: `title`, `description`
//! and block `content`.

use super::super::traits::SchemaNode;
use super::article::Article;
use super::block::Block;
use super::comment::Comment;
use super::inline::Inline;
use std::fmt;

/// Any member of the creative work family
#[derive(Debug, Clone, PartialEq)]
pub enum CreativeWork {
    Article(Article),
    Comment(Comment),
}

impl CreativeWork {
    /// The work's title, shared by every member
    pub fn title(&self) -> Option<&[Inline]> {
        match self {
            CreativeWork::Article(a) => a.title.as_deref(),
            CreativeWork::Comment(c) => c.title.as_deref(),
        }
    }

    /// The work's description, shared by every member
    pub fn description(&self) -> Option<&str> {
        match self {
            CreativeWork::Article(a) => a.description.as_deref(),
            CreativeWork::Comment(c) => c.description.as_deref(),
        }
    }

    /// The work's block content, shared by every member
    pub fn content(&self) -> &[Block] {
        match self {
            CreativeWork::Article(a) => &a.content,
            CreativeWork::Comment(c) => &c.content,
        }
    }

    pub fn is_article(&self) -> bool {
        matches!(self, CreativeWork::Article(_))
    }
    pub fn is_comment(&self) -> bool {
        matches!(self, CreativeWork::Comment(_))
    }

    pub fn as_article(&self) -> Option<&Article> {
        if let CreativeWork::Article(a) = self {
            Some(a)
        } else {
            None
        }
    }
    pub fn as_comment(&self) -> Option<&Comment> {
        if let CreativeWork::Comment(c) = self {
            Some(c)
        } else {
            None
        }
    }
}

impl SchemaNode for CreativeWork {
    fn node_type(&self) -> &'static str {
        match self {
            CreativeWork::Article(a) => a.node_type(),
            CreativeWork::Comment(c) => c.node_type(),
        }
    }

    fn node_id(&self) -> Option<&str> {
        match self {
            CreativeWork::Article(a) => a.node_id(),
            CreativeWork::Comment(c) => c.node_id(),
        }
    }
}

impl From<Article> for CreativeWork {
    fn from(article: Article) -> Self {
        CreativeWork::Article(article)
    }
}

impl From<Comment> for CreativeWork {
    fn from(comment: Comment) -> Self {
        CreativeWork::Comment(comment)
    }
}

impl fmt::Display for CreativeWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreativeWork::Article(a) => write!(f, "Article({} blocks)", a.content.len()),
            CreativeWork::Comment(c) => {
                write!(
                    f,
                    "Comment({} blocks, depth {})",
                    c.content.len(),
                    c.thread_depth()
                )
            }
        }
    }
}
