//! Mark elements
//!
//! Marks are the simple formatting family: each wraps inline content and
//! adds exactly one presentation role (emphasis, strong importance,
//! strikeout, sub/superscript, underline). They all share the same
//! attribute shape, inherited from the `Mark` family: `content` plus the
//! universal `id`.
//!
//! The `Mark` sum type groups the members so code holding an
//! [Inline](super::inline::Inline) can branch once for "any mark" and
//! still recover the concrete variant when it matters.

use super::super::traits::SchemaNode;
use super::inline::Inline;

/// Emphasized content, conventionally italic
#[derive(Debug, Clone, PartialEq)]
pub struct Emphasis {
    pub content: Vec<Inline>,
    pub id: Option<String>,
}

impl Emphasis {
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content, id: None }
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}

impl SchemaNode for Emphasis {
    fn node_type(&self) -> &'static str {
        "Emphasis"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Strongly important content, conventionally bold
#[derive(Debug, Clone, PartialEq)]
pub struct Strong {
    pub content: Vec<Inline>,
    pub id: Option<String>,
}

impl Strong {
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content, id: None }
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}

impl SchemaNode for Strong {
    fn node_type(&self) -> &'static str {
        "Strong"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Struck-out content, no longer accurate or relevant
#[derive(Debug, Clone, PartialEq)]
pub struct Strikeout {
    pub content: Vec<Inline>,
    pub id: Option<String>,
}

impl Strikeout {
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content, id: None }
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}

impl SchemaNode for Strikeout {
    fn node_type(&self) -> &'static str {
        "Strikeout"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Subscripted content
#[derive(Debug, Clone, PartialEq)]
pub struct Subscript {
    pub content: Vec<Inline>,
    pub id: Option<String>,
}

impl Subscript {
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content, id: None }
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}

impl SchemaNode for Subscript {
    fn node_type(&self) -> &'static str {
        "Subscript"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Superscripted content
#[derive(Debug, Clone, PartialEq)]
pub struct Superscript {
    pub content: Vec<Inline>,
    pub id: Option<String>,
}

impl Superscript {
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content, id: None }
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}

impl SchemaNode for Superscript {
    fn node_type(&self) -> &'static str {
        "Superscript"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Underlined content
#[derive(Debug, Clone, PartialEq)]
pub struct Underline {
    pub content: Vec<Inline>,
    pub id: Option<String>,
}

impl Underline {
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content, id: None }
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}

impl SchemaNode for Underline {
    fn node_type(&self) -> &'static str {
        "Underline"
    }

    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Any member of the mark family
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Emphasis(Emphasis),
    Strong(Strong),
    Strikeout(Strikeout),
    Subscript(Subscript),
    Superscript(Superscript),
    Underline(Underline),
}

impl Mark {
    /// The wrapped inline content, shared by every mark
    pub fn content(&self) -> &[Inline] {
        match self {
            Mark::Emphasis(m) => &m.content,
            Mark::Strong(m) => &m.content,
            Mark::Strikeout(m) => &m.content,
            Mark::Subscript(m) => &m.content,
            Mark::Superscript(m) => &m.content,
            Mark::Underline(m) => &m.content,
        }
    }

    pub fn content_mut(&mut self) -> &mut Vec<Inline> {
        match self {
            Mark::Emphasis(m) => &mut m.content,
            Mark::Strong(m) => &mut m.content,
            Mark::Strikeout(m) => &mut m.content,
            Mark::Subscript(m) => &mut m.content,
            Mark::Superscript(m) => &mut m.content,
            Mark::Underline(m) => &mut m.content,
        }
    }
}

impl SchemaNode for Mark {
    fn node_type(&self) -> &'static str {
        match self {
            Mark::Emphasis(m) => m.node_type(),
            Mark::Strong(m) => m.node_type(),
            Mark::Strikeout(m) => m.node_type(),
            Mark::Subscript(m) => m.node_type(),
            Mark::Superscript(m) => m.node_type(),
            Mark::Underline(m) => m.node_type(),
        }
    }

    fn node_id(&self) -> Option<&str> {
        match self {
            Mark::Emphasis(m) => m.node_id(),
            Mark::Strong(m) => m.node_id(),
            Mark::Strikeout(m) => m.node_id(),
            Mark::Subscript(m) => m.node_id(),
            Mark::Superscript(m) => m.node_id(),
            Mark::Underline(m) => m.node_id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stanza::schema::elements::Text;

    #[test]
    fn test_marks_share_the_family_content_attribute() {
        let inner = vec![Inline::Text(Text::new("hi".into()))];
        let mark = Mark::Strong(Strong::new(inner.clone()));
        assert_eq!(mark.content(), &inner[..]);
        assert_eq!(mark.node_type(), "Strong");
    }
}
