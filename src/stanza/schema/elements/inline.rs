//! Inline family
//!
//! `Inline` is the common wrapper for all elements that can appear in
//! running text. It lets tooling operate uniformly on mixed inline
//! structures (plain text, marks, links, citations, suggested edits).
//!
//! The family is layered: [Mark](super::mark::Mark) and
//! [SuggestionInline](super::suggestion::SuggestionInline) members belong
//! to their own families first and to `Inline` through them, so a
//! `DeleteInline` has the chain `DeleteInline → SuggestionInline → Inline`.

use super::super::traits::SchemaNode;
use super::citation::Citation;
use super::code_inline::CodeInline;
use super::link::Link;
use super::mark::Mark;
use super::suggestion::SuggestionInline;
use super::text::Text;
use std::fmt;

/// Any element that can appear in running text
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(Text),
    Link(Link),
    CodeInline(CodeInline),
    Citation(Citation),
    Mark(Mark),
    Suggestion(SuggestionInline),
}

impl SchemaNode for Inline {
    fn node_type(&self) -> &'static str {
        match self {
            Inline::Text(t) => t.node_type(),
            Inline::Link(l) => l.node_type(),
            Inline::CodeInline(c) => c.node_type(),
            Inline::Citation(c) => c.node_type(),
            Inline::Mark(m) => m.node_type(),
            Inline::Suggestion(s) => s.node_type(),
        }
    }

    fn node_id(&self) -> Option<&str> {
        match self {
            Inline::Text(t) => t.node_id(),
            Inline::Link(l) => l.node_id(),
            Inline::CodeInline(c) => c.node_id(),
            Inline::Citation(c) => c.node_id(),
            Inline::Mark(m) => m.node_id(),
            Inline::Suggestion(s) => s.node_id(),
        }
    }
}

impl Inline {
    /// Nested inline content for container variants, when any
    pub fn children(&self) -> Option<&[Inline]> {
        match self {
            Inline::Link(l) => Some(&l.content),
            Inline::Mark(m) => Some(m.content()),
            Inline::Suggestion(s) => Some(s.content()),
            Inline::Citation(c) => c.content.as_deref(),
            Inline::Text(_) | Inline::CodeInline(_) => None,
        }
    }

    /// The plain text of this node when it carries any directly
    pub fn text(&self) -> Option<&str> {
        match self {
            Inline::Text(t) => Some(&t.value),
            Inline::CodeInline(c) => Some(&c.code),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Inline::Text(_))
    }
    pub fn is_link(&self) -> bool {
        matches!(self, Inline::Link(_))
    }
    pub fn is_code_inline(&self) -> bool {
        matches!(self, Inline::CodeInline(_))
    }
    pub fn is_citation(&self) -> bool {
        matches!(self, Inline::Citation(_))
    }
    pub fn is_mark(&self) -> bool {
        matches!(self, Inline::Mark(_))
    }
    pub fn is_suggestion(&self) -> bool {
        matches!(self, Inline::Suggestion(_))
    }

    pub fn as_text(&self) -> Option<&Text> {
        if let Inline::Text(t) = self {
            Some(t)
        } else {
            None
        }
    }
    pub fn as_link(&self) -> Option<&Link> {
        if let Inline::Link(l) = self {
            Some(l)
        } else {
            None
        }
    }
    pub fn as_code_inline(&self) -> Option<&CodeInline> {
        if let Inline::CodeInline(c) = self {
            Some(c)
        } else {
            None
        }
    }
    pub fn as_citation(&self) -> Option<&Citation> {
        if let Inline::Citation(c) = self {
            Some(c)
        } else {
            None
        }
    }
    pub fn as_mark(&self) -> Option<&Mark> {
        if let Inline::Mark(m) = self {
            Some(m)
        } else {
            None
        }
    }
    pub fn as_suggestion(&self) -> Option<&SuggestionInline> {
        if let Inline::Suggestion(s) = self {
            Some(s)
        } else {
            None
        }
    }
}

impl From<Text> for Inline {
    fn from(text: Text) -> Self {
        Inline::Text(text)
    }
}

impl From<Link> for Inline {
    fn from(link: Link) -> Self {
        Inline::Link(link)
    }
}

impl From<CodeInline> for Inline {
    fn from(code: CodeInline) -> Self {
        Inline::CodeInline(code)
    }
}

impl From<Citation> for Inline {
    fn from(citation: Citation) -> Self {
        Inline::Citation(citation)
    }
}

impl From<Mark> for Inline {
    fn from(mark: Mark) -> Self {
        Inline::Mark(mark)
    }
}

impl From<SuggestionInline> for Inline {
    fn from(suggestion: SuggestionInline) -> Self {
        Inline::Suggestion(suggestion)
    }
}

impl fmt::Display for Inline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inline::Text(t) => write!(f, "Text('{}')", t.value),
            Inline::Link(l) => write!(f, "Link('{}', {} items)", l.target, l.content.len()),
            Inline::CodeInline(c) => write!(f, "CodeInline('{}')", c.code),
            Inline::Citation(c) => write!(f, "Citation('{}')", c.target),
            Inline::Mark(m) => write!(f, "{}({} items)", m.node_type(), m.content().len()),
            Inline::Suggestion(s) => {
                write!(f, "{}({} items)", s.node_type(), s.content().len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stanza::schema::elements::{DeleteInline, Emphasis};

    #[test]
    fn test_node_type_dispatches_through_family_layers() {
        let text = Inline::Text(Text::new("plain".into()));
        assert_eq!(text.node_type(), "Text");

        let mark = Inline::Mark(Mark::Emphasis(Emphasis::new(vec![text.clone()])));
        assert_eq!(mark.node_type(), "Emphasis");

        let suggestion =
            Inline::Suggestion(SuggestionInline::Delete(DeleteInline::new(vec![text])));
        assert_eq!(suggestion.node_type(), "DeleteInline");
    }

    #[test]
    fn test_display_summarizes_without_serializing() {
        let text = Inline::Text(Text::new("hi".into()));
        assert_eq!(text.to_string(), "Text('hi')");

        let mark = Inline::Mark(Mark::Strong(super::super::mark::Strong::new(vec![text])));
        assert_eq!(mark.to_string(), "Strong(1 items)");
    }

    #[test]
    fn test_children_for_container_variants() {
        let inner = Inline::Text(Text::new("x".into()));
        let link = Inline::Link(Link::new(vec![inner.clone()], "https://example.org".into()));
        assert_eq!(link.children(), Some(&[inner.clone()][..]));

        let plain = Inline::Text(Text::new("x".into()));
        assert_eq!(plain.children(), None);
        assert_eq!(plain.text(), Some("x"));
    }
}
