//! Block family
//!
//! `Block` is the common wrapper for elements that stack vertically to
//! form document content: paragraphs, headings, code blocks, quotes and
//! breaks. Creative works hold their body as an ordered `Vec<Block>`.

use super::super::traits::SchemaNode;
use super::code_block::CodeBlock;
use super::heading::Heading;
use super::paragraph::Paragraph;
use super::quote_block::QuoteBlock;
use super::thematic_break::ThematicBreak;
use std::fmt;

/// Any element that can appear in block content
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Heading(Heading),
    CodeBlock(CodeBlock),
    QuoteBlock(QuoteBlock),
    ThematicBreak(ThematicBreak),
}

impl SchemaNode for Block {
    fn node_type(&self) -> &'static str {
        match self {
            Block::Paragraph(p) => p.node_type(),
            Block::Heading(h) => h.node_type(),
            Block::CodeBlock(c) => c.node_type(),
            Block::QuoteBlock(q) => q.node_type(),
            Block::ThematicBreak(t) => t.node_type(),
        }
    }

    fn node_id(&self) -> Option<&str> {
        match self {
            Block::Paragraph(p) => p.node_id(),
            Block::Heading(h) => h.node_id(),
            Block::CodeBlock(c) => c.node_id(),
            Block::QuoteBlock(q) => q.node_id(),
            Block::ThematicBreak(t) => t.node_id(),
        }
    }
}

impl Block {
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading(_))
    }
    pub fn is_code_block(&self) -> bool {
        matches!(self, Block::CodeBlock(_))
    }
    pub fn is_quote_block(&self) -> bool {
        matches!(self, Block::QuoteBlock(_))
    }
    pub fn is_thematic_break(&self) -> bool {
        matches!(self, Block::ThematicBreak(_))
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        if let Block::Paragraph(p) = self {
            Some(p)
        } else {
            None
        }
    }
    pub fn as_heading(&self) -> Option<&Heading> {
        if let Block::Heading(h) = self {
            Some(h)
        } else {
            None
        }
    }
    pub fn as_code_block(&self) -> Option<&CodeBlock> {
        if let Block::CodeBlock(c) = self {
            Some(c)
        } else {
            None
        }
    }
    pub fn as_quote_block(&self) -> Option<&QuoteBlock> {
        if let Block::QuoteBlock(q) = self {
            Some(q)
        } else {
            None
        }
    }
    pub fn as_thematic_break(&self) -> Option<&ThematicBreak> {
        if let Block::ThematicBreak(t) = self {
            Some(t)
        } else {
            None
        }
    }
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Block::Paragraph(paragraph)
    }
}

impl From<Heading> for Block {
    fn from(heading: Heading) -> Self {
        Block::Heading(heading)
    }
}

impl From<CodeBlock> for Block {
    fn from(code_block: CodeBlock) -> Self {
        Block::CodeBlock(code_block)
    }
}

impl From<QuoteBlock> for Block {
    fn from(quote_block: QuoteBlock) -> Self {
        Block::QuoteBlock(quote_block)
    }
}

impl From<ThematicBreak> for Block {
    fn from(thematic_break: ThematicBreak) -> Self {
        Block::ThematicBreak(thematic_break)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Paragraph(p) => write!(f, "Paragraph({} items)", p.content.len()),
            Block::Heading(h) => write!(f, "Heading(level {}, {} items)", h.level, h.content.len()),
            Block::CodeBlock(c) => write!(f, "CodeBlock({} bytes)", c.code.len()),
            Block::QuoteBlock(q) => write!(f, "QuoteBlock({} items)", q.content.len()),
            Block::ThematicBreak(_) => write!(f, "ThematicBreak"),
        }
    }
}
