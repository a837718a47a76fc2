//! Testing utilities for node trees
//!
//! # Codec Testing Guidelines
//!
//! Codec tests must follow two rules to stay trustworthy:
//!
//! ## Rule 1: Build trees with the shortcut constructors
//!
//! Hand-writing nested struct literals for every test buries the shape of
//! the tree under field noise, and when the schema grows an attribute
//! every literal has to change. The shortcuts below mirror the generated
//! constructors (required attributes positional, everything else absent)
//! and keep test trees legible:
//!
//! ```rust-example
//! use stanza::stanza::testing::*;
//!
//! // A paragraph reading "Hello *world*" with a proposed deletion
//! let tree = art(vec![p(vec![
//!     t("Hello "),
//!     stg(vec![t("world")]),
//!     del(vec![t("!")]),
//! ])]);
//! ```
//!
//! ## Rule 2: Assert round trips structurally
//!
//! Comparing serialized text is brittle (key order, whitespace) and does
//! not prove the decoder reconstructs the tree. [assert_round_trip] checks
//! the law that matters: encode, decode, compare the trees with structural
//! equality, through both the JSON and YAML codecs.

use crate::stanza::formats::{json, yaml};
use crate::stanza::schema::elements::{
    Article, Block, Citation, CodeBlock, CodeInline, Comment, DeleteInline, Emphasis, Heading,
    Inline, InsertInline, Link, Mark, ModifyInline, ModifyOperation, Node, Paragraph, QuoteBlock,
    ReplaceInline, Strikeout, Strong, Subscript, SuggestionInline, Superscript, Text,
    ThematicBreak, Underline,
};

/// Assert that a tree survives encode/decode unchanged, in both formats
///
/// Panics with the decoded/original trees on mismatch, so failures show
/// the exact structural divergence.
pub fn assert_round_trip(node: &Node) {
    let encoded = json::encode(node);
    let decoded = json::decode(&encoded)
        .unwrap_or_else(|err| panic!("JSON round trip failed to decode: {err}\ntext: {encoded}"));
    assert_eq!(
        &decoded, node,
        "JSON round trip diverged\ntext: {encoded}"
    );

    let encoded = yaml::encode(node).expect("YAML encoding cannot fail for constructed trees");
    let decoded = yaml::decode(&encoded)
        .unwrap_or_else(|err| panic!("YAML round trip failed to decode: {err}\ntext: {encoded}"));
    assert_eq!(
        &decoded, node,
        "YAML round trip diverged\ntext: {encoded}"
    );
}

// ---- inline shortcuts ----

/// Plain text
pub fn t(value: impl Into<String>) -> Inline {
    Inline::Text(Text::new(value.into()))
}

/// Emphasis
pub fn em(content: Vec<Inline>) -> Inline {
    Inline::Mark(Mark::Emphasis(Emphasis::new(content)))
}

/// Strong
pub fn stg(content: Vec<Inline>) -> Inline {
    Inline::Mark(Mark::Strong(Strong::new(content)))
}

/// Strikeout
pub fn stk(content: Vec<Inline>) -> Inline {
    Inline::Mark(Mark::Strikeout(Strikeout::new(content)))
}

/// Subscript
pub fn sub(content: Vec<Inline>) -> Inline {
    Inline::Mark(Mark::Subscript(Subscript::new(content)))
}

/// Superscript
pub fn sup(content: Vec<Inline>) -> Inline {
    Inline::Mark(Mark::Superscript(Superscript::new(content)))
}

/// Underline
pub fn u(content: Vec<Inline>) -> Inline {
    Inline::Mark(Mark::Underline(Underline::new(content)))
}

/// Link
pub fn lnk(content: Vec<Inline>, target: impl Into<String>) -> Inline {
    Inline::Link(Link::new(content, target.into()))
}

/// Inline code
pub fn ci(code: impl Into<String>) -> Inline {
    Inline::CodeInline(CodeInline::new(code.into()))
}

/// Citation
pub fn cite(target: impl Into<String>) -> Inline {
    Inline::Citation(Citation::new(target.into()))
}

/// Insert suggestion
pub fn ins(content: Vec<Inline>) -> Inline {
    Inline::Suggestion(SuggestionInline::Insert(InsertInline::new(content)))
}

/// Delete suggestion
pub fn del(content: Vec<Inline>) -> Inline {
    Inline::Suggestion(SuggestionInline::Delete(DeleteInline::new(content)))
}

/// Replace suggestion
pub fn rep(content: Vec<Inline>, replacement: Vec<Inline>) -> Inline {
    Inline::Suggestion(SuggestionInline::Replace(ReplaceInline::new(
        content,
        replacement,
    )))
}

/// Modify suggestion
pub fn modi(content: Vec<Inline>, operations: Vec<ModifyOperation>) -> Inline {
    Inline::Suggestion(SuggestionInline::Modify(ModifyInline::new(
        content, operations,
    )))
}

/// Modify operation
pub fn op(target: impl Into<String>) -> ModifyOperation {
    ModifyOperation::new(target.into())
}

// ---- block shortcuts ----

/// Paragraph
pub fn p(content: Vec<Inline>) -> Block {
    Block::Paragraph(Paragraph::new(content))
}

/// Heading
pub fn h(level: i64, content: Vec<Inline>) -> Block {
    Block::Heading(Heading::new(level, content))
}

/// Code block
pub fn cb(code: impl Into<String>) -> Block {
    Block::CodeBlock(CodeBlock::new(code.into()))
}

/// Quote block
pub fn qb(content: Vec<Block>) -> Block {
    Block::QuoteBlock(QuoteBlock::new(content))
}

/// Thematic break
pub fn tb() -> Block {
    Block::ThematicBreak(ThematicBreak::new())
}

// ---- work shortcuts ----

/// Article, as a top-level node
pub fn art(content: Vec<Block>) -> Node {
    Article::new(content).into()
}

/// Comment, as a bare struct so reply chains can be built up
pub fn cmt(content: Vec<Block>) -> Comment {
    Comment::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts_produce_the_expected_discriminants() {
        use crate::stanza::schema::traits::SchemaNode;

        assert_eq!(t("x").node_type(), "Text");
        assert_eq!(em(vec![]).node_type(), "Emphasis");
        assert_eq!(rep(vec![], vec![]).node_type(), "ReplaceInline");
        assert_eq!(p(vec![]).node_type(), "Paragraph");
        assert_eq!(art(vec![]).node_type(), "Article");
    }
}
