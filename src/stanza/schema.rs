//! Typed schema nodes
//!
//! This module holds the closed catalog of node types defined by the stanza
//! document schema: concrete variant structs (articles, comments, inline
//! marks, suggested edits), the family sum types that group them
//! (`Node`, `CreativeWork`, `Block`, `Inline`, `Mark`, `SuggestionInline`)
//! and the flat tag enums (`CitationIntent`, `SuggestionStatus`).
//!
//! The variant declarations are mechanically derived from the canonical
//! schema; their attribute sets and discriminant strings must stay in sync
//! with the descriptors in [registry](crate::stanza::registry).

pub mod citation_intent;
pub mod elements;
pub mod suggestion_status;
pub mod traits;

pub use citation_intent::CitationIntent;
pub use elements::{
    Article, Block, Citation, CodeBlock, CodeInline, Comment, CreativeWork, DeleteInline,
    Emphasis, Heading, Inline, InsertInline, Link, Mark, ModifyInline, ModifyOperation, Node,
    Paragraph, QuoteBlock, ReplaceInline, Strikeout, Strong, Subscript, SuggestionInline,
    Superscript, Text, ThematicBreak, Underline,
};
pub use suggestion_status::SuggestionStatus;
pub use traits::SchemaNode;
