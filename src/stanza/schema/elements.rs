//! Schema element variants
//!
//! One module per concrete variant, plus the family sum types that group
//! them (`Inline`, `Mark`, `SuggestionInline`, `Block`, `CreativeWork`,
//! `Node`). Attribute sets here mirror the canonical schema; the
//! [registry](crate::stanza::registry) holds the matching descriptors.

pub mod article;
pub mod block;
pub mod citation;
pub mod code_block;
pub mod code_inline;
pub mod comment;
pub mod creative_work;
pub mod heading;
pub mod inline;
pub mod link;
pub mod mark;
pub mod modify_operation;
pub mod node;
pub mod paragraph;
pub mod quote_block;
pub mod suggestion;
pub mod text;
pub mod thematic_break;

pub use article::Article;
pub use block::Block;
pub use citation::Citation;
pub use code_block::CodeBlock;
pub use code_inline::CodeInline;
pub use comment::Comment;
pub use creative_work::CreativeWork;
pub use heading::Heading;
pub use inline::Inline;
pub use link::Link;
pub use mark::{Emphasis, Mark, Strikeout, Strong, Subscript, Superscript, Underline};
pub use modify_operation::ModifyOperation;
pub use node::Node;
pub use paragraph::Paragraph;
pub use quote_block::QuoteBlock;
pub use suggestion::{DeleteInline, InsertInline, ModifyInline, ReplaceInline, SuggestionInline};
pub use text::Text;
pub use thematic_break::ThematicBreak;
