//! Codecs for schema node trees
//!
//! Bidirectional conversion between in-memory node trees and textual
//! interchange representations. JSON is the reference format; YAML is
//! layered over the same generic value model, so both share one decode
//! path and one set of invariants:
//!
//! - every encoded node is an object with a `type` field holding its
//!   discriminant, sibling to one field per present attribute;
//! - decoding dispatches on that discriminant through the
//!   [registry](crate::stanza::registry) and rejects anything outside the
//!   closed catalog;
//! - `decode(encode(tree))` reconstructs a structurally equal tree.

pub mod error;
pub mod json;
pub mod yaml;

mod decode;
mod encode;

pub use error::CodecError;
