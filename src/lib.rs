//! # stanza
//!
//! Typed document nodes and round-trip codecs for the stanza schema.
//!
//! The node catalog (articles, comments, inline marks, suggested edits,
//! citation intents) is generated from a canonical schema maintained
//! elsewhere; this crate holds the typed model plus the JSON/YAML codecs
//! that guarantee `decode(encode(node)) == node`.
//!
//! ## Testing
//!
//! For round-trip testing guidelines, see the [testing module](stanza::testing).
//! Codec tests must assert structural equality on reconstructed trees,
//! never on the raw serialized text alone.

pub mod stanza;
