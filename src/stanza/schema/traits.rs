//! Schema traits - Common interfaces for uniform node access
//!
//! This module defines the common trait that provides uniform access to a
//! node's discriminant and identifier across all variant types. The codec
//! relies on `node_type` when emitting the `type` field, so the strings
//! returned here are the wire discriminants, verbatim.

/// Common interface for all schema nodes
///
/// The discriminant is fixed per variant at compile time and never depends
/// on attribute values; the identifier is the shared optional `id`
/// attribute every variant inherits.
pub trait SchemaNode {
    /// The discriminant string uniquely identifying this variant
    fn node_type(&self) -> &'static str;

    /// The node's identifier, when one was assigned
    fn node_id(&self) -> Option<&str>;
}

#[cfg(test)]
mod tests {
    use super::super::elements::{Inline, ReplaceInline, Text};
    use super::*;

    #[test]
    fn test_discriminant_is_fixed_per_variant() {
        let plain = Text::new("anything at all".into());
        assert_eq!(plain.node_type(), "Text");

        let other = Text::new(String::new()).with_id("t1".into());
        assert_eq!(other.node_type(), "Text");

        let replace = ReplaceInline::new(
            vec![Inline::Text(plain)],
            vec![Inline::Text(other)],
        );
        assert_eq!(replace.node_type(), "ReplaceInline");
    }

    #[test]
    fn test_node_id_reads_the_shared_attribute() {
        let anonymous = Text::new("hi".into());
        assert_eq!(anonymous.node_id(), None);

        let named = Text::new("hi".into()).with_id("inline-1".into());
        assert_eq!(named.node_id(), Some("inline-1"));
    }
}
