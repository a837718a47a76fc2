//! JSON codec
//!
//! The reference interchange format. Encoded trees are compact JSON; keys
//! within each object are ordered lexicographically by the value model, so
//! encoding is deterministic and the `type` discriminant is always present
//! as a sibling of the attribute fields.

use super::decode::{node_from_value, DecodeContext};
use super::encode::node_to_value;
use super::error::CodecError;
use crate::stanza::schema::Node;
use serde_json::Value;

/// Encode a node tree to compact JSON text
///
/// Never fails for a constructed tree: rendering the generic value
/// representation to text is infallible.
pub fn encode(node: &Node) -> String {
    to_value(node).to_string()
}

/// Encode a node tree to the generic value representation
pub fn to_value(node: &Node) -> Value {
    node_to_value(node)
}

/// Decode JSON text into a node tree
pub fn decode(text: &str) -> Result<Node, CodecError> {
    let value: Value =
        serde_json::from_str(text).map_err(|err| CodecError::MalformedInput(err.to_string()))?;
    from_value(&value)
}

/// Decode a generic value into a node tree
pub fn from_value(value: &Value) -> Result<Node, CodecError> {
    node_from_value(value, DecodeContext::root())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stanza::schema::elements::{Inline, Node, Text};

    #[test]
    fn test_encode_emits_the_discriminant_as_a_sibling_field() {
        let node = Node::Inline(Inline::Text(Text::new("hello".into())));
        let value = to_value(&node);
        assert_eq!(value["type"], "Text");
        assert_eq!(value["value"], "hello");
    }

    #[test]
    fn test_decode_rejects_non_json_text() {
        let err = decode("not json at all").unwrap_err();
        assert!(matches!(err, CodecError::MalformedInput(_)));
    }

    #[test]
    fn test_decode_rejects_non_object_roots() {
        let err = decode("42").unwrap_err();
        assert!(matches!(err, CodecError::MalformedInput(_)));

        let err = decode("[{\"type\": \"Text\", \"value\": \"x\"}]").unwrap_err();
        assert!(matches!(err, CodecError::MalformedInput(_)));
    }

    #[test]
    fn test_decode_rejects_missing_discriminants() {
        let err = decode("{\"value\": \"x\"}").unwrap_err();
        assert!(matches!(err, CodecError::MalformedInput(_)));
    }
}
