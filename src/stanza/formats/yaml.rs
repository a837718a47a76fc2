//! YAML codec
//!
//! Layered over the JSON codec's generic value model: YAML text is parsed
//! into the same value representation and decoded through the same
//! registry dispatch, so both formats reject exactly the same inputs and
//! uphold the same round-trip law.

use super::error::CodecError;
use super::json;
use crate::stanza::schema::Node;
use serde_json::Value;

/// Encode a node tree to YAML text
///
/// The only fallible step is YAML rendering itself, which cannot fail for
/// the value trees the encoder produces; the `Result` mirrors serde_yaml's
/// signature rather than a reachable error path.
pub fn encode(node: &Node) -> Result<String, CodecError> {
    serde_yaml::to_string(&json::to_value(node))
        .map_err(|err| CodecError::MalformedInput(err.to_string()))
}

/// Decode YAML text into a node tree
pub fn decode(text: &str) -> Result<Node, CodecError> {
    let value: Value =
        serde_yaml::from_str(text).map_err(|err| CodecError::MalformedInput(err.to_string()))?;
    json::from_value(&value)
}
