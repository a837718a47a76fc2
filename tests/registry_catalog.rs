//! Closed-catalog contract tests
//!
//! The registry is the decoder's single source of truth: every descriptor
//! in it must be decodable from a minimal input built from its own
//! attribute specs, and nothing outside it may decode at all.

use serde_json::{json, Map, Value};
use stanza::stanza::formats::{json as json_codec, CodecError};
use stanza::stanza::registry::{registry, AttrKind};
use stanza::stanza::schema::SchemaNode;

/// The smallest value satisfying an attribute's declared kind
fn minimal_value_for(kind: AttrKind) -> Value {
    match kind {
        AttrKind::String => json!("x"),
        AttrKind::Integer => json!(1),
        AttrKind::StringSeq
        | AttrKind::InlineSeq
        | AttrKind::BlockSeq
        | AttrKind::CitationIntentSeq
        | AttrKind::OperationSeq => json!([]),
        AttrKind::SuggestionStatus => json!("Proposed"),
        AttrKind::CommentRef => json!({"type": "Comment", "content": []}),
    }
}

#[test]
fn test_every_catalog_variant_decodes_from_its_descriptor() {
    for name in registry().names() {
        let spec = registry().lookup(name).unwrap();

        let mut obj = Map::new();
        obj.insert("type".to_string(), json!(name));
        for attr in &spec.attributes {
            if attr.is_required() {
                obj.insert(attr.name.to_string(), minimal_value_for(attr.kind));
            }
        }

        let node = json_codec::from_value(&Value::Object(obj))
            .unwrap_or_else(|err| panic!("{name} failed to decode: {err}"));
        assert_eq!(node.node_type(), name);
    }
}

#[test]
fn test_every_catalog_variant_round_trips_from_full_input() {
    // Same walk, but with every declared attribute present.
    for name in registry().names() {
        let spec = registry().lookup(name).unwrap();

        let mut obj = Map::new();
        obj.insert("type".to_string(), json!(name));
        for attr in &spec.attributes {
            obj.insert(attr.name.to_string(), minimal_value_for(attr.kind));
        }

        let value = Value::Object(obj);
        let node = json_codec::from_value(&value)
            .unwrap_or_else(|err| panic!("{name} failed to decode: {err}"));
        let reencoded = json_codec::encode(&node);
        let reconstructed = json_codec::decode(&reencoded)
            .unwrap_or_else(|err| panic!("{name} failed to round trip: {err}"));
        assert_eq!(reconstructed, node);
    }
}

#[test]
fn test_dispatch_is_closed() {
    assert_eq!(registry().len(), 22);
    assert!(!registry().is_empty());

    // Near-misses of real discriminants must not resolve.
    for tag in ["Texts", "comment", "REPLACEINLINE", "Inline", "Entity", ""] {
        assert!(!registry().contains(tag), "{tag:?} should not resolve");
        let err = json_codec::from_value(&json!({"type": tag})).unwrap_err();
        assert_eq!(err, CodecError::UnknownVariant(tag.to_string()));
    }
}

#[test]
fn test_family_routing_agrees_with_the_catalog() {
    // Every variant that claims Inline membership must decode into the
    // Inline arm of Node, and likewise for the other families.
    for name in registry().names() {
        let spec = registry().lookup(name).unwrap();

        let mut obj = Map::new();
        obj.insert("type".to_string(), json!(name));
        for attr in &spec.attributes {
            if attr.is_required() {
                obj.insert(attr.name.to_string(), minimal_value_for(attr.kind));
            }
        }
        let node = json_codec::from_value(&Value::Object(obj)).unwrap();

        if spec.in_family("Inline") {
            assert!(node.is_inline(), "{name} should route to Inline");
        } else if spec.in_family("Block") {
            assert!(node.is_block(), "{name} should route to Block");
        } else if spec.in_family("CreativeWork") {
            assert!(node.is_creative_work(), "{name} should route to CreativeWork");
        } else {
            assert!(
                node.is_modify_operation(),
                "{name} should route to ModifyOperation"
            );
        }
    }
}
