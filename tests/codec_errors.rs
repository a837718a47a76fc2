//! Error taxonomy tests
//!
//! Decoding reports exactly one of four inspectable errors for the first
//! structural violation it meets: `UnknownVariant`,
//! `MissingRequiredAttribute`, `TypeMismatch` or `MalformedInput`. These
//! tests pin both the variant chosen and the context it carries.

use serde_json::{json, Value};
use stanza::stanza::formats::{json as json_codec, CodecError};

#[test]
fn test_unknown_variant_at_the_root() {
    let err = json_codec::decode(r#"{"type": "NotARealTag"}"#).unwrap_err();
    assert_eq!(err, CodecError::UnknownVariant("NotARealTag".into()));
}

#[test]
fn test_unknown_variant_is_case_sensitive() {
    let err = json_codec::decode(r#"{"type": "text", "value": "x"}"#).unwrap_err();
    assert_eq!(err, CodecError::UnknownVariant("text".into()));
}

#[test]
fn test_unknown_variant_nested_in_content() {
    let text = r#"{"type": "Paragraph", "content": [{"type": "Sparkle"}]}"#;
    let err = json_codec::decode(text).unwrap_err();
    assert_eq!(err, CodecError::UnknownVariant("Sparkle".into()));
}

#[test]
fn test_unknown_citation_intent_tag() {
    let text = r#"{"type": "Citation", "target": "doi:x", "citationIntent": ["NotARealTag"]}"#;
    let err = json_codec::decode(text).unwrap_err();
    assert_eq!(err, CodecError::UnknownVariant("NotARealTag".into()));
}

#[test]
fn test_unknown_suggestion_status_tag() {
    let text = r#"{"type": "DeleteInline", "content": [], "suggestionStatus": "Pending"}"#;
    let err = json_codec::decode(text).unwrap_err();
    assert_eq!(err, CodecError::UnknownVariant("Pending".into()));
}

#[test]
fn test_missing_required_scalar() {
    let err = json_codec::decode(r#"{"type": "Text"}"#).unwrap_err();
    assert_eq!(
        err,
        CodecError::MissingRequiredAttribute {
            variant: "Text".into(),
            attribute: "value".into(),
        }
    );
}

#[test]
fn test_missing_required_on_link() {
    let err = json_codec::decode(r#"{"type": "Link", "content": []}"#).unwrap_err();
    assert_eq!(
        err,
        CodecError::MissingRequiredAttribute {
            variant: "Link".into(),
            attribute: "target".into(),
        }
    );
}

#[test]
fn test_missing_required_sequence_on_replace() {
    // `content` may be absent (defaults empty) but `replacement` may not.
    let err = json_codec::decode(r#"{"type": "ReplaceInline", "content": []}"#).unwrap_err();
    assert_eq!(
        err,
        CodecError::MissingRequiredAttribute {
            variant: "ReplaceInline".into(),
            attribute: "replacement".into(),
        }
    );
}

#[test]
fn test_missing_required_operations_on_modify() {
    let err = json_codec::decode(r#"{"type": "ModifyInline"}"#).unwrap_err();
    assert_eq!(
        err,
        CodecError::MissingRequiredAttribute {
            variant: "ModifyInline".into(),
            attribute: "operations".into(),
        }
    );
}

#[test]
fn test_type_mismatch_on_scalar_shape() {
    let err = json_codec::decode(r#"{"type": "Text", "value": 7}"#).unwrap_err();
    assert_eq!(
        err,
        CodecError::TypeMismatch {
            variant: "Text".into(),
            attribute: "value".into(),
            expected: "string".into(),
            found: "number".into(),
        }
    );
}

#[test]
fn test_type_mismatch_on_null_for_optional() {
    // Optional means omitted; null is a shape error, not an absence.
    let err = json_codec::decode(r#"{"type": "Text", "value": "x", "id": null}"#).unwrap_err();
    assert_eq!(
        err,
        CodecError::TypeMismatch {
            variant: "Text".into(),
            attribute: "id".into(),
            expected: "string".into(),
            found: "null".into(),
        }
    );
}

#[test]
fn test_type_mismatch_on_non_integer_level() {
    let err =
        json_codec::decode(r#"{"type": "Heading", "level": "one", "content": []}"#).unwrap_err();
    assert_eq!(
        err,
        CodecError::TypeMismatch {
            variant: "Heading".into(),
            attribute: "level".into(),
            expected: "integer".into(),
            found: "string".into(),
        }
    );
}

#[test]
fn test_type_mismatch_on_non_array_content() {
    let err = json_codec::decode(r#"{"type": "Paragraph", "content": "words"}"#).unwrap_err();
    assert_eq!(
        err,
        CodecError::TypeMismatch {
            variant: "Paragraph".into(),
            attribute: "content".into(),
            expected: "sequence of inline nodes".into(),
            found: "string".into(),
        }
    );
}

#[test]
fn test_type_mismatch_on_wrong_family_in_sequence() {
    // A block inside inline content is a known variant in the wrong family.
    let text = r#"{"type": "Emphasis", "content": [{"type": "Paragraph", "content": []}]}"#;
    let err = json_codec::decode(text).unwrap_err();
    assert_eq!(
        err,
        CodecError::TypeMismatch {
            variant: "Emphasis".into(),
            attribute: "content".into(),
            expected: "Inline node".into(),
            found: "Paragraph".into(),
        }
    );
}

#[test]
fn test_type_mismatch_on_parent_item_family() {
    let text = r#"{"type": "Comment", "content": [], "parentItem": {"type": "Paragraph", "content": []}}"#;
    let err = json_codec::decode(text).unwrap_err();
    assert_eq!(
        err,
        CodecError::TypeMismatch {
            variant: "Comment".into(),
            attribute: "parentItem".into(),
            expected: "Comment node".into(),
            found: "Paragraph".into(),
        }
    );
}

#[test]
fn test_type_mismatch_on_keyword_elements() {
    let text = r#"{"type": "Article", "content": [], "keywords": ["ok", 3]}"#;
    let err = json_codec::decode(text).unwrap_err();
    assert_eq!(
        err,
        CodecError::TypeMismatch {
            variant: "Article".into(),
            attribute: "keywords".into(),
            expected: "string".into(),
            found: "number".into(),
        }
    );
}

#[test]
fn test_type_mismatch_on_operations_payload() {
    let text = r#"{"type": "ModifyInline", "content": [], "operations": [{"type": "Text", "value": "x"}]}"#;
    let err = json_codec::decode(text).unwrap_err();
    assert_eq!(
        err,
        CodecError::TypeMismatch {
            variant: "ModifyInline".into(),
            attribute: "operations".into(),
            expected: "ModifyOperation node".into(),
            found: "Text".into(),
        }
    );
}

#[test]
fn test_malformed_input_on_unparseable_text() {
    let err = json_codec::decode("{{{{").unwrap_err();
    assert!(matches!(err, CodecError::MalformedInput(_)));
}

#[test]
fn test_malformed_input_on_non_string_discriminant() {
    let err = json_codec::decode(r#"{"type": 3}"#).unwrap_err();
    assert!(matches!(err, CodecError::MalformedInput(_)));
}

#[test]
fn test_malformed_input_on_excessive_nesting() {
    // Build the nesting as a value to sidestep the JSON parser's own
    // recursion limit and hit the decoder's depth guard directly.
    let mut value = json!({"type": "QuoteBlock", "content": []});
    for _ in 0..200 {
        value = json!({"type": "QuoteBlock", "content": [value]});
    }
    let err = json_codec::from_value(&value).unwrap_err();
    assert!(matches!(err, CodecError::MalformedInput(_)));
}

#[test]
fn test_decoding_is_deterministic() {
    // Same input, same error; retrying cannot change the outcome.
    let text = r#"{"type": "Text"}"#;
    let first = json_codec::decode(text).unwrap_err();
    let second = json_codec::decode(text).unwrap_err();
    assert_eq!(first, second);
}

#[test]
fn test_errors_are_distinct_values() {
    let errors: Vec<CodecError> = vec![
        json_codec::decode(r#"{"type": "Nope"}"#).unwrap_err(),
        json_codec::decode(r#"{"type": "Text"}"#).unwrap_err(),
        json_codec::decode(r#"{"type": "Text", "value": 1}"#).unwrap_err(),
        json_codec::decode("][").unwrap_err(),
    ];
    assert!(matches!(errors[0], CodecError::UnknownVariant(_)));
    assert!(matches!(
        errors[1],
        CodecError::MissingRequiredAttribute { .. }
    ));
    assert!(matches!(errors[2], CodecError::TypeMismatch { .. }));
    assert!(matches!(errors[3], CodecError::MalformedInput(_)));
}

#[test]
fn test_first_violation_wins() {
    // Both children are bad; the error reports the first.
    let value: Value = json!({
        "type": "Paragraph",
        "content": [
            {"type": "Mystery"},
            {"type": "Text"}
        ]
    });
    let err = json_codec::from_value(&value).unwrap_err();
    assert_eq!(err, CodecError::UnknownVariant("Mystery".into()));
}
