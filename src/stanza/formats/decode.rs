//! Value to tree decoding
//!
//! The inverse of [encode](super::encode): read the `type` discriminant,
//! resolve it through the [registry](crate::stanza::registry), validate
//! required attribute presence against the descriptor, then decode each
//! declared attribute, recursing for structural ones. Fields a variant
//! does not declare are ignored; the original publishing system injects
//! `$schema`/`@context` keys at the document root and decoders must
//! tolerate them.
//!
//! Recursion into nested structural attributes is bounded by
//! [MAX_DECODE_DEPTH]; adversarially deep input reports
//! [CodecError::MalformedInput] instead of exhausting the call stack.

use super::error::CodecError;
use crate::stanza::registry::{registry, VariantSpec};
use crate::stanza::schema::citation_intent::CitationIntent;
use crate::stanza::schema::elements::{
    Article, Block, Citation, CodeBlock, CodeInline, Comment, CreativeWork, DeleteInline,
    Emphasis, Heading, Inline, InsertInline, Link, Mark, ModifyInline, ModifyOperation, Node,
    Paragraph, QuoteBlock, ReplaceInline, Strikeout, Strong, Subscript, SuggestionInline,
    Superscript, Text, ThematicBreak, Underline,
};
use crate::stanza::schema::suggestion_status::SuggestionStatus;
use serde_json::{Map, Value};

/// Structural nesting allowed before decoding reports malformed input
pub(crate) const MAX_DECODE_DEPTH: usize = 128;

/// Per-call decode state, threaded through structural recursion
#[derive(Debug, Clone, Copy)]
pub(crate) struct DecodeContext {
    depth: usize,
}

impl DecodeContext {
    pub(crate) fn root() -> Self {
        Self { depth: 0 }
    }

    fn descend(self) -> Result<Self, CodecError> {
        if self.depth >= MAX_DECODE_DEPTH {
            return Err(CodecError::MalformedInput(format!(
                "nesting exceeds the decode depth limit of {MAX_DECODE_DEPTH}"
            )));
        }
        Ok(Self {
            depth: self.depth + 1,
        })
    }
}

pub(crate) fn node_from_value(value: &Value, cx: DecodeContext) -> Result<Node, CodecError> {
    let (obj, spec) = resolve(value)?;
    check_required(spec, obj)?;
    if spec.in_family("Inline") {
        inline_from_parts(spec, obj, cx).map(Node::Inline)
    } else if spec.in_family("Block") {
        block_from_parts(spec, obj, cx).map(Node::Block)
    } else if spec.in_family("CreativeWork") {
        creative_work_from_parts(spec, obj, cx).map(Node::CreativeWork)
    } else if spec.name == "ModifyOperation" {
        modify_operation_from_parts(obj).map(Node::ModifyOperation)
    } else {
        Err(CodecError::UnknownVariant(spec.name.to_string()))
    }
}

/// Read a value's discriminant and resolve it against the closed catalog
fn resolve<'a>(
    value: &'a Value,
) -> Result<(&'a Map<String, Value>, &'static VariantSpec), CodecError> {
    let obj = match value.as_object() {
        Some(obj) => obj,
        None => {
            return Err(CodecError::MalformedInput(format!(
                "expected a node object, found {}",
                kind_of(value)
            )))
        }
    };
    let tag = match obj.get("type") {
        Some(Value::String(tag)) => tag,
        Some(other) => {
            return Err(CodecError::MalformedInput(format!(
                "discriminant `type` must be a string, found {}",
                kind_of(other)
            )))
        }
        None => {
            return Err(CodecError::MalformedInput(
                "node object is missing its `type` discriminant".to_string(),
            ))
        }
    };
    let spec = registry()
        .lookup(tag)
        .ok_or_else(|| CodecError::UnknownVariant(tag.clone()))?;
    Ok((obj, spec))
}

/// Enforce the descriptor's `Required` presence policy
fn check_required(spec: &VariantSpec, obj: &Map<String, Value>) -> Result<(), CodecError> {
    for attr in &spec.attributes {
        if attr.is_required() && !obj.contains_key(attr.name) {
            return Err(CodecError::MissingRequiredAttribute {
                variant: spec.name.to_string(),
                attribute: attr.name.to_string(),
            });
        }
    }
    Ok(())
}

fn inline_from_parts(
    spec: &VariantSpec,
    obj: &Map<String, Value>,
    cx: DecodeContext,
) -> Result<Inline, CodecError> {
    let variant = spec.name;
    match variant {
        "Text" => Ok(Inline::Text(Text {
            value: req_str(obj, variant, "value")?,
            id: opt_str(obj, variant, "id")?,
        })),
        "Link" => Ok(Inline::Link(Link {
            content: inline_seq(obj, variant, "content", cx)?,
            target: req_str(obj, variant, "target")?,
            title: opt_str(obj, variant, "title")?,
            rel: opt_str(obj, variant, "rel")?,
            id: opt_str(obj, variant, "id")?,
        })),
        "CodeInline" => Ok(Inline::CodeInline(CodeInline {
            code: req_str(obj, variant, "code")?,
            programming_language: opt_str(obj, variant, "programmingLanguage")?,
            id: opt_str(obj, variant, "id")?,
        })),
        "Citation" => Ok(Inline::Citation(Citation {
            target: req_str(obj, variant, "target")?,
            citation_intent: opt_intent_seq(obj, variant, "citationIntent")?,
            content: opt_inline_seq(obj, variant, "content", cx)?,
            id: opt_str(obj, variant, "id")?,
        })),
        "Emphasis" => Ok(Inline::Mark(Mark::Emphasis(Emphasis {
            content: inline_seq(obj, variant, "content", cx)?,
            id: opt_str(obj, variant, "id")?,
        }))),
        "Strong" => Ok(Inline::Mark(Mark::Strong(Strong {
            content: inline_seq(obj, variant, "content", cx)?,
            id: opt_str(obj, variant, "id")?,
        }))),
        "Strikeout" => Ok(Inline::Mark(Mark::Strikeout(Strikeout {
            content: inline_seq(obj, variant, "content", cx)?,
            id: opt_str(obj, variant, "id")?,
        }))),
        "Subscript" => Ok(Inline::Mark(Mark::Subscript(Subscript {
            content: inline_seq(obj, variant, "content", cx)?,
            id: opt_str(obj, variant, "id")?,
        }))),
        "Superscript" => Ok(Inline::Mark(Mark::Superscript(Superscript {
            content: inline_seq(obj, variant, "content", cx)?,
            id: opt_str(obj, variant, "id")?,
        }))),
        "Underline" => Ok(Inline::Mark(Mark::Underline(Underline {
            content: inline_seq(obj, variant, "content", cx)?,
            id: opt_str(obj, variant, "id")?,
        }))),
        "InsertInline" => Ok(Inline::Suggestion(SuggestionInline::Insert(InsertInline {
            content: inline_seq(obj, variant, "content", cx)?,
            suggestion_status: opt_status(obj, variant, "suggestionStatus")?,
            id: opt_str(obj, variant, "id")?,
        }))),
        "DeleteInline" => Ok(Inline::Suggestion(SuggestionInline::Delete(DeleteInline {
            content: inline_seq(obj, variant, "content", cx)?,
            suggestion_status: opt_status(obj, variant, "suggestionStatus")?,
            id: opt_str(obj, variant, "id")?,
        }))),
        "ReplaceInline" => Ok(Inline::Suggestion(SuggestionInline::Replace(
            ReplaceInline {
                content: inline_seq(obj, variant, "content", cx)?,
                replacement: req_inline_seq(obj, variant, "replacement", cx)?,
                suggestion_status: opt_status(obj, variant, "suggestionStatus")?,
                id: opt_str(obj, variant, "id")?,
            },
        ))),
        "ModifyInline" => Ok(Inline::Suggestion(SuggestionInline::Modify(ModifyInline {
            content: inline_seq(obj, variant, "content", cx)?,
            operations: req_operation_seq(obj, variant, "operations")?,
            suggestion_status: opt_status(obj, variant, "suggestionStatus")?,
            id: opt_str(obj, variant, "id")?,
        }))),
        other => Err(CodecError::UnknownVariant(other.to_string())),
    }
}

fn block_from_parts(
    spec: &VariantSpec,
    obj: &Map<String, Value>,
    cx: DecodeContext,
) -> Result<Block, CodecError> {
    let variant = spec.name;
    match variant {
        "Paragraph" => Ok(Block::Paragraph(Paragraph {
            content: inline_seq(obj, variant, "content", cx)?,
            id: opt_str(obj, variant, "id")?,
        })),
        "Heading" => Ok(Block::Heading(Heading {
            level: int_or_default(obj, variant, "level", Heading::DEFAULT_LEVEL)?,
            content: inline_seq(obj, variant, "content", cx)?,
            id: opt_str(obj, variant, "id")?,
        })),
        "CodeBlock" => Ok(Block::CodeBlock(CodeBlock {
            code: req_str(obj, variant, "code")?,
            programming_language: opt_str(obj, variant, "programmingLanguage")?,
            id: opt_str(obj, variant, "id")?,
        })),
        "QuoteBlock" => Ok(Block::QuoteBlock(QuoteBlock {
            content: block_seq(obj, variant, "content", cx)?,
            id: opt_str(obj, variant, "id")?,
        })),
        "ThematicBreak" => Ok(Block::ThematicBreak(ThematicBreak {
            id: opt_str(obj, variant, "id")?,
        })),
        other => Err(CodecError::UnknownVariant(other.to_string())),
    }
}

fn creative_work_from_parts(
    spec: &VariantSpec,
    obj: &Map<String, Value>,
    cx: DecodeContext,
) -> Result<CreativeWork, CodecError> {
    let variant = spec.name;
    match variant {
        "Article" => Ok(CreativeWork::Article(Article {
            title: opt_inline_seq(obj, variant, "title", cx)?,
            description: opt_str(obj, variant, "description")?,
            content: block_seq(obj, variant, "content", cx)?,
            keywords: opt_string_seq(obj, variant, "keywords")?,
            id: opt_str(obj, variant, "id")?,
        })),
        "Comment" => comment_from_parts(obj, cx).map(CreativeWork::Comment),
        other => Err(CodecError::UnknownVariant(other.to_string())),
    }
}

// Separate so the parentItem back-link can recurse on the bare struct.
fn comment_from_parts(obj: &Map<String, Value>, cx: DecodeContext) -> Result<Comment, CodecError> {
    let variant = "Comment";
    Ok(Comment {
        title: opt_inline_seq(obj, variant, "title", cx)?,
        description: opt_str(obj, variant, "description")?,
        content: block_seq(obj, variant, "content", cx)?,
        parent_item: opt_comment_ref(obj, variant, "parentItem", cx)?,
        comment_aspect: opt_str(obj, variant, "commentAspect")?,
        id: opt_str(obj, variant, "id")?,
    })
}

fn modify_operation_from_parts(obj: &Map<String, Value>) -> Result<ModifyOperation, CodecError> {
    let variant = "ModifyOperation";
    Ok(ModifyOperation {
        target: req_str(obj, variant, "target")?,
        value: opt_str(obj, variant, "value")?,
        id: opt_str(obj, variant, "id")?,
    })
}

// ---- sequence and reference attributes ----

fn inline_seq(
    obj: &Map<String, Value>,
    variant: &str,
    key: &str,
    cx: DecodeContext,
) -> Result<Vec<Inline>, CodecError> {
    match obj.get(key) {
        Some(value) => inline_items(value, variant, key, cx),
        // Required-but-possibly-empty: absence decodes as empty.
        None => Ok(Vec::new()),
    }
}

fn req_inline_seq(
    obj: &Map<String, Value>,
    variant: &str,
    key: &str,
    cx: DecodeContext,
) -> Result<Vec<Inline>, CodecError> {
    match obj.get(key) {
        Some(value) => inline_items(value, variant, key, cx),
        None => Err(missing(variant, key)),
    }
}

fn opt_inline_seq(
    obj: &Map<String, Value>,
    variant: &str,
    key: &str,
    cx: DecodeContext,
) -> Result<Option<Vec<Inline>>, CodecError> {
    match obj.get(key) {
        Some(value) => inline_items(value, variant, key, cx).map(Some),
        None => Ok(None),
    }
}

fn inline_items(
    value: &Value,
    variant: &str,
    key: &str,
    cx: DecodeContext,
) -> Result<Vec<Inline>, CodecError> {
    let items = value
        .as_array()
        .ok_or_else(|| mismatch(variant, key, "sequence of inline nodes", value))?;
    let cx = cx.descend()?;
    items
        .iter()
        .map(|item| inline_item(item, variant, key, cx))
        .collect()
}

fn inline_item(
    value: &Value,
    variant: &str,
    key: &str,
    cx: DecodeContext,
) -> Result<Inline, CodecError> {
    if !value.is_object() {
        return Err(mismatch(variant, key, "inline node object", value));
    }
    let (obj, spec) = resolve(value)?;
    if !spec.in_family("Inline") {
        return Err(family_mismatch(variant, key, "Inline", spec.name));
    }
    check_required(spec, obj)?;
    inline_from_parts(spec, obj, cx)
}

fn block_seq(
    obj: &Map<String, Value>,
    variant: &str,
    key: &str,
    cx: DecodeContext,
) -> Result<Vec<Block>, CodecError> {
    match obj.get(key) {
        Some(value) => block_items(value, variant, key, cx),
        // Required-but-possibly-empty: absence decodes as empty.
        None => Ok(Vec::new()),
    }
}

fn block_items(
    value: &Value,
    variant: &str,
    key: &str,
    cx: DecodeContext,
) -> Result<Vec<Block>, CodecError> {
    let items = value
        .as_array()
        .ok_or_else(|| mismatch(variant, key, "sequence of block nodes", value))?;
    let cx = cx.descend()?;
    items
        .iter()
        .map(|item| block_item(item, variant, key, cx))
        .collect()
}

fn block_item(
    value: &Value,
    variant: &str,
    key: &str,
    cx: DecodeContext,
) -> Result<Block, CodecError> {
    if !value.is_object() {
        return Err(mismatch(variant, key, "block node object", value));
    }
    let (obj, spec) = resolve(value)?;
    if !spec.in_family("Block") {
        return Err(family_mismatch(variant, key, "Block", spec.name));
    }
    check_required(spec, obj)?;
    block_from_parts(spec, obj, cx)
}

fn opt_comment_ref(
    obj: &Map<String, Value>,
    variant: &str,
    key: &str,
    cx: DecodeContext,
) -> Result<Option<Box<Comment>>, CodecError> {
    let value = match obj.get(key) {
        Some(value) => value,
        None => return Ok(None),
    };
    if !value.is_object() {
        return Err(mismatch(variant, key, "Comment node object", value));
    }
    let (comment_obj, spec) = resolve(value)?;
    if spec.name != "Comment" {
        return Err(family_mismatch(variant, key, "Comment", spec.name));
    }
    check_required(spec, comment_obj)?;
    let cx = cx.descend()?;
    comment_from_parts(comment_obj, cx).map(|comment| Some(Box::new(comment)))
}

fn req_operation_seq(
    obj: &Map<String, Value>,
    variant: &str,
    key: &str,
) -> Result<Vec<ModifyOperation>, CodecError> {
    let value = obj.get(key).ok_or_else(|| missing(variant, key))?;
    let items = value
        .as_array()
        .ok_or_else(|| mismatch(variant, key, "sequence of modify operations", value))?;
    items
        .iter()
        .map(|item| {
            if !item.is_object() {
                return Err(mismatch(variant, key, "ModifyOperation node object", item));
            }
            let (op_obj, spec) = resolve(item)?;
            if spec.name != "ModifyOperation" {
                return Err(family_mismatch(variant, key, "ModifyOperation", spec.name));
            }
            check_required(spec, op_obj)?;
            modify_operation_from_parts(op_obj)
        })
        .collect()
}

// ---- scalar attributes ----

fn req_str(obj: &Map<String, Value>, variant: &str, key: &str) -> Result<String, CodecError> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(mismatch(variant, key, "string", other)),
        None => Err(missing(variant, key)),
    }
}

fn opt_str(
    obj: &Map<String, Value>,
    variant: &str,
    key: &str,
) -> Result<Option<String>, CodecError> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(Some(s.clone())),
        // Optional means omitted, not null; anything else is a shape error.
        Some(other) => Err(mismatch(variant, key, "string", other)),
        None => Ok(None),
    }
}

fn int_or_default(
    obj: &Map<String, Value>,
    variant: &str,
    key: &str,
    default: i64,
) -> Result<i64, CodecError> {
    match obj.get(key) {
        Some(value) => value
            .as_i64()
            .ok_or_else(|| mismatch(variant, key, "integer", value)),
        None => Ok(default),
    }
}

fn opt_string_seq(
    obj: &Map<String, Value>,
    variant: &str,
    key: &str,
) -> Result<Option<Vec<String>>, CodecError> {
    let value = match obj.get(key) {
        Some(value) => value,
        None => return Ok(None),
    };
    let items = value
        .as_array()
        .ok_or_else(|| mismatch(variant, key, "sequence of strings", value))?;
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(mismatch(variant, key, "string", other)),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn opt_intent_seq(
    obj: &Map<String, Value>,
    variant: &str,
    key: &str,
) -> Result<Option<Vec<CitationIntent>>, CodecError> {
    let value = match obj.get(key) {
        Some(value) => value,
        None => return Ok(None),
    };
    let items = value
        .as_array()
        .ok_or_else(|| mismatch(variant, key, "sequence of citation intent tags", value))?;
    items
        .iter()
        .map(|item| match item {
            Value::String(tag) => CitationIntent::from_tag(tag)
                .ok_or_else(|| CodecError::UnknownVariant(tag.clone())),
            other => Err(mismatch(variant, key, "citation intent tag", other)),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn opt_status(
    obj: &Map<String, Value>,
    variant: &str,
    key: &str,
) -> Result<Option<SuggestionStatus>, CodecError> {
    match obj.get(key) {
        Some(Value::String(tag)) => SuggestionStatus::from_tag(tag)
            .map(Some)
            .ok_or_else(|| CodecError::UnknownVariant(tag.clone())),
        Some(other) => Err(mismatch(variant, key, "suggestion status tag", other)),
        None => Ok(None),
    }
}

// ---- error constructors ----

fn missing(variant: &str, attribute: &str) -> CodecError {
    CodecError::MissingRequiredAttribute {
        variant: variant.to_string(),
        attribute: attribute.to_string(),
    }
}

fn mismatch(variant: &str, attribute: &str, expected: &str, found: &Value) -> CodecError {
    CodecError::TypeMismatch {
        variant: variant.to_string(),
        attribute: attribute.to_string(),
        expected: expected.to_string(),
        found: kind_of(found).to_string(),
    }
}

fn family_mismatch(variant: &str, attribute: &str, expected: &str, found_tag: &str) -> CodecError {
    CodecError::TypeMismatch {
        variant: variant.to_string(),
        attribute: attribute.to_string(),
        expected: format!("{expected} node"),
        found: found_tag.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
