//! Tree to value encoding
//!
//! Depth-first construction of the generic value representation. Each
//! variant becomes an object carrying its discriminant (via
//! [SchemaNode::node_type]) plus one field per present attribute:
//! `OptionalNoDefault` absences are omitted entirely, never encoded as
//! null; sequence attributes always encode, empty or not, preserving
//! order; enum values encode as bare tag strings.
//!
//! Encoding never fails for a constructed tree, so everything here
//! returns values directly.

use crate::stanza::schema::citation_intent::CitationIntent;
use crate::stanza::schema::elements::{
    Block, Citation, CodeBlock, CodeInline, Comment, CreativeWork, Heading, Inline, Link, Mark,
    ModifyOperation, Node, Paragraph, QuoteBlock, SuggestionInline, Text, ThematicBreak,
};
use crate::stanza::schema::suggestion_status::SuggestionStatus;
use crate::stanza::schema::traits::SchemaNode;
use serde_json::{Map, Value};

pub(crate) fn node_to_value(node: &Node) -> Value {
    match node {
        Node::CreativeWork(work) => creative_work_to_value(work),
        Node::Block(block) => block_to_value(block),
        Node::Inline(inline) => inline_to_value(inline),
        Node::ModifyOperation(op) => modify_operation_to_value(op),
    }
}

fn creative_work_to_value(work: &CreativeWork) -> Value {
    match work {
        CreativeWork::Article(article) => {
            let mut obj = tagged(article.node_type());
            put_opt_inlines(&mut obj, "title", article.title.as_deref());
            put_opt_str(&mut obj, "description", article.description.as_deref());
            put_blocks(&mut obj, "content", &article.content);
            put_opt_strings(&mut obj, "keywords", article.keywords.as_deref());
            put_opt_str(&mut obj, "id", article.id.as_deref());
            Value::Object(obj)
        }
        CreativeWork::Comment(comment) => comment_to_value(comment),
    }
}

// Separate so the parentItem back-link can recurse on the bare struct.
fn comment_to_value(comment: &Comment) -> Value {
    let mut obj = tagged(comment.node_type());
    put_opt_inlines(&mut obj, "title", comment.title.as_deref());
    put_opt_str(&mut obj, "description", comment.description.as_deref());
    put_blocks(&mut obj, "content", &comment.content);
    if let Some(parent) = &comment.parent_item {
        obj.insert("parentItem".to_string(), comment_to_value(parent));
    }
    put_opt_str(&mut obj, "commentAspect", comment.comment_aspect.as_deref());
    put_opt_str(&mut obj, "id", comment.id.as_deref());
    Value::Object(obj)
}

fn block_to_value(block: &Block) -> Value {
    match block {
        Block::Paragraph(paragraph) => paragraph_to_value(paragraph),
        Block::Heading(heading) => heading_to_value(heading),
        Block::CodeBlock(code_block) => code_block_to_value(code_block),
        Block::QuoteBlock(quote_block) => quote_block_to_value(quote_block),
        Block::ThematicBreak(thematic_break) => thematic_break_to_value(thematic_break),
    }
}

fn paragraph_to_value(paragraph: &Paragraph) -> Value {
    let mut obj = tagged(paragraph.node_type());
    put_inlines(&mut obj, "content", &paragraph.content);
    put_opt_str(&mut obj, "id", paragraph.id.as_deref());
    Value::Object(obj)
}

fn heading_to_value(heading: &Heading) -> Value {
    let mut obj = tagged(heading.node_type());
    obj.insert("level".to_string(), Value::from(heading.level));
    put_inlines(&mut obj, "content", &heading.content);
    put_opt_str(&mut obj, "id", heading.id.as_deref());
    Value::Object(obj)
}

fn code_block_to_value(code_block: &CodeBlock) -> Value {
    let mut obj = tagged(code_block.node_type());
    put_str(&mut obj, "code", &code_block.code);
    put_opt_str(
        &mut obj,
        "programmingLanguage",
        code_block.programming_language.as_deref(),
    );
    put_opt_str(&mut obj, "id", code_block.id.as_deref());
    Value::Object(obj)
}

fn quote_block_to_value(quote_block: &QuoteBlock) -> Value {
    let mut obj = tagged(quote_block.node_type());
    put_blocks(&mut obj, "content", &quote_block.content);
    put_opt_str(&mut obj, "id", quote_block.id.as_deref());
    Value::Object(obj)
}

fn thematic_break_to_value(thematic_break: &ThematicBreak) -> Value {
    let mut obj = tagged(thematic_break.node_type());
    put_opt_str(&mut obj, "id", thematic_break.id.as_deref());
    Value::Object(obj)
}

pub(crate) fn inline_to_value(inline: &Inline) -> Value {
    match inline {
        Inline::Text(text) => text_to_value(text),
        Inline::Link(link) => link_to_value(link),
        Inline::CodeInline(code) => code_inline_to_value(code),
        Inline::Citation(citation) => citation_to_value(citation),
        Inline::Mark(mark) => mark_to_value(mark),
        Inline::Suggestion(suggestion) => suggestion_to_value(suggestion),
    }
}

fn text_to_value(text: &Text) -> Value {
    let mut obj = tagged(text.node_type());
    put_str(&mut obj, "value", &text.value);
    put_opt_str(&mut obj, "id", text.id.as_deref());
    Value::Object(obj)
}

fn link_to_value(link: &Link) -> Value {
    let mut obj = tagged(link.node_type());
    put_inlines(&mut obj, "content", &link.content);
    put_str(&mut obj, "target", &link.target);
    put_opt_str(&mut obj, "title", link.title.as_deref());
    put_opt_str(&mut obj, "rel", link.rel.as_deref());
    put_opt_str(&mut obj, "id", link.id.as_deref());
    Value::Object(obj)
}

fn code_inline_to_value(code: &CodeInline) -> Value {
    let mut obj = tagged(code.node_type());
    put_str(&mut obj, "code", &code.code);
    put_opt_str(
        &mut obj,
        "programmingLanguage",
        code.programming_language.as_deref(),
    );
    put_opt_str(&mut obj, "id", code.id.as_deref());
    Value::Object(obj)
}

fn citation_to_value(citation: &Citation) -> Value {
    let mut obj = tagged(citation.node_type());
    put_str(&mut obj, "target", &citation.target);
    put_opt_intents(
        &mut obj,
        "citationIntent",
        citation.citation_intent.as_deref(),
    );
    put_opt_inlines(&mut obj, "content", citation.content.as_deref());
    put_opt_str(&mut obj, "id", citation.id.as_deref());
    Value::Object(obj)
}

// All marks share the family shape, so one encoder covers the six.
fn mark_to_value(mark: &Mark) -> Value {
    let mut obj = tagged(mark.node_type());
    put_inlines(&mut obj, "content", mark.content());
    put_opt_str(&mut obj, "id", mark.node_id());
    Value::Object(obj)
}

fn suggestion_to_value(suggestion: &SuggestionInline) -> Value {
    match suggestion {
        SuggestionInline::Insert(insert) => {
            let mut obj = tagged(insert.node_type());
            put_inlines(&mut obj, "content", &insert.content);
            put_opt_status(&mut obj, insert.suggestion_status);
            put_opt_str(&mut obj, "id", insert.id.as_deref());
            Value::Object(obj)
        }
        SuggestionInline::Delete(delete) => {
            let mut obj = tagged(delete.node_type());
            put_inlines(&mut obj, "content", &delete.content);
            put_opt_status(&mut obj, delete.suggestion_status);
            put_opt_str(&mut obj, "id", delete.id.as_deref());
            Value::Object(obj)
        }
        SuggestionInline::Replace(replace) => {
            let mut obj = tagged(replace.node_type());
            put_inlines(&mut obj, "content", &replace.content);
            put_inlines(&mut obj, "replacement", &replace.replacement);
            put_opt_status(&mut obj, replace.suggestion_status);
            put_opt_str(&mut obj, "id", replace.id.as_deref());
            Value::Object(obj)
        }
        SuggestionInline::Modify(modify) => {
            let mut obj = tagged(modify.node_type());
            put_inlines(&mut obj, "content", &modify.content);
            put_operations(&mut obj, "operations", &modify.operations);
            put_opt_status(&mut obj, modify.suggestion_status);
            put_opt_str(&mut obj, "id", modify.id.as_deref());
            Value::Object(obj)
        }
    }
}

fn modify_operation_to_value(op: &ModifyOperation) -> Value {
    let mut obj = tagged(op.node_type());
    put_str(&mut obj, "target", &op.target);
    put_opt_str(&mut obj, "value", op.value.as_deref());
    put_opt_str(&mut obj, "id", op.id.as_deref());
    Value::Object(obj)
}

fn tagged(node_type: &'static str) -> Map<String, Value> {
    let mut obj = Map::new();
    obj.insert("type".to_string(), Value::String(node_type.to_string()));
    obj
}

fn put_str(obj: &mut Map<String, Value>, key: &str, value: &str) {
    obj.insert(key.to_string(), Value::String(value.to_string()));
}

fn put_opt_str(obj: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        put_str(obj, key, value);
    }
}

fn put_inlines(obj: &mut Map<String, Value>, key: &str, items: &[Inline]) {
    let encoded = items.iter().map(inline_to_value).collect();
    obj.insert(key.to_string(), Value::Array(encoded));
}

fn put_opt_inlines(obj: &mut Map<String, Value>, key: &str, items: Option<&[Inline]>) {
    if let Some(items) = items {
        put_inlines(obj, key, items);
    }
}

fn put_blocks(obj: &mut Map<String, Value>, key: &str, items: &[Block]) {
    let encoded = items.iter().map(block_to_value).collect();
    obj.insert(key.to_string(), Value::Array(encoded));
}

fn put_opt_strings(obj: &mut Map<String, Value>, key: &str, items: Option<&[String]>) {
    if let Some(items) = items {
        let encoded = items
            .iter()
            .map(|item| Value::String(item.clone()))
            .collect();
        obj.insert(key.to_string(), Value::Array(encoded));
    }
}

fn put_opt_intents(obj: &mut Map<String, Value>, key: &str, intents: Option<&[CitationIntent]>) {
    if let Some(intents) = intents {
        let encoded = intents
            .iter()
            .map(|intent| Value::String(intent.as_str().to_string()))
            .collect();
        obj.insert(key.to_string(), Value::Array(encoded));
    }
}

fn put_opt_status(obj: &mut Map<String, Value>, status: Option<SuggestionStatus>) {
    if let Some(status) = status {
        obj.insert(
            "suggestionStatus".to_string(),
            Value::String(status.as_str().to_string()),
        );
    }
}

fn put_operations(obj: &mut Map<String, Value>, key: &str, ops: &[ModifyOperation]) {
    let encoded = ops.iter().map(modify_operation_to_value).collect();
    obj.insert(key.to_string(), Value::Array(encoded));
}
