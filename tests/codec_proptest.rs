//! Property-based tests for the round-trip law
//!
//! Generated trees cover the inline, block and work families with bounded
//! depth, and every generated tree must satisfy:
//! - `decode(encode(n)) == n` under structural equality (JSON and YAML)
//! - the encoded discriminant equals the node's fixed variant tag

use proptest::prelude::*;
use stanza::stanza::formats::{json, yaml};
use stanza::stanza::schema::elements::{
    Article, Block, Citation, CodeBlock, CodeInline, Comment, DeleteInline, Emphasis, Heading,
    Inline, Link, Mark, Node, Paragraph, QuoteBlock, ReplaceInline, Strong, SuggestionInline,
    Text, ThematicBreak,
};
use stanza::stanza::schema::{CitationIntent, SchemaNode, SuggestionStatus};

/// Text values cover spacing and punctuation but stay printable
fn text_strategy() -> impl Strategy<Value = Inline> {
    "[a-zA-Z0-9 .,!?'-]{0,24}".prop_map(|value| Inline::Text(Text::new(value)))
}

fn id_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-z][a-z0-9-]{0,8}")
}

fn intent_strategy() -> impl Strategy<Value = CitationIntent> {
    proptest::sample::select(CitationIntent::ALL)
}

fn status_strategy() -> impl Strategy<Value = Option<SuggestionStatus>> {
    proptest::option::of(proptest::sample::select(SuggestionStatus::ALL))
}

fn inline_strategy() -> impl Strategy<Value = Inline> {
    let leaf = prop_oneof![
        text_strategy(),
        ("[a-z ()=+]{1,12}", id_strategy()).prop_map(|(code, id)| {
            Inline::CodeInline(CodeInline {
                code,
                programming_language: None,
                id,
            })
        }),
        (
            "[a-z0-9/.:]{1,16}",
            proptest::option::of(prop::collection::vec(intent_strategy(), 0..3))
        )
            .prop_map(|(target, intents)| {
                Inline::Citation(Citation {
                    target,
                    citation_intent: intents,
                    content: None,
                    id: None,
                })
            }),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|content| Inline::Mark(Mark::Emphasis(Emphasis::new(content)))),
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|content| Inline::Mark(Mark::Strong(Strong::new(content)))),
            (prop::collection::vec(inner.clone(), 0..3), "[a-z:/.]{1,12}")
                .prop_map(|(content, target)| Inline::Link(Link::new(content, target))),
            (prop::collection::vec(inner.clone(), 0..3), status_strategy()).prop_map(
                |(content, status)| {
                    Inline::Suggestion(SuggestionInline::Delete(DeleteInline {
                        content,
                        suggestion_status: status,
                        id: None,
                    }))
                }
            ),
            (
                prop::collection::vec(inner.clone(), 0..3),
                prop::collection::vec(inner, 0..3)
            )
                .prop_map(|(content, replacement)| {
                    Inline::Suggestion(SuggestionInline::Replace(ReplaceInline::new(
                        content,
                        replacement,
                    )))
                }),
        ]
    })
}

fn block_strategy() -> impl Strategy<Value = Block> {
    let leaf = prop_oneof![
        prop::collection::vec(inline_strategy(), 0..4).prop_map(|content| {
            Block::Paragraph(Paragraph::new(content))
        }),
        (1..7i64, prop::collection::vec(inline_strategy(), 0..3))
            .prop_map(|(level, content)| Block::Heading(Heading::new(level, content))),
        ("[a-z0-9 =+()\n]{0,32}", id_strategy()).prop_map(|(code, id)| {
            Block::CodeBlock(CodeBlock {
                code,
                programming_language: None,
                id,
            })
        }),
        Just(Block::ThematicBreak(ThematicBreak::new())),
    ];
    leaf.prop_recursive(2, 12, 3, |inner| {
        prop::collection::vec(inner, 0..3)
            .prop_map(|content| Block::QuoteBlock(QuoteBlock::new(content)))
    })
}

fn comment_strategy() -> impl Strategy<Value = Comment> {
    let leaf = prop::collection::vec(block_strategy(), 0..2).prop_map(Comment::new);
    leaf.prop_recursive(2, 4, 1, |inner| {
        (prop::collection::vec(block_strategy(), 0..2), inner)
            .prop_map(|(content, parent)| Comment::new(content).with_parent(parent))
    })
}

fn node_strategy() -> impl Strategy<Value = Node> {
    prop_oneof![
        inline_strategy().prop_map(Node::Inline),
        block_strategy().prop_map(Node::Block),
        (
            prop::collection::vec(block_strategy(), 0..3),
            proptest::option::of(prop::collection::vec("[a-z]{1,8}", 0..3))
        )
            .prop_map(|(content, keywords)| {
                let mut article = Article::new(content);
                article.keywords = keywords;
                Node::from(article)
            }),
        comment_strategy().prop_map(Node::from),
    ]
}

proptest! {
    #[test]
    fn prop_json_round_trip(node in node_strategy()) {
        let encoded = json::encode(&node);
        let decoded = json::decode(&encoded).expect("decoder must accept encoder output");
        prop_assert_eq!(decoded, node);
    }

    #[test]
    fn prop_yaml_round_trip(node in node_strategy()) {
        let encoded = yaml::encode(&node).expect("YAML encoding of constructed trees");
        let decoded = yaml::decode(&encoded).expect("decoder must accept encoder output");
        prop_assert_eq!(decoded, node);
    }

    #[test]
    fn prop_encoded_discriminant_matches_node_type(node in node_strategy()) {
        let value = json::to_value(&node);
        prop_assert_eq!(value["type"].as_str(), Some(node.node_type()));
    }

    #[test]
    fn prop_absent_optionals_never_encode_as_null(node in node_strategy()) {
        // No schema attribute is nullable, so a well-formed encoding
        // contains no null values anywhere in the tree.
        let value = json::to_value(&node);
        prop_assert!(!contains_null(&value));
    }
}

fn contains_null(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Array(items) => items.iter().any(contains_null),
        serde_json::Value::Object(obj) => obj.values().any(contains_null),
        _ => false,
    }
}
