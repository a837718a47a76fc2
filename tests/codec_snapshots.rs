//! Snapshot tests pinning the encoded wire shape
//!
//! Round-trip tests prove encode/decode agree with each other; these pin
//! the encoding against the interchange contract itself, so a change that
//! altered the wire format symmetrically would still be caught.

use insta::assert_snapshot;
use stanza::stanza::formats::json;
use stanza::stanza::schema::elements::{DeleteInline, Inline, Node, SuggestionInline};
use stanza::stanza::schema::SuggestionStatus;
use stanza::stanza::testing::{art, cite, cmt, h, p, rep, t};

#[test]
fn test_replace_inline_wire_shape() {
    let node = Node::Inline(rep(vec![t("A")], vec![t("B")]));
    assert_snapshot!(
        json::encode(&node),
        @r#"{"content":[{"type":"Text","value":"A"}],"replacement":[{"type":"Text","value":"B"}],"type":"ReplaceInline"}"#
    );
}

#[test]
fn test_article_wire_shape() {
    let node = art(vec![
        h(1, vec![t("Title")]),
        p(vec![cite("doi:10.1/x")]),
    ]);
    assert_snapshot!(
        json::encode(&node),
        @r#"{"content":[{"content":[{"type":"Text","value":"Title"}],"level":1,"type":"Heading"},{"content":[{"target":"doi:10.1/x","type":"Citation"}],"type":"Paragraph"}],"type":"Article"}"#
    );
}

#[test]
fn test_comment_thread_wire_shape() {
    let parent = cmt(vec![p(vec![t("First")])]);
    let node = Node::from(cmt(vec![p(vec![t("Agreed")])]).with_parent(parent));
    assert_snapshot!(
        json::encode(&node),
        @r#"{"content":[{"content":[{"type":"Text","value":"Agreed"}],"type":"Paragraph"}],"parentItem":{"content":[{"content":[{"type":"Text","value":"First"}],"type":"Paragraph"}],"type":"Comment"},"type":"Comment"}"#
    );
}

#[test]
fn test_suggestion_status_wire_shape() {
    let node = Node::Inline(Inline::Suggestion(SuggestionInline::Delete(
        DeleteInline::new(vec![t("x")]).with_status(SuggestionStatus::Accepted),
    )));
    assert_snapshot!(
        json::encode(&node),
        @r#"{"content":[{"type":"Text","value":"x"}],"suggestionStatus":"Accepted","type":"DeleteInline"}"#
    );
}
