//! Export tests for the built-in outline dialects.
//!
//! These verify the depth rules end to end: headings inside the band,
//! bullets past it, plain lines for leaves, and transparency of untexted
//! nodes.

use crate::common::{branch, map_of};
use insta::assert_snapshot;
use mm_babel::formats::outline::OutlineFormat;
use mm_babel::{Format, Node, LINE_SEPARATOR_OPTION};
use proptest::prelude::*;
use std::collections::HashMap;

fn talk_map() -> mm_babel::MindMap {
    map_of(
        "Talk",
        vec![
            branch("Intro", &["who am i", "agenda"]),
            Node::new("Body").with_child(Node::new("point").with_child(Node::new("sub"))),
        ],
    )
}

#[test]
fn markdown_headings_and_plain_leaves() {
    let out = OutlineFormat::markdown().serialize(&talk_map()).unwrap();
    assert_snapshot!(out, @r"
    # Intro

    who am i
    agenda

    # Body

    ## point

    sub
    ");
}

#[test]
fn textile_headings_carry_the_level() {
    let out = OutlineFormat::textile().serialize(&talk_map()).unwrap();
    assert_snapshot!(out, @r"
    h1. Intro

    who am i
    agenda

    h1. Body

    h2. point

    sub
    ");
}

#[test]
fn branches_past_the_band_become_bullets() {
    // Sec (h1) > A (h2) > B (bullet) > C (bullet, one indent) > D (plain)
    let map = map_of(
        "T",
        vec![Node::new("Sec").with_child(Node::new("A").with_child(
            Node::new("B").with_child(Node::new("C").with_child(Node::new("D"))),
        ))],
    );
    let out = OutlineFormat::markdown().serialize(&map).unwrap();
    assert_eq!(out, "# Sec\n\n## A\n\n- B\n    - C\n        D");
}

#[test]
fn untexted_nodes_are_transparent() {
    // The empty node emits nothing; its child is visited at the same depth
    // and comes out as a top-level plain line.
    let map = map_of("T", vec![Node::new("").with_child(Node::new("orphan"))]);
    let out = OutlineFormat::markdown().serialize(&map).unwrap();
    assert_eq!(out, "orphan");
}

#[test]
fn markup_text_passes_through_verbatim() {
    let map = map_of(
        "T",
        vec![Node::new("Sec").with_child(
            Node::new("A").with_child(Node::new("<div>").with_child(Node::new("x"))),
        )],
    );
    let out = OutlineFormat::markdown().serialize(&map).unwrap();
    assert_eq!(out, "# Sec\n\n## A\n\n<div>\n    x");
}

#[test]
fn wrap_markup_option_disables_passthrough() {
    let map = map_of(
        "T",
        vec![Node::new("Sec").with_child(
            Node::new("A").with_child(Node::new("<div>").with_child(Node::new("x"))),
        )],
    );
    let options = HashMap::from([("wrap-markup".to_string(), "true".to_string())]);
    let out = OutlineFormat::markdown()
        .serialize_with_options(&map, &options)
        .unwrap();
    assert_eq!(out, "# Sec\n\n## A\n\n- <div>\n    x");
}

#[test]
fn line_separator_option_changes_the_join() {
    let map = map_of("T", vec![Node::new("a"), Node::new("b")]);
    let options = HashMap::from([(LINE_SEPARATOR_OPTION.to_string(), "\r\n".to_string())]);
    let out = OutlineFormat::markdown()
        .serialize_with_options(&map, &options)
        .unwrap();
    assert_eq!(out, "a\r\nb");
}

#[test]
fn serialization_is_repeatable() {
    let map = talk_map();
    let format = OutlineFormat::markdown();
    assert_eq!(
        format.serialize(&map).unwrap(),
        format.serialize(&map).unwrap()
    );
}

proptest! {
    // Top-level leaves are plain lines with no indentation or markers, so
    // the document is exactly the texts joined by newlines.
    #[test]
    fn top_level_leaves_round_trip_as_lines(texts in proptest::collection::vec("[a-z]{1,10}", 1..8)) {
        let children = texts.iter().map(|t| Node::new(t.clone())).collect();
        let map = map_of("T", children);
        let out = OutlineFormat::markdown().serialize(&map).unwrap();
        prop_assert_eq!(out, texts.join("\n"));
    }
}
