//! Custom-dialect tests: the emitter is parameterized over the heading
//! band, heading style, bullet and indentation, not hard-wired to the two
//! built-in dialects.

use crate::common::map_of;
use mm_babel::formats::outline::{HeadingStyle, OutlineDialect, OutlineFormat};
use mm_babel::{Format, Node};

fn chain(texts: &[&str]) -> Node {
    let mut node = Node::new(*texts.last().unwrap());
    for text in texts.iter().rev().skip(1) {
        node = Node::new(*text).with_child(node);
    }
    node
}

#[test]
fn wide_heading_band() {
    let dialect = OutlineDialect {
        heading_levels: 5,
        ..OutlineDialect::markdown()
    };
    let map = map_of("T", vec![chain(&["a", "b", "c", "d", "e", "f"])]);
    let out = OutlineFormat::with_dialect("wide", dialect)
        .serialize(&map)
        .unwrap();
    assert_eq!(
        out,
        "# a\n\n## b\n\n### c\n\n#### d\n\n##### e\n\nf"
    );
}

#[test]
fn labeled_headings_outside_the_builtin_pair() {
    let dialect = OutlineDialect {
        heading_levels: 3,
        heading_style: HeadingStyle::Labeled("h"),
        ..OutlineDialect::textile()
    };
    let map = map_of("T", vec![chain(&["a", "b", "c", "d"])]);
    let out = OutlineFormat::with_dialect("deep-textile", dialect)
        .serialize(&map)
        .unwrap();
    assert_eq!(out, "h1. a\n\nh2. b\n\nh3. c\n\nd");
}

#[test]
fn bullet_none_emits_bare_indented_lines() {
    let dialect = OutlineDialect {
        heading_levels: 0,
        bullet: None,
        indent_unit: "  ",
        wrap_markup: true,
        ..OutlineDialect::markdown()
    };
    // With no heading band every branch is a list line; with no bullet the
    // structure is carried by indentation alone.
    let map = map_of(
        "T",
        vec![Node::new("a")
            .with_child(Node::new("b").with_child(Node::new("c")))
            .with_child(Node::new("d"))],
    );
    let out = OutlineFormat::with_dialect("plain", dialect)
        .serialize(&map)
        .unwrap();
    assert_eq!(out, "a\n  b\n    c\n  d");
}
