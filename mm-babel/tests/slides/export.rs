//! Deck structure tests: head metadata, the title slide, per-branch slides
//! and the icon-driven list attributes.

use crate::common::{branch, map_of};
use mm_babel::formats::slides::SlidesFormat;
use mm_babel::{Format, IconKind, Node, META_MARKER};

fn meta_entry(key: &str, value: &str) -> Node {
    Node::new(key).with_child(Node::new(value))
}

#[test]
fn deck_skeleton_and_metadata() {
    let map = map_of(
        "Rust at Work\nAn introduction",
        vec![
            Node::new(META_MARKER)
                .with_child(meta_entry("author", "Jane"))
                .with_child(meta_entry("template", "dark")),
            branch("Agenda", &["part one", "part two"]),
        ],
    );
    let out = SlidesFormat.serialize(&map).unwrap();

    assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(out.contains("<title>Rust at Work</title>"));
    assert!(out.contains("<meta name=\"author\" content=\"Jane\" />"));
    assert!(out.contains("href=\"ui/dark/slides.css\""));
    assert!(out.contains("<script src=\"ui/dark/slides.js\""));

    // Derived footer: company heading plus title.
    assert!(out.contains("<div id=\"footer\"><h1>The Company</h1><h2>Rust at Work</h2></div>"));

    // Title slide carries title, subtitle, author, company.
    assert!(out.contains("    <h1>Rust at Work</h1>\n    <h2>An introduction</h2>\n    <h3>Jane</h3>\n    <h4>The Company</h4>"));

    // The metadata branch itself never becomes a slide.
    assert!(!out.contains(META_MARKER));
    assert!(out.contains("    <h1>Agenda</h1>"));
    assert!(out.contains("      <li>part one</li>"));
    assert!(out.ends_with("</div>\n</body>\n</html>"));
}

#[test]
fn skip_icon_drops_the_slide() {
    let map = map_of(
        "Deck",
        vec![
            branch("Visible", &["a"]),
            Node::new("Hidden")
                .with_icon(IconKind::Skip)
                .with_child(Node::new("secret")),
        ],
    );
    let out = SlidesFormat.serialize(&map).unwrap();
    assert!(out.contains("<h1>Visible</h1>"));
    assert!(!out.contains("Hidden"));
    assert!(!out.contains("secret"));
}

#[test]
fn ordered_icon_switches_to_ol() {
    let map = map_of(
        "Deck",
        vec![Node::new("Steps")
            .with_icon(IconKind::Ordered)
            .with_child(Node::new("first"))
            .with_child(Node::new("second"))],
    );
    let out = SlidesFormat.serialize(&map).unwrap();
    assert!(out.contains("    <ol>\n      <li>first</li>\n      <li>second</li>\n    </ol>"));
}

#[test]
fn incremental_icon_adds_the_class() {
    let map = map_of(
        "Deck",
        vec![Node::new("Reveal")
            .with_icon(IconKind::Incremental)
            .with_child(Node::new("one"))],
    );
    let out = SlidesFormat.serialize(&map).unwrap();
    assert!(out.contains("<ul class=\"incremental\">"));
}

#[test]
fn no_wrap_icon_emits_bare_lines() {
    let map = map_of(
        "Deck",
        vec![Node::new("Raw")
            .with_icon(IconKind::NoWrap)
            .with_child(Node::new("<pre>fn main() {}</pre>"))],
    );
    let out = SlidesFormat.serialize(&map).unwrap();
    assert!(out.contains("\n<pre>fn main() {}</pre>\n"));
    assert!(!out.contains("<li><pre>"));
}

#[test]
fn links_wrap_the_item_text() {
    let map = map_of(
        "Deck",
        vec![Node::new("Refs")
            .with_child(Node::new("the book").with_link("https://doc.rust-lang.org/book/"))],
    );
    let out = SlidesFormat.serialize(&map).unwrap();
    assert!(out
        .contains("<li><a href=\"https://doc.rust-lang.org/book/\">the book</a></li>"));
}

#[test]
fn embedded_newlines_become_breaks() {
    let map = map_of(
        "Deck",
        vec![Node::new("Lines").with_child(Node::new("first\nsecond"))],
    );
    let out = SlidesFormat.serialize(&map).unwrap();
    assert!(out.contains("<li>first<br/>second</li>"));
}
