//! Table rendering inside slides.

use crate::common::map_of;
use mm_babel::formats::slides::SlidesFormat;
use mm_babel::{Format, Node, TABLE_MARKER};

#[test]
fn table_marker_renders_rows_and_cells() {
    let map = map_of(
        "Deck",
        vec![Node::new("Data").with_child(
            Node::new(TABLE_MARKER)
                .with_child(Node::new("r1").with_child(Node::new("a").with_child(Node::new("b"))))
                .with_child(
                    Node::new("r2")
                        .with_child(Node::new("c"))
                        .with_child(Node::new("d")),
                ),
        )],
    );
    let out = SlidesFormat.serialize(&map).unwrap();

    // Cells are the row's descendants in document order, any depth; the
    // row node's own text is layout, not content.
    let expected = concat!(
        "    <table>\n",
        "      <tr>\n",
        "        <td>a</td>\n",
        "        <td>b</td>\n",
        "      </tr>\n",
        "      <tr>\n",
        "        <td>c</td>\n",
        "        <td>d</td>\n",
        "      </tr>\n",
        "    </table>",
    );
    assert!(out.contains(expected), "missing table block in:\n{out}");
    assert!(!out.contains("r1"));
    assert!(!out.contains(TABLE_MARKER));
}

#[test]
fn sibling_items_still_render_around_a_table() {
    let map = map_of(
        "Deck",
        vec![Node::new("Mixed")
            .with_child(Node::new("before"))
            .with_child(Node::new(TABLE_MARKER).with_child(Node::new("r").with_child(Node::new("x"))))
            .with_child(Node::new("after"))],
    );
    let out = SlidesFormat.serialize(&map).unwrap();
    let before = out.find("<li>before</li>").unwrap();
    let table = out.find("<table>").unwrap();
    let after = out.find("<li>after</li>").unwrap();
    assert!(before < table && table < after);
}
