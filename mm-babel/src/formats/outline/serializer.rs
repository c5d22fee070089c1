//! Depth-rule outline emission.
//!
//! The structural role of each node follows from its depth alone:
//!
//! - depth base is 1: the map root's direct children sit at depth 1
//! - an untexted node emits nothing; its children are visited at the same
//!   depth (the node is transparent, not a terminator)
//! - a branch node within the heading band becomes a heading framed by
//!   blank lines
//! - a branch node past the band becomes a list item, indented one unit per
//!   level beyond the first list level
//! - a leaf node becomes a plain line at the current indentation; heading
//!   and list tokens are reserved for branch nodes
//! - unless the dialect says otherwise, text that already starts with `<`
//!   passes through verbatim (markup is not wrapped a second time)

use super::OutlineDialect;
use crate::error::FormatError;
use crate::tree::{check_depth, MindMap, Node};

/// Emits the outline for a whole map as an ordered sequence of lines.
///
/// Restartable: all state lives in the output accumulator.
pub fn emit_lines(map: &MindMap, dialect: &OutlineDialect) -> Result<Vec<String>, FormatError> {
    let mut lines = Vec::new();
    for child in map.root.children() {
        emit_node(child, 1, dialect, &mut lines)?;
    }
    Ok(lines)
}

fn emit_node(
    node: &Node,
    depth: usize,
    dialect: &OutlineDialect,
    out: &mut Vec<String>,
) -> Result<(), FormatError> {
    check_depth(depth)?;

    if !node.has_text() {
        for child in node.children() {
            emit_node(child, depth, dialect, out)?;
        }
        return Ok(());
    }

    if !dialect.wrap_markup && node.text.starts_with('<') {
        out.push(node.text.clone());
    } else if node.children().is_empty() {
        out.push(format!("{}{}", indent(dialect, depth), node.text));
    } else if depth <= dialect.heading_levels {
        push_separating_blank(out);
        out.push(format!("{}{}", dialect.heading(depth), node.text));
        out.push(String::new());
    } else {
        match dialect.bullet {
            Some(bullet) => out.push(format!("{}{} {}", indent(dialect, depth), bullet, node.text)),
            None => out.push(format!("{}{}", indent(dialect, depth), node.text)),
        }
    }

    for child in node.children() {
        emit_node(child, depth + 1, dialect, out)?;
    }
    Ok(())
}

/// Indentation for list items and plain lines: one unit per level beyond
/// the first level past the heading band.
fn indent(dialect: &OutlineDialect, depth: usize) -> String {
    let levels = depth.saturating_sub(dialect.heading_levels + 1);
    dialect.indent_unit.repeat(levels)
}

/// Pushes the blank line preceding a heading, except at document start or
/// directly after another blank.
fn push_separating_blank(out: &mut Vec<String>) {
    if out.last().is_some_and(|line| !line.is_empty()) {
        out.push(String::new());
    }
}
