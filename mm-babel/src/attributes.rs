//! Icon interpretation: node icons resolved once into typed flags.
//!
//! Everything downstream consumes [`NodeFlags`]; no emitter matches icon
//! names itself.

use crate::tree::{Node, TABLE_MARKER};

/// Semantic flags derived from a node's icon set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeFlags {
    /// Skip this node (and its subtree) entirely.
    pub skip: bool,
    /// Render children as bare lines, without an enclosing list.
    pub no_wrap: bool,
    /// Reveal the list one item at a time.
    pub incremental: bool,
    /// Use an ordered list instead of an unordered one.
    pub ordered: bool,
}

impl NodeFlags {
    /// Derives the flags for a node. Pure and deterministic.
    ///
    /// Besides the icons, a first child whose text starts with `<` (markup
    /// already present) or equals the table marker forces `no_wrap`: such
    /// content must not be wrapped in a list a second time.
    pub fn of(node: &Node) -> NodeFlags {
        let mut flags = NodeFlags::default();
        for icon in &node.icons {
            match icon {
                crate::tree::IconKind::Skip => flags.skip = true,
                crate::tree::IconKind::NoWrap => flags.no_wrap = true,
                crate::tree::IconKind::Incremental => flags.incremental = true,
                crate::tree::IconKind::Ordered => flags.ordered = true,
            }
        }
        if let Some(first) = node.children().first() {
            if first.text.starts_with('<') || first.text == TABLE_MARKER {
                flags.no_wrap = true;
            }
        }
        flags
    }
}
