//! Core data structures for the mind-map tree.
//!
//! A mind map is a strictly hierarchical outline: one root node, each node
//! owning an ordered sequence of children. Emitters depend only on this
//! shape; how the tree was produced (FreeMind XML, programmatic
//! construction) is not their concern.

use crate::error::FormatError;
use serde::Serialize;

/// Reserved node text introducing the metadata section of a document.
pub const META_MARKER: &str = "__meta__";

/// Reserved node text that switches a subtree to table rendering.
pub const TABLE_MARKER: &str = "__table__";

/// Maximum nesting depth accepted during traversal. Mind maps are authored
/// visually and stay shallow; anything deeper is treated as malformed input
/// rather than risking a stack overflow.
pub const MAX_DEPTH: usize = 64;

/// Checks a traversal depth against [`MAX_DEPTH`].
pub(crate) fn check_depth(depth: usize) -> Result<(), FormatError> {
    if depth > MAX_DEPTH {
        Err(FormatError::RecursionLimit(MAX_DEPTH))
    } else {
        Ok(())
    }
}

/// Symbolic icons with engine-recognized meaning.
///
/// FreeMind attaches builtin icons by name; only these four carry semantics
/// here. Unknown icon names are ignored at parse time, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IconKind {
    /// "Not OK" icon: the node (slide) is skipped entirely.
    Skip,
    /// "OK" icon: no list wrapping around the node's children.
    NoWrap,
    /// Stop-light icon: reveal the list one item at a time.
    Incremental,
    /// "Priority 1" icon: render an ordered list.
    Ordered,
}

impl IconKind {
    /// Maps a FreeMind builtin icon name to its semantic kind.
    pub fn from_builtin(name: &str) -> Option<IconKind> {
        match name {
            "button_cancel" => Some(IconKind::Skip),
            "button_ok" => Some(IconKind::NoWrap),
            "stop" => Some(IconKind::Incremental),
            "full-1" => Some(IconKind::Ordered),
            _ => None,
        }
    }
}

/// One outline item.
///
/// Empty text counts as absent: such a node contributes nothing to markup
/// output, but its children are still visited (it is structurally
/// transparent, not a terminator).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Node {
    pub text: String,
    pub children: Vec<Node>,
    pub icons: Vec<IconKind>,
    pub link: Option<String>,
    /// Creation timestamp in epoch milliseconds. Only the minutes renderer
    /// reads it, for time-ordering.
    pub created: Option<i64>,
}

impl Node {
    pub fn new(text: impl Into<String>) -> Self {
        Node {
            text: text.into(),
            ..Node::default()
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_icon(mut self, icon: IconKind) -> Self {
        self.icons.push(icon);
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_created(mut self, created: i64) -> Self {
        self.created = Some(created);
        self
    }

    /// Ordered child accessor. All emitters traverse through this, never
    /// through a richer document-object surface.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// Maximum depth of the subtree below this node: 0 for a leaf, 1 when
    /// all children are leaves, and so on. Used as an explicit probe before
    /// choosing a rendering policy (e.g. attendee lists).
    pub fn max_child_depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.max_child_depth())
            .max()
            .unwrap_or(0)
    }

    /// First node in the subtree (self included, pre-order) whose text
    /// equals `text`.
    pub fn find_by_text(&self, text: &str) -> Option<&Node> {
        if self.text == text {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_by_text(text))
    }

    /// All nodes strictly below this one, in document (pre-order) order.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        for child in &self.children {
            collect_descendants(child, &mut out);
        }
        out
    }
}

fn collect_descendants<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
    out.push(node);
    for child in &node.children {
        collect_descendants(child, out);
    }
}

/// A parsed mind-map document: exactly one root node.
///
/// The root corresponds to FreeMind's center circle; its children are the
/// document's top-level sections (slides, minutes sections, outline
/// branches).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MindMap {
    pub root: Node,
}

impl MindMap {
    pub fn new(root: Node) -> Self {
        MindMap { root }
    }
}
