//! Document metadata extraction.
//!
//! A map may carry a reserved `__meta__` node anywhere in the tree; its
//! direct children are keys and each key's first own child is the value.
//! The root node's text supplies the title (first line) and subtitle
//! (second line). Everything else falls back to defaults.

use crate::tree::{MindMap, META_MARKER};
use serde::Serialize;

/// Presentation metadata with per-key defaults.
///
/// The merge is functional: [`DocumentMeta::extract`] starts from the
/// default record and returns a new one, it never mutates shared state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentMeta {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub company: String,
    /// Subdirectory under the S5 `ui` directory holding the theme.
    pub template: String,
    pub presdate: String,
    pub content_type: String,
    pub header: String,
    /// `None` until extraction; then either the authored value or a
    /// composition of company and title.
    pub footer: Option<String>,
    pub generator: String,
}

impl Default for DocumentMeta {
    fn default() -> Self {
        DocumentMeta {
            title: "Title".to_string(),
            subtitle: String::new(),
            author: "The Author".to_string(),
            company: "The Company".to_string(),
            template: "default".to_string(),
            presdate: "Today".to_string(),
            content_type: "application/xhtml+xml; charset=utf-8".to_string(),
            header: String::new(),
            footer: None,
            generator: "mm-babel".to_string(),
        }
    }
}

impl DocumentMeta {
    /// Builds the metadata for a document: defaults, then the root text's
    /// title/subtitle, then any `__meta__` overrides, then the derived
    /// footer.
    pub fn extract(map: &MindMap) -> DocumentMeta {
        DocumentMeta::default().merged(map)
    }

    /// Merges the document's metadata over this record, returning the
    /// result.
    pub fn merged(mut self, map: &MindMap) -> DocumentMeta {
        let mut lines = map.root.text.lines();
        if let Some(title) = lines.next().filter(|line| !line.is_empty()) {
            self.title = title.to_string();
        }
        if let Some(subtitle) = lines.next() {
            self.subtitle = subtitle.to_string();
        }

        if let Some(meta_node) = map.root.find_by_text(META_MARKER) {
            for entry in meta_node.children() {
                // A key with no value child is dropped, not an error.
                let Some(value) = entry.children().first() else {
                    continue;
                };
                self.set(&entry.text, value.text.clone());
            }
        }

        if self.footer.is_none() {
            self.footer = Some(format!(
                "<h1>{}</h1><h2>{}</h2>",
                self.company, self.title
            ));
        }
        self
    }

    fn set(&mut self, key: &str, value: String) {
        match key {
            "title" => self.title = value,
            "subtitle" => self.subtitle = value,
            "author" => self.author = value,
            "company" => self.company = value,
            "template" => self.template = value,
            "presdate" => self.presdate = value,
            "content_type" => self.content_type = value,
            "header" => self.header = value,
            "footer" => self.footer = Some(value),
            "generator" => self.generator = value,
            // Unknown keys are ignored
            _ => {}
        }
    }
}
