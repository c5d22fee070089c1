//! Outline markup emitters (mind map → Markdown / Textile).
//!
//! One algorithm, two dialects: the structural role of a node (heading,
//! list item, plain line) is a pure function of its depth, and the dialect
//! only chooses the concrete tokens. See [`serializer`] for the rules.

pub mod serializer;

use crate::error::FormatError;
use crate::format::{bool_option, line_separator, Format};
use crate::tree::MindMap;
use std::collections::HashMap;

/// How a dialect spells a heading of a given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
    /// Marker character repeated `level` times: `## Heading`
    Repeated(char),
    /// Prefix with the numeric level: `h2. Heading`
    Labeled(&'static str),
}

/// Emission rules shared by the outline serializer.
///
/// The heading band covers depths `1..=heading_levels`; branch nodes inside
/// it become headings, branch nodes past it become list items. A `bullet`
/// of `None` is the degenerate single-style mode: list items are emitted as
/// bare indented lines with no marker.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineDialect {
    pub heading_levels: usize,
    pub heading_style: HeadingStyle,
    pub bullet: Option<char>,
    pub indent_unit: &'static str,
    /// When false (the default), a node whose text already starts with `<`
    /// is assumed to be markup and passes through without wrapping tokens.
    /// When true, such text is treated like any other.
    pub wrap_markup: bool,
}

impl OutlineDialect {
    /// `#` headings, `-` bullets.
    pub fn markdown() -> Self {
        OutlineDialect {
            heading_levels: 2,
            heading_style: HeadingStyle::Repeated('#'),
            bullet: Some('-'),
            indent_unit: "    ",
            wrap_markup: false,
        }
    }

    /// `h<N>.` headings, `*` bullets.
    pub fn textile() -> Self {
        OutlineDialect {
            heading_levels: 2,
            heading_style: HeadingStyle::Labeled("h"),
            bullet: Some('*'),
            indent_unit: "    ",
            wrap_markup: false,
        }
    }

    /// The heading token for a depth inside the band, including the
    /// trailing space.
    pub(crate) fn heading(&self, level: usize) -> String {
        match self.heading_style {
            HeadingStyle::Repeated(marker) => {
                let mut token: String = std::iter::repeat(marker).take(level).collect();
                token.push(' ');
                token
            }
            HeadingStyle::Labeled(prefix) => format!("{prefix}{level}. "),
        }
    }
}

/// A [`Format`] wrapping one outline dialect.
pub struct OutlineFormat {
    name: &'static str,
    description: &'static str,
    extensions: &'static [&'static str],
    dialect: OutlineDialect,
}

impl OutlineFormat {
    pub fn markdown() -> Self {
        OutlineFormat {
            name: "markdown",
            description: "Markdown outline ('#' headings, '-' bullets)",
            extensions: &["md", "markdown"],
            dialect: OutlineDialect::markdown(),
        }
    }

    pub fn textile() -> Self {
        OutlineFormat {
            name: "textile",
            description: "Textile outline ('hN.' headings, '*' bullets)",
            extensions: &["textile"],
            dialect: OutlineDialect::textile(),
        }
    }

    pub fn with_dialect(name: &'static str, dialect: OutlineDialect) -> Self {
        OutlineFormat {
            name,
            description: "",
            extensions: &[],
            dialect,
        }
    }
}

impl Format for OutlineFormat {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn file_extensions(&self) -> &[&str] {
        self.extensions
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize_with_options(
        &self,
        map: &MindMap,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut dialect = self.dialect.clone();
        dialect.wrap_markup = bool_option(options, "wrap-markup", dialect.wrap_markup);
        let lines = serializer::emit_lines(map, &dialect)?;
        Ok(lines.join(line_separator(options)))
    }
}
