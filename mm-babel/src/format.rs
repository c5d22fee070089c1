//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing and serializing mind maps.

use crate::error::FormatError;
use crate::tree::MindMap;
use std::collections::HashMap;

/// Option key selecting the separator used to join output lines.
///
/// Every serializing format accepts it; there is no hardcoded platform
/// default beyond `"\n"`.
pub const LINE_SEPARATOR_OPTION: &str = "line-separator";

/// Resolves the line separator from a format option map.
pub fn line_separator(options: &HashMap<String, String>) -> &str {
    options
        .get(LINE_SEPARATOR_OPTION)
        .map(String::as_str)
        .unwrap_or("\n")
}

/// Trait for document formats
///
/// Implementors provide conversion between a textual representation and the
/// [`MindMap`] tree. Formats can support parsing, serialization, or both.
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "freemind", "markdown", "slides")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["mm"], ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → MindMap)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (MindMap → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a MindMap
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support parsing should override this method.
    fn parse(&self, _source: &str) -> Result<MindMap, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a MindMap into source text
    ///
    /// Default implementation delegates to [`Format::serialize_with_options`]
    /// with an empty option map.
    fn serialize(&self, map: &MindMap) -> Result<String, FormatError> {
        self.serialize_with_options(map, &HashMap::new())
    }

    /// Serialize a MindMap, optionally using extra parameters.
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support serialization should override this method.
    fn serialize_with_options(
        &self,
        _map: &MindMap,
        _options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}

/// Reads a boolean format option. Absent keys yield `default`; any value
/// other than "false" and "0" counts as true.
pub(crate) fn bool_option(options: &HashMap<String, String>, key: &str, default: bool) -> bool {
    match options.get(key) {
        Some(value) => value != "false" && value != "0",
        None => default,
    }
}
