//! Error types for format operations

use std::fmt;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during parsing
    ParseError(String),
    /// Error during serialization
    SerializationError(String),
    /// Format does not support the requested operation
    NotSupported(String),
    /// The document is missing required structure (no map element, no root
    /// node). Fatal: distinct from "ran fine, produced no output".
    MalformedTree(String),
    /// Traversal descended past the maximum depth. Signals malformed or
    /// cyclic-looking input.
    RecursionLimit(usize),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
            FormatError::MalformedTree(msg) => write!(f, "Malformed tree: {msg}"),
            FormatError::RecursionLimit(limit) => {
                write!(f, "Recursion limit of {limit} levels exceeded")
            }
        }
    }
}

impl std::error::Error for FormatError {}
