//! Document publishing pipeline.
//!
//! Provides a high-level API for converting a mind map to an output format.
//! This module bridges the gap between the format registry and file I/O,
//! and hosts the blog front-matter composition: the emitters stay pure,
//! and prefixing their output with a `---`-framed header is a
//! post-processing step applied here.
//!
//! For more control over the conversion process, use [`FormatRegistry`]
//! directly.

use crate::error::FormatError;
use crate::registry::FormatRegistry;
use crate::tree::MindMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Blog front-matter prefixed to converted output.
///
/// `tags` is a comma-separated string as authored in the per-document
/// configuration; it is rendered as a bracketed list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub layout: String,
    pub category: String,
    pub tags: String,
    pub title: String,
    /// Download link for the source mind map, shown under the header.
    pub source_link: Option<String>,
}

impl FrontMatter {
    /// Prefixes a converted body with the `---`-framed header block and the
    /// source-link line.
    pub fn compose(&self, body: &str) -> String {
        let tags: Vec<&str> = self.tags.split(',').map(str::trim).collect();
        let mut blocks = vec![format!(
            "---\nlayout : {}\ncategory : {}\ntags : [{}]\ntitle : {}\n---",
            self.layout,
            self.category,
            tags.join(", "),
            self.title
        )];
        if let Some(link) = &self.source_link {
            blocks.push(format!("[思维导图文件下载]({link})"));
        }
        blocks.push(body.to_string());
        blocks.join("\n\n")
    }
}

/// Specifies how to publish a document.
///
/// Use the builder pattern to configure the publication:
///
/// ```ignore
/// let spec = PublishSpec::new(&map, "markdown")
///     .with_output_path("post.md")
///     .with_front_matter(front);
/// ```
///
/// If no output path is provided, the content is returned in memory.
#[derive(Debug)]
pub struct PublishSpec<'a> {
    /// The parsed mind map to convert.
    pub map: &'a MindMap,
    /// Target format name (e.g., "markdown", "notes", "slides").
    pub format: &'a str,
    /// Optional file path for writing output.
    pub output: Option<PathBuf>,
    /// Format-specific options (e.g., time ordering, line separator).
    pub options: HashMap<String, String>,
    /// Optional front matter prefixed to the converted output.
    pub front_matter: Option<FrontMatter>,
}

impl<'a> PublishSpec<'a> {
    /// Creates a new publish specification for the given map and format.
    pub fn new(map: &'a MindMap, format: &'a str) -> Self {
        Self {
            map,
            format,
            output: None,
            options: HashMap::new(),
            front_matter: None,
        }
    }

    /// Sets the output file path. If provided, content is written to disk.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds a format-specific option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Prefixes the output with blog front matter.
    pub fn with_front_matter(mut self, front_matter: FrontMatter) -> Self {
        self.front_matter = Some(front_matter);
        self
    }
}

/// The output from a successful publish operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    /// Content held in memory (when no output path was specified).
    InMemory(String),
    /// Path to the written file.
    File(PathBuf),
}

/// Result of a publish operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    /// The published artifact (in-memory content or file path).
    pub artifact: PublishArtifact,
}

/// Publishes a document according to the specification.
///
/// Uses the default format registry to find the appropriate serializer.
///
/// # Errors
///
/// Returns [`FormatError`] if the format is not supported, serialization
/// fails, or file I/O fails.
pub fn publish(spec: PublishSpec<'_>) -> Result<PublishResult, FormatError> {
    let registry = FormatRegistry::with_defaults();
    let text = registry.serialize_with_options(spec.map, spec.format, &spec.options)?;
    let text = match &spec.front_matter {
        Some(front_matter) => front_matter.compose(&text),
        None => text,
    };

    if let Some(path) = spec.output {
        fs::write(&path, &text).map_err(|e| {
            FormatError::SerializationError(format!("failed to write '{}': {e}", path.display()))
        })?;
        Ok(PublishResult {
            artifact: PublishArtifact::File(path),
        })
    } else {
        Ok(PublishResult {
            artifact: PublishArtifact::InMemory(text),
        })
    }
}
