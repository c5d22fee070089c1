//! Shared configuration loader for the mm toolchain.
//!
//! `defaults/mm.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`MmConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mm_babel::formats::NotesOptions;
use mm_babel::FrontMatter;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mm.default.toml");

/// Top-level configuration consumed by mm applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MmConfig {
    pub convert: ConvertConfig,
    /// Per-document publishing entries, keyed by mind-map filename.
    pub posts: HashMap<String, PostConfig>,
}

impl MmConfig {
    /// Looks up the publishing entry for a mind-map filename.
    pub fn post(&self, mm_filename: &str) -> Option<&PostConfig> {
        self.posts.get(mm_filename)
    }
}

/// Conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub outline_dialect: String,
    pub notes: NotesConfig,
}

/// Mirrors the knobs exposed by the minutes renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct NotesConfig {
    pub order_by_time: bool,
    pub fragment: bool,
}

impl From<&NotesConfig> for NotesOptions {
    fn from(config: &NotesConfig) -> Self {
        NotesOptions {
            order_by_time: config.order_by_time,
            full_html: !config.fragment,
            ..NotesOptions::default()
        }
    }
}

/// One blog post entry: where the converted file goes and the front matter
/// prefixed to it.
#[derive(Debug, Clone, Deserialize)]
pub struct PostConfig {
    /// Output markdown filename.
    pub md_fname: String,
    pub layout: String,
    pub category: String,
    /// Comma-separated tag list, as authored.
    pub tags: String,
    pub title: String,
    /// Download link for the source mind map.
    pub mm_link: Option<String>,
}

impl From<&PostConfig> for FrontMatter {
    fn from(config: &PostConfig) -> Self {
        FrontMatter {
            layout: config.layout.clone(),
            category: config.category.clone(),
            tags: config.tags.clone(),
            title: config.title.clone(),
            source_link: config.mm_link.clone(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MmConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
