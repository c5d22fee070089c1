//! S5 slide-deck format (mind map → XHTML presentation).
//!
//! The map root becomes the title slide, each of its children one slide.
//! A reserved `__meta__` branch supplies the deck metadata (see
//! [`crate::meta`]); icons drive per-slide behavior through
//! [`crate::attributes::NodeFlags`]: skip, no list wrapping, incremental
//! reveal, ordered lists. A child named `__table__` renders its subtree as
//! a table instead of a list.

pub mod serializer;

use crate::error::FormatError;
use crate::format::{line_separator, Format};
use crate::tree::MindMap;
use std::collections::HashMap;

pub struct SlidesFormat;

impl Format for SlidesFormat {
    fn name(&self) -> &str {
        "slides"
    }

    fn description(&self) -> &str {
        "S5 slide deck (XHTML presentation)"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize_with_options(
        &self,
        map: &MindMap,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let lines = serializer::serialize_slides(map)?;
        Ok(lines.join(line_separator(options)))
    }
}
