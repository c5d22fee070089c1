//! FreeMind (.mm) inbound format.
//!
//! FreeMind stores a mind map as XML: a `<map>` element with one root
//! `<node>`, nested `<node>` children, `<icon BUILTIN="...">` markers and
//! `TEXT`/`LINK`/`CREATED` attributes. This is the only format that
//! produces a [`MindMap`]; all other formats consume one.

pub mod parser;

use crate::error::FormatError;
use crate::format::Format;
use crate::tree::MindMap;

pub struct FreemindFormat;

impl Format for FreemindFormat {
    fn name(&self) -> &str {
        "freemind"
    }

    fn description(&self) -> &str {
        "FreeMind mind-map XML"
    }

    fn file_extensions(&self) -> &[&str] {
        &["mm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<MindMap, FormatError> {
        parser::parse(source)
    }
}
