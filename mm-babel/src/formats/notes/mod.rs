//! Meeting-minutes format (mind map → notes document).
//!
//! A minutes map is authored as one top-level branch per section: who
//! attended, what was discussed, action items and so on. Sections are
//! recognized by keyword prefixes on the branch text (English and Chinese),
//! then rendered in a fixed order regardless of authoring order. Branches
//! that match nothing are silently dropped.

pub mod serializer;

use crate::error::FormatError;
use crate::format::{bool_option, line_separator, Format};
use crate::tree::MindMap;
use std::collections::HashMap;

const ATTENDEE_PREFIXES: &[&str] = &["attendee", "people", "人员"];
const TOPIC_PREFIXES: &[&str] = &["topic", "subject", "议题"];
const DISCUSSION_PREFIXES: &[&str] = &["discus", "minutes", "meeting", "notes", "记录"];
const ACTION_PREFIXES: &[&str] = &["action", "a.i", "ai", "下一步工作"];
const DAY_PREFIXES: &[&str] = &["时间"];
const LOCATION_PREFIXES: &[&str] = &["地点"];

/// Semantic category of a top-level minutes branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Attendees,
    Topic,
    Discussion,
    ActionItems,
    MeetingDay,
    MeetingLocation,
    Unclassified,
}

impl Section {
    /// Classifies a branch by case-insensitive prefix match. The first
    /// matching category wins.
    pub fn of(text: &str) -> Section {
        let name = text.to_lowercase();
        let starts_with_any = |prefixes: &[&str]| prefixes.iter().any(|p| name.starts_with(p));

        if starts_with_any(ATTENDEE_PREFIXES) {
            Section::Attendees
        } else if starts_with_any(TOPIC_PREFIXES) {
            Section::Topic
        } else if starts_with_any(DISCUSSION_PREFIXES) {
            Section::Discussion
        } else if starts_with_any(ACTION_PREFIXES) {
            Section::ActionItems
        } else if starts_with_any(DAY_PREFIXES) {
            Section::MeetingDay
        } else if starts_with_any(LOCATION_PREFIXES) {
            Section::MeetingLocation
        } else {
            Section::Unclassified
        }
    }
}

/// Rendering options for the minutes document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotesOptions {
    /// Sort discussion utterances by creation time and show timestamps.
    pub order_by_time: bool,
    /// Wrap the output in a complete XHTML document. Ignored in plain-text
    /// mode.
    pub full_html: bool,
    /// Emit HTML markup. When false, tags and escaping are suppressed and
    /// the same lines come out as plain text.
    pub as_html: bool,
}

impl Default for NotesOptions {
    fn default() -> Self {
        NotesOptions {
            order_by_time: false,
            full_html: true,
            as_html: true,
        }
    }
}

pub struct NotesFormat;

impl Format for NotesFormat {
    fn name(&self) -> &str {
        "notes"
    }

    fn description(&self) -> &str {
        "Meeting minutes with semantic section classification"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize_with_options(
        &self,
        map: &MindMap,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let notes_options = NotesOptions {
            order_by_time: bool_option(options, "order-by-time", false),
            full_html: !bool_option(options, "fragment", false),
            as_html: !bool_option(options, "plain", false),
        };
        let lines = serializer::serialize_notes(map, &notes_options)?;
        Ok(lines.join(line_separator(options)))
    }
}
