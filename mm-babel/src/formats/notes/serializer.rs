//! Minutes rendering.
//!
//! Classified sections are rendered in a fixed order: title, meeting day,
//! location, attendees, topic, action items, discussion. A section with
//! nothing to show is omitted entirely. When the same category matches more
//! than one branch the last one wins.

use super::{NotesOptions, Section};
use crate::error::FormatError;
use crate::tree::{check_depth, MindMap, Node};
use chrono::{Local, TimeZone};

/// Renders the minutes document as an ordered sequence of lines.
pub fn serialize_notes(map: &MindMap, options: &NotesOptions) -> Result<Vec<String>, FormatError> {
    let mut attendees: Option<&Node> = None;
    let mut topic: Option<&Node> = None;
    let mut discussion: Option<&Node> = None;
    let mut action_items: Option<&Node> = None;
    let mut meeting_day: Option<&Node> = None;
    let mut meeting_location: Option<&Node> = None;

    for child in map.root.children() {
        match Section::of(&child.text) {
            Section::Attendees => attendees = Some(child),
            Section::Topic => topic = Some(child),
            Section::Discussion => discussion = Some(child),
            Section::ActionItems => action_items = Some(child),
            Section::MeetingDay => meeting_day = Some(child),
            Section::MeetingLocation => meeting_location = Some(child),
            Section::Unclassified => {}
        }
    }

    let mut body = vec![render_title(&map.root.text, options)];
    if let Some(node) = meeting_day {
        body.extend(render_joined(node, "时间", options));
    }
    if let Some(node) = meeting_location {
        body.extend(render_joined(node, "地点", options));
    }
    if let Some(node) = attendees {
        body.extend(render_attendees(node, options));
    }
    if let Some(node) = topic {
        body.extend(render_joined(node, "议题", options));
    }
    if let Some(node) = action_items {
        body.extend(render_action_items(node, options)?);
    }
    if let Some(node) = discussion {
        body.extend(render_discussion(node, options)?);
    }

    if options.as_html && options.full_html {
        Ok(html_wrapper(&map.root.text, body))
    } else {
        Ok(body)
    }
}

fn html_wrapper(title: &str, body: Vec<String>) -> Vec<String> {
    let mut lines = vec![
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>".to_string(),
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" ".to_string(),
        "\"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">".to_string(),
        "<html xmlns=\"http://www.w3.org/1999/xhtml\">".to_string(),
        "<head>".to_string(),
        format!("<title>{title}</title>"),
        "</head>".to_string(),
        "<body>".to_string(),
    ];
    lines.extend(body);
    lines.push("</body>".to_string());
    lines.push("</html>".to_string());
    lines
}

fn render_title(title: &str, options: &NotesOptions) -> String {
    if options.as_html {
        format!("<h3>{title}</h3>")
    } else {
        title.to_string()
    }
}

/// Day, location and topic sections are flat: child texts joined with
/// spaces after a bold label. Nothing to join means no line at all.
fn render_joined(node: &Node, label: &str, options: &NotesOptions) -> Vec<String> {
    let texts: Vec<&str> = node
        .children()
        .iter()
        .filter(|child| child.has_text())
        .map(|child| child.text.as_str())
        .collect();
    if texts.is_empty() {
        return Vec::new();
    }
    vec![format!(
        "{}{}{}",
        bold_label(label, options),
        texts.join(" "),
        line_break(options)
    )]
}

/// The attendee list has three shapes, selected by probing the maximum
/// depth under the section node:
/// depth 1: flat names; depth 2: name with an optional parenthesized
/// sub-value; depth 3 or more: top-level labels grouping nested names.
fn render_attendees(node: &Node, options: &NotesOptions) -> Vec<String> {
    let names = match node.max_child_depth() {
        0 => Vec::new(),
        1 => node
            .children()
            .iter()
            .map(|child| child.text.clone())
            .collect(),
        2 => two_level_attendees(node),
        _ => three_level_attendees(node),
    };
    if names.is_empty() {
        return Vec::new();
    }
    vec![format!(
        "{}{}{}",
        bold_label("人员", options),
        names.join(", "),
        line_break(options)
    )]
}

/// Each child is a person; a first grandchild, when present, is a contact
/// detail shown in parentheses.
fn two_level_attendees(node: &Node) -> Vec<String> {
    node.children()
        .iter()
        .map(|person| {
            match person.children().first().filter(|detail| detail.has_text()) {
                Some(detail) => format!("{} ({})", person.text, detail.text),
                None => person.text.clone(),
            }
        })
        .collect()
}

/// Each child is a grouping label (typically a location) whose children are
/// the people there.
fn three_level_attendees(node: &Node) -> Vec<String> {
    node.children()
        .iter()
        .map(|group| format!("{} [{}]", group.text, two_level_attendees(group).join(", ")))
        .collect()
}

fn render_action_items(node: &Node, options: &NotesOptions) -> Result<Vec<String>, FormatError> {
    if node.children().is_empty() {
        return Ok(Vec::new());
    }
    let mut lines = vec![section_title("下一步工作", options)];
    open_tag("ul", &mut lines, options);
    for item in node.children() {
        open_tag("li", &mut lines, options);
        nest_text(item, 1, &mut lines, options)?;
        close_tag("li", &mut lines, options);
    }
    close_tag("ul", &mut lines, options);
    Ok(lines)
}

/// One leaf utterance of the discussion, owned by its immediate parent
/// (the speaker).
struct Utterance {
    time: i64,
    speaker: String,
    lines: Vec<String>,
}

fn render_discussion(node: &Node, options: &NotesOptions) -> Result<Vec<String>, FormatError> {
    let mut utterances = Vec::new();
    for speaker in node.children() {
        for entry in speaker.children() {
            let mut lines = Vec::new();
            nest_text(entry, 1, &mut lines, options)?;
            if lines.iter().all(|line| line.is_empty()) {
                continue;
            }
            utterances.push(Utterance {
                time: entry.created.unwrap_or(0),
                speaker: speaker.text.clone(),
                lines,
            });
        }
    }

    // Nothing qualifying was said; in particular there is no start time to
    // read, so bail out before touching the first element.
    if utterances.is_empty() {
        return Ok(Vec::new());
    }

    if options.order_by_time {
        utterances.sort_by_key(|utterance| utterance.time);
    }
    let start_time = utterances[0].time;

    let mut lines = vec![section_title("记录", options)];
    open_tag("ul", &mut lines, options);

    // Runs break on every speaker change: the same speaker reappearing
    // later opens a fresh headed run.
    let mut last_speaker: Option<&str> = None;
    for utterance in &utterances {
        if last_speaker != Some(utterance.speaker.as_str()) {
            if last_speaker.is_some() {
                close_tag("ul", &mut lines, options);
                close_tag("li", &mut lines, options);
            }
            open_tag("li", &mut lines, options);
            if options.order_by_time {
                lines.push(format!(
                    "{} ({})",
                    utterance.speaker,
                    format_time(utterance.time, start_time)
                ));
            } else {
                lines.push(utterance.speaker.clone());
            }
            open_tag("ul", &mut lines, options);
            last_speaker = Some(utterance.speaker.as_str());
        }

        open_tag("li", &mut lines, options);
        lines.extend(utterance.lines.iter().cloned());
        close_tag("li", &mut lines, options);
    }

    close_tag("ul", &mut lines, options);
    close_tag("li", &mut lines, options);
    close_tag("ul", &mut lines, options);
    Ok(lines)
}

/// Pushes a node's text followed by its sub-points as a nested list,
/// recursively.
fn nest_text(
    node: &Node,
    depth: usize,
    out: &mut Vec<String>,
    options: &NotesOptions,
) -> Result<(), FormatError> {
    check_depth(depth)?;
    out.push(escape(&node.text, options));
    if node.children().is_empty() {
        return Ok(());
    }
    open_tag("ul", out, options);
    for child in node.children() {
        open_tag("li", out, options);
        nest_text(child, depth + 1, out, options)?;
        close_tag("li", out, options);
    }
    close_tag("ul", out, options);
    Ok(())
}

/// Offset from the meeting start, or the wall clock for the opening
/// utterance.
fn format_time(time: i64, start_time: i64) -> String {
    let offset_secs = (time - start_time) / 1000;
    let minutes = offset_secs / 60;
    let secs = offset_secs % 60;

    if minutes == 0 && secs == 0 {
        return Local
            .timestamp_millis_opt(start_time)
            .single()
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_default();
    }
    if minutes == 0 {
        return format!("{secs} secs");
    }
    if secs == 0 {
        return format!("{minutes} min");
    }
    format!("{minutes} min {secs} sec")
}

fn section_title(name: &str, options: &NotesOptions) -> String {
    if options.as_html {
        format!("<b>{name}</b><br/>")
    } else {
        name.to_string()
    }
}

fn bold_label(label: &str, options: &NotesOptions) -> String {
    if options.as_html {
        format!("<b>{label}: </b>")
    } else {
        format!("{label}: ")
    }
}

fn line_break(options: &NotesOptions) -> &'static str {
    if options.as_html {
        "<br/>"
    } else {
        ""
    }
}

fn open_tag(tag: &str, out: &mut Vec<String>, options: &NotesOptions) {
    if options.as_html {
        out.push(format!("<{tag}>"));
    }
}

fn close_tag(tag: &str, out: &mut Vec<String>, options: &NotesOptions) {
    if options.as_html {
        out.push(format!("</{tag}>"));
    }
}

fn escape(text: &str, options: &NotesOptions) -> String {
    if !options.as_html {
        return text.to_string();
    }
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
