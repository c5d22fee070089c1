//! S5 deck rendering.

use crate::attributes::NodeFlags;
use crate::error::FormatError;
use crate::meta::DocumentMeta;
use crate::tree::{check_depth, MindMap, Node, META_MARKER, TABLE_MARKER};

/// Renders the whole deck as an ordered sequence of lines.
pub fn serialize_slides(map: &MindMap) -> Result<Vec<String>, FormatError> {
    let meta = DocumentMeta::extract(map);
    let mut lines = Vec::new();

    push_head(&mut lines, &meta);
    push_layout(&mut lines, &meta);

    lines.push("<div class=\"presentation\">".to_string());
    push_title_slide(&mut lines, &meta);

    for page in map.root.children() {
        if page.text == META_MARKER {
            continue;
        }
        let flags = NodeFlags::of(page);
        if flags.skip {
            continue;
        }

        lines.push("  <div class=\"slide\">".to_string());
        lines.push(format!("    <h1>{}</h1>", page.text));
        lines.push("    <div class=\"slidecontent\">".to_string());
        render_list(&mut lines, page, 1)?;
        lines.push("    </div>".to_string());
        lines.push("  </div>".to_string());
    }

    lines.push("</div>".to_string());
    lines.push("</body>".to_string());
    lines.push("</html>".to_string());
    Ok(lines)
}

fn push_head(lines: &mut Vec<String>, meta: &DocumentMeta) {
    lines.push("<?xml version=\"1.0\" encoding=\"UTF-8\"?>".to_string());
    lines.push(
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \
         \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">"
            .to_string(),
    );
    lines.push("<html xmlns=\"http://www.w3.org/1999/xhtml\">".to_string());
    lines.push("<head>".to_string());
    lines.push(format!("<title>{}</title>", meta.title));
    lines.push("<meta name=\"version\" content=\"S5 1.1\" />".to_string());
    lines.push(format!(
        "<meta name=\"generator\" content=\"{}\" />",
        meta.generator
    ));
    lines.push(format!(
        "<meta name=\"presdate\" content=\"{}\" />",
        meta.presdate
    ));
    lines.push(format!("<meta name=\"author\" content=\"{}\" />", meta.author));
    lines.push(format!(
        "<meta name=\"company\" content=\"{}\" />",
        meta.company
    ));
    lines.push(format!(
        "<meta http-equiv=\"Content-type\" content=\"{}\" />",
        meta.content_type
    ));
    // S5 format, see Eric A. Meyer, http://meyerweb.com/eric/tools/s5/
    for (media, id, sheet) in [
        ("projection", "slideProj", "slides.css"),
        ("screen", "outlineStyle", "outline.css"),
        ("print", "slidePrint", "print.css"),
        ("projection", "operaFix", "opera.css"),
    ] {
        lines.push(format!(
            "<link rel=\"stylesheet\" href=\"ui/{}/{}\" type=\"text/css\" media=\"{}\" id=\"{}\" />",
            meta.template, sheet, media, id
        ));
    }
    lines.push(format!(
        "<script src=\"ui/{}/slides.js\" type=\"text/javascript\"></script>",
        meta.template
    ));
    lines.push("</head>".to_string());
}

fn push_layout(lines: &mut Vec<String>, meta: &DocumentMeta) {
    lines.push("<body>".to_string());
    lines.push("<div class=\"layout\">".to_string());
    lines.push("<div id=\"controls\"><!-- DO NOT EDIT --></div>".to_string());
    lines.push("<div id=\"currentSlide\"><!-- DO NOT EDIT --></div>".to_string());
    lines.push(format!("<div id=\"header\">{}</div>", meta.header));
    lines.push(format!(
        "<div id=\"footer\">{}</div>",
        meta.footer.as_deref().unwrap_or("")
    ));
    lines.push("</div>".to_string());
}

fn push_title_slide(lines: &mut Vec<String>, meta: &DocumentMeta) {
    lines.push("  <div class=\"slide\">".to_string());
    lines.push(format!("    <h1>{}</h1>", meta.title));
    lines.push(format!("    <h2>{}</h2>", meta.subtitle));
    lines.push(format!("    <h3>{}</h3>", meta.author));
    lines.push(format!("    <h4>{}</h4>", meta.company));
    lines.push("  </div>".to_string());
}

/// Recursive nested-list rendering of a slide subtree.
///
/// The parent's flags decide the wrapping: none for `no_wrap`, `<ol>` for
/// `ordered`, `<ul>` otherwise, with the incremental class when flagged.
fn render_list(lines: &mut Vec<String>, node: &Node, depth: usize) -> Result<(), FormatError> {
    check_depth(depth)?;
    if node.children().is_empty() {
        return Ok(());
    }

    let flags = NodeFlags::of(node);
    let class = if flags.incremental {
        " class=\"incremental\""
    } else {
        ""
    };
    let indent = "  ".repeat(depth + 1);

    let end = if flags.no_wrap {
        None
    } else if flags.ordered {
        lines.push(format!("{indent}<ol{class}>"));
        Some(format!("{indent}</ol>"))
    } else {
        lines.push(format!("{indent}<ul{class}>"));
        Some(format!("{indent}</ul>"))
    };

    for line_node in node.children() {
        if line_node.text == TABLE_MARKER {
            render_table(lines, line_node, depth);
        } else {
            push_line_item(lines, line_node, depth, flags);
            render_list(lines, line_node, depth + 1)?;
        }
    }

    if let Some(end) = end {
        lines.push(end);
    }
    Ok(())
}

/// One list line. Text already containing a `<html>` prefix is stripped of
/// it; a link wraps the text in an anchor; embedded newlines become
/// explicit breaks. Untexted nodes contribute nothing.
fn push_line_item(lines: &mut Vec<String>, node: &Node, depth: usize, parent_flags: NodeFlags) {
    if !node.has_text() {
        return;
    }

    let mut text = node.text.replace("<html>", "");
    if let Some(link) = &node.link {
        text = format!("<a href=\"{link}\">{text}</a>");
    }

    if parent_flags.no_wrap {
        lines.push(text);
    } else {
        let indent = "  ".repeat(depth + 2);
        let text = text.replace('\n', "<br/>");
        lines.push(format!("{indent}<li>{text}</li>"));
    }
}

/// A `__table__` node renders its children as rows; each row's descendants
/// (any depth, document order) become that row's cells.
fn render_table(lines: &mut Vec<String>, table: &Node, depth: usize) {
    let indent = "  ".repeat(depth + 1);
    lines.push(format!("{indent}<table>"));
    for row in table.children() {
        lines.push(format!("{indent}  <tr>"));
        for cell in row.descendants() {
            lines.push(format!("{indent}    <td>{}</td>", cell.text));
        }
        lines.push(format!("{indent}  </tr>"));
    }
    lines.push(format!("{indent}</table>"));
}
