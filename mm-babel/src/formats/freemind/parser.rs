use crate::error::FormatError;
use crate::tree::{check_depth, IconKind, MindMap, Node};

/// Parses FreeMind XML into a mind-map tree.
///
/// The `<map>` element and its root `<node>` are required structure;
/// everything else degrades gracefully (unknown icons and attributes are
/// ignored, missing text becomes the empty string).
pub fn parse(source: &str) -> Result<MindMap, FormatError> {
    let doc = roxmltree::Document::parse(source)
        .map_err(|e| FormatError::ParseError(format!("XML parsing error: {e}")))?;

    let map_el = doc.root_element();
    if map_el.tag_name().name() != "map" {
        return Err(FormatError::MalformedTree(format!(
            "root element is <{}>, expected <map>",
            map_el.tag_name().name()
        )));
    }

    let root_el = map_el
        .children()
        .find(|n| n.is_element() && n.tag_name().name() == "node")
        .ok_or_else(|| FormatError::MalformedTree("<map> has no root <node>".to_string()))?;

    Ok(MindMap::new(build_node(root_el, 1)?))
}

fn build_node(el: roxmltree::Node<'_, '_>, depth: usize) -> Result<Node, FormatError> {
    check_depth(depth)?;

    let text = el
        .attribute("TEXT")
        .map(str::to_string)
        .or_else(|| rich_content_text(el))
        .unwrap_or_default();

    let mut node = Node::new(text);
    node.link = el.attribute("LINK").map(str::to_string);
    node.created = el.attribute("CREATED").and_then(|v| v.parse().ok());

    for child in el.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "node" => node.children.push(build_node(child, depth + 1)?),
            "icon" => {
                if let Some(icon) = child.attribute("BUILTIN").and_then(IconKind::from_builtin) {
                    node.icons.push(icon);
                }
            }
            _ => {}
        }
    }

    Ok(node)
}

/// FreeMind 0.9 stores HTML-formatted nodes without a TEXT attribute, as
/// `<richcontent><html><body><p>...</p></body></html></richcontent>`.
/// Recover the first paragraph's text, or an `<img>` line for image nodes.
fn rich_content_text(el: roxmltree::Node<'_, '_>) -> Option<String> {
    let rich = el
        .children()
        .find(|n| n.is_element() && n.tag_name().name() == "richcontent")?;

    for desc in rich.descendants().filter(|n| n.is_element()) {
        match desc.tag_name().name() {
            "p" => {
                let text: String = desc
                    .descendants()
                    .filter(|n| n.is_text())
                    .filter_map(|n| n.text())
                    .collect();
                let text = text.trim();
                if !text.is_empty() {
                    return Some(text.to_string());
                }
            }
            "img" => {
                if let Some(src) = desc.attribute("src") {
                    return Some(format!("<img src=\"{src}\">"));
                }
            }
            _ => {}
        }
    }

    None
}
