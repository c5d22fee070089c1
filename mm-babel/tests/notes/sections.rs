//! Section classification and rendering order.
//!
//! Most assertions use plain-text mode: same line structure as the HTML
//! output, minus the tags, so the section logic is visible without markup
//! noise.

use crate::common::{branch, map_of};
use mm_babel::formats::notes::NotesFormat;
use mm_babel::{Format, Node};
use std::collections::HashMap;

fn plain() -> HashMap<String, String> {
    HashMap::from([("plain".to_string(), "true".to_string())])
}

#[test]
fn sections_render_in_fixed_order() {
    // Authored out of order; the output order is fixed.
    let map = map_of(
        "Weekly Sync",
        vec![
            branch("Topic", &["roadmap"]),
            branch("People", &["alice", "bob"]),
            branch("时间", &["2026-08-28"]),
        ],
    );
    let out = NotesFormat.serialize_with_options(&map, &plain()).unwrap();
    assert_eq!(
        out,
        "Weekly Sync\n时间: 2026-08-28\n人员: alice, bob\n议题: roadmap"
    );
}

#[test]
fn duplicate_section_last_one_wins() {
    let map = map_of(
        "Sync",
        vec![branch("Topic", &["roadmap"]), branch("Subject", &["budget"])],
    );
    let out = NotesFormat.serialize_with_options(&map, &plain()).unwrap();
    assert_eq!(out, "Sync\n议题: budget");
}

#[test]
fn unclassified_branches_are_dropped() {
    let map = map_of(
        "Sync",
        vec![branch("Parking lot", &["later"]), branch("Topic", &["now"])],
    );
    let out = NotesFormat.serialize_with_options(&map, &plain()).unwrap();
    assert_eq!(out, "Sync\n议题: now");
}

#[test]
fn flat_attendees_join_names() {
    let map = map_of("Sync", vec![branch("Attendees", &["alice", "bob", "carol"])]);
    let out = NotesFormat.serialize_with_options(&map, &plain()).unwrap();
    assert_eq!(out, "Sync\n人员: alice, bob, carol");
}

#[test]
fn two_level_attendees_show_details_in_parens() {
    let map = map_of(
        "Sync",
        vec![Node::new("Attendees")
            .with_child(Node::new("alice").with_child(Node::new("x2345")))
            .with_child(Node::new("bob"))],
    );
    let out = NotesFormat.serialize_with_options(&map, &plain()).unwrap();
    assert_eq!(out, "Sync\n人员: alice (x2345), bob");
}

#[test]
fn three_level_attendees_group_by_label() {
    let map = map_of(
        "Sync",
        vec![Node::new("Attendees")
            .with_child(
                Node::new("HQ")
                    .with_child(Node::new("alice").with_child(Node::new("x1")))
                    .with_child(Node::new("bob")),
            )
            .with_child(Node::new("Remote").with_child(Node::new("carol")))],
    );
    let out = NotesFormat.serialize_with_options(&map, &plain()).unwrap();
    assert_eq!(out, "Sync\n人员: HQ [alice (x1), bob], Remote [carol]");
}

#[test]
fn empty_sections_are_omitted() {
    let map = map_of(
        "Sync",
        vec![Node::new("Attendees"), Node::new("Topic"), Node::new("时间")],
    );
    let out = NotesFormat.serialize_with_options(&map, &plain()).unwrap();
    assert_eq!(out, "Sync");
}

#[test]
fn action_items_render_as_a_titled_list() {
    let map = map_of(
        "Sync",
        vec![branch("Action items", &["ship v2", "email the team"])],
    );
    let out = NotesFormat.serialize_with_options(&map, &plain()).unwrap();
    assert_eq!(out, "Sync\n下一步工作\nship v2\nemail the team");
}

#[test]
fn default_output_is_a_full_html_document() {
    let map = map_of("Weekly Sync", vec![branch("People", &["alice", "bob"])]);
    let out = NotesFormat.serialize(&map).unwrap();

    assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(out.contains("<title>Weekly Sync</title>"));
    assert!(out.contains("<h3>Weekly Sync</h3>"));
    assert!(out.contains("<b>人员: </b>alice, bob<br/>"));
    assert!(out.ends_with("</body>\n</html>"));
}

#[test]
fn fragment_option_drops_the_document_shell() {
    let map = map_of("Sync", vec![branch("Topic", &["roadmap"])]);
    let options = HashMap::from([("fragment".to_string(), "true".to_string())]);
    let out = NotesFormat.serialize_with_options(&map, &options).unwrap();
    assert_eq!(out, "<h3>Sync</h3>\n<b>议题: </b>roadmap<br/>");
}
