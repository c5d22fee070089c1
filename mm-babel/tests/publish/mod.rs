//! Publishing pipeline tests: front-matter composition and output routing.

use crate::common::{branch, map_of};
use mm_babel::{publish, FrontMatter, PublishArtifact, PublishSpec};
use std::fs;
use tempfile::tempdir;

fn front() -> FrontMatter {
    FrontMatter {
        layout: "post".to_string(),
        category: "tech".to_string(),
        tags: "rust,cli".to_string(),
        title: "Rust at Work".to_string(),
        source_link: None,
    }
}

#[test]
fn in_memory_publish_prefixes_front_matter() {
    let map = map_of("Rust at Work", vec![branch("Why Rust", &["safety"])]);
    let spec = PublishSpec::new(&map, "markdown").with_front_matter(front());

    let result = publish(spec).unwrap();
    let PublishArtifact::InMemory(text) = result.artifact else {
        panic!("expected in-memory output");
    };
    assert_eq!(
        text,
        "---\nlayout : post\ncategory : tech\ntags : [rust, cli]\ntitle : Rust at Work\n---\n\n\
         # Why Rust\n\nsafety"
    );
}

#[test]
fn source_link_gets_its_own_block() {
    let mut front = front();
    front.source_link = Some("/download/talk.mm".to_string());
    let composed = front.compose("body");
    assert!(composed.contains("---\n\n[思维导图文件下载](/download/talk.mm)\n\nbody"));
}

#[test]
fn output_path_writes_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("post.md");

    let map = map_of("T", vec![branch("Sec", &["line"])]);
    let spec = PublishSpec::new(&map, "markdown").with_output_path(&path);

    let result = publish(spec).unwrap();
    assert_eq!(result.artifact, PublishArtifact::File(path.clone()));
    assert_eq!(fs::read_to_string(&path).unwrap(), "# Sec\n\nline");
}

#[test]
fn publish_without_front_matter_is_the_bare_conversion() {
    let map = map_of("T", vec![branch("Sec", &["line"])]);
    let result = publish(PublishSpec::new(&map, "markdown")).unwrap();
    assert_eq!(
        result.artifact,
        PublishArtifact::InMemory("# Sec\n\nline".to_string())
    );
}

#[test]
fn unknown_format_is_an_error() {
    let map = map_of("T", vec![]);
    assert!(publish(PublishSpec::new(&map, "docbook")).is_err());
}
