//! Glossary data file harness.
//!
//! Loads glossary files from disk in each supported format and runs the
//! search pipeline over them.
//!
//! ```sh
//! cargo test --test glossary_file_harness
//! ```

mod common;

use common::*;
use gloss::{filter, suggest, Glossary, GlossaryError, TagTone};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn load(name: &str, body: &str) -> Result<Glossary, GlossaryError> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    Glossary::load(&path)
}

#[test]
fn toml_file_keeps_order_and_defaults() {
    let g = load("terms.toml", GLOSSARY_TOML).unwrap();
    let terms: Vec<&str> = g.entries().iter().map(|e| e.term.as_str()).collect();
    assert_eq!(terms, vec!["Webhook", "Idempotency", "Sharding"]);

    let sharding = g.get("Sharding").unwrap();
    assert_eq!(sharding.description, "");
    assert!(sharding.tags.is_empty());
}

#[test]
fn json_file_searches_like_builtin() {
    let g = load("terms.json", GLOSSARY_JSON).unwrap();
    let found: Vec<&str> = filter("database", g.entries())
        .iter()
        .map(|e| e.term.as_str())
        .collect();
    assert_eq!(found, vec!["Sharding"]);
    assert_eq!(suggest("hook", g.entries()), strings(&["Webhook"]));
}

#[test]
fn loaded_tags_resolve_tones() {
    let g = load("terms.json", GLOSSARY_JSON).unwrap();
    let view = gloss::render(&filter("", g.entries()), g.len());
    assert_eq!(view.cards[0].tags[0].tone, TagTone::Pink);
    assert_eq!(view.cards[1].tags[0].tone, TagTone::Gray);
}

#[test]
fn empty_term_is_rejected() {
    let err = load("bad.toml", "[[entries]]\nterm = \"  \"\n").unwrap_err();
    assert!(matches!(err, GlossaryError::EmptyTerm { index: 0 }));
}

#[test]
fn malformed_file_reports_path() {
    let err = load("broken.toml", "[[entries]\nterm = ").unwrap_err();
    assert!(matches!(err, GlossaryError::Load { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn file_without_entries_is_empty() {
    let g = load("empty.toml", "").unwrap();
    assert!(g.is_empty());
    assert!(filter("anything", g.entries()).is_empty());
}
