//! Search layer integration harness.
//!
//! # What this covers
//!
//! - **Reference scenarios**: the built-in glossary queried with the phrases
//!   users actually type, checked for exact terms and order.
//! - **Property: blank query is the identity**: whitespace-only queries
//!   return every entry, in order.
//! - **Property: case-insensitive**: a query and its upper-cased form return
//!   the same entries.
//! - **Property: sound and complete**: every result matches, every matching
//!   entry is a result, and store order is kept.
//! - **Property: suggestions**: at most five, term-only, a subsequence of the
//!   store order, and empty for a blank query.
//!
//! # Running
//!
//! ```sh
//! cargo test --test search_harness
//! ```

mod common;

use common::*;
use gloss::{filter, suggest, Glossary, GlossaryEntry, MAX_SUGGESTIONS};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn terms(found: &[&GlossaryEntry]) -> Vec<String> {
    found.iter().map(|e| e.term.clone()).collect()
}

fn matches(entry: &GlossaryEntry, needle: &str) -> bool {
    entry.term.to_lowercase().contains(needle)
        || entry.description.to_lowercase().contains(needle)
        || entry.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

// ---------------------------------------------------------------------------
// Reference scenarios
// ---------------------------------------------------------------------------

#[rstest]
#[case::api("api", &["API", "RESTful", "GraphQL"])]
#[case::devops_tag("devops", &["CI/CD", "Docker", "Kubernetes"])]
#[case::container("container", &["Docker", "Kubernetes"])]
#[case::description_only("learning", &["Machine Learning"])]
#[case::integration("integration", &["API", "CI/CD"])]
#[case::padded_upper("  DOCKER  ", &["Docker"])]
#[case::no_match("zzz", &[])]
fn filter_reference(#[case] query: &str, #[case] expected: &[&str]) {
    let g = Glossary::builtin();
    assert_eq!(terms(&filter(query, g.entries())), strings(expected));
}

#[rstest]
#[case::k("k", &["Docker", "Kubernetes"])]
#[case::kube("kube", &["Kubernetes"])]
#[case::api("api", &["API"])]
#[case::tag_only("devops", &[])]
#[case::blank("   ", &[])]
fn suggest_reference(#[case] query: &str, #[case] expected: &[&str]) {
    let g = Glossary::builtin();
    assert_eq!(suggest(query, g.entries()), strings(expected));
}

#[test]
fn empty_query_returns_builtin_in_order() {
    let g = Glossary::builtin();
    assert_eq!(terms(&filter("", g.entries())), strings(BUILTIN_TERMS));
}

#[test]
fn suggestions_are_capped_on_large_stores() {
    let entries = synthetic_entries(50);
    let found = suggest("term", &entries);
    assert_eq!(found.len(), MAX_SUGGESTIONS);
    assert_eq!(
        found,
        strings(&["Term 0000", "Term 0001", "Term 0002", "Term 0003", "Term 0004"])
    );
}

#[test]
fn custom_glossary_tag_match() {
    let g = glossary_of(vec![
        EntryBuilder::new("Webhook").tag("Web").build(),
        EntryBuilder::new("Sharding").description("Split data").build(),
    ]);
    assert_eq!(terms(&filter("web", g.entries())), strings(&["Webhook"]));
    assert_eq!(terms(&filter("data", g.entries())), strings(&["Sharding"]));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn query_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z /]{0,6}"
}

proptest! {
    #[test]
    fn blank_query_is_identity(spaces in " {0,4}") {
        let g = Glossary::builtin();
        let found = filter(&spaces, g.entries());
        prop_assert_eq!(found.len(), g.len());
        prop_assert!(suggest(&spaces, g.entries()).is_empty());
    }

    #[test]
    fn filter_ignores_case(q in query_strategy()) {
        let g = Glossary::builtin();
        prop_assert_eq!(
            terms(&filter(&q, g.entries())),
            terms(&filter(&q.to_uppercase(), g.entries()))
        );
    }

    #[test]
    fn filter_is_sound_and_complete(q in query_strategy()) {
        let g = Glossary::builtin();
        let needle = q.trim().to_lowercase();
        let expected: Vec<String> = g
            .entries()
            .iter()
            .filter(|e| needle.is_empty() || matches(e, &needle))
            .map(|e| e.term.clone())
            .collect();
        prop_assert_eq!(terms(&filter(&q, g.entries())), expected);
    }

    #[test]
    fn suggestions_are_bounded_term_matches(q in query_strategy(), n in 0usize..40) {
        let entries = synthetic_entries(n);
        let found = suggest(&q, &entries);
        let needle = q.trim().to_lowercase();
        prop_assert!(found.len() <= MAX_SUGGESTIONS);
        if needle.is_empty() {
            prop_assert!(found.is_empty());
        }
        for term in &found {
            prop_assert!(term.to_lowercase().contains(&needle));
        }
        let expected: Vec<String> = entries
            .iter()
            .filter(|e| !needle.is_empty() && e.term.to_lowercase().contains(&needle))
            .take(MAX_SUGGESTIONS)
            .map(|e| e.term.clone())
            .collect();
        prop_assert_eq!(found, expected);
    }
}
