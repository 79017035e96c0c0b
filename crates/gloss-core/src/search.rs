//! Search layer — substring filter and term suggestions.
//!
//! Both engines normalise the query the same way (trim, then lowercase) and
//! compare against lowercased fields. Matching is plain substring containment;
//! results keep the data store's order.

use crate::types::GlossaryEntry;

/// Upper bound on the number of terms [`suggest`] returns.
pub const MAX_SUGGESTIONS: usize = 5;

/// Trim and lowercase a raw query.
///
/// An empty result means "no query": [`filter`] returns everything and
/// [`suggest`] returns nothing.
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// True when the (already normalised, non-empty) needle occurs in the entry's
/// term, description or any tag.
fn entry_matches(entry: &GlossaryEntry, needle: &str) -> bool {
    contains_folded(&entry.term, needle)
        || contains_folded(&entry.description, needle)
        || entry.tags.iter().any(|t| contains_folded(t, needle))
}

/// Return the entries matching `query`, in their original order.
///
/// A blank query is the identity: every entry is returned.
pub fn filter<'a>(query: &str, entries: &'a [GlossaryEntry]) -> Vec<&'a GlossaryEntry> {
    let needle = normalize(query);
    if needle.is_empty() {
        return entries.iter().collect();
    }
    entries.iter().filter(|e| entry_matches(e, &needle)).collect()
}

/// Return up to [`MAX_SUGGESTIONS`] terms whose *term* contains `query`.
///
/// Description and tag matches never produce a suggestion. A blank query
/// yields no suggestions.
pub fn suggest(query: &str, entries: &[GlossaryEntry]) -> Vec<String> {
    let needle = normalize(query);
    if needle.is_empty() {
        return Vec::new();
    }
    entries
        .iter()
        .filter(|e| contains_folded(&e.term, &needle))
        .take(MAX_SUGGESTIONS)
        .map(|e| e.term.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
