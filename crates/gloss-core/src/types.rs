//! Core types for gloss-core.
//!
//! This module defines the data structures shared across all layers: the
//! [`GlossaryEntry`] record and the [`TagTone`] style token a tag resolves to.

use serde::{Deserialize, Serialize};

/// One glossary record.
///
/// Only `term` is required when deserializing. A record without a description
/// or tag list is accepted with those fields empty so rendering never fails on
/// a sparse data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    /// Display name of the term. Unique within a [`Glossary`](crate::Glossary).
    pub term: String,
    /// Free-text explanation shown as the card body.
    #[serde(default)]
    pub description: String,
    /// Ordered category tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl GlossaryEntry {
    pub fn new<T, D, I, S>(term: T, description: D, tags: I) -> Self
    where
        T: Into<String>,
        D: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            term: term.into(),
            description: description.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Stable identifier for the entry's heading, e.g. `term-machine-learning`.
    ///
    /// The term is lowercased and every whitespace run becomes a single `-`.
    pub fn anchor(&self) -> String {
        let mut id = String::with_capacity(self.term.len() + 5);
        id.push_str("term-");
        let mut in_space = false;
        for c in self.term.chars() {
            if c.is_whitespace() {
                if !in_space {
                    id.push('-');
                }
                in_space = true;
            } else {
                id.extend(c.to_lowercase());
                in_space = false;
            }
        }
        id
    }
}

/// Style token a tag resolves to.
///
/// The core only names the tone; the presentation layer decides what colour
/// each tone becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagTone {
    Blue,
    Green,
    Purple,
    Amber,
    Pink,
    Indigo,
    Red,
    Cyan,
    Orange,
    Teal,
    Lime,
    Violet,
    Sky,
    Emerald,
    Slate,
    Fuchsia,
    /// Fallback for tags with no explicit mapping.
    Gray,
}

impl TagTone {
    /// Every tone, in declaration order.
    pub const ALL: [TagTone; 17] = [
        TagTone::Blue,
        TagTone::Green,
        TagTone::Purple,
        TagTone::Amber,
        TagTone::Pink,
        TagTone::Indigo,
        TagTone::Red,
        TagTone::Cyan,
        TagTone::Orange,
        TagTone::Teal,
        TagTone::Lime,
        TagTone::Violet,
        TagTone::Sky,
        TagTone::Emerald,
        TagTone::Slate,
        TagTone::Fuchsia,
        TagTone::Gray,
    ];

    /// Lowercase name used as the key in theme files.
    pub fn name(self) -> &'static str {
        match self {
            TagTone::Blue => "blue",
            TagTone::Green => "green",
            TagTone::Purple => "purple",
            TagTone::Amber => "amber",
            TagTone::Pink => "pink",
            TagTone::Indigo => "indigo",
            TagTone::Red => "red",
            TagTone::Cyan => "cyan",
            TagTone::Orange => "orange",
            TagTone::Teal => "teal",
            TagTone::Lime => "lime",
            TagTone::Violet => "violet",
            TagTone::Sky => "sky",
            TagTone::Emerald => "emerald",
            TagTone::Slate => "slate",
            TagTone::Fuchsia => "fuchsia",
            TagTone::Gray => "gray",
        }
    }
}

impl std::fmt::Display for TagTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_collapses_whitespace_runs() {
        let e = GlossaryEntry::new("Machine   Learning", "", Vec::<String>::new());
        assert_eq!(e.anchor(), "term-machine-learning");
    }

    #[test]
    fn anchor_keeps_punctuation() {
        let e = GlossaryEntry::new("CI/CD", "", Vec::<String>::new());
        assert_eq!(e.anchor(), "term-ci/cd");
    }

    #[test]
    fn tone_names_are_unique() {
        let names: std::collections::HashSet<_> = TagTone::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), TagTone::ALL.len());
    }
}
