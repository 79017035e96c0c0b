//! Render model — turns a filtered entry list into display-ready cards.
//!
//! [`render`] is presentation-agnostic: it resolves tag tones and the status
//! line, and flags the empty state, but leaves layout and colour to whichever
//! [`Presenter`](crate::session::Presenter) consumes the [`RenderedView`].

use crate::tags::{category_label, tone_for};
use crate::types::{GlossaryEntry, TagTone};
use serde::Serialize;

/// One tag as it appears on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagView {
    pub name: String,
    pub tone: TagTone,
    /// Accessible label, e.g. `Category: Backend`.
    pub label: String,
}

/// One glossary card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub anchor: String,
    pub term: String,
    pub description: String,
    pub tags: Vec<TagView>,
}

impl CardView {
    pub fn from_entry(entry: &GlossaryEntry) -> Self {
        Self {
            anchor: entry.anchor(),
            term: entry.term.clone(),
            description: entry.description.clone(),
            tags: entry
                .tags
                .iter()
                .map(|t| TagView {
                    name: t.clone(),
                    tone: tone_for(t),
                    label: category_label(t),
                })
                .collect(),
        }
    }
}

/// Result-count message shown alongside the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Status {
    NoResults,
    AllShown,
    Partial { shown: usize, total: usize },
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::NoResults => write!(f, "No results"),
            Status::AllShown => write!(f, "Showing all terms"),
            Status::Partial { shown, total } => write!(f, "Showing {shown} of {total} terms"),
        }
    }
}

/// Complete display state produced by one [`render`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedView {
    pub cards: Vec<CardView>,
    pub status: Status,
    /// When true the presenter shows its "no results" panel instead of cards.
    pub empty_state: bool,
}

impl Default for RenderedView {
    fn default() -> Self {
        render(&[], 0)
    }
}

impl RenderedView {
    /// Terms of the rendered cards, in order.
    pub fn terms(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.term.as_str()).collect()
    }
}

/// Build the view for `entries` out of a store holding `total` entries.
pub fn render(entries: &[&GlossaryEntry], total: usize) -> RenderedView {
    if entries.is_empty() {
        return RenderedView {
            cards: Vec::new(),
            status: Status::NoResults,
            empty_state: true,
        };
    }

    let status = if entries.len() == total {
        Status::AllShown
    } else {
        Status::Partial {
            shown: entries.len(),
            total,
        }
    };

    RenderedView {
        cards: entries.iter().map(|e| CardView::from_entry(e)).collect(),
        status,
        empty_state: false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
