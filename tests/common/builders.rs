//! Test builders — ergonomic constructors for entries, glossaries, and a
//! presenter that records every call it receives.
//!
//! These panic on invalid input rather than returning `Result`.

use gloss::{Glossary, GlossaryEntry, Presenter, RenderedView};

// ---------------------------------------------------------------------------
// EntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`GlossaryEntry`] fixtures.
///
/// ```rust,ignore
/// let entry = EntryBuilder::new("Webhook")
///     .description("HTTP callback fired on an event")
///     .tag("Web")
///     .build();
/// ```
pub struct EntryBuilder {
    term: String,
    description: String,
    tags: Vec<String>,
}

impl EntryBuilder {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            description: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn build(self) -> GlossaryEntry {
        GlossaryEntry::new(self.term, self.description, self.tags)
    }
}

/// Glossary from a list of built entries. Panics on duplicate or empty terms.
pub fn glossary_of(entries: Vec<GlossaryEntry>) -> Glossary {
    Glossary::from_entries(entries).expect("valid test glossary")
}

/// `n` synthetic entries. Every third one is tagged `Backend` and mentions
/// "latency" in its description.
pub fn synthetic_entries(n: usize) -> Vec<GlossaryEntry> {
    (0..n)
        .map(|i| {
            let b = EntryBuilder::new(format!("Term {i:04}"));
            if i % 3 == 0 {
                b.description(format!("Entry {i} about request latency"))
                    .tag("Backend")
                    .build()
            } else {
                b.description(format!("Entry {i} about something else"))
                    .tag("Frontend")
                    .build()
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// RecordingPresenter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Render(Vec<String>),
    Show(Vec<String>),
    Hide,
    Clear(bool),
}

/// Presenter that keeps the last surface state and a log of every call.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub calls: Vec<Call>,
    pub view: Option<RenderedView>,
    pub suggestions: Option<Vec<String>>,
    pub clear_visible: bool,
}

impl RecordingPresenter {
    pub fn shown_terms(&self) -> Vec<String> {
        self.view
            .as_ref()
            .map(|v| v.cards.iter().map(|c| c.term.clone()).collect())
            .unwrap_or_default()
    }

    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, view: &RenderedView) {
        self.calls
            .push(Call::Render(view.cards.iter().map(|c| c.term.clone()).collect()));
        self.view = Some(view.clone());
    }

    fn show_suggestions(&mut self, terms: &[String]) {
        self.calls.push(Call::Show(terms.to_vec()));
        self.suggestions = Some(terms.to_vec());
    }

    fn hide_suggestions(&mut self) {
        self.calls.push(Call::Hide);
        self.suggestions = None;
    }

    fn set_clear_visible(&mut self, visible: bool) {
        self.calls.push(Call::Clear(visible));
        self.clear_visible = visible;
    }
}
