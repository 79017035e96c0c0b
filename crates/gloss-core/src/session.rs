//! Session — the event-driven shell around the search engines.
//!
//! A [`Session`] owns the data store and the single piece of mutable state,
//! the current query. Each input signal recomputes the whole display from
//! scratch and pushes it through a [`Presenter`]; nothing is patched
//! incrementally and no handler keeps work pending after it returns.
//!
//! ```text
//! input ──► filter ──► render ──► Presenter::render
//!   └─────► suggest ─────────────► Presenter::show_suggestions / hide_suggestions
//! ```

use crate::glossary::Glossary;
use crate::render::{render, RenderedView};
use crate::search::{filter, suggest};

/// Capabilities a display surface must offer to host a [`Session`].
///
/// Implementations only store or draw what they are given; all decisions
/// about what to show are made by the session.
pub trait Presenter {
    /// Replace the displayed cards, status line and empty-state flag.
    fn render(&mut self, view: &RenderedView);
    /// Show the suggestion dropdown with these terms.
    fn show_suggestions(&mut self, terms: &[String]);
    /// Hide the suggestion dropdown.
    fn hide_suggestions(&mut self);
    /// Toggle the "clear query" affordance.
    fn set_clear_visible(&mut self, visible: bool);
}

#[derive(Debug, Clone)]
pub struct Session {
    glossary: Glossary,
    query: String,
}

impl Session {
    pub fn new(glossary: Glossary) -> Self {
        Self {
            glossary,
            query: String::new(),
        }
    }

    pub fn glossary(&self) -> &Glossary {
        &self.glossary
    }

    /// The raw (un-normalised) query as last typed or selected.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The view for the current query.
    pub fn view(&self) -> RenderedView {
        let entries = self.glossary.entries();
        render(&filter(&self.query, entries), entries.len())
    }

    /// Suggestions for the current query.
    pub fn suggestions(&self) -> Vec<String> {
        suggest(&self.query, self.glossary.entries())
    }

    /// Draw the initial state: every entry, no suggestions, no clear button.
    pub fn start<P: Presenter>(&mut self, presenter: &mut P) {
        self.query.clear();
        presenter.render(&self.view());
        presenter.set_clear_visible(false);
        presenter.hide_suggestions();
    }

    /// The query input changed to `value`.
    pub fn input<P: Presenter>(&mut self, value: &str, presenter: &mut P) {
        self.query.clear();
        self.query.push_str(value);

        let view = self.view();
        tracing::debug!(query = %self.query, status = %view.status, "session: input");
        presenter.render(&view);
        presenter.set_clear_visible(!self.query.is_empty());

        let terms = self.suggestions();
        if terms.is_empty() {
            presenter.hide_suggestions();
        } else {
            presenter.show_suggestions(&terms);
        }
    }

    /// A suggestion was picked: search for exactly that term.
    pub fn select<P: Presenter>(&mut self, term: &str, presenter: &mut P) {
        self.query.clear();
        self.query.push_str(term);

        let view = self.view();
        tracing::debug!(term, status = %view.status, "session: suggestion selected");
        presenter.render(&view);
        presenter.set_clear_visible(!self.query.is_empty());
        presenter.hide_suggestions();
    }

    /// Reset to the empty query and the full list.
    pub fn clear<P: Presenter>(&mut self, presenter: &mut P) {
        tracing::debug!("session: cleared");
        self.query.clear();
        presenter.render(&self.view());
        presenter.set_clear_visible(false);
        presenter.hide_suggestions();
    }

    /// Hide suggestions without touching the query or the results.
    pub fn dismiss<P: Presenter>(&self, presenter: &mut P) {
        tracing::debug!("session: suggestions dismissed");
        presenter.hide_suggestions();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
