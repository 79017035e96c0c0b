//! Display-surface state — the TUI's [`Presenter`].
//!
//! The session pushes results in; the draw pass reads them out. Nothing here
//! decides *what* to show.

use crate::widgets::card_list::CardListState;
use gloss_core::{Presenter, RenderedView};

#[derive(Debug, Default)]
pub struct ViewState {
    pub view: RenderedView,
    pub cards: CardListState,
    pub suggestions: Vec<String>,
    pub suggestions_visible: bool,
    /// Index into `suggestions` of the keyboard-highlighted row.
    pub highlighted: usize,
    pub clear_visible: bool,
}

impl ViewState {
    /// The highlighted suggestion, if the dropdown is open.
    pub fn current_suggestion(&self) -> Option<&str> {
        if !self.suggestions_visible {
            return None;
        }
        self.suggestions.get(self.highlighted).map(String::as_str)
    }

    pub fn highlight_next(&mut self) {
        if !self.suggestions.is_empty() {
            self.highlighted = (self.highlighted + 1) % self.suggestions.len();
        }
    }

    pub fn highlight_prev(&mut self) {
        if !self.suggestions.is_empty() {
            self.highlighted = self
                .highlighted
                .checked_sub(1)
                .unwrap_or(self.suggestions.len() - 1);
        }
    }
}

impl Presenter for ViewState {
    fn render(&mut self, view: &RenderedView) {
        self.view = view.clone();
        self.cards.scroll = 0;
    }

    fn show_suggestions(&mut self, terms: &[String]) {
        self.suggestions = terms.to_vec();
        self.suggestions_visible = true;
        self.highlighted = 0;
    }

    fn hide_suggestions(&mut self) {
        self.suggestions_visible = false;
        self.highlighted = 0;
    }

    fn set_clear_visible(&mut self, visible: bool) {
        self.clear_visible = visible;
    }
}
