//! Search bar widget — single-line text input at the top of the screen.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//!
//! When the session marks the query as clearable, a `✕` is drawn at the right
//! edge; [`SearchBar::clear_button_area`] gives its hit box for mouse clicks.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

const CLEAR_GLYPH: &str = " ✕ ";
const CLEAR_WIDTH: u16 = 3;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SearchBarState {
    /// The query text as typed.
    pub query: String,
    /// Byte offset of the cursor within `query`.
    pub cursor: usize,
}

impl SearchBarState {
    /// Apply an editing event. Returns `true` when the query text changed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.query.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(query = %self.query, cursor = self.cursor, "search: char inserted");
                true
            }
            AppEvent::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let prev = self.query[..self.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                self.query.remove(prev);
                self.cursor = prev;
                tracing::debug!(query = %self.query, cursor = self.cursor, "search: backspace");
                true
            }
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = self.query[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                }
                false
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.query.len() {
                    self.cursor = self.query[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.query.len());
                }
                false
            }
            _ => false,
        }
    }

    /// Replace the text (e.g. with a selected suggestion) and park the cursor
    /// at the end.
    pub fn set(&mut self, text: &str) {
        self.query.clear();
        self.query.push_str(text);
        self.cursor = self.query.len();
    }

    pub fn reset(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SearchBar<'a> {
    state: &'a SearchBarState,
    focused: bool,
    clear_visible: bool,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    pub fn new(
        state: &'a SearchBarState,
        focused: bool,
        clear_visible: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            focused,
            clear_visible,
            theme,
        }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.query[..self.state.cursor].chars().count() as u16;
        let limit = area.right().saturating_sub(1 + CLEAR_WIDTH);
        let x = (area.x + 1 + col).min(limit);
        (x, area.y + 1)
    }

    /// Hit box of the `✕` affordance for a bar drawn in `area`.
    pub fn clear_button_area(area: Rect) -> Rect {
        Rect {
            x: area.right().saturating_sub(1 + CLEAR_WIDTH),
            y: area.y + 1,
            width: CLEAR_WIDTH.min(area.width),
            height: 1.min(area.height),
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered().title(" Search ").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let text_area = Rect {
            width: inner.width.saturating_sub(CLEAR_WIDTH),
            ..inner
        };

        let line = if self.state.query.is_empty() && !self.focused {
            Line::from(Span::styled(
                "press / to search terms, descriptions and tags",
                self.theme.search_placeholder,
            ))
        } else {
            Line::from(self.state.query.as_str())
        };
        Paragraph::new(line).render(text_area, buf);

        if self.clear_visible {
            let btn = Self::clear_button_area(area);
            buf.set_string(btn.x, btn.y, CLEAR_GLYPH, self.theme.search_clear);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
