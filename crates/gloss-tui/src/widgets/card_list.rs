//! Card list widget — the scrollable body showing one card per glossary entry.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` / wheel up | Scroll up one card |
//! | `↓` / `j` / wheel down | Scroll down one card |
//! | `PageUp` / `Ctrl+u` | Scroll up one page |
//! | `PageDown` / `Ctrl+d` | Scroll down one page |
//!
//! # Card layout
//!
//! ```text
//!  Term
//!   description, word-wrapped to the pane width
//!   [Tag] [Tag] [Tag]
//! ```
//!
//! `scroll` is the index of the first visible card. It is reset to 0 whenever
//! a new view is rendered, so stale positions never outlive their results.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use gloss_core::{CardView, RenderedView};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

const PAGE_STEP: usize = 3;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct CardListState {
    /// Index of the first visible card.
    pub scroll: usize,
}

impl CardListState {
    /// Handle a navigation event for a list of `count` cards.
    pub fn handle(&mut self, event: &AppEvent, count: usize) {
        let last = count.saturating_sub(1);
        let before = self.scroll;
        match event {
            AppEvent::Nav(Direction::Up) | AppEvent::Wheel(Direction::Up) => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) | AppEvent::Wheel(Direction::Down) => {
                self.scroll = (self.scroll + 1).min(last);
            }
            AppEvent::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(PAGE_STEP);
            }
            AppEvent::ScrollDown => {
                self.scroll = (self.scroll + PAGE_STEP).min(last);
            }
            _ => return,
        }
        if self.scroll != before {
            tracing::debug!(scroll = self.scroll, "cards: scrolled");
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct CardList<'a> {
    view: &'a RenderedView,
    state: &'a CardListState,
    /// Normalised query to highlight, or `None` to disable highlighting.
    needle: Option<&'a str>,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> CardList<'a> {
    pub fn new(
        view: &'a RenderedView,
        state: &'a CardListState,
        needle: Option<&'a str>,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            view,
            state,
            needle,
            focused,
            theme,
        }
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let top = area.height.saturating_sub(2) / 2;
        let mut lines: Vec<Line> = (0..top).map(|_| Line::default()).collect();
        lines.push(Line::from(Span::styled("No matching terms", self.theme.card_empty)));
        lines.push(Line::from(Span::styled(
            "Try a different search, or press Ctrl+u to clear",
            self.theme.card_empty,
        )));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for CardList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let block = Block::bordered().title(" Glossary ").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.view.empty_state {
            self.render_empty(inner, buf);
            return;
        }

        // Text (fill) + 1-column scrollbar strip inside the borders.
        let text_area = Rect {
            width: inner.width.saturating_sub(1),
            ..inner
        };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        let height = text_area.height as usize;
        let start = self.state.scroll.min(self.view.cards.len().saturating_sub(1));
        let mut lines: Vec<Line<'static>> = Vec::with_capacity(height);
        for card in &self.view.cards[start..] {
            if lines.len() >= height {
                break;
            }
            lines.extend(card_lines(card, text_area.width as usize, self.needle, self.theme));
        }
        lines.truncate(height);

        Paragraph::new(lines).render(text_area, buf);

        let mut sb_state = ScrollbarState::new(self.view.cards.len())
            .position(start)
            .viewport_content_length(1);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Card rendering
// ---------------------------------------------------------------------------

/// Lines for one card, including the trailing blank separator.
pub fn card_lines(
    card: &CardView,
    width: usize,
    needle: Option<&str>,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut heading = vec![Span::raw(" ")];
    heading.extend(highlight_spans(&card.term, needle, theme.card_term, theme.search_highlight));
    lines.push(Line::from(heading));

    for row in wrap_words(&card.description, width.saturating_sub(3)) {
        let mut spans = vec![Span::raw("  ")];
        spans.extend(highlight_spans(
            &row,
            needle,
            theme.card_description,
            theme.search_highlight,
        ));
        lines.push(Line::from(spans));
    }

    if !card.tags.is_empty() {
        let mut chips = vec![Span::raw("  ")];
        for (i, tag) in card.tags.iter().enumerate() {
            if i > 0 {
                chips.push(Span::raw(" "));
            }
            chips.push(Span::styled(format!(" {} ", tag.name), theme.tag_style(tag.tone)));
        }
        lines.push(Line::from(chips));
    }

    lines.push(Line::default());
    lines
}

/// Split `text` into spans, styling every case-insensitive occurrence of
/// `needle` with `hl`.
///
/// Matching runs on a per-char lowercase fold. Each folded byte remembers the
/// original char it came from, so a match is widened to whole chars of `text`
/// even when lowercasing changes a char's byte length.
pub fn highlight_spans(
    text: &str,
    needle: Option<&str>,
    base: Style,
    hl: Style,
) -> Vec<Span<'static>> {
    let needle = match needle {
        Some(n) if !n.is_empty() => n,
        _ => return vec![Span::styled(text.to_string(), base)],
    };

    // owner[i]: byte range in `text` of the char that produced folded byte i.
    let mut folded = String::with_capacity(text.len());
    let mut owner: Vec<(usize, usize)> = Vec::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        let range = (i, i + c.len_utf8());
        for lc in c.to_lowercase() {
            folded.push(lc);
            owner.extend(std::iter::repeat(range).take(lc.len_utf8()));
        }
    }

    let mut spans = Vec::new();
    let mut pos = 0;
    for (start, m) in folded.match_indices(needle) {
        let from = owner[start].0.max(pos);
        let to = owner[start + m.len() - 1].1;
        if to <= from {
            continue;
        }
        if from > pos {
            spans.push(Span::styled(text[pos..from].to_string(), base));
        }
        spans.push(Span::styled(text[from..to].to_string(), hl));
        pos = to;
    }
    if pos < text.len() || spans.is_empty() {
        spans.push(Span::styled(text[pos..].to_string(), base));
    }
    spans
}

/// Greedy word wrap. Words longer than `width` are split across rows.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > width {
            if row_len > 0 {
                rows.push(std::mem::take(&mut row));
                row_len = 0;
            }
            let rest = chars.split_off(width);
            rows.push(chars.into_iter().collect());
            chars = rest;
        }
        let word_len = chars.len();
        if word_len == 0 {
            continue;
        }
        if row_len > 0 && row_len + 1 + word_len > width {
            rows.push(std::mem::take(&mut row));
            row_len = 0;
        }
        if row_len > 0 {
            row.push(' ');
            row_len += 1;
        }
        row.extend(chars);
        row_len += word_len;
    }
    if row_len > 0 {
        rows.push(row);
    }
    rows
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
