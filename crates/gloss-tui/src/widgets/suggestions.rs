//! Suggestion dropdown — floating list of matching terms under the search bar.
//!
//! The dropdown is an overlay: it clears the cells it covers and draws a
//! bordered list, one term per row, with the highlighted row inverted.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

/// Smallest area the dropdown draws into: two borders and one row.
pub const MIN_HEIGHT: u16 = 3;

pub struct Suggestions<'a> {
    terms: &'a [String],
    highlighted: usize,
    theme: &'a Theme,
}

impl<'a> Suggestions<'a> {
    pub fn new(terms: &'a [String], highlighted: usize, theme: &'a Theme) -> Self {
        Self {
            terms,
            highlighted,
            theme,
        }
    }

    /// Where the dropdown goes for `count` terms: directly under `anchor`,
    /// as wide as the anchor's text area, clipped to `bounds`.
    pub fn area(anchor: Rect, count: usize, bounds: Rect) -> Rect {
        let y = anchor.bottom();
        let wanted = count as u16 + 2;
        let height = wanted.min(bounds.bottom().saturating_sub(y));
        Rect {
            x: anchor.x + 1,
            y,
            width: anchor.width.saturating_sub(2).min(48),
            height,
        }
    }

    /// Index of the term drawn at terminal row `row`, if any, for a dropdown
    /// occupying `area`.
    pub fn row_at(area: Rect, row: u16, count: usize) -> Option<usize> {
        if row <= area.y || row >= area.bottom().saturating_sub(1) {
            return None;
        }
        let idx = (row - area.y - 1) as usize;
        (idx < count).then_some(idx)
    }
}

impl Widget for Suggestions<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < MIN_HEIGHT {
            return;
        }
        Clear.render(area, buf);

        let block = Block::bordered()
            .title(" Suggestions ")
            .border_style(self.theme.border_focused)
            .style(self.theme.suggestion);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .terms
            .iter()
            .enumerate()
            .map(|(i, term)| {
                let style = if i == self.highlighted {
                    self.theme.suggestion_selected
                } else {
                    self.theme.suggestion
                };
                let pad = (inner.width as usize).saturating_sub(term.chars().count() + 1);
                Line::from(Span::styled(format!(" {term}{}", " ".repeat(pad)), style))
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_util::render_to_lines;

    fn terms(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn area_sits_under_anchor() {
        let anchor = Rect::new(0, 0, 80, 3);
        let bounds = Rect::new(0, 0, 80, 24);
        let a = Suggestions::area(anchor, 2, bounds);
        assert_eq!(a, Rect::new(1, 3, 48, 4));
    }

    #[test]
    fn area_is_clipped_to_bounds() {
        let anchor = Rect::new(0, 0, 20, 3);
        let bounds = Rect::new(0, 0, 20, 5);
        let a = Suggestions::area(anchor, 5, bounds);
        assert_eq!(a.height, 2);
        assert_eq!(a.width, 18);
    }

    #[test]
    fn row_hit_testing() {
        let area = Rect::new(1, 3, 30, 4);
        assert_eq!(Suggestions::row_at(area, 3, 2), None); // top border
        assert_eq!(Suggestions::row_at(area, 4, 2), Some(0));
        assert_eq!(Suggestions::row_at(area, 5, 2), Some(1));
        assert_eq!(Suggestions::row_at(area, 6, 2), None); // bottom border
    }

    #[test]
    fn renders_each_term_on_its_own_row() {
        let theme = Theme::load_default();
        let t = terms(&["Docker", "Kubernetes"]);
        let lines = render_to_lines(Suggestions::new(&t, 1, &theme), 30, 4);
        assert!(lines[1].contains("Docker"));
        assert!(lines[2].contains("Kubernetes"));
    }
}
