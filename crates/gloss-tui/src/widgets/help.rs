//! Help popup — centred floating overlay listing all keybindings.
//!
//! Toggle with `?` (card list) or `F1` (anywhere); close with the same key or
//! `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("Ctrl+c", "Quit"),
    ("q", "Quit (card list)"),
    ("Tab", "Toggle focus: search ↔ cards"),
    ("/", "Focus search bar"),
    ("type", "Filter terms, descriptions and tags"),
    ("↓ / ↑", "Move through suggestions"),
    ("Enter", "Pick highlighted suggestion"),
    ("Escape", "Hide suggestions / leave search"),
    ("Ctrl+u  /  c", "Clear the search"),
    ("click ✕", "Clear the search"),
    ("click outside", "Hide suggestions"),
    ("↑ k  /  ↓ j", "Scroll cards"),
    ("PageUp / PageDown", "Scroll cards by a page"),
    ("?  /  F1", "Toggle this help popup"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(64, BINDINGS.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" gloss — keybindings (? to close) ")
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<20}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
