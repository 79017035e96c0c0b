//! Status bar — one row at the bottom: result count on the left, key hints on
//! the right.

use crate::theme::Theme;
use gloss_core::Status;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    status: Status,
    show_status: bool,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(status: Status, show_status: bool, theme: &'a Theme) -> Self {
        Self {
            status,
            show_status,
            theme,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.show_status {
            let text = format!(" {}", self.status);
            buf.set_stringn(area.x, area.y, &text, area.width as usize, self.theme.status);
        }

        let hint = " /:search  Tab:focus  ?:help  Ctrl+c:quit ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
