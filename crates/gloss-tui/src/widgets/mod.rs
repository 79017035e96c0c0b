//! Ratatui widgets for the gloss TUI.

pub mod card_list;
pub mod help;
pub mod search_bar;
pub mod status_bar;
pub mod suggestions;

#[cfg(test)]
pub(crate) mod test_util;
