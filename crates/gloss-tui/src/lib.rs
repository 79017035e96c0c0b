//! gloss TUI — ratatui application shell.
//!
//! The shell owns a [`gloss_core::Session`] and implements its
//! [`Presenter`](gloss_core::Presenter) in [`view::ViewState`]; widgets only
//! read that state when drawing.

pub mod app;
pub mod event;
pub mod theme;
pub mod view;
pub mod widgets;

pub use app::App;

use gloss_core::{config::Config, Glossary};

/// Start the TUI over `glossary` with the theme named in `config`.
pub fn run(glossary: Glossary, config: Config) -> anyhow::Result<()> {
    let theme = theme::Theme::by_name(&config.ui.theme);
    tracing::info!(entries = glossary.len(), theme = %config.ui.theme, "starting TUI");
    App::new(glossary, config, theme).run()
}
