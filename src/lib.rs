//! gloss — terminal glossary browser.
//!
//! The binary has two faces: the interactive TUI (`gloss-tui`) and a headless
//! mode that prints one search to stdout. Both drive the same engines from
//! `gloss-core`, re-exported here so integration tests can import one crate.
//!
//! # Architecture
//!
//! ```text
//! Glossary ──► filter / suggest ──► render ──► Presenter (TUI)
//!                                     └──────► headless writer (stdout)
//! ```

pub mod headless;

pub use gloss_core::{
    config, filter, render, suggest, CardView, Glossary, GlossaryEntry, GlossaryError, Presenter,
    RenderedView, Session, Status, TagTone, TagView, MAX_SUGGESTIONS,
};
