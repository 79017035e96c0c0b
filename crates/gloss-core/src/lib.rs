//! gloss-core — glossary data store, search engines and render model.
//!
//! Nothing in this crate knows how the glossary is displayed. The shell talks
//! to a display surface only through the [`session::Presenter`] trait.
//!
//! # Architecture
//!
//! ```text
//! Glossary ──► search::filter ──► render ──► Presenter
//!     └──────► search::suggest ────────────► Presenter
//! ```
//!
//! Every operation is synchronous and deterministic; [`session::Session`]
//! recomputes the full view on each input.

pub mod config;
pub mod glossary;
pub mod render;
pub mod search;
pub mod session;
pub mod tags;
pub mod types;

pub use glossary::{Glossary, GlossaryError};
pub use render::{render, CardView, RenderedView, Status, TagView};
pub use search::{filter, suggest, MAX_SUGGESTIONS};
pub use session::{Presenter, Session};
pub use types::{GlossaryEntry, TagTone};
