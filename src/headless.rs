//! Headless mode — run one query and print the result instead of starting the
//! TUI.
//!
//! Text output mirrors a card: term, indented description, bracketed tags,
//! then a blank line. The status line closes the listing. JSON output is the
//! serialised [`RenderedView`] (or the bare suggestion array).

use crate::{filter, render, suggest, Glossary, RenderedView};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Filter `glossary` by `query` and write the rendered cards.
pub fn print_results<W: Write>(
    out: &mut W,
    glossary: &Glossary,
    query: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let entries = glossary.entries();
    let view = render(&filter(query, entries), entries.len());
    tracing::debug!(query, status = %view.status, "headless: results");
    write_view(out, &view, format)
}

/// Write the suggestions for `query`, one per line (or a JSON array).
pub fn print_suggestions<W: Write>(
    out: &mut W,
    glossary: &Glossary,
    query: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let terms = suggest(query, glossary.entries());
    tracing::debug!(query, count = terms.len(), "headless: suggestions");
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &terms)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for term in &terms {
                writeln!(out, "{term}")?;
            }
        }
    }
    Ok(())
}

pub fn write_view<W: Write>(
    out: &mut W,
    view: &RenderedView,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, view)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for card in &view.cards {
                writeln!(out, "{}", card.term)?;
                if !card.description.is_empty() {
                    writeln!(out, "  {}", card.description)?;
                }
                if !card.tags.is_empty() {
                    let tags: Vec<String> = card
                        .tags
                        .iter()
                        .map(|t| format!("[{}]", t.name))
                        .collect();
                    writeln!(out, "  {}", tags.join(" "))?;
                }
                writeln!(out)?;
            }
            writeln!(out, "{}", view.status)?;
        }
    }
    Ok(())
}
