//! Colour theme for the gloss TUI.
//!
//! Themes are defined as TOML files. The built-in themes are embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk. Call [`Theme::by_name`] at startup and pass the result through the
//! application as a shared reference.
//!
//! # Tag colours
//!
//! The core resolves each tag to a [`TagTone`]; the `[tags]` table of a theme
//! maps every tone name to a style. A tone missing from the table falls back
//! to the theme's `gray` entry.

use config::{Config, File, FileFormat};
use gloss_core::TagTone;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use std::collections::HashMap;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types — mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underlined {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawSearch {
    highlight: RawStyle,
    clear: RawStyle,
    placeholder: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawCards {
    term: RawStyle,
    description: RawStyle,
    empty: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawSuggestions {
    normal: RawStyle,
    selected: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawStatus {
    text: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    borders: RawBorders,
    search: RawSearch,
    cards: RawCards,
    suggestions: RawSuggestions,
    status: RawStatus,
    #[serde(default)]
    tags: HashMap<String, RawStyle>,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme.
///
/// All styles are pre-resolved ratatui [`Style`] values; nothing is parsed at
/// render time.
#[derive(Debug, Clone)]
pub struct Theme {
    pub border_focused: Style,
    pub border_unfocused: Style,

    /// Inline highlight applied to the matched part of terms and descriptions.
    pub search_highlight: Style,
    /// The `✕` clear affordance in the search bar.
    pub search_clear: Style,
    pub search_placeholder: Style,

    pub card_term: Style,
    pub card_description: Style,
    /// Text of the "no results" panel.
    pub card_empty: Style,

    pub suggestion: Style,
    pub suggestion_selected: Style,

    pub status: Style,

    tag_styles: HashMap<TagTone, Style>,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded Gruvbox Dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Pick a built-in theme by its config name. Unknown names get the default.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Self::load_gruvbox_dark(),
            other => {
                if other != "default" {
                    tracing::debug!(theme = other, "unknown theme, using default");
                }
                Self::load_default()
            }
        }
    }

    /// Parse a theme from a TOML string.
    ///
    /// Unknown keys are ignored so user themes stay forward-compatible.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        let mut raw_tags = raw.tags;
        let tag_styles = TagTone::ALL
            .iter()
            .filter_map(|tone| {
                raw_tags
                    .remove(tone.name())
                    .map(|s| (*tone, s.into_style()))
            })
            .collect();

        Ok(Self {
            border_focused: raw.borders.focused.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            search_highlight: raw.search.highlight.into_style(),
            search_clear: raw.search.clear.into_style(),
            search_placeholder: raw.search.placeholder.into_style(),
            card_term: raw.cards.term.into_style(),
            card_description: raw.cards.description.into_style(),
            card_empty: raw.cards.empty.into_style(),
            suggestion: raw.suggestions.normal.into_style(),
            suggestion_selected: raw.suggestions.selected.into_style(),
            status: raw.status.text.into_style(),
            tag_styles,
        })
    }

    /// Style for a tag chip. Total: tones missing from the theme use the
    /// `gray` entry, or the terminal default if that is missing too.
    pub fn tag_style(&self, tone: TagTone) -> Style {
        self.tag_styles
            .get(&tone)
            .or_else(|| self.tag_styles.get(&TagTone::Gray))
            .copied()
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
