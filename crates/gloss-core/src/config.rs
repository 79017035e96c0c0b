//! Configuration types for gloss.
//!
//! [`Config::load`] reads `~/.config/gloss/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ui]
theme             = "default"
show_status       = true
highlight_matches = true

[glossary]
# Path to a TOML/JSON/YAML file with an `entries` array. Empty = built-in set.
path = ""
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/gloss/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub glossary: GlossaryConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_show_status")]
    pub show_status: bool,
    #[serde(default = "default_highlight_matches")]
    pub highlight_matches: bool,
}

fn default_theme() -> String { "default".to_string() }
fn default_show_status() -> bool { true }
fn default_highlight_matches() -> bool { true }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_status: default_show_status(),
            highlight_matches: default_highlight_matches(),
        }
    }
}

/// `[glossary]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlossaryConfig {
    #[serde(default)]
    pub path: String,
}

impl GlossaryConfig {
    /// The configured data file, or `None` for the built-in set.
    pub fn path(&self) -> Option<PathBuf> {
        let p = self.path.trim();
        (!p.is_empty()).then(|| PathBuf::from(p))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/gloss/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::from_sources(Some(path))
    }

    /// Read `~/.config/gloss/config.toml` if present, without creating it.
    pub fn read() -> anyhow::Result<Self> {
        Self::from_sources(Some(config_path()))
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Layer an optional user file over the built-in defaults.
    pub fn from_sources(user: Option<PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        if let Some(path) = user {
            builder = builder.add_source(config::File::from(path.as_path()).required(false));
        }
        builder.build()?.try_deserialize().map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("gloss")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
