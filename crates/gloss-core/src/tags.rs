//! Tag → [`TagTone`] lookup.
//!
//! The table is a compile-time perfect hash map; any tag missing from it
//! resolves to [`DEFAULT_TONE`].

use crate::types::TagTone;
use phf::phf_map;

/// Tone used for tags with no entry in [`TAG_TONES`].
pub const DEFAULT_TONE: TagTone = TagTone::Gray;

/// Known category tags. Keys are matched exactly (case-sensitive).
pub static TAG_TONES: phf::Map<&'static str, TagTone> = phf_map! {
    "Backend" => TagTone::Blue,
    "Frontend" => TagTone::Green,
    "DevOps" => TagTone::Purple,
    "API" => TagTone::Amber,
    "Web" => TagTone::Pink,
    "Integration" => TagTone::Indigo,
    "Automation" => TagTone::Red,
    "Development" => TagTone::Cyan,
    "AI" => TagTone::Orange,
    "Data Science" => TagTone::Teal,
    "Algorithm" => TagTone::Lime,
    "Architecture" => TagTone::Violet,
    "Scalability" => TagTone::Sky,
    "Container" => TagTone::Emerald,
    "Infrastructure" => TagTone::Slate,
    "Orchestration" => TagTone::Fuchsia,
};

/// Resolve a tag to its tone. Total: unknown tags get [`DEFAULT_TONE`].
pub fn tone_for(tag: &str) -> TagTone {
    TAG_TONES.get(tag).copied().unwrap_or(DEFAULT_TONE)
}

/// Accessible label announced for a tag, e.g. `Category: Backend`.
pub fn category_label(tag: &str) -> String {
    format!("Category: {tag}")
}
