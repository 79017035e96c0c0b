//! Glossary — the immutable, ordered data store every search runs against.
//!
//! [`Glossary::builtin`] returns the reference data set compiled into the
//! binary. [`Glossary::load`] reads a data file (TOML, JSON or YAML, picked by
//! extension) with a top-level `entries` array:
//!
//! ```toml
//! [[entries]]
//! term = "API"
//! description = "Application Programming Interface ..."
//! tags = ["Backend", "Integration", "Web"]
//! ```

use crate::types::GlossaryEntry;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Reference data set
// ---------------------------------------------------------------------------

type Record = (&'static str, &'static str, &'static [&'static str]);

const BUILTIN: &[Record] = &[
    (
        "API",
        "Application Programming Interface - a set of protocols and tools that allows different software applications to communicate with each other.",
        &["Backend", "Integration", "Web"],
    ),
    (
        "CI/CD",
        "Continuous Integration/Continuous Deployment - automated practices for integrating code changes and deploying applications to production.",
        &["DevOps", "Automation", "Development"],
    ),
    (
        "Machine Learning",
        "A subset of artificial intelligence that enables systems to learn and improve from experience without being explicitly programmed.",
        &["AI", "Data Science", "Algorithm"],
    ),
    (
        "Microservices",
        "An architectural style that structures an application as a collection of small, independent services that communicate over network protocols.",
        &["Architecture", "Backend", "Scalability"],
    ),
    (
        "RESTful",
        "Representational State Transfer - an architectural style for designing networked applications using stateless HTTP requests.",
        &["API", "Web", "Backend"],
    ),
    (
        "Docker",
        "A platform for developing, shipping, and running applications in isolated containers that package code and dependencies together.",
        &["DevOps", "Container", "Infrastructure"],
    ),
    (
        "GraphQL",
        "A query language for APIs that allows clients to request exactly the data they need, making APIs more flexible and efficient.",
        &["API", "Frontend", "Backend"],
    ),
    (
        "Kubernetes",
        "An open-source container orchestration platform that automates deployment, scaling, and management of containerized applications.",
        &["DevOps", "Container", "Orchestration"],
    ),
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to build a [`Glossary`] from external data.
#[derive(Debug, thiserror::Error)]
pub enum GlossaryError {
    #[error("failed to load glossary from {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },
    #[error("glossary entry #{index} has an empty term")]
    EmptyTerm { index: usize },
    #[error("glossary term {term:?} appears more than once")]
    DuplicateTerm { term: String },
}

// ---------------------------------------------------------------------------
// Glossary
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GlossaryFile {
    #[serde(default)]
    entries: Vec<GlossaryEntry>,
}

/// Ordered, immutable list of [`GlossaryEntry`] values.
///
/// Terms are non-empty and unique; both are checked once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glossary {
    entries: Vec<GlossaryEntry>,
}

impl Default for Glossary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Glossary {
    /// The 8-entry reference data set.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(term, description, tags)| {
                GlossaryEntry::new(*term, *description, tags.iter().copied())
            })
            .collect();
        Self { entries }
    }

    /// Build a glossary from arbitrary entries, rejecting empty and duplicate
    /// terms. Order is preserved.
    pub fn from_entries(entries: Vec<GlossaryEntry>) -> Result<Self, GlossaryError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if entry.term.trim().is_empty() {
                return Err(GlossaryError::EmptyTerm { index });
            }
            if !seen.insert(entry.term.as_str()) {
                return Err(GlossaryError::DuplicateTerm {
                    term: entry.term.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Load and validate a glossary data file.
    pub fn load(path: &Path) -> Result<Self, GlossaryError> {
        let file: GlossaryFile = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|source| GlossaryError::Load {
                path: path.to_path_buf(),
                source,
            })?;

        let glossary = Self::from_entries(file.entries)?;
        tracing::debug!(path = %path.display(), entries = glossary.len(), "glossary loaded");
        Ok(glossary)
    }

    pub fn entries(&self) -> &[GlossaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact (case-sensitive) lookup by term.
    pub fn get(&self, term: &str) -> Option<&GlossaryEntry> {
        self.entries.iter().find(|e| e.term == term)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
