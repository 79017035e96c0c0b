//! Static data shared across harnesses.

/// Terms of the built-in glossary, in display order.
pub const BUILTIN_TERMS: &[&str] = &[
    "API",
    "CI/CD",
    "Machine Learning",
    "Microservices",
    "RESTful",
    "Docker",
    "GraphQL",
    "Kubernetes",
];

/// A small glossary file in TOML. `Sharding` relies on the field defaults.
pub const GLOSSARY_TOML: &str = r#"
[[entries]]
term = "Webhook"
description = "HTTP callback fired when an event happens"
tags = ["Web", "Integration"]

[[entries]]
term = "Idempotency"
description = "Repeating an operation has the same effect as doing it once"
tags = ["Backend"]

[[entries]]
term = "Sharding"
"#;

/// The same shape in JSON.
pub const GLOSSARY_JSON: &str = r#"{
  "entries": [
    { "term": "Webhook", "description": "HTTP callback fired when an event happens", "tags": ["Web"] },
    { "term": "Sharding", "description": "Splitting data across nodes", "tags": ["Database"] }
  ]
}"#;

pub fn strings(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|s| s.to_string()).collect()
}
