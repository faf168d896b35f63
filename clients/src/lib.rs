//! Shared plumbing for the semgraph client binaries: logging setup and
//! definition-document loading.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use semgraph::OntologyDocument;
use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, or `debug` with
/// `verbose`.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .init();
}

/// Reads an ontology-definition document, choosing TOML or JSON by extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unknown extension,
/// or does not deserialize into an [`OntologyDocument`].
pub fn load_document(path: &Path) -> Result<OntologyDocument> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("toml") => toml::from_str(&text)
            .with_context(|| format!("Failed to parse TOML document {}", path.display())),
        Some("json") => serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse JSON document {}", path.display())),
        _ => bail!(
            "Unsupported document extension for {} (expected .toml or .json)",
            path.display()
        ),
    }
}
