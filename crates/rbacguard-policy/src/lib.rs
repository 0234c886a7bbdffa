//! Policy document adapters: read policy files and parse YAML streams into
//! typed role/binding objects.
//!
//! This crate is allowed to do filesystem IO. Everything downstream of it
//! (the index and the checker) operates on already-typed objects only.

#![forbid(unsafe_code)]

mod error;
mod parse;

pub use error::LoadError;
pub use parse::parse_documents;

use camino::Utf8PathBuf;
use rbacguard_types::{PolicyObject, PolicySource};

/// Load typed policy objects from the given files.
///
/// Object order is file order, then document order within each file; that
/// order is what fixes binding diagnostics downstream. Loading is
/// all-or-nothing: the first unreadable or unparsable source fails the whole
/// load and no objects are returned.
pub fn load_policy_files(files: &[Utf8PathBuf]) -> Result<Vec<PolicyObject>, LoadError> {
    let mut objects = Vec::new();
    for path in files {
        let source_id = PolicySource::from(path.as_path());
        let text = std::fs::read_to_string(path).map_err(|err| LoadError::Read {
            source_id: source_id.clone(),
            err,
        })?;
        objects.extend(parse_documents(&text, &source_id)?);
    }
    Ok(objects)
}

/// Fuzz-friendly API for testing parsing robustness without filesystem
/// access. Designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Parse arbitrary text as a policy YAML stream.
    ///
    /// Returns `Ok(...)` for well-formed streams, `Err(...)` otherwise.
    /// **Never panics** on any input.
    pub fn parse_policy_text(text: &str) -> Result<usize, LoadError> {
        let source_id = PolicySource::new("fuzz.yaml");
        Ok(parse_documents(text, &source_id)?.len())
    }
}
