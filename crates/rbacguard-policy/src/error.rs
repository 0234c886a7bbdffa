use rbacguard_types::PolicySource;
use thiserror::Error;

/// Fatal failure while reading or parsing a policy source.
///
/// Distinct from a diagnostic: a LoadError aborts the whole run before any
/// checking happens. Sources are read once, with no retries; either every
/// source loads or the run fails as a whole.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read policy file {source_id}: {err}")]
    Read {
        source_id: PolicySource,
        #[source]
        err: std::io::Error,
    },

    #[error("parse policy file {source_id}: {err}")]
    Parse {
        source_id: PolicySource,
        #[source]
        err: serde_yaml::Error,
    },

    #[error("malformed document in {source_id}: {detail}")]
    Malformed {
        source_id: PolicySource,
        detail: String,
    },
}

impl LoadError {
    /// Identifier of the source that failed to load.
    pub fn source_id(&self) -> &PolicySource {
        match self {
            LoadError::Read { source_id, .. }
            | LoadError::Parse { source_id, .. }
            | LoadError::Malformed { source_id, .. } => source_id,
        }
    }
}
