//! The `validate` use case: load policy sources, cross-reference, report.

use camino::Utf8PathBuf;
use rbacguard_domain::model::PolicyIndex;
use rbacguard_domain::report::ReportBuilder;
use rbacguard_policy::LoadError;

/// Drives one load -> check run over a fixed set of policy files, owning the
/// index and report for that run.
///
/// A validator is single-use: `run` consumes it, and all per-run state is
/// dropped once the caller has the report. Validating changed sources
/// requires a fresh instance.
#[derive(Clone, Debug)]
pub struct Validator {
    policy_files: Vec<Utf8PathBuf>,
}

impl Validator {
    pub fn new(policy_files: Vec<Utf8PathBuf>) -> Self {
        Self { policy_files }
    }

    /// Load every source, then check. Any unreadable or unparsable source
    /// fails the run before checking begins, with no partial report. The
    /// check itself cannot fail; its result may be the empty string.
    pub fn run(self) -> Result<String, LoadError> {
        let objects = rbacguard_policy::load_policy_files(&self.policy_files)?;

        let mut index = PolicyIndex::new();
        index.ingest(objects);

        let mut report = ReportBuilder::new();
        rbacguard_domain::check(&index, &mut report);
        Ok(report.into_string())
    }
}
