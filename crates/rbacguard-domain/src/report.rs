use std::fmt::Write as _;

/// Append-only sink for diagnostic lines.
///
/// Exactly two message shapes exist; both are observations, not errors. Lines
/// come out in append order with no sorting, dedup, or truncation. An empty
/// report is the success case.
#[derive(Clone, Debug, Default)]
pub struct ReportBuilder {
    out: String,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A binding references a role that does not exist in its namespace.
    pub fn role_not_found(&mut self, role_name: &str, binding_name: &str, namespace: &str) {
        // Infallible for String targets.
        let _ = writeln!(
            self.out,
            "serviceRoleNotFound: \"{role_name}\" used by ServiceRoleBinding \"{binding_name}\" at namespace \"{namespace}\""
        );
    }

    /// A role exists but no binding references it.
    pub fn role_not_used(&mut self, role_name: &str, namespace: &str) {
        let _ = writeln!(
            self.out,
            "serviceRoleNotUsed: ServiceRole \"{role_name}\" at namespace \"{namespace}\""
        );
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
