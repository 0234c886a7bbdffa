use crate::model::PolicyIndex;
use crate::report::ReportBuilder;
use rbacguard_types::RoleKey;
use std::collections::BTreeSet;

/// Cross-reference bindings against the role registry, appending one
/// diagnostic line per defect.
///
/// Two passes, in this order:
/// 1. bindings in load order: an existing referenced role is marked used, a
///    missing one produces a not-found line immediately;
/// 2. registered roles in (namespace, name) order: anything unmarked
///    produces a not-used line.
///
/// Never fails; anomalies become report lines. Same index, same report.
pub fn check(index: &PolicyIndex, report: &mut ReportBuilder) {
    let mut used: BTreeSet<RoleKey> = BTreeSet::new();

    for binding in index.bindings() {
        let key = binding.referenced_key();
        if index.contains_role(&key) {
            used.insert(key);
        } else {
            report.role_not_found(
                &binding.role_ref.name,
                &binding.meta.name,
                &binding.meta.namespace,
            );
        }
    }

    for (key, _) in index.roles() {
        if !used.contains(key) {
            report.role_not_used(key.name(), key.namespace());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbacguard_types::{ObjectMeta, PolicyObject, RoleRef, ServiceRole, ServiceRoleBinding};

    fn role(namespace: &str, name: &str) -> PolicyObject {
        PolicyObject::Role(ServiceRole {
            meta: ObjectMeta {
                namespace: namespace.to_string(),
                name: name.to_string(),
            },
            rules: Vec::new(),
        })
    }

    fn binding(namespace: &str, name: &str, role_name: &str) -> PolicyObject {
        PolicyObject::Binding(ServiceRoleBinding {
            meta: ObjectMeta {
                namespace: namespace.to_string(),
                name: name.to_string(),
            },
            subjects: Vec::new(),
            role_ref: RoleRef {
                kind: "ServiceRole".to_string(),
                name: role_name.to_string(),
            },
        })
    }

    fn run(objects: Vec<PolicyObject>) -> String {
        let mut index = PolicyIndex::new();
        index.ingest(objects);
        let mut report = ReportBuilder::new();
        check(&index, &mut report);
        report.into_string()
    }

    #[test]
    fn consistent_policy_set_yields_empty_report() {
        let report = run(vec![
            role("default", "viewer"),
            role("default", "editor"),
            binding("default", "bind-viewer", "viewer"),
            binding("default", "bind-editor", "editor"),
        ]);
        assert_eq!(report, "");
    }

    #[test]
    fn unreferenced_role_is_reported_unused() {
        let report = run(vec![
            role("default", "role-a"),
            role("default", "role-b"),
            binding("default", "bind-1", "role-a"),
        ]);
        assert_eq!(
            report,
            "serviceRoleNotUsed: ServiceRole \"role-b\" at namespace \"default\"\n"
        );
    }

    #[test]
    fn binding_to_missing_role_is_reported_not_found() {
        let report = run(vec![binding("default", "bind-x", "missing-role")]);
        assert_eq!(
            report,
            "serviceRoleNotFound: \"missing-role\" used by ServiceRoleBinding \"bind-x\" at namespace \"default\"\n"
        );
    }

    #[test]
    fn duplicate_role_definitions_produce_no_diagnostic() {
        // Later definition wins in the registry; the overwrite is silent.
        let report = run(vec![
            role("default", "viewer"),
            role("default", "viewer"),
            binding("default", "bind-1", "viewer"),
        ]);
        assert_eq!(report, "");
    }

    #[test]
    fn role_in_other_namespace_does_not_satisfy_reference() {
        let report = run(vec![
            role("ns2", "viewer"),
            binding("ns1", "bind-1", "viewer"),
        ]);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines[0],
            "serviceRoleNotFound: \"viewer\" used by ServiceRoleBinding \"bind-1\" at namespace \"ns1\""
        );
        // The ns2 role is also unreferenced.
        assert_eq!(
            lines[1],
            "serviceRoleNotUsed: ServiceRole \"viewer\" at namespace \"ns2\""
        );
    }

    #[test]
    fn not_found_lines_follow_binding_load_order() {
        let report = run(vec![
            binding("default", "bind-b", "gone-1"),
            binding("default", "bind-a", "gone-2"),
        ]);
        let lines: Vec<&str> = report.lines().collect();
        assert!(lines[0].contains("\"bind-b\""));
        assert!(lines[1].contains("\"bind-a\""));
    }

    #[test]
    fn unused_lines_are_sorted_by_namespace_then_name() {
        let report = run(vec![
            role("ns2", "alpha"),
            role("ns1", "zulu"),
            role("ns1", "alpha"),
        ]);
        let lines: Vec<&str> = report.lines().collect();
        assert!(lines[0].contains("\"alpha\"") && lines[0].contains("\"ns1\""));
        assert!(lines[1].contains("\"zulu\"") && lines[1].contains("\"ns1\""));
        assert!(lines[2].contains("\"alpha\"") && lines[2].contains("\"ns2\""));
    }

    #[test]
    fn every_binding_to_a_missing_role_reports_separately() {
        let report = run(vec![
            binding("default", "bind-1", "gone"),
            binding("default", "bind-2", "gone"),
        ]);
        assert_eq!(report.lines().count(), 2);
    }

    #[test]
    fn checking_does_not_mutate_the_index() {
        let mut index = PolicyIndex::new();
        index.ingest(vec![
            role("default", "viewer"),
            binding("default", "bind-1", "viewer"),
        ]);

        let mut first = ReportBuilder::new();
        check(&index, &mut first);
        let mut second = ReportBuilder::new();
        check(&index, &mut second);

        assert_eq!(first.as_str(), second.as_str());
        assert_eq!(index.role_count(), 1);
        assert_eq!(index.binding_count(), 1);
    }
}
