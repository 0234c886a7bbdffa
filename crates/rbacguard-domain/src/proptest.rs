//! Property tests for the checker over arbitrary small policy sets.

use crate::model::PolicyIndex;
use crate::report::ReportBuilder;
use proptest::prelude::*;
use rbacguard_types::{
    ObjectMeta, PolicyObject, RoleKey, RoleRef, ServiceRole, ServiceRoleBinding,
};
use std::collections::BTreeSet;

fn namespace() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["default", "ns-a", "ns-b"]).prop_map(str::to_string)
}

fn short_name() -> impl Strategy<Value = String> {
    "[a-c]{1,2}"
}

type RoleSpec = (String, String);
type BindingSpec = (String, String, String);

fn objects_from(roles: &[RoleSpec], bindings: &[BindingSpec]) -> Vec<PolicyObject> {
    let mut objects: Vec<PolicyObject> = roles
        .iter()
        .map(|(ns, name)| {
            PolicyObject::Role(ServiceRole {
                meta: ObjectMeta {
                    namespace: ns.clone(),
                    name: name.clone(),
                },
                rules: Vec::new(),
            })
        })
        .collect();
    objects.extend(bindings.iter().map(|(ns, name, role_name)| {
        PolicyObject::Binding(ServiceRoleBinding {
            meta: ObjectMeta {
                namespace: ns.clone(),
                name: name.clone(),
            },
            subjects: Vec::new(),
            role_ref: RoleRef {
                kind: "ServiceRole".to_string(),
                name: role_name.clone(),
            },
        })
    }));
    objects
}

fn run(roles: &[RoleSpec], bindings: &[BindingSpec]) -> String {
    let mut index = PolicyIndex::new();
    index.ingest(objects_from(roles, bindings));
    let mut report = ReportBuilder::new();
    crate::check(&index, &mut report);
    report.into_string()
}

proptest! {
    #[test]
    fn report_counts_match_set_arithmetic(
        roles in prop::collection::vec((namespace(), short_name()), 0..6),
        bindings in prop::collection::vec((namespace(), short_name(), short_name()), 0..6),
    ) {
        let text = run(&roles, &bindings);

        let registry: BTreeSet<RoleKey> = roles
            .iter()
            .map(|(ns, name)| RoleKey::new(ns.clone(), name.clone()))
            .collect();
        let referenced: BTreeSet<RoleKey> = bindings
            .iter()
            .map(|(ns, _, role_name)| RoleKey::new(ns.clone(), role_name.clone()))
            .collect();

        let expected_not_found = bindings
            .iter()
            .filter(|(ns, _, role_name)| !registry.contains(&RoleKey::new(ns.clone(), role_name.clone())))
            .count();
        let expected_not_used = registry.iter().filter(|key| !referenced.contains(key)).count();

        let not_found = text.lines().filter(|l| l.starts_with("serviceRoleNotFound:")).count();
        let not_used = text.lines().filter(|l| l.starts_with("serviceRoleNotUsed:")).count();

        prop_assert_eq!(not_found, expected_not_found);
        prop_assert_eq!(not_used, expected_not_used);
        prop_assert_eq!(text.lines().count(), not_found + not_used);
    }

    #[test]
    fn not_found_lines_always_precede_not_used_lines(
        roles in prop::collection::vec((namespace(), short_name()), 0..6),
        bindings in prop::collection::vec((namespace(), short_name(), short_name()), 0..6),
    ) {
        let text = run(&roles, &bindings);

        let mut seen_not_used = false;
        for line in text.lines() {
            if line.starts_with("serviceRoleNotUsed:") {
                seen_not_used = true;
            } else {
                prop_assert!(!seen_not_used, "not-found line after a not-used line: {line}");
            }
        }
    }

    #[test]
    fn identical_input_yields_identical_report(
        roles in prop::collection::vec((namespace(), short_name()), 0..6),
        bindings in prop::collection::vec((namespace(), short_name(), short_name()), 0..6),
    ) {
        prop_assert_eq!(run(&roles, &bindings), run(&roles, &bindings));
    }
}
