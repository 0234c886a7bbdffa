use rbacguard_types::{PolicyObject, RoleKey, ServiceRole, ServiceRoleBinding};
use std::collections::BTreeMap;

/// Namespace-scoped role lookup plus the bindings that reference it.
///
/// The registry is keyed by (namespace, name); two roles collapsing to the
/// same key keep only the later one. Bindings keep their load order, which
/// fixes the order of the not-found diagnostics.
#[derive(Clone, Debug, Default)]
pub struct PolicyIndex {
    roles: BTreeMap<RoleKey, ServiceRole>,
    bindings: Vec<ServiceRoleBinding>,
}

impl PolicyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Partition already-typed objects into the role registry and the
    /// binding list. No validation happens here; malformed objects were the
    /// parser's to reject.
    pub fn ingest<I>(&mut self, objects: I)
    where
        I: IntoIterator<Item = PolicyObject>,
    {
        for object in objects {
            match object {
                PolicyObject::Role(role) => {
                    self.roles.insert(role.key(), role);
                }
                PolicyObject::Binding(binding) => self.bindings.push(binding),
            }
        }
    }

    pub fn contains_role(&self, key: &RoleKey) -> bool {
        self.roles.contains_key(key)
    }

    /// Registered roles in ascending (namespace, name) order.
    pub fn roles(&self) -> impl Iterator<Item = (&RoleKey, &ServiceRole)> {
        self.roles.iter()
    }

    /// Bindings in load order.
    pub fn bindings(&self) -> &[ServiceRoleBinding] {
        &self.bindings
    }

    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }
}
