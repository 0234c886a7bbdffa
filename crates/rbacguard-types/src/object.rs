use crate::RoleKey;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Identity shared by every policy object: both fields are non-empty once
/// parsed (the loader substitutes the `default` namespace for an omitted one).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectMeta {
    pub namespace: String,
    pub name: String,
}

/// One access grant inside a ServiceRole spec. Parsed and retained, but the
/// reference checker never looks inside.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AccessRule {
    pub services: Vec<String>,
    pub methods: Vec<String>,
    pub paths: Vec<String>,
}

/// A subject granted a role by a binding. Opaque to the checker.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Subject {
    pub user: Option<String>,
    pub group: Option<String>,
    pub properties: BTreeMap<String, String>,
}

/// The role a binding points at, by name within the binding's own namespace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RoleRef {
    pub kind: String,
    pub name: String,
}

/// A namespace-scoped permission grant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceRole {
    pub meta: ObjectMeta,
    pub rules: Vec<AccessRule>,
}

impl ServiceRole {
    pub fn key(&self) -> RoleKey {
        RoleKey::new(self.meta.namespace.clone(), self.meta.name.clone())
    }
}

/// An assignment of a ServiceRole to one or more subjects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceRoleBinding {
    pub meta: ObjectMeta,
    pub subjects: Vec<Subject>,
    pub role_ref: RoleRef,
}

impl ServiceRoleBinding {
    /// Key of the role this binding references. Role references are resolved
    /// within the binding's own namespace; there is no cross-namespace form.
    pub fn referenced_key(&self) -> RoleKey {
        RoleKey::new(self.meta.namespace.clone(), self.role_ref.name.clone())
    }
}

/// A parsed policy object, tagged by kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicyObject {
    Role(ServiceRole),
    Binding(ServiceRoleBinding),
}
