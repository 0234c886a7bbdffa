use crate::error::LoadError;
use rbacguard_types::{
    AccessRule, ObjectMeta, PolicyObject, PolicySource, RoleRef, ServiceRole, ServiceRoleBinding,
    Subject,
};
use serde::Deserialize;

const KIND_SERVICE_ROLE: &str = "ServiceRole";
const KIND_SERVICE_ROLE_BINDING: &str = "ServiceRoleBinding";

/// Namespace substituted when a document omits `metadata.namespace`.
const DEFAULT_NAMESPACE: &str = "default";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDocument {
    kind: String,
    metadata: RawMeta,
    spec: serde_yaml::Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMeta {
    name: String,
    namespace: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRoleSpec {
    rules: Vec<AccessRule>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawBindingSpec {
    subjects: Vec<Subject>,
    role_ref: RoleRef,
}

/// Parse one YAML stream into typed policy objects, preserving document
/// order. Documents of unrecognized kinds are skipped; recognized kinds with
/// missing identity are fatal.
pub fn parse_documents(
    text: &str,
    source_id: &PolicySource,
) -> Result<Vec<PolicyObject>, LoadError> {
    let mut objects = Vec::new();

    for document in serde_yaml::Deserializer::from_str(text) {
        let value =
            serde_yaml::Value::deserialize(document).map_err(|err| LoadError::Parse {
                source_id: source_id.clone(),
                err,
            })?;
        if value.is_null() {
            // Empty document between `---` separators.
            continue;
        }

        let raw: RawDocument =
            serde_yaml::from_value(value).map_err(|err| LoadError::Parse {
                source_id: source_id.clone(),
                err,
            })?;

        match raw.kind.as_str() {
            KIND_SERVICE_ROLE => objects.push(PolicyObject::Role(role_from_raw(raw, source_id)?)),
            KIND_SERVICE_ROLE_BINDING => {
                objects.push(PolicyObject::Binding(binding_from_raw(raw, source_id)?));
            }
            // Other kinds in the same stream are not ours to validate.
            _ => {}
        }
    }

    Ok(objects)
}

fn meta_from_raw(raw: RawMeta, kind: &str, source_id: &PolicySource) -> Result<ObjectMeta, LoadError> {
    if raw.name.is_empty() {
        return Err(LoadError::Malformed {
            source_id: source_id.clone(),
            detail: format!("{kind} without metadata.name"),
        });
    }
    let namespace = if raw.namespace.is_empty() {
        DEFAULT_NAMESPACE.to_string()
    } else {
        raw.namespace
    };
    Ok(ObjectMeta {
        namespace,
        name: raw.name,
    })
}

fn spec_from_value<T>(
    value: serde_yaml::Value,
    source_id: &PolicySource,
) -> Result<T, LoadError>
where
    T: Default + for<'de> Deserialize<'de>,
{
    if value.is_null() {
        return Ok(T::default());
    }
    serde_yaml::from_value(value).map_err(|err| LoadError::Parse {
        source_id: source_id.clone(),
        err,
    })
}

fn role_from_raw(raw: RawDocument, source_id: &PolicySource) -> Result<ServiceRole, LoadError> {
    let meta = meta_from_raw(raw.metadata, KIND_SERVICE_ROLE, source_id)?;
    let spec: RawRoleSpec = spec_from_value(raw.spec, source_id)?;
    Ok(ServiceRole {
        meta,
        rules: spec.rules,
    })
}

fn binding_from_raw(
    raw: RawDocument,
    source_id: &PolicySource,
) -> Result<ServiceRoleBinding, LoadError> {
    let meta = meta_from_raw(raw.metadata, KIND_SERVICE_ROLE_BINDING, source_id)?;
    let spec: RawBindingSpec = spec_from_value(raw.spec, source_id)?;
    if spec.role_ref.name.is_empty() {
        return Err(LoadError::Malformed {
            source_id: source_id.clone(),
            detail: format!(
                "ServiceRoleBinding \"{}\" without spec.roleRef.name",
                meta.name
            ),
        });
    }
    Ok(ServiceRoleBinding {
        meta,
        subjects: spec.subjects,
        role_ref: spec.role_ref,
    })
}
