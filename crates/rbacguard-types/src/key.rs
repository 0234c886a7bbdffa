use std::fmt;

/// Unique identifier for a role: the (namespace, name) pair.
///
/// Kept as a genuine pair rather than a `namespace/name` string join, so a
/// separator appearing inside either field can never make two distinct roles
/// collide. The derived `Ord` compares namespace first, then name, which is
/// the traversal order the unused-role pass relies on.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoleKey {
    namespace: String,
    name: String,
}

impl RoleKey {
    pub fn new<N: Into<String>, S: Into<String>>(namespace: N, name: S) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RoleKey {
    /// Human-readable `namespace/name` form, for messages only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}
