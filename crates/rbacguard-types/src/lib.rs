//! Stable policy object types shared across the rbacguard workspace.
//!
//! This crate is intentionally boring:
//! - typed ServiceRole / ServiceRoleBinding objects (the parser's output)
//! - the (namespace, name) role key
//! - canonical source-identifier handling

#![forbid(unsafe_code)]

pub mod key;
pub mod object;
pub mod source;

pub use key::RoleKey;
pub use object::{
    AccessRule, ObjectMeta, PolicyObject, RoleRef, ServiceRole, ServiceRoleBinding, Subject,
};
pub use source::PolicySource;
