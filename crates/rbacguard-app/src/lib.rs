//! Use case orchestration for rbacguard.
//!
//! The CLI crate depends on this; it only handles argument parsing and
//! printing. All loading and checking is driven from here.

#![forbid(unsafe_code)]

mod validate;

pub use validate::Validator;
