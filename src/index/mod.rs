//! Immutable lookup tables built once per batch of relation queries.
//!
//! Both tables are plain owned values: build them from the caller's
//! collections, then share them by reference (or behind an `Arc`) across
//! any number of concurrent queries.

mod persons;
mod rules;

pub use persons::PersonIndex;
pub use rules::{RelationRuleTable, RuleEntry};
