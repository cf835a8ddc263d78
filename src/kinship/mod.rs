//! Kinship inference: derive named relations ("Father", "Cousin (Paternal,
//! Male)", "Sister-in-law (husband’s sister)", ...) from parent, spouse and
//! children links.
//!
//! The engine is a pure function of a person, a [`PersonIndex`] and a
//! [`RelationRuleTable`]. It never fails: dangling links drop the relation,
//! missing rules leave the label empty.
//!
//! [`PersonIndex`]: crate::index::PersonIndex
//! [`RelationRuleTable`]: crate::index::RelationRuleTable

mod derive;
pub mod labels;
mod query;

pub use derive::derive_relations;
pub use labels::{is_male_label, Side};
pub use query::relations_for;
