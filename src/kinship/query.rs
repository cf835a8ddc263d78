//! Relation query entry point.

use crate::index::{PersonIndex, RelationRuleTable};
use crate::kinship::derive_relations;
use crate::model::{RelationResult, ToPersonId};

/// All relations of the person identified by `id`.
///
/// `id` may be malformed (`"abc"`, `""`, JSON `null`); an id that does not
/// normalize, or does not resolve in `index`, yields an empty list.
pub fn relations_for<K>(id: &K, index: &PersonIndex, rules: &RelationRuleTable) -> Vec<RelationResult>
where
    K: ToPersonId + ?Sized,
{
    match id.to_person_id().and_then(|id| index.get(id)) {
        Some(person) => derive_relations(person, index, rules),
        None => {
            log::debug!("No person for id {:?}", id.to_person_id());
            Vec::new()
        }
    }
}
