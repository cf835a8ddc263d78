//! Fixed-pattern kinship traversal.
//!
//! Every relation is reached through a bounded number of hops from the
//! subject (at most four: parent -> grandfather -> uncle/aunt -> cousin), so
//! cyclic or self-referencing records cannot make the walk diverge. Links
//! that do not resolve in the index are skipped silently.

use std::collections::HashSet;

use crate::index::{PersonIndex, RelationRuleTable};
use crate::kinship::labels::{self, Side};
use crate::model::{Person, PersonId, RelationResult};

/// Resolved father and mother, in that order.
fn parents<'a>(person: &Person, index: &'a PersonIndex) -> Vec<&'a Person> {
    [person.father_id, person.mother_id]
        .into_iter()
        .filter_map(|id| index.resolve(id))
        .collect()
}

fn children<'a>(person: &Person, index: &'a PersonIndex) -> Vec<&'a Person> {
    person
        .children_ids
        .iter()
        .filter_map(|&id| index.get(id))
        .collect()
}

/// Children of either parent other than the person. A full sibling shows
/// up once per shared parent.
fn siblings<'a>(person: &Person, index: &'a PersonIndex) -> Vec<&'a Person> {
    parents(person, index)
        .into_iter()
        .flat_map(|parent| parent.children_ids.iter())
        .filter(|&&id| Some(id) != person.id)
        .filter_map(|&id| index.get(id))
        .collect()
}

fn spouse<'a>(person: &Person, index: &'a PersonIndex) -> Option<&'a Person> {
    index.resolve(person.spouse_id)
}

/// Ordered, de-duplicated relation list under construction.
struct Relations<'r> {
    subject_id: Option<PersonId>,
    rules: &'r RelationRuleTable,
    seen: HashSet<(&'static str, PersonId)>,
    out: Vec<RelationResult>,
}

impl<'r> Relations<'r> {
    fn new(subject: &Person, rules: &'r RelationRuleTable) -> Self {
        Self {
            subject_id: subject.id,
            rules,
            seen: HashSet::new(),
            out: Vec::new(),
        }
    }

    fn add(&mut self, key: &'static str, related: &Person) {
        let Some(id) = related.id else {
            return;
        };
        if Some(id) == self.subject_id {
            return;
        }
        if !self.seen.insert((key, id)) {
            return;
        }
        self.out.push(RelationResult {
            relation_key: key.to_string(),
            translated_label: self.rules.label_for(key).to_string(),
            related: related.clone(),
        });
    }
}

/// Derive every named relation between `person` and the people reachable
/// from it in `index`.
///
/// Output order follows the traversal: parents, children, siblings, spouse,
/// grandparents, grandchildren, paternal then maternal uncles/aunts and
/// cousins, nephews/nieces, in-laws. The same person may appear under
/// several keys, but never twice under one key, and never as themselves.
pub fn derive_relations(
    person: &Person,
    index: &PersonIndex,
    rules: &RelationRuleTable,
) -> Vec<RelationResult> {
    let mut relations = Relations::new(person, rules);
    let father = index.resolve(person.father_id);
    let mother = index.resolve(person.mother_id);

    if let Some(father) = father {
        relations.add(labels::FATHER, father);
    }
    if let Some(mother) = mother {
        relations.add(labels::MOTHER, mother);
    }

    for child in children(person, index) {
        relations.add(labels::child(&child.gender), child);
    }

    for sibling in siblings(person, index) {
        relations.add(labels::sibling(&sibling.gender), sibling);
    }

    let spouse = spouse(person, index);
    if let Some(spouse) = spouse {
        relations.add(labels::spouse(&spouse.gender), spouse);
    }

    for (side, parent) in [(Side::Paternal, father), (Side::Maternal, mother)] {
        let Some(parent) = parent else {
            continue;
        };
        if let Some(grandfather) = index.resolve(parent.father_id) {
            relations.add(labels::grandparent(side, true), grandfather);
        }
        if let Some(grandmother) = index.resolve(parent.mother_id) {
            relations.add(labels::grandparent(side, false), grandmother);
        }
    }

    for child in children(person, index) {
        for grandchild in children(child, index) {
            relations.add(labels::grandchild(&grandchild.gender), grandchild);
        }
    }

    for (side, parent) in [(Side::Paternal, father), (Side::Maternal, mother)] {
        if let Some(parent) = parent {
            add_parents_siblings(&mut relations, side, parent, index);
        }
    }

    for sibling in siblings(person, index) {
        for child in children(sibling, index) {
            relations.add(labels::nephew_or_niece(&sibling.gender, &child.gender), child);
        }
    }

    if let Some(spouse) = spouse {
        if let Some(father_in_law) = index.resolve(spouse.father_id) {
            relations.add(labels::parent_in_law(true), father_in_law);
        }
        if let Some(mother_in_law) = index.resolve(spouse.mother_id) {
            relations.add(labels::parent_in_law(false), mother_in_law);
        }
        for sibling in siblings(spouse, index) {
            relations.add(labels::sibling_in_law(&person.gender, &sibling.gender), sibling);
        }
    }

    log::debug!(
        "Derived {} relations for person {:?}",
        relations.out.len(),
        person.id
    );
    relations.out
}

/// Uncles, aunts, their spouses, and cousins on one side.
///
/// The parent's siblings are the other children of the parent's *father*
/// on both sides; the parent's mother link is never consulted here.
fn add_parents_siblings(
    relations: &mut Relations<'_>,
    side: Side,
    parent: &Person,
    index: &PersonIndex,
) {
    let Some(grandfather) = index.resolve(parent.father_id) else {
        return;
    };
    for &id in &grandfather.children_ids {
        if Some(id) == parent.id {
            continue;
        }
        let Some(relative) = index.get(id) else {
            continue;
        };
        relations.add(labels::uncle_or_aunt(side, &relative.gender), relative);
        if let Some(relative_spouse) = index.resolve(relative.spouse_id) {
            relations.add(
                labels::uncle_or_aunt_by_marriage(side, &relative.gender),
                relative_spouse,
            );
        }
        for cousin in children(relative, index) {
            relations.add(labels::cousin(side, &cousin.gender), cousin);
        }
    }
}
