//! Data-quality report over a person collection.
//!
//! The relation engine tolerates inconsistent links; this report is how
//! maintainers find them. Nothing here modifies the records.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::index::PersonIndex;
use crate::model::{Person, PersonId};

/// Which link field of a record a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LinkField {
    #[serde(rename = "fatherSerNo")]
    Father,
    #[serde(rename = "motherSerNo")]
    Mother,
    #[serde(rename = "spouseSerNo")]
    Spouse,
    #[serde(rename = "childrenSerNos")]
    Child,
}

impl fmt::Display for LinkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LinkField::Father => "fatherSerNo",
            LinkField::Mother => "motherSerNo",
            LinkField::Spouse => "spouseSerNo",
            LinkField::Child => "childrenSerNos",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateId {
    pub id: PersonId,
    pub occurrences: usize,
}

/// A link naming an id that is not in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DanglingReference {
    pub person_id: PersonId,
    pub field: LinkField,
    pub target_id: PersonId,
}

/// `person_id` names `spouse_id`, whose own spouse link points elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpouseMismatch {
    pub person_id: PersonId,
    pub spouse_id: PersonId,
    pub spouses_spouse_id: Option<PersonId>,
}

/// `child_id` names `parent_id` as a parent, but the parent's children omit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlistedChild {
    pub child_id: PersonId,
    pub parent_id: PersonId,
    pub field: LinkField,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub total_records: usize,
    /// Positions (0-based) of records without a usable id.
    pub records_without_id: Vec<usize>,
    pub duplicate_ids: Vec<DuplicateId>,
    pub dangling_references: Vec<DanglingReference>,
    pub spouse_mismatches: Vec<SpouseMismatch>,
    pub unlisted_children: Vec<UnlistedChild>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.records_without_id.is_empty()
            && self.duplicate_ids.is_empty()
            && self.dangling_references.is_empty()
            && self.spouse_mismatches.is_empty()
            && self.unlisted_children.is_empty()
    }

    /// Total number of findings.
    pub fn issue_count(&self) -> usize {
        self.records_without_id.len()
            + self.duplicate_ids.len()
            + self.dangling_references.len()
            + self.spouse_mismatches.len()
            + self.unlisted_children.len()
    }
}

/// Audit a person collection. Duplicate ids are resolved the way the person
/// index resolves them (last record wins) before links are checked.
pub fn audit_persons(persons: &[Person]) -> AuditReport {
    let mut report = AuditReport {
        total_records: persons.len(),
        ..AuditReport::default()
    };

    let mut occurrences: HashMap<PersonId, usize> = HashMap::new();
    for (position, person) in persons.iter().enumerate() {
        match person.id {
            Some(id) => *occurrences.entry(id).or_insert(0) += 1,
            None => report.records_without_id.push(position),
        }
    }
    report.duplicate_ids = occurrences
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(id, occurrences)| DuplicateId { id, occurrences })
        .collect();
    report.duplicate_ids.sort_by_key(|d| d.id);

    let index = PersonIndex::build(persons.iter().cloned());
    let mut people: Vec<&Person> = index.iter().collect();
    people.sort_by_key(|p| p.id);

    for person in people {
        let Some(person_id) = person.id else {
            continue;
        };
        check_links(&mut report, &index, person_id, person);
    }

    log::debug!(
        "Audited {} records: {} issues",
        report.total_records,
        report.issue_count()
    );
    report
}

fn check_links(report: &mut AuditReport, index: &PersonIndex, person_id: PersonId, person: &Person) {
    let parent_links = [
        (LinkField::Father, person.father_id),
        (LinkField::Mother, person.mother_id),
    ];
    for (field, target) in parent_links {
        let Some(target_id) = target else {
            continue;
        };
        match index.get(target_id) {
            None => report.dangling_references.push(DanglingReference {
                person_id,
                field,
                target_id,
            }),
            Some(parent) if !parent.children_ids.contains(&person_id) => {
                report.unlisted_children.push(UnlistedChild {
                    child_id: person_id,
                    parent_id: target_id,
                    field,
                })
            }
            Some(_) => {}
        }
    }

    if let Some(spouse_id) = person.spouse_id {
        match index.get(spouse_id) {
            None => report.dangling_references.push(DanglingReference {
                person_id,
                field: LinkField::Spouse,
                target_id: spouse_id,
            }),
            Some(spouse) if spouse.spouse_id != Some(person_id) => {
                report.spouse_mismatches.push(SpouseMismatch {
                    person_id,
                    spouse_id,
                    spouses_spouse_id: spouse.spouse_id,
                })
            }
            Some(_) => {}
        }
    }

    for &child_id in &person.children_ids {
        if !index.contains(child_id) {
            report.dangling_references.push(DanglingReference {
                person_id,
                field: LinkField::Child,
                target_id: child_id,
            });
        }
    }
}
