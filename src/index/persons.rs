//! Person Index: id -> person lookup.

use std::collections::HashMap;

use crate::model::{Person, PersonId};

/// Lookup of people by serial number.
#[derive(Debug, Clone, Default)]
pub struct PersonIndex {
    by_id: HashMap<PersonId, Person>,
}

impl PersonIndex {
    /// Build the index. Records without a usable id are skipped; on duplicate
    /// ids the later record wins.
    pub fn build<I>(persons: I) -> Self
    where
        I: IntoIterator<Item = Person>,
    {
        let mut by_id = HashMap::new();
        let mut skipped = 0usize;
        for person in persons {
            match person.id {
                Some(id) => {
                    by_id.insert(id, person);
                }
                None => skipped += 1,
            }
        }
        log::debug!(
            "Person index built: {} people, {} records without id skipped",
            by_id.len(),
            skipped
        );
        Self { by_id }
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.by_id.get(&id)
    }

    /// Resolve an optional link; dangling and absent links both yield `None`.
    pub fn resolve(&self, id: Option<PersonId>) -> Option<&Person> {
        id.and_then(|id| self.by_id.get(&id))
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.by_id.values()
    }
}

impl FromIterator<Person> for PersonIndex {
    fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
        Self::build(iter)
    }
}
