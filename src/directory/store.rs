//! In-memory person store: point lookups and predicate filtering.

use std::collections::HashMap;

use crate::directory::types::{Person, PersonId};

/// Read-only store of person records, keyed by id. Loaded once, never
/// mutated afterwards.
#[derive(Debug)]
pub struct PersonStore {
    people: Vec<Person>,
    by_id: HashMap<PersonId, usize>,
}

/// Composable filter predicates. All supplied predicates are ANDed;
/// omitted predicates impose no constraint.
///
/// The inclusive (`min_age`/`max_age`) and exclusive
/// (`age_greater_than`/`age_less_than`) bounds are independent — both on
/// the same side are honored simultaneously if both are supplied.
#[derive(Debug, Clone, Default)]
pub struct PersonFilter {
    /// Case-insensitive substring match on the name.
    pub name_contains: Option<String>,
    /// Case-insensitive substring match on the email.
    pub email_contains: Option<String>,
    /// `age >= min_age`.
    pub min_age: Option<u32>,
    /// `age <= max_age`.
    pub max_age: Option<u32>,
    /// `age > age_greater_than`.
    pub age_greater_than: Option<u32>,
    /// `age < age_less_than`.
    pub age_less_than: Option<u32>,
}

impl PersonFilter {
    fn matches(&self, person: &Person) -> bool {
        if let Some(name) = &self.name_contains {
            if !person.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(email) = &self.email_contains {
            if !person.email.to_lowercase().contains(&email.to_lowercase()) {
                return false;
            }
        }
        if let Some(min) = self.min_age {
            if person.age < min {
                return false;
            }
        }
        if let Some(max) = self.max_age {
            if person.age > max {
                return false;
            }
        }
        if let Some(floor) = self.age_greater_than {
            if person.age <= floor {
                return false;
            }
        }
        if let Some(ceil) = self.age_less_than {
            if person.age >= ceil {
                return false;
            }
        }
        true
    }
}

impl PersonStore {
    /// Build a store from a list of records. Ids are expected to be
    /// unique; on a duplicate, the first record wins.
    pub fn new(people: Vec<Person>) -> Self {
        let mut by_id = HashMap::with_capacity(people.len());
        for (idx, person) in people.iter().enumerate() {
            by_id.entry(person.id).or_insert(idx);
        }
        Self { people, by_id }
    }

    /// Look up one person by id.
    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.by_id.get(&id).map(|&idx| &self.people[idx])
    }

    /// All records, in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// All records matching every supplied predicate, in load order.
    pub fn filter(&self, filter: &PersonFilter) -> Vec<&Person> {
        self.people.iter().filter(|p| filter.matches(p)).collect()
    }
}
