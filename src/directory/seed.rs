//! The static demo dataset.
//!
//! Rebuilt fresh on every process start; nothing here persists. The
//! relationship edges read "a is `label` b" — e.g. `(1, 14, ParentOf)`
//! declares Alice as Noah's parent.

use crate::directory::types::Gender::{Female, Male};
use crate::directory::types::RelationLabel::{Friend, ParentOf, Sibling, Spouse};
use crate::directory::types::{Gender, Person, RelationEdge};

fn person(id: u32, name: &str, email: &str, age: u32, gender: Gender) -> Person {
    Person {
        id,
        name: name.into(),
        email: email.into(),
        age,
        gender,
    }
}

/// All seed records.
pub fn people() -> Vec<Person> {
    vec![
        person(1, "Alice", "alice@example.com", 30, Female),
        person(2, "Bob", "bob@example.com", 25, Male),
        person(3, "Charlie", "charlie@example.com", 35, Male),
        person(4, "David", "david.wilson@example.com", 28, Male),
        person(5, "Emma", "emma.johnson@example.com", 32, Female),
        person(6, "Frank", "frank.smith@example.com", 27, Male),
        person(7, "Grace", "grace.lee@example.com", 31, Female),
        person(8, "Henry", "henry.brown@example.com", 29, Male),
        person(9, "Ivy", "ivy.martinez@example.com", 26, Female),
        person(10, "Jack", "jack.taylor@example.com", 33, Male),
        person(11, "Karen", "karen.anderson@example.com", 28, Female),
        person(12, "Leo", "leo.thompson@example.com", 30, Male),
        person(13, "Mia", "mia.garcia@example.com", 25, Female),
        person(14, "Noah", "noah.wilson@example.com", 6, Male),
        person(15, "Olivia", "olivia.wilson@example.com", 4, Female),
        person(16, "Rose", "rose.bennett@example.com", 58, Female),
    ]
}

/// All seed edges. At most one edge per pair; at most one spouse per
/// person (caller contract — the graph does not verify either).
pub fn edges() -> Vec<RelationEdge> {
    vec![
        RelationEdge::new(1, 4, Spouse),
        RelationEdge::new(5, 10, Spouse),
        RelationEdge::new(7, 8, Spouse),
        RelationEdge::new(11, 12, Spouse),
        RelationEdge::new(1, 14, ParentOf),
        RelationEdge::new(4, 14, ParentOf),
        RelationEdge::new(1, 15, ParentOf),
        RelationEdge::new(4, 15, ParentOf),
        RelationEdge::new(16, 1, ParentOf),
        RelationEdge::new(14, 15, Sibling),
        RelationEdge::new(2, 6, Friend),
        RelationEdge::new(3, 9, Friend),
        RelationEdge::new(13, 9, Friend),
    ]
}
