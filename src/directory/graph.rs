//! Relationship graph: a precomputed bidirectional adjacency index over
//! the person store.
//!
//! Built once at startup from the declared edge list. Every edge
//! `{a, b, label}` produces two adjacency entries: `{b, label}` at `a`
//! and `{a, inverse(label)}` at `b`. Every query afterwards is a label
//! filter over one person's neighbor list, O(degree) instead of O(edges).

use std::collections::HashMap;

use crate::directory::store::PersonStore;
use crate::directory::types::{Neighbor, PersonId, RelationEdge, RelationLabel};
use crate::directory::DirectoryError;

/// Read-only adjacency index. Every id present in the store has an entry,
/// possibly empty.
#[derive(Debug)]
pub struct RelationGraph {
    adjacency: HashMap<PersonId, Vec<Neighbor>>,
}

impl RelationGraph {
    /// Build the index from the full edge list.
    ///
    /// Fails with [`DirectoryError::DanglingReference`] if an edge names
    /// an id absent from the store. Edges connecting the same pair twice
    /// are not deduplicated or verified; the first-declared entry wins in
    /// [`RelationGraph::relation_between`].
    pub fn build(edges: &[RelationEdge], store: &PersonStore) -> Result<Self, DirectoryError> {
        let mut adjacency: HashMap<PersonId, Vec<Neighbor>> = HashMap::with_capacity(store.len());
        for person in store.iter() {
            adjacency.insert(person.id, Vec::new());
        }

        for edge in edges {
            let a = store
                .get(edge.a)
                .ok_or(DirectoryError::DanglingReference(edge.a))?;
            let b = store
                .get(edge.b)
                .ok_or(DirectoryError::DanglingReference(edge.b))?;

            adjacency
                .get_mut(&edge.a)
                .expect("seeded above from the store")
                .push(Neighbor {
                    id: b.id,
                    name: b.name.clone(),
                    label: edge.label,
                });
            adjacency
                .get_mut(&edge.b)
                .expect("seeded above from the store")
                .push(Neighbor {
                    id: a.id,
                    name: a.name.clone(),
                    label: edge.label.inverse(),
                });
        }

        Ok(Self { adjacency })
    }

    /// All neighbors of `id`, in edge declaration order.
    pub fn neighbors(&self, id: PersonId) -> Result<&[Neighbor], DirectoryError> {
        self.adjacency
            .get(&id)
            .map(Vec::as_slice)
            .ok_or(DirectoryError::NotFound(id))
    }

    /// The label of the first declared edge between `a` and `b` (in
    /// either direction), or `None` if no edge connects them.
    pub fn relation_between(
        &self,
        a: PersonId,
        b: PersonId,
    ) -> Result<Option<RelationLabel>, DirectoryError> {
        Ok(self
            .neighbors(a)?
            .iter()
            .find(|n| n.id == b)
            .map(|n| n.label))
    }

    /// Neighbors of `id`, optionally restricted to an exact label.
    /// `None` returns all neighbors.
    pub fn filter_by_label(
        &self,
        id: PersonId,
        label: Option<RelationLabel>,
    ) -> Result<Vec<&Neighbor>, DirectoryError> {
        let neighbors = self.neighbors(id)?;
        Ok(match label {
            None => neighbors.iter().collect(),
            Some(label) => neighbors.iter().filter(|n| n.label == label).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::types::{Gender, Person};

    fn person(id: PersonId, name: &str) -> Person {
        Person {
            id,
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            age: 30,
            gender: Gender::Female,
        }
    }

    #[test]
    fn every_edge_appears_at_both_endpoints_with_inverted_label() {
        let store = PersonStore::new(vec![person(1, "Ann"), person(2, "Ben")]);
        let edges = [RelationEdge::new(1, 2, RelationLabel::ParentOf)];
        let graph = RelationGraph::build(&edges, &store).unwrap();

        let at_a = graph.neighbors(1).unwrap();
        assert_eq!(at_a.len(), 1);
        assert_eq!(at_a[0].id, 2);
        assert_eq!(at_a[0].name, "Ben");
        assert_eq!(at_a[0].label, RelationLabel::ParentOf);

        let at_b = graph.neighbors(2).unwrap();
        assert_eq!(at_b.len(), 1);
        assert_eq!(at_b[0].id, 1);
        assert_eq!(at_b[0].label, RelationLabel::ChildOf);
    }

    #[test]
    fn build_rejects_dangling_endpoint() {
        let store = PersonStore::new(vec![person(1, "Ann")]);
        let edges = [RelationEdge::new(1, 99, RelationLabel::Friend)];
        let err = RelationGraph::build(&edges, &store).unwrap_err();
        assert_eq!(err, DirectoryError::DanglingReference(99));
    }

    #[test]
    fn isolated_person_has_an_empty_entry() {
        let store = PersonStore::new(vec![person(1, "Ann"), person(2, "Ben")]);
        let graph = RelationGraph::build(&[], &store).unwrap();
        assert!(graph.neighbors(2).unwrap().is_empty());
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = PersonStore::new(vec![person(1, "Ann")]);
        let graph = RelationGraph::build(&[], &store).unwrap();
        assert_eq!(
            graph.neighbors(42).unwrap_err(),
            DirectoryError::NotFound(42)
        );
    }
}
