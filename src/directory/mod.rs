//! The people directory: person store, relationship graph, and the
//! immutable context object that owns both.
//!
//! A [`Directory`] is constructed once (from the seed data or a custom
//! dataset), is read-only afterwards, and is shared across concurrent
//! tool calls without locking. Tests build their own instances.

pub mod graph;
pub mod seed;
pub mod store;
pub mod types;

use graph::RelationGraph;
use store::PersonStore;
use types::{Person, PersonId, RelationEdge, RelationLabel, CHILD_TO_PARENT, PARENT_TO_CHILD};

/// Directory-level failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// The id is absent from the store.
    #[error("person not found: {0}")]
    NotFound(PersonId),
    /// An edge names an id absent from the store. Fatal at startup.
    #[error("relation edge references unknown person: {0}")]
    DanglingReference(PersonId),
}

/// The immutable store + graph context passed into every component.
#[derive(Debug)]
pub struct Directory {
    store: PersonStore,
    graph: RelationGraph,
}

impl Directory {
    /// Build a directory from a dataset. Fails with
    /// [`DirectoryError::DanglingReference`] on a malformed edge list.
    pub fn new(people: Vec<Person>, edges: &[RelationEdge]) -> Result<Self, DirectoryError> {
        let store = PersonStore::new(people);
        let graph = RelationGraph::build(edges, &store)?;
        Ok(Self { store, graph })
    }

    /// Build the demo directory from the static seed data.
    pub fn seeded() -> Result<Self, DirectoryError> {
        Self::new(seed::people(), &seed::edges())
    }

    pub fn store(&self) -> &PersonStore {
        &self.store
    }

    pub fn graph(&self) -> &RelationGraph {
        &self.graph
    }

    /// The first spouse-labeled neighbor, resolved to a person record.
    /// The seed data declares at most one spouse per person.
    pub fn spouse_of(&self, id: PersonId) -> Result<Option<&Person>, DirectoryError> {
        let spouse = self
            .graph
            .neighbors(id)?
            .iter()
            .find(|n| n.label == RelationLabel::Spouse)
            .and_then(|n| self.store.get(n.id));
        Ok(spouse)
    }

    /// Neighbors reached through a parent→child label, resolved to
    /// person records.
    pub fn children_of(&self, id: PersonId) -> Result<Vec<&Person>, DirectoryError> {
        self.resolve_by_labels(id, PARENT_TO_CHILD)
    }

    /// Neighbors reached through a child→parent label, resolved to
    /// person records.
    pub fn parents_of(&self, id: PersonId) -> Result<Vec<&Person>, DirectoryError> {
        self.resolve_by_labels(id, CHILD_TO_PARENT)
    }

    fn resolve_by_labels(
        &self,
        id: PersonId,
        labels: &[RelationLabel],
    ) -> Result<Vec<&Person>, DirectoryError> {
        Ok(self
            .graph
            .neighbors(id)?
            .iter()
            .filter(|n| labels.contains(&n.label))
            .filter_map(|n| self.store.get(n.id))
            .collect())
    }
}
