//! Core directory type definitions.
//!
//! Defines [`Person`] (a directory record), [`Gender`], [`RelationLabel`]
//! (the closed vocabulary of typed relations with its inversion rule),
//! [`RelationEdge`] (a declared edge), and [`Neighbor`] (a derived
//! adjacency entry).

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Stable integer identity of a person. Unique within a store.
pub type PersonId = u32;

/// A person record. Immutable after load; identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub gender: Gender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed vocabulary of relation labels.
///
/// Labels are direction-sensitive: an edge `{a, b, ParentOf}` reads
/// "a is parent of b". [`RelationLabel::inverse`] gives the label of the
/// same edge as seen from the other endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationLabel {
    /// Symmetric.
    Spouse,
    /// Symmetric.
    Friend,
    /// Symmetric.
    Sibling,
    /// "a is parent of b". Inverse of [`RelationLabel::ChildOf`].
    ParentOf,
    /// "a is child of b". Inverse of [`RelationLabel::ParentOf`].
    ChildOf,
}

/// Labels that point from a person to their children.
pub const PARENT_TO_CHILD: &[RelationLabel] = &[RelationLabel::ParentOf];

/// Labels that point from a person to their parents. Element-wise inverse
/// of [`PARENT_TO_CHILD`].
pub const CHILD_TO_PARENT: &[RelationLabel] = &[RelationLabel::ChildOf];

impl RelationLabel {
    /// The label of the same edge seen from the other endpoint.
    ///
    /// Total involution over the closed vocabulary: `parent_of` and
    /// `child_of` swap, every other label is self-inverse (symmetric).
    pub fn inverse(self) -> Self {
        match self {
            Self::ParentOf => Self::ChildOf,
            Self::ChildOf => Self::ParentOf,
            symmetric => symmetric,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spouse => "spouse",
            Self::Friend => "friend",
            Self::Sibling => "sibling",
            Self::ParentOf => "parent_of",
            Self::ChildOf => "child_of",
        }
    }

    /// Every known label, in a fixed order. Used for error messages.
    pub const ALL: &'static [RelationLabel] = &[
        Self::Spouse,
        Self::Friend,
        Self::Sibling,
        Self::ParentOf,
        Self::ChildOf,
    ];
}

impl std::fmt::Display for RelationLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RelationLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spouse" => Ok(Self::Spouse),
            "friend" => Ok(Self::Friend),
            "sibling" => Ok(Self::Sibling),
            "parent_of" => Ok(Self::ParentOf),
            "child_of" => Ok(Self::ChildOf),
            _ => Err(format!("unknown relation label: {s}")),
        }
    }
}

/// A declared edge between two people.
///
/// Undirected in storage, direction-sensitive in meaning: the label reads
/// "a is `label` b". Both endpoints must exist in the store the graph is
/// built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationEdge {
    pub a: PersonId,
    pub b: PersonId,
    pub label: RelationLabel,
}

impl RelationEdge {
    pub fn new(a: PersonId, b: PersonId, label: RelationLabel) -> Self {
        Self { a, b, label }
    }
}

/// A derived adjacency entry: one neighbor of a person, with the label as
/// seen from that person. Never hand-authored — built from the edge list,
/// with the name denormalized for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Neighbor {
    pub id: PersonId,
    pub name: String,
    pub label: RelationLabel,
}
