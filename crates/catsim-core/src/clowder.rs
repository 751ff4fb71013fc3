//! A clowder: an ordered group of cats.

use serde::{Deserialize, Serialize};

use crate::error::{CatError, CatResult};
use crate::types::{Cat, CatId, CatSelection};

/// An insertion-ordered group of cats.
///
/// Members are held by id. A cat can be in several clowders and can appear
/// more than once in the same one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clowder {
    members: Vec<CatId>,
}

impl Clowder {
    /// Creates an empty clowder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clowder from one cat or a list of cats.
    #[must_use]
    pub fn from_cats(cats: impl Into<CatSelection>) -> Self {
        Self {
            members: cats.into().into_ids(),
        }
    }

    /// Appends a cat to the end of the group.
    pub fn add(&mut self, cat: &Cat) {
        self.members.push(cat.id);
        tracing::debug!(cat = %cat.name, size = self.members.len(), "cat joined clowder");
    }

    /// Removes the first occurrence of `cat`.
    pub fn remove(&mut self, cat: &Cat) -> CatResult<()> {
        let position = self
            .members
            .iter()
            .position(|id| *id == cat.id)
            .ok_or(CatError::NotInClowder(cat.id))?;
        self.members.remove(position);
        tracing::debug!(cat = %cat.name, size = self.members.len(), "cat left clowder");
        Ok(())
    }

    /// Whether `cat` is a member.
    #[must_use]
    pub fn contains(&self, cat: &Cat) -> bool {
        self.members.contains(&cat.id)
    }

    /// Member ids in insertion order.
    #[must_use]
    pub fn members(&self) -> &[CatId] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
