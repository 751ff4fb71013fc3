//! In-memory home for cats shared between owners and clowders.
//!
//! Owners and clowders refer to cats by id. The cattery holds the one copy
//! of each cat's state, so a change made on behalf of one owner is seen by
//! every other owner or clowder that refers to the same cat.
//!
//! ```
//! use catsim_core::{Cat, Cattery, Clowder, Owner};
//!
//! let mut cattery = Cattery::new();
//! let nutmeg = cattery.insert(Cat::builder("Nutmeg").hunger_level(2).build());
//!
//! let owner = Owner::new("Jordan", nutmeg);
//! let clowder = Clowder::from_cats(nutmeg);
//!
//! owner.feed(cattery.get_mut(nutmeg)?)?;
//!
//! let members = cattery.resolve(clowder.members())?;
//! assert_eq!(members[0].hunger_level, 1);
//! # Ok::<(), catsim_core::CatError>(())
//! ```

use std::collections::HashMap;

use crate::error::{CatError, CatResult};
use crate::types::{Cat, CatId};

/// Registry of cats keyed by id, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Cattery {
    cats: HashMap<CatId, Cat>,
    order: Vec<CatId>,
}

impl Cattery {
    /// Creates an empty cattery.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `cat` and returns its id. Re-inserting a cat with
    /// an id already present replaces the stored state.
    pub fn insert(&mut self, cat: Cat) -> CatId {
        let id = cat.id;
        if self.cats.insert(id, cat).is_none() {
            self.order.push(id);
        }
        tracing::debug!(%id, size = self.order.len(), "cat registered");
        id
    }

    /// Looks up a cat.
    pub fn get(&self, id: CatId) -> CatResult<&Cat> {
        self.cats.get(&id).ok_or(CatError::UnknownCat(id))
    }

    /// Looks up a cat for mutation.
    pub fn get_mut(&mut self, id: CatId) -> CatResult<&mut Cat> {
        self.cats.get_mut(&id).ok_or(CatError::UnknownCat(id))
    }

    /// Takes a cat out of the cattery and hands its state back.
    ///
    /// Owners and clowders still holding the id will fail to resolve it.
    pub fn remove(&mut self, id: CatId) -> CatResult<Cat> {
        let cat = self.cats.remove(&id).ok_or(CatError::UnknownCat(id))?;
        self.order.retain(|held| *held != id);
        tracing::debug!(%id, size = self.order.len(), "cat released");
        Ok(cat)
    }

    /// Releases every cat.
    pub fn clear(&mut self) {
        self.cats.clear();
        self.order.clear();
    }

    /// Resolves a list of ids, in order, failing on the first unknown id.
    pub fn resolve(&self, ids: &[CatId]) -> CatResult<Vec<&Cat>> {
        ids.iter().map(|id| self.get(*id)).collect()
    }

    /// Iterates over all cats in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Cat> {
        self.order.iter().filter_map(|id| self.cats.get(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
