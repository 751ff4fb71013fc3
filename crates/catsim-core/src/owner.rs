//! Owners and the caretaking they do.
//!
//! An owner keeps an ordered list of the cats they own. Every caretaking
//! operation that touches a cat first checks that the owner actually owns
//! it; nothing about the cat changes when that check fails.

use serde::{Deserialize, Serialize};

use crate::error::{CatError, CatResult};
use crate::facts;
use crate::types::{Cat, CatId, CatSelection, Meal, PlayBoosts};

/// A person who owns one or more cats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// The owner's name.
    pub name: String,

    cats_owned: Vec<CatId>,
}

impl Owner {
    /// Creates an owner of one cat or a list of cats.
    #[must_use]
    pub fn new(name: impl Into<String>, cats_owned: impl Into<CatSelection>) -> Self {
        Self {
            name: name.into(),
            cats_owned: cats_owned.into().into_ids(),
        }
    }

    /// Ids of the owned cats, in adoption order.
    #[must_use]
    pub fn cats_owned(&self) -> &[CatId] {
        &self.cats_owned
    }

    /// Whether this owner owns `cat`.
    #[must_use]
    pub fn owns(&self, cat: &Cat) -> bool {
        self.cats_owned.contains(&cat.id)
    }

    /// Adopts one cat or a list of cats. Already-owned cats are added again.
    pub fn adopt(&mut self, cats: impl Into<CatSelection>) {
        let ids = cats.into().into_ids();
        tracing::debug!(owner = %self.name, count = ids.len(), "adopting");
        self.cats_owned.extend(ids);
    }

    /// Feeds an owned cat: hunger drops by one (not below zero) and mood
    /// rises by one.
    pub fn feed(&self, cat: &mut Cat) -> CatResult<Meal> {
        self.ensure_owns(cat)?;
        Ok(cat.eat())
    }

    /// Grooms an owned cat, raising its mood by one.
    pub fn groom(&self, cat: &mut Cat) -> CatResult<()> {
        self.ensure_owns(cat)?;
        cat.mood = cat.mood.saturating_add(1);
        tracing::debug!(owner = %self.name, cat = %cat.name, mood = cat.mood, "groomed");
        Ok(())
    }

    /// Plays with an owned cat.
    pub fn play_with(&self, cat: &mut Cat, boosts: PlayBoosts) -> CatResult<()> {
        self.ensure_owns(cat)?;
        cat.play(boosts)
    }

    /// Returns a random cat fact.
    #[must_use]
    pub fn give_fact(&self) -> &'static str {
        facts::random_fact()
    }

    fn ensure_owns(&self, cat: &Cat) -> CatResult<()> {
        if self.owns(cat) {
            Ok(())
        } else {
            tracing::warn!(owner = %self.name, cat = %cat.name, "cat is not owned");
            Err(CatError::NotOwned {
                owner: self.name.clone(),
                cat: cat.id,
            })
        }
    }
}
