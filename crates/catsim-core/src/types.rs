//! Core data types for the cat simulator.
//!
//! A [`Cat`] owns its mutable state (mood, hunger, energy, health) and the
//! behaviours that change it. Groups and owners refer to cats by [`CatId`],
//! so one cat may belong to several of them at once and a mutation made
//! through any of them is the only copy of that cat's state.
//!
//! All numeric attributes are unbounded in principle. Arithmetic saturates
//! at the `i64` limits rather than wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::color::{Color, ColorMatcher};
use crate::error::{CatError, CatResult};
use crate::facts;
use crate::noise::{AudioSink, Noise};

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a cat.
///
/// Wraps a UUID v4. Two cats with the same name are still distinct cats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatId(pub Uuid);

impl CatId {
    /// Creates a new random CatId.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a CatId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CatId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CatId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ============================================================================
// Selections
// ============================================================================

/// One cat or several, as accepted by clowder and owner constructors and
/// by [`Owner::adopt`](crate::owner::Owner::adopt).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatSelection {
    One(CatId),
    Many(Vec<CatId>),
}

impl CatSelection {
    /// Normalises the selection into an ordered list of ids.
    #[must_use]
    pub fn into_ids(self) -> Vec<CatId> {
        match self {
            Self::One(id) => vec![id],
            Self::Many(ids) => ids,
        }
    }
}

impl From<CatId> for CatSelection {
    fn from(id: CatId) -> Self {
        Self::One(id)
    }
}

impl From<&Cat> for CatSelection {
    fn from(cat: &Cat) -> Self {
        Self::One(cat.id)
    }
}

impl From<Vec<CatId>> for CatSelection {
    fn from(ids: Vec<CatId>) -> Self {
        Self::Many(ids)
    }
}

impl From<&[CatId]> for CatSelection {
    fn from(ids: &[CatId]) -> Self {
        Self::Many(ids.to_vec())
    }
}

impl From<&[&Cat]> for CatSelection {
    fn from(cats: &[&Cat]) -> Self {
        Self::Many(cats.iter().map(|cat| cat.id).collect())
    }
}

impl<const N: usize> From<[&Cat; N]> for CatSelection {
    fn from(cats: [&Cat; N]) -> Self {
        Self::Many(cats.iter().map(|cat| cat.id).collect())
    }
}

impl From<Vec<&Cat>> for CatSelection {
    fn from(cats: Vec<&Cat>) -> Self {
        Self::Many(cats.into_iter().map(|cat| cat.id).collect())
    }
}

// ============================================================================
// Behaviour parameters and results
// ============================================================================

/// How a play session changes a cat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayBoosts {
    /// Added to mood. Any value.
    pub mood_boost: i64,

    /// Added to hunger. Must be positive.
    pub hunger_boost: i64,

    /// Added to energy. Must be negative.
    pub energy_boost: i64,
}

impl PlayBoosts {
    /// Checks the play invariants without touching any cat.
    pub fn validate(&self) -> CatResult<()> {
        if self.hunger_boost <= 0 {
            return Err(CatError::HungerBoostNotPositive(self.hunger_boost));
        }
        if self.energy_boost >= 0 {
            return Err(CatError::EnergyBoostNotNegative(self.energy_boost));
        }
        Ok(())
    }
}

impl Default for PlayBoosts {
    fn default() -> Self {
        Self {
            mood_boost: 1,
            hunger_boost: 1,
            energy_boost: -1,
        }
    }
}

/// Hunger and mood right after a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub hunger_level: i64,
    pub mood: i64,
}

/// Longest a cat may sleep in one go, in hours.
pub const MAX_SLEEP_HOURS: f64 = 16.0;

/// Hours of sleep per point of energy.
pub const HOURS_PER_ENERGY: f64 = 3.0;

// ============================================================================
// Cat
// ============================================================================

/// A virtual cat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cat {
    /// Identity used by clowders, owners and the cattery.
    pub id: CatId,

    /// The cat's name. Never changed by any behaviour.
    pub name: String,

    /// Age in years. Informational only.
    pub age: Option<u32>,

    /// Interpreted coat colour, `None` when unset or unrecognised.
    pub color: Option<Color>,

    /// From grumpy (negative) to ecstatic (positive).
    pub mood: i64,

    /// Higher is hungrier.
    pub hunger_level: i64,

    pub energy: i64,

    pub health: i64,
}

impl Cat {
    /// Creates a cat with neutral state and no colour.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::builder(name).build()
    }

    /// Creates a builder for a cat with the given name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> CatBuilder {
        CatBuilder::new(name)
    }

    /// Returns the cat's id.
    #[must_use]
    pub const fn id(&self) -> CatId {
        self.id
    }

    /// Renders the named noise as text.
    ///
    /// Fails when `noise` is not a registered noise key.
    pub fn make_noise(&self, noise: &str) -> CatResult<&'static str> {
        let noise: Noise = noise.parse()?;
        Ok(noise.text())
    }

    /// Plays the named noise through `sink`.
    pub fn play_noise(&self, noise: &str, sink: &dyn AudioSink) -> CatResult<()> {
        let noise: Noise = noise.parse()?;
        tracing::debug!(cat = %self.name, %noise, "making noise");
        sink.play(noise.sound_file());
        Ok(())
    }

    /// Plays with the cat: mood changes by `mood_boost`, hunger rises by
    /// `hunger_boost` and energy falls by `|energy_boost|`.
    ///
    /// Nothing changes if the boosts are invalid.
    pub fn play(&mut self, boosts: PlayBoosts) -> CatResult<()> {
        boosts.validate()?;

        self.mood = self.mood.saturating_add(boosts.mood_boost);
        self.hunger_level = self.hunger_level.saturating_add(boosts.hunger_boost);
        self.energy = self.energy.saturating_add(boosts.energy_boost);

        tracing::debug!(
            cat = %self.name,
            mood = self.mood,
            hunger_level = self.hunger_level,
            energy = self.energy,
            "played"
        );
        Ok(())
    }

    /// Cats dislike baths: mood drops by one, health rises by one.
    pub fn bathe(&mut self) {
        self.mood = self.mood.saturating_sub(1);
        self.health = self.health.saturating_add(1);
        tracing::debug!(cat = %self.name, mood = self.mood, health = self.health, "bathed");
    }

    /// Grooms the cat, raising mood and health by one and announcing the
    /// new values.
    pub fn groom(&mut self) {
        self.mood = self.mood.saturating_add(1);
        self.health = self.health.saturating_add(1);
        tracing::info!(
            cat = %self.name,
            health = self.health,
            mood = self.mood,
            "{} has been groomed. Health: {}, Mood: {}",
            self.name,
            self.health,
            self.mood
        );
    }

    /// Feeds the cat. Hunger drops by one but never below zero; mood always
    /// rises by one.
    pub fn eat(&mut self) -> Meal {
        self.hunger_level = if self.hunger_level > 0 {
            self.hunger_level - 1
        } else {
            0
        };
        self.mood = self.mood.saturating_add(1);

        tracing::debug!(
            cat = %self.name,
            hunger_level = self.hunger_level,
            mood = self.mood,
            "ate"
        );
        Meal {
            hunger_level: self.hunger_level,
            mood: self.mood,
        }
    }

    /// Lets the cat sleep for `duration` hours, gaining one energy point per
    /// full three hours.
    ///
    /// `duration` must be finite and lie in `[0, 16]`. Returns the energy
    /// gained.
    pub fn sleep(&mut self, duration: f64) -> CatResult<i64> {
        if !duration.is_finite() {
            return Err(CatError::InvalidArgument {
                name: "duration",
                reason: "must be an integer or float".to_string(),
            });
        }
        if duration < 0.0 {
            return Err(CatError::NegativeSleep(duration));
        }
        if duration > MAX_SLEEP_HOURS {
            return Err(CatError::ExcessiveSleep(duration));
        }

        let energy_boost = (duration / HOURS_PER_ENERGY).floor() as i64;
        self.energy = self.energy.saturating_add(energy_boost);

        tracing::debug!(cat = %self.name, duration, energy = self.energy, "slept");
        Ok(energy_boost)
    }

    /// Returns a random cat fact.
    #[must_use]
    pub fn give_fact(&self) -> &'static str {
        facts::random_fact()
    }
}

impl fmt::Display for Cat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Builder for constructing [`Cat`] instances.
///
/// Building never fails: an unrecognised colour leaves the cat without one.
#[derive(Debug)]
pub struct CatBuilder {
    name: String,
    age: Option<u32>,
    color: Option<String>,
    matcher: ColorMatcher,
    mood: i64,
    hunger_level: i64,
    energy: i64,
    health: i64,
}

impl CatBuilder {
    /// Starts a builder with neutral state.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: None,
            color: None,
            matcher: ColorMatcher::default(),
            mood: 0,
            hunger_level: 0,
            energy: 0,
            health: 0,
        }
    }

    /// Sets the age in years.
    #[must_use]
    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Sets the free-text coat colour, interpreted at build time.
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Overrides the colour matcher.
    #[must_use]
    pub fn color_matcher(mut self, matcher: ColorMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Sets the starting mood.
    #[must_use]
    pub fn mood(mut self, mood: i64) -> Self {
        self.mood = mood;
        self
    }

    /// Sets the starting hunger level. Not clamped.
    #[must_use]
    pub fn hunger_level(mut self, hunger_level: i64) -> Self {
        self.hunger_level = hunger_level;
        self
    }

    /// Sets the starting energy.
    #[must_use]
    pub fn energy(mut self, energy: i64) -> Self {
        self.energy = energy;
        self
    }

    /// Sets the starting health.
    #[must_use]
    pub fn health(mut self, health: i64) -> Self {
        self.health = health;
        self
    }

    /// Builds the cat.
    #[must_use]
    pub fn build(self) -> Cat {
        let color = self
            .color
            .as_deref()
            .filter(|c| !c.is_empty())
            .and_then(|c| self.matcher.interpret(c));

        Cat {
            id: CatId::new(),
            name: self.name,
            age: self.age,
            color,
            mood: self.mood,
            hunger_level: self.hunger_level,
            energy: self.energy,
            health: self.health,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
