//! Error types for cat, clowder and owner operations.

use thiserror::Error;

use crate::types::CatId;

/// Result type alias for simulator operations.
pub type CatResult<T> = Result<T, CatError>;

/// Broad classification of a [`CatError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value of the wrong kind was supplied.
    Type,
    /// A value fell outside the accepted bounds or registry.
    Domain,
    /// The target cat is not where the operation expected it.
    Referential,
}

/// Errors that can occur while caring for cats.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatError {
    /// An argument could not be interpreted as the expected kind of value.
    #[error("{name} {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// Playing must always make a cat hungrier.
    #[error("Cats always get hungry when playing! hunger_boost must be positive, got {0}")]
    HungerBoostNotPositive(i64),

    /// Playing must always tire a cat out.
    #[error("Cats always get tired when playing! energy_boost must be negative, got {0}")]
    EnergyBoostNotNegative(i64),

    /// Sleep duration below zero hours.
    #[error("Cats cannot sleep for negative hours. duration must be positive, got {0}")]
    NegativeSleep(f64),

    /// Sleep duration above the sixteen hour limit.
    #[error("Cats should not sleep for more than 16 hours. duration must be at most 16, got {0}")]
    ExcessiveSleep(f64),

    /// Noise name is not in the registry.
    #[error("Invalid noise '{noise}'. Valid options: {valid}")]
    InvalidNoise { noise: String, valid: String },

    /// The cat is not a member of the clowder.
    #[error("cat {0} not found in clowder")]
    NotInClowder(CatId),

    /// The owner does not own the cat.
    #[error("{owner} does not own cat {cat}")]
    NotOwned { owner: String, cat: CatId },

    /// No cat with this id is registered in the cattery.
    #[error("unknown cat: {0}")]
    UnknownCat(CatId),
}

impl CatError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::Type,
            Self::InvalidNoise { .. }
            | Self::HungerBoostNotPositive(_)
            | Self::EnergyBoostNotNegative(_)
            | Self::NegativeSleep(_)
            | Self::ExcessiveSleep(_) => ErrorKind::Domain,
            Self::NotInClowder(_) | Self::NotOwned { .. } | Self::UnknownCat(_) => {
                ErrorKind::Referential
            }
        }
    }
}
