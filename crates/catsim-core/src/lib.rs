//! catsim-core: virtual cats, clowders and their owners.
//!
//! This crate provides:
//! - [`Cat`]: mood, hunger, energy and health, changed by play, feeding,
//!   grooming, bathing and sleep
//! - [`Clowder`]: an ordered group of cats
//! - [`Owner`]: a person who adopts cats and cares for the ones they own
//! - [`Cattery`]: an in-memory arena that lets several owners and clowders
//!   share the same cats by id
//!
//! # Usage
//!
//! ```
//! use catsim_core::{Cat, Owner, PlayBoosts};
//!
//! let mut boots = Cat::builder("Boots").color("tabby").hunger_level(2).build();
//! let owner = Owner::new("Jordan", &boots);
//!
//! boots.play(PlayBoosts::default())?;
//! let meal = owner.feed(&mut boots)?;
//! assert_eq!(meal.hunger_level, 2);
//! assert_eq!(boots.make_noise("purr")?, "Purrr");
//! # Ok::<(), catsim_core::CatError>(())
//! ```

pub mod cattery;
pub mod clowder;
pub mod color;
pub mod config;
pub mod error;
pub mod facts;
pub mod noise;
pub mod owner;
pub mod types;

pub use cattery::Cattery;
pub use clowder::Clowder;
pub use color::{Color, ColorMatcher};
pub use config::{ConfigError, SimConfig};
pub use error::{CatError, CatResult, ErrorKind};
pub use noise::{AudioSink, LoggingAudioSink, Noise};
pub use owner::Owner;
pub use types::{Cat, CatBuilder, CatId, CatSelection, Meal, PlayBoosts};
