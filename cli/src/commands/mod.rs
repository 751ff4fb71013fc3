//! Command implementations for the catsim CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable and JSON output formatting

pub mod care;
pub mod color;
pub mod demo;
pub mod fact;
pub mod noise;

use anyhow::Result;
use catsim_core::SimConfig;
use catsim_core::facts::{random_fact, random_fact_with};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

/// Errors raised while interpreting command arguments.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid action '{action}': {reason}")]
    InvalidAction { action: String, reason: String },
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Picks a fact, honouring the configured seed.
pub fn pick_fact(config: &SimConfig) -> &'static str {
    match config.fact_seed {
        Some(seed) => random_fact_with(&mut StdRng::seed_from_u64(seed)),
        None => random_fact(),
    }
}

/// Display form of an optional value.
pub fn or_none<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "(none)".to_string(), |v| v.to_string())
}
