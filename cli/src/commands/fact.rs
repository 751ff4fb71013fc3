//! FACT command - Print a random cat fact.

use anyhow::Result;
use catsim_core::SimConfig;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::{HumanReadable, output, pick_fact};

/// Arguments for the fact command.
#[derive(Args)]
pub struct FactArgs {
    // No additional arguments needed
}

/// A single fact.
#[derive(Debug, Serialize)]
pub struct FactResponse {
    pub fact: &'static str,
}

impl HumanReadable for FactResponse {
    fn print_human(&self) {
        println!("{} {}", "Did you know?".green().bold(), self.fact);
    }
}

/// Execute the fact command.
pub fn execute(config: &SimConfig, human: bool, _args: FactArgs) -> Result<()> {
    let response = FactResponse {
        fact: pick_fact(config),
    };
    output(&response, human)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catsim_core::facts::CAT_FACTS;

    #[test]
    fn seeded_fact_is_stable() {
        let config = SimConfig {
            fact_seed: Some(3),
            ..SimConfig::default()
        };
        let first = pick_fact(&config);
        assert!(CAT_FACTS.contains(&first));
        assert_eq!(pick_fact(&config), first);
    }
}
