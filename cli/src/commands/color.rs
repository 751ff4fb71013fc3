//! COLOR command - Show how free-text colour input is interpreted.

use anyhow::Result;
use catsim_core::{Color, SimConfig};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::{HumanReadable, or_none, output};

/// Arguments for the color command.
#[derive(Args)]
pub struct ColorArgs {
    /// Colour as a person might type it
    pub input: String,
}

/// Interpretation result.
#[derive(Debug, Serialize)]
pub struct ColorResponse {
    pub input: String,
    pub color: Option<Color>,
    pub cutoff: f64,
}

impl HumanReadable for ColorResponse {
    fn print_human(&self) {
        let shown = or_none(self.color);
        let shown = if self.color.is_some() {
            shown.green()
        } else {
            shown.red()
        };
        println!("  {} {}", "Input:".cyan(), self.input);
        println!("  {} {}", "Color:".cyan(), shown);
        if self.color.is_none() {
            println!(
                "  {} {}",
                "Valid:".cyan(),
                Color::valid_options().dimmed()
            );
        }
    }
}

/// Execute the color command.
pub fn execute(config: &SimConfig, human: bool, args: ColorArgs) -> Result<()> {
    let color = config.color_matcher().interpret(&args.input);
    let response = ColorResponse {
        input: args.input,
        color,
        cutoff: config.color_cutoff,
    };
    output(&response, human)
}
