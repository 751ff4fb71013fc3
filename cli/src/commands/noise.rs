//! NOISE command - Render a cat noise as text, or play it.

use anyhow::Result;
use catsim_core::{Cat, LoggingAudioSink, Noise, SimConfig};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::{HumanReadable, output};

/// Arguments for the noise command.
#[derive(Args)]
pub struct NoiseArgs {
    /// Noise to make (meow, purr, hiss, chirrup, chatter)
    #[arg(default_value = "meow")]
    pub kind: String,

    /// Name of the cat making the noise
    #[arg(long, default_value = "Nutmeg")]
    pub name: String,

    /// Hand the sound to the audio sink instead of printing it
    #[arg(long)]
    pub play: bool,
}

/// What the cat did.
#[derive(Debug, Serialize)]
pub struct NoiseResponse {
    pub cat: String,
    pub noise: Noise,
    #[serde(flatten)]
    pub outcome: NoiseOutcome,
}

/// A noise is either rendered as text or handed to the audio sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseOutcome {
    Text(&'static str),
    Played(&'static str),
}

impl HumanReadable for NoiseResponse {
    fn print_human(&self) {
        match self.outcome {
            NoiseOutcome::Text(text) => println!("{} says {}", self.cat.bold(), text.yellow()),
            NoiseOutcome::Played(file) => println!(
                "{} {} ({})",
                self.cat.bold(),
                "made a noise".green(),
                file.dimmed()
            ),
        }
    }
}

/// Makes the cat produce `noise`, rendering it or playing it.
pub fn respond(cat: Cat, noise: Noise, play: bool) -> Result<NoiseResponse> {
    let outcome = if play {
        cat.play_noise(noise.key(), &LoggingAudioSink)?;
        NoiseOutcome::Played(noise.sound_file())
    } else {
        NoiseOutcome::Text(cat.make_noise(noise.key())?)
    };

    Ok(NoiseResponse {
        cat: cat.name,
        noise,
        outcome,
    })
}

/// Execute the noise command.
pub fn execute(_config: &SimConfig, human: bool, args: NoiseArgs) -> Result<()> {
    let noise: Noise = args.kind.parse()?;
    let response = respond(Cat::new(args.name), noise, args.play)?;
    output(&response, human)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_noise_serializes_text() {
        let response = respond(Cat::new("Nutmeg"), Noise::Purr, false).unwrap();
        assert_eq!(response.outcome, NoiseOutcome::Text("Purrr"));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"cat": "Nutmeg", "noise": "purr", "text": "Purrr"})
        );
    }

    #[test]
    fn played_noise_serializes_sound_file() {
        let response = respond(Cat::new("Nutmeg"), Noise::Hiss, true).unwrap();
        assert_eq!(response.outcome, NoiseOutcome::Played("hissing.mp3"));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["played"], "hissing.mp3");
        assert!(json.get("text").is_none());
    }
}
