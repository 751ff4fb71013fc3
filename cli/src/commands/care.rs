//! CARE command - Build a cat and apply caretaking actions in order.
//!
//! Actions are given as repeated `--action` flags:
//! - `eat`, `bathe`, `groom`
//! - `play` (default boosts) or `play:MOOD,HUNGER,ENERGY`
//! - `sleep:HOURS`
//!
//! The first failing action stops the run.

use std::str::FromStr;

use anyhow::Result;
use catsim_core::{Cat, Meal, PlayBoosts, SimConfig};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::{CliError, HumanReadable, or_none, output};

/// Arguments for the care command.
#[derive(Args)]
pub struct CareArgs {
    /// Name of the cat
    #[arg(long)]
    pub name: String,

    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// Coat colour (tabby, black, orange, tortoiseshell, tuxedo)
    #[arg(long)]
    pub color: Option<String>,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub mood: i64,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub hunger: i64,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub energy: i64,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub health: i64,

    /// Action to apply; repeat for several
    #[arg(long = "action", short = 'a')]
    pub actions: Vec<CareAction>,
}

/// A single caretaking action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum CareAction {
    Eat,
    Bathe,
    Groom,
    Play(PlayBoosts),
    Sleep { hours: f64 },
}

impl FromStr for CareAction {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CliError::InvalidAction {
            action: s.to_string(),
            reason: reason.to_string(),
        };

        let (verb, arg) = match s.split_once(':') {
            Some((verb, arg)) => (verb.trim(), Some(arg.trim())),
            None => (s.trim(), None),
        };

        match (verb, arg) {
            ("eat", None) => Ok(Self::Eat),
            ("bathe", None) => Ok(Self::Bathe),
            ("groom", None) => Ok(Self::Groom),
            ("play", None) => Ok(Self::Play(PlayBoosts::default())),
            ("play", Some(arg)) => {
                let values: Vec<&str> = arg.split(',').map(str::trim).collect();
                let [mood, hunger, energy] = values.as_slice() else {
                    return Err(invalid("expected play:MOOD,HUNGER,ENERGY"));
                };
                let boost = |name: &str, raw: &str| {
                    raw.parse::<i64>()
                        .map_err(|_| invalid(&format!("{name} must be an integer")))
                };
                Ok(Self::Play(PlayBoosts {
                    mood_boost: boost("mood_boost", *mood)?,
                    hunger_boost: boost("hunger_boost", *hunger)?,
                    energy_boost: boost("energy_boost", *energy)?,
                }))
            }
            ("sleep", Some(arg)) => arg
                .parse::<f64>()
                .map(|hours| Self::Sleep { hours })
                .map_err(|_| invalid("duration must be an integer or float")),
            ("sleep", None) => Err(invalid("expected sleep:HOURS")),
            ("eat" | "bathe" | "groom", Some(_)) => Err(invalid("takes no argument")),
            _ => Err(invalid("expected eat, bathe, groom, play or sleep")),
        }
    }
}

/// Outcome of one applied action.
#[derive(Debug, Serialize)]
pub struct Step {
    #[serde(flatten)]
    pub action: CareAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal: Option<Meal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_gained: Option<i64>,
}

/// The cat after all actions.
#[derive(Debug, Serialize)]
pub struct CareReport {
    pub steps: Vec<Step>,
    pub cat: Cat,
}

impl HumanReadable for CareReport {
    fn print_human(&self) {
        println!("{}", format!("Caring for {}", self.cat.name).green().bold());
        println!("{}", "=".repeat(40));
        for (i, step) in self.steps.iter().enumerate() {
            let detail = match (&step.meal, step.energy_gained) {
                (Some(meal), _) => {
                    format!("hunger {} mood {}", meal.hunger_level, meal.mood)
                }
                (None, Some(gained)) => format!("+{} energy", gained),
                (None, None) => String::new(),
            };
            println!("  {:>2}. {:?} {}", i + 1, step.action, detail.dimmed());
        }
        println!();
        println!("  {} {}", "ID:".cyan(), self.cat.id);
        println!("  {} {}", "Age:".cyan(), or_none(self.cat.age));
        println!("  {} {}", "Color:".cyan(), or_none(self.cat.color));
        println!("  {} {}", "Mood:".cyan(), self.cat.mood);
        println!("  {} {}", "Hunger:".cyan(), self.cat.hunger_level);
        println!("  {} {}", "Energy:".cyan(), self.cat.energy);
        println!("  {} {}", "Health:".cyan(), self.cat.health);
    }
}

/// Applies `actions` to `cat` in order, stopping at the first failure.
pub fn apply(cat: &mut Cat, actions: &[CareAction]) -> Result<Vec<Step>> {
    let mut steps = Vec::with_capacity(actions.len());
    for &action in actions {
        let mut step = Step {
            action,
            meal: None,
            energy_gained: None,
        };
        match action {
            CareAction::Eat => step.meal = Some(cat.eat()),
            CareAction::Bathe => cat.bathe(),
            CareAction::Groom => cat.groom(),
            CareAction::Play(boosts) => cat.play(boosts)?,
            CareAction::Sleep { hours } => step.energy_gained = Some(cat.sleep(hours)?),
        }
        steps.push(step);
    }
    Ok(steps)
}

/// Execute the care command.
pub fn execute(config: &SimConfig, human: bool, args: CareArgs) -> Result<()> {
    let mut builder = Cat::builder(args.name)
        .color_matcher(config.color_matcher())
        .mood(args.mood)
        .hunger_level(args.hunger)
        .energy(args.energy)
        .health(args.health);
    if let Some(age) = args.age {
        builder = builder.age(age);
    }
    if let Some(color) = args.color {
        builder = builder.color(color);
    }
    let mut cat = builder.build();

    let steps = apply(&mut cat, &args.actions)?;

    output(&CareReport { steps, cat }, human)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_actions() {
        assert_eq!("eat".parse::<CareAction>().unwrap(), CareAction::Eat);
        assert_eq!("bathe".parse::<CareAction>().unwrap(), CareAction::Bathe);
        assert_eq!("groom".parse::<CareAction>().unwrap(), CareAction::Groom);
        assert_eq!(
            "play".parse::<CareAction>().unwrap(),
            CareAction::Play(PlayBoosts::default())
        );
    }

    #[test]
    fn parse_actions_with_arguments() {
        assert_eq!(
            "play:2,3,-1".parse::<CareAction>().unwrap(),
            CareAction::Play(PlayBoosts {
                mood_boost: 2,
                hunger_boost: 3,
                energy_boost: -1,
            })
        );
        assert_eq!(
            "sleep:4.5".parse::<CareAction>().unwrap(),
            CareAction::Sleep { hours: 4.5 }
        );
    }

    #[test]
    fn parse_rejects_bad_input() {
        for bad in ["nap", "sleep", "sleep:long", "play:1,2", "play:a,b,c", "eat:2"] {
            assert!(bad.parse::<CareAction>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn non_integer_boost_names_the_parameter() {
        let cases = [
            ("play:1.5,1,-1", "mood_boost must be an integer"),
            ("play:1,x,-1", "hunger_boost must be an integer"),
            ("play:1,1,-0.5", "energy_boost must be an integer"),
        ];
        for (input, expected) in cases {
            let err = input.parse::<CareAction>().unwrap_err();
            assert!(
                err.to_string().contains(expected),
                "{input}: {err} should mention {expected}"
            );
        }
    }

    #[test]
    fn apply_runs_in_order() {
        let mut cat = Cat::builder("Boots").hunger_level(2).build();
        let actions = [
            CareAction::Eat,
            CareAction::Play(PlayBoosts::default()),
            CareAction::Sleep { hours: 6.0 },
        ];
        let steps = apply(&mut cat, &actions).unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(
            steps[0].meal,
            Some(Meal {
                hunger_level: 1,
                mood: 1
            })
        );
        assert_eq!(steps[2].energy_gained, Some(2));
        assert_eq!((cat.hunger_level, cat.mood, cat.energy), (2, 2, 1));
    }

    #[test]
    fn apply_stops_at_first_failure() {
        let mut cat = Cat::new("Boots");
        let actions = [
            CareAction::Groom,
            CareAction::Sleep { hours: 20.0 },
            CareAction::Groom,
        ];
        assert!(apply(&mut cat, &actions).is_err());
        assert_eq!(cat.mood, 1);
        assert_eq!(cat.energy, 0);
    }

    #[test]
    fn step_serializes_flat() {
        let step = Step {
            action: CareAction::Sleep { hours: 3.0 },
            meal: None,
            energy_gained: Some(1),
        };
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"action": "sleep", "hours": 3.0, "energy_gained": 1})
        );
    }
}
