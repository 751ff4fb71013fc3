//! DEMO command - Walk through a small household.
//!
//! Three cats move into a cattery and form a clowder. An owner adopts two
//! of them, feeds and grooms them, and is refused when they try to feed
//! the cat they do not own.

use anyhow::Result;
use catsim_core::{Cat, CatId, Cattery, Clowder, Owner, PlayBoosts, SimConfig};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::{HumanReadable, or_none, output, pick_fact};

/// Arguments for the demo command.
#[derive(Args)]
pub struct DemoArgs {
    /// Name of the owner
    #[arg(long, default_value = "Jordan")]
    pub owner: String,
}

/// Everything that happened in the demo.
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub owner: Owner,
    pub clowder: Vec<Cat>,
    pub events: Vec<String>,
    pub fact: &'static str,
}

impl HumanReadable for DemoReport {
    fn print_human(&self) {
        println!("{}", format!("{}'s household", self.owner.name).green().bold());
        println!("{}", "=".repeat(40));
        for event in &self.events {
            println!("  - {}", event);
        }
        println!();
        for cat in &self.clowder {
            let marker = if self.owner.cats_owned().contains(&cat.id) {
                "*".yellow()
            } else {
                " ".normal()
            };
            println!(
                "  {} {} {}",
                marker,
                cat.name.bold(),
                format!("({})", or_none(cat.color)).dimmed()
            );
            println!(
                "      mood {} hunger {} energy {} health {}",
                cat.mood, cat.hunger_level, cat.energy, cat.health
            );
        }
        println!();
        println!("  {}", format!("* = owned by {}", self.owner.name).dimmed());
        println!("  {} {}", "Fact:".cyan(), self.fact);
    }
}

/// Runs the household walkthrough.
pub fn run(config: &SimConfig, owner_name: String) -> Result<DemoReport> {
    let matcher = config.color_matcher();
    let mut cattery = Cattery::new();
    let mut events = Vec::new();

    let nutmeg = cattery.insert(
        Cat::builder("Nutmeg")
            .age(3)
            .color("tortoiseshell")
            .color_matcher(matcher)
            .hunger_level(2)
            .build(),
    );
    let chestnut = cattery.insert(
        Cat::builder("Chestnut")
            .age(4)
            .color("tabbi")
            .color_matcher(matcher)
            .mood(-1)
            .build(),
    );
    let stray = cattery.insert(
        Cat::builder("Una")
            .color("purple")
            .color_matcher(matcher)
            .hunger_level(4)
            .build(),
    );

    let mut clowder = Clowder::from_cats(vec![nutmeg, chestnut]);
    clowder.add(cattery.get(stray)?);
    events.push(format!("{} cats formed a clowder", clowder.len()));

    let mut owner = Owner::new(owner_name, nutmeg);
    owner.adopt(chestnut);
    events.push(format!(
        "{} adopted {}",
        owner.name,
        names(&cattery, owner.cats_owned())?.join(" and ")
    ));

    let meal = owner.feed(cattery.get_mut(nutmeg)?)?;
    events.push(format!(
        "fed Nutmeg: hunger {}, mood {}",
        meal.hunger_level, meal.mood
    ));

    owner.groom(cattery.get_mut(chestnut)?)?;
    owner.play_with(cattery.get_mut(chestnut)?, PlayBoosts::default())?;
    events.push("groomed and played with Chestnut".to_string());

    match owner.feed(cattery.get_mut(stray)?) {
        Ok(_) => events.push("fed Una".to_string()),
        Err(e) => events.push(format!("refused: {}", e)),
    }

    let una = cattery.get_mut(stray)?;
    una.bathe();
    una.sleep(9.0)?;
    events.push(format!("Una bathed and napped, then said {}", una.make_noise("hiss")?));

    let members = cattery
        .resolve(clowder.members())?
        .into_iter()
        .cloned()
        .collect();

    Ok(DemoReport {
        fact: pick_fact(config),
        owner,
        clowder: members,
        events,
    })
}

fn names(cattery: &Cattery, ids: &[CatId]) -> Result<Vec<String>> {
    Ok(cattery
        .resolve(ids)?
        .into_iter()
        .map(|cat| cat.name.clone())
        .collect())
}

/// Execute the demo command.
pub fn execute(config: &SimConfig, human: bool, args: DemoArgs) -> Result<()> {
    let report = run(config, args.owner)?;
    output(&report, human)
}
