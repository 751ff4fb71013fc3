//! Command-line interface for the cat simulator.
//!
//! Every invocation builds its cats from scratch; nothing is kept between
//! runs. Commands:
//! - fact: Print a random cat fact
//! - noise: Render or play a cat noise
//! - color: Show how a free-text coat colour is interpreted
//! - care: Build a cat and apply caretaking actions in order
//! - demo: Walk through a small household of cats and owners
//!
//! Configuration via environment:
//! - CATSIM_LOG_LEVEL: Logging level (default: info)
//! - CATSIM_COLOR_CUTOFF: Colour match cutoff in [0, 1] (default: 0.6)
//! - CATSIM_FACT_SEED: Seed for fact selection (default: unseeded)

mod commands;

use catsim_core::SimConfig;
use catsim_core::config::parse_cutoff;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commands::{
    care::CareArgs, color::ColorArgs, demo::DemoArgs, fact::FactArgs, noise::NoiseArgs,
};

/// Cat simulator CLI
///
/// Care for virtual cats from the command line. Prints JSON by default,
/// or formatted text with --human.
#[derive(Parser)]
#[command(name = "catsim")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Log level, overriding CATSIM_LOG_LEVEL
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Seed for fact selection, overriding CATSIM_FACT_SEED
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Colour match cutoff in [0, 1], overriding CATSIM_COLOR_CUTOFF
    #[arg(long, global = true)]
    color_cutoff: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a random cat fact
    Fact(FactArgs),

    /// Render a cat noise, or play it
    Noise(NoiseArgs),

    /// Interpret a free-text coat colour
    Color(ColorArgs),

    /// Build a cat and apply caretaking actions
    Care(CareArgs),

    /// Walk through a household of cats, a clowder and owners
    Demo(DemoArgs),
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log_level);
    tracing::debug!(?config, "configuration loaded");

    let result = match cli.command {
        Commands::Fact(args) => commands::fact::execute(&config, cli.human, args),
        Commands::Noise(args) => commands::noise::execute(&config, cli.human, args),
        Commands::Color(args) => commands::color::execute(&config, cli.human, args),
        Commands::Care(args) => commands::care::execute(&config, cli.human, args),
        Commands::Demo(args) => commands::demo::execute(&config, cli.human, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Environment configuration with command-line overrides applied.
fn load_config(cli: &Cli) -> anyhow::Result<SimConfig> {
    let mut config = SimConfig::from_env()?;
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(seed) = cli.seed {
        config.fact_seed = Some(seed);
    }
    if let Some(raw) = &cli.color_cutoff {
        config.color_cutoff = parse_cutoff("--color-cutoff", raw)?;
    }
    Ok(config)
}

/// Initialize the tracing subscriber, writing to stderr.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
