mod config;
mod sim;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_core::Level;

use crate::config::SimConfig;

#[derive(Debug, PartialEq, Parser)]
#[command(version, about, long_about = None)]
struct Arguments {
    #[arg(short = 'c', long = "config", help = "Path to configuration file")]
    config: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", help = "Log debug messages")]
    verbose: bool,

    #[arg(env = "POKEDUEL_CATALOG", help = "Path to catalog file")]
    catalog: Option<PathBuf>,
}

fn setup_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let arguments = Arguments::parse();
    setup_logging(arguments.verbose);

    let config = match &arguments.config {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    };
    let catalog_path = config.resolve_catalog_path(arguments.catalog)?;
    let catalog = sim::load_catalog(&catalog_path)?;

    let outcome = sim::run(&config, &catalog)?;
    for line in outcome.battle.full_log() {
        println!("{line}");
    }
    match outcome.winner() {
        Some(winner) => log::info!(
            "{} won after {} actions",
            outcome.battle.player(winner).name(),
            outcome.actions
        ),
        None => log::warn!("No winner after {} actions", outcome.actions),
    }
    Ok(())
}
