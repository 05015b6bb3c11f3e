//! Boss Raid CLI - runs one match and prints it round by round

use std::path::PathBuf;

use anyhow::{Context, Result};
use boss_raid::config::Settings;
use boss_raid::presentation::{ConsoleSink, LogSink};
use boss_raid::Raid;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "raid", version, about = "Simulate a boss raid")]
struct Cli {
    /// JSON settings file (defaults to the classic match)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible match
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print ability events above each round
    #[arg(short, long)]
    events: bool,

    /// Print only the winner
    #[arg(short, long)]
    quiet: bool,

    /// Send round summaries to the log instead of stdout
    #[arg(short, long)]
    log: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.log { "info" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    settings.render.show_events |= cli.events;
    settings.render.quiet |= cli.quiet;

    let mut raid = Raid::from_settings(&settings)?;
    let report = if cli.log {
        raid.run(&mut LogSink)
    } else {
        let stdout = std::io::stdout();
        let mut sink = ConsoleSink::new(stdout.lock(), settings.render);
        raid.run(&mut sink)
    };
    log::info!("{:?} in {} rounds", report.outcome, report.rounds);

    Ok(())
}
