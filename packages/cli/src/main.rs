use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use common::config::StandingsAppConfig;
use common::{Contest, PlatformUser};
use serde::Serialize;
use tracing::{Level, error, info};

#[derive(Parser)]
#[command(name = "standings", version, about = "Rank contest snapshots")]
struct Cli {
    /// Config file path without extension. Defaults to `config/config`.
    #[arg(long, env = "STANDINGS_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank one contest, or an array of contests, read from a JSON file.
    Rank {
        /// Path to the contest snapshot.
        snapshot: PathBuf,
    },
    /// Print dashboard totals and users ordered by individual points.
    Summary {
        /// Path to a JSON array of users.
        users: PathBuf,
        #[arg(long, default_value_t = 0)]
        groups: u64,
        #[arg(long, default_value_t = 0)]
        contests: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => StandingsAppConfig::load_from(path),
        None => StandingsAppConfig::load(),
    }
    .context("Failed to load config")?;

    let level: Level = config
        .log
        .level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", config.log.level))?;
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Rank { snapshot } => rank(&snapshot, &config),
        Command::Summary {
            users,
            groups,
            contests,
        } => summary(&users, groups, contests, &config),
    }
}

fn rank(path: &Path, config: &StandingsAppConfig) -> anyhow::Result<()> {
    let contests = read_snapshot(path)?;
    let threads = config.engine.resolved_batch_threads();
    info!(contests = contests.len(), threads, path = %path.display(), "Ranking snapshot");

    let mut ranked = Vec::with_capacity(contests.len());
    let mut failed = 0;
    for result in standings::rank_contests(&contests, threads) {
        match result {
            Ok(standing) => ranked.push(standing),
            Err(e) => {
                error!(error = %e, "Contest could not be ranked");
                failed += 1;
            }
        }
    }

    print_json(&ranked, config.output.pretty)?;

    if failed > 0 {
        bail!("{failed} of {} contests could not be ranked", contests.len());
    }
    Ok(())
}

fn summary(
    path: &Path,
    groups: u64,
    contests: u64,
    config: &StandingsAppConfig,
) -> anyhow::Result<()> {
    let users = read_users(path)?;
    let summary = standings::summarize(&users, groups, contests);
    print_json(&summary, config.output.pretty)
}

fn read_snapshot(path: &Path) -> anyhow::Result<Vec<Contest>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    parse_snapshot(&raw).with_context(|| format!("Failed to parse snapshot {}", path.display()))
}

/// A snapshot file holds either a single contest or a JSON array of them.
fn parse_snapshot(raw: &str) -> serde_json::Result<Vec<Contest>> {
    if raw.trim_start().starts_with('[') {
        serde_json::from_str(raw)
    } else {
        serde_json::from_str::<Contest>(raw).map(|contest| vec![contest])
    }
}

fn read_users(path: &Path) -> anyhow::Result<Vec<PlatformUser>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read users {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse users {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;
    println!("{out}");
    Ok(())
}
