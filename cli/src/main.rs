//! ballot: replay election command journals and verify snapshots.

mod config;
mod replay;
mod summary;

use anyhow::Context;
use ballot_election::{Election, ElectionSnapshot};
use ballot_utils::{init_logging, LogFormat};
use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use config::FileConfig;
use summary::ElectionSummary;

#[derive(Parser)]
#[command(name = "ballot", about = "Single-election voting workflow")]
struct Cli {
    /// Log format: "human" or "json". Overrides the config file.
    #[arg(long, global = true, env = "BALLOT_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    /// Overrides the config file.
    #[arg(long, global = true, env = "BALLOT_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Build an election from a config file and replay a command journal.
    Replay {
        /// Election config (TOML).
        #[arg(long, env = "BALLOT_CONFIG")]
        config: PathBuf,

        /// JSON-lines journal of `{"caller", "command"}` entries.
        journal: PathBuf,

        /// Abort on the first rejected entry instead of skipping it.
        #[arg(long)]
        strict: bool,

        /// Write the final snapshot as JSON.
        #[arg(long)]
        snapshot_out: Option<PathBuf>,
    },

    /// Restore a JSON snapshot, checking integrity and consistency.
    Verify { snapshot: PathBuf },

    /// Print a sample configuration as TOML.
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Replay {
            config,
            journal,
            strict,
            snapshot_out,
        } => {
            let file_config = FileConfig::load(&config)?;
            init_logging(
                cli.log_format.unwrap_or(file_config.log_format),
                cli.log_level.as_deref().unwrap_or(&file_config.log_level),
            );
            tracing::info!(config = %config.display(), "loaded config");
            run_replay(&file_config, &journal, strict, snapshot_out.as_deref())
        }
        Command::Verify { snapshot } => {
            init_logging(
                cli.log_format.unwrap_or_default(),
                cli.log_level.as_deref().unwrap_or("info"),
            );
            run_verify(&snapshot)
        }
        Command::Config => {
            let text = toml::to_string_pretty(&FileConfig::sample())
                .context("failed to serialize sample config")?;
            print!("{text}");
            Ok(())
        }
    }
}

fn run_replay(
    config: &FileConfig,
    journal: &Path,
    strict: bool,
    snapshot_out: Option<&Path>,
) -> anyhow::Result<()> {
    let mut election =
        Election::from_config(&config.election).context("invalid initial voter list")?;
    let file = File::open(journal)
        .with_context(|| format!("failed to open journal {}", journal.display()))?;

    let stats = replay::replay(&mut election, BufReader::new(file), strict)?;
    tracing::info!(
        applied = stats.applied,
        rejected = stats.rejected,
        status = %election.workflow_status(),
        "journal replayed"
    );

    if let Some(path) = snapshot_out {
        let json = serde_json::to_string_pretty(&election.snapshot())?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write snapshot {}", path.display()))?;
        tracing::info!(path = %path.display(), "snapshot written");
    }

    let summary = ElectionSummary::of(&election).with_rejected(stats.rejected);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn run_verify(path: &Path) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let snapshot: ElectionSnapshot = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))?;
    let hash = snapshot.hash.clone();
    let election = Election::restore(snapshot)
        .with_context(|| format!("snapshot {} failed verification", path.display()))?;
    tracing::info!(%hash, "snapshot verified");
    println!("{}", serde_json::to_string_pretty(&ElectionSummary::of(&election))?);
    Ok(())
}
