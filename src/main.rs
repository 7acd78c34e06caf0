use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use navtree::config::Config;
use navtree::logging::init_tracing;
use navtree::replay::{Replay, Script};
use navtree::snapshot::TreeSnapshot;

#[derive(Parser)]
#[command(name = "navtree")]
#[command(about = "Replay navigation scripts against the navigation tree engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a TOML navigation script and print the tree after every step
    Replay {
        script: PathBuf,

        /// Print snapshots as JSON instead of an outline
        #[arg(long)]
        json: bool,

        /// Config file (default: ~/.config/navtree/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct StepSnapshot {
    step: String,
    tree: TreeSnapshot,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Replay {
            script,
            json,
            config,
        } => replay(&script, json, config.as_deref()),
    }
}

fn replay(script_path: &Path, json: bool, config_path: Option<&Path>) -> Result<()> {
    let config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging);

    let source = std::fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script '{}'", script_path.display()))?;
    let script = Script::from_toml(&source)
        .with_context(|| format!("Failed to parse script '{}'", script_path.display()))?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("Failed to start runtime")?;
    let replay = Replay::new(&script, &config.navigator);
    tracing::info!(script = %script_path.display(), steps = script.steps.len(), "Replaying script");

    let mut snapshots = vec![StepSnapshot {
        step: "root".to_string(),
        tree: TreeSnapshot::capture(&replay.navigator().current()),
    }];
    for (index, step) in script.steps.iter().enumerate() {
        let label = format!("{} {}", index + 1, step.action());
        runtime
            .block_on(replay.apply(step))
            .with_context(|| format!("Step {} failed", label))?;
        snapshots.push(StepSnapshot {
            step: label,
            tree: TreeSnapshot::capture(&replay.navigator().current()),
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshots)?);
    } else {
        for snapshot in &snapshots {
            println!("== {}", snapshot.step);
            print!("{}", snapshot.tree);
        }
    }
    Ok(())
}
