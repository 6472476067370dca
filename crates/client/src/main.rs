//! Duel simulator binary.
//!
//! Loads a catalog, optional set definitions and two loadouts, runs one
//! battle and prints the log. Diagnostics go to stderr through `tracing`;
//! stdout carries only the battle output.
//!
//! # Examples
//!
//! ```bash
//! # Loadouts by name from data/loadouts/
//! cargo run -p duel-client -- --left knight --right rogue --summary
//!
//! # Explicit files, JSON output
//! cargo run -p duel-client -- --catalog items.json --left a.ron --right b.ron --json
//! ```

mod config;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use duel_content::{CatalogLoader, ConfigLoader, ContentFactory, SetLoader};
use duel_core::{BattleEnv, SimulateOptions, simulate};

use crate::config::ClientConfig;

/// Run one duel between two loadouts
#[derive(Parser, Debug)]
#[command(name = "duel")]
#[command(about = "Deterministic item-battle simulator", long_about = None)]
#[command(version)]
struct Cli {
    /// Left loadout: a file path, or a name under <data-dir>/loadouts
    #[arg(long)]
    left: String,

    /// Right loadout: a file path, or a name under <data-dir>/loadouts
    #[arg(long)]
    right: String,

    /// Content directory [env: DUEL_DATA_DIR, default: data]
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Catalog file (.ron or .json); defaults to the data directory's catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Set definitions file; defaults to the data directory's sets.ron
    #[arg(long)]
    sets: Option<PathBuf>,

    /// Battle configuration TOML; defaults to the data directory's config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for random choices [env: DUEL_SEED, default: 0]
    #[arg(long)]
    seed: Option<u64>,

    /// Override the configured turn bound
    #[arg(long)]
    max_turns: Option<u32>,

    /// Include per-side statistics
    #[arg(long)]
    summary: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists (for DUEL_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let defaults = ClientConfig::from_env();
    let factory = ContentFactory::new(cli.data_dir.clone().unwrap_or(defaults.data_dir));

    let catalog = match &cli.catalog {
        Some(path) => CatalogLoader::load(path)?,
        None => factory.load_catalog()?,
    };
    let sets = match &cli.sets {
        Some(path) => SetLoader::load(path)?,
        None => factory.load_sets()?,
    };
    let config = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => factory.load_config()?,
    };
    let left = factory
        .load_loadout(&cli.left)
        .with_context(|| format!("Failed to load left loadout `{}`", cli.left))?;
    let right = factory
        .load_loadout(&cli.right)
        .with_context(|| format!("Failed to load right loadout `{}`", cli.right))?;

    let mut options = SimulateOptions::new(cli.seed.unwrap_or(defaults.seed)).with_config(config);
    if let Some(max_turns) = cli.max_turns {
        options = options.with_max_turns(max_turns);
    }
    if cli.summary {
        options = options.with_summary();
    }

    tracing::info!(
        left = %left.name,
        right = %right.name,
        seed = options.seed,
        "starting battle"
    );
    let env = BattleEnv::new(&catalog).with_sets(&sets);
    let outcome = simulate(&left, &right, &env, &options);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", render::outcome(&outcome));
    }
    Ok(())
}
