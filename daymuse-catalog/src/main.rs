//! Release catalog CLI (daymuse-catalog) - Main entry point
//!
//! Resolves the release manifest against editorial overrides and prints the
//! result as JSON. Also validates manifests and renders token metadata.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use daymuse_catalog::manifest::load_manifest;
use daymuse_catalog::metadata::{parse_token_id, TokenMetadata};
use daymuse_catalog::validation::validate_manifest;
use daymuse_catalog::ReleaseCatalog;
use daymuse_common::config::{CatalogConfig, ConfigOverrides, TomlConfig};

/// Command-line arguments for daymuse-catalog
#[derive(Parser, Debug)]
#[command(name = "daymuse-catalog")]
#[command(about = "Release catalog tools for Daily Muse")]
#[command(version)]
struct Args {
    /// TOML config file (defaults to the platform config location)
    #[arg(short, long, global = true, env = "DAYMUSE_CONFIG")]
    config: Option<PathBuf>,

    /// Release manifest JSON
    #[arg(short, long, global = true)]
    manifest: Option<PathBuf>,

    /// Editorial overrides JSON
    #[arg(short, long, global = true)]
    overrides: Option<PathBuf>,

    /// Storage root for audio and cover URLs
    #[arg(long, global = true)]
    storage_base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every resolved release as JSON
    Resolve,
    /// Print the release for one absolute day
    Show {
        #[arg(long)]
        day: u32,
    },
    /// Print token metadata for a token id (decimal or hex)
    Metadata { token_id: String },
    /// Report manifest issues; fails if any are found
    Validate,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let file_config = TomlConfig::load_or_default(args.config.as_deref());

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                let level = &file_config.logging.level;
                format!("daymuse_catalog={level},daymuse_common={level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = ConfigOverrides {
        storage_base_url: args.storage_base_url.clone(),
        manifest_path: args.manifest.clone(),
        overrides_path: args.overrides.clone(),
        app_url: None,
    };
    let config = CatalogConfig::resolve(&cli, &file_config);
    info!("Storage base URL: {}", config.storage_base_url);

    match args.command {
        Command::Resolve => {
            let catalog = load_catalog(&config)?;
            print_json(catalog.releases())?;
        }
        Command::Show { day } => {
            let catalog = load_catalog(&config)?;
            let release = catalog
                .find_by_day(day)
                .with_context(|| format!("No release for day {}", day))?;
            print_json(release)?;
        }
        Command::Metadata { token_id } => {
            let Some(id) = parse_token_id(&token_id) else {
                bail!("Invalid token id: {}", token_id);
            };
            let catalog = load_catalog(&config)?;
            let release = u32::try_from(id)
                .ok()
                .and_then(|day| catalog.find_by_day(day))
                .with_context(|| format!("Token metadata not found for {}", id))?;
            print_json(&TokenMetadata::from_release(release, id, &config.app_url))?;
        }
        Command::Validate => {
            let items = load_manifest(&config.manifest_path).with_context(|| {
                format!("Failed to load manifest {}", config.manifest_path.display())
            })?;
            let issues = validate_manifest(&items);
            for issue in &issues {
                println!("{}", issue);
            }
            if !issues.is_empty() {
                bail!("{} manifest issue(s) in {} items", issues.len(), items.len());
            }
            info!("Manifest OK: {} items", items.len());
        }
    }

    Ok(())
}

fn load_catalog(config: &CatalogConfig) -> Result<ReleaseCatalog> {
    ReleaseCatalog::load(config).with_context(|| {
        format!("Failed to load catalog from {}", config.manifest_path.display())
    })
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
