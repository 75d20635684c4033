// crates/dendrite-cli/src/main.rs
//
// CLI entrypoint for the Dendrite moderation tools.
//
// Provides subcommands for scoring item visibility, inspecting moderator
// trust distances and edge weights, and counting stored ratings.

mod commands;
mod config;
mod output;

use clap::{Parser, Subcommand};
use commands::counts::CountsCmd;
use commands::distance::{DistanceCmd, DistancesCmd, EdgeWeightCmd};
use commands::visibility::{ResolveCmd, VisibilityCmd};
use config::{DendriteConfig, DEFAULT_CONFIG_PATH};
use output::OutputFormat;

/// Dendrite CLI — trust-weighted moderation tools.
#[derive(Parser, Debug)]
#[command(
    name = "dendrite",
    version = "0.1.0",
    about = "Dendrite moderation CLI — trust-weighted visibility for crowd-moderated content"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Output format (overrides the config file).
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Score a JSON visibility request envelope.
    Visibility(VisibilityCmd),

    /// Score an item from a list of stored rating records.
    Resolve(ResolveCmd),

    /// Trust distance from one moderator to the admin.
    Distance(DistanceCmd),

    /// Trust distance of every moderator to the admin.
    Distances(DistancesCmd),

    /// Disagreement weight between two moderators.
    EdgeWeight(EdgeWeightCmd),

    /// Count valid ratings per moderator in a list of rating records.
    Counts(CountsCmd),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration before tracing so the configured level applies;
    // report the outcome once the subscriber is up.
    let loaded = DendriteConfig::load_optional(&cli.config);
    let config = match &loaded {
        Ok(Some(cfg)) => cfg.clone(),
        _ => DendriteConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match loaded {
        Ok(Some(_)) => tracing::info!("Loaded configuration from {}", cli.config),
        Ok(None) if cli.config == DEFAULT_CONFIG_PATH => {
            tracing::debug!("No config file at {}. Using defaults.", cli.config)
        }
        Ok(None) => tracing::warn!("Config file {} not found. Using defaults.", cli.config),
        Err(e) => tracing::warn!(
            "Could not load config from {}: {}. Using defaults.",
            cli.config,
            e
        ),
    }

    let format = cli.output.unwrap_or(config.output);

    match &cli.command {
        Commands::Visibility(cmd) => commands::visibility::run(cmd, format)?,
        Commands::Resolve(cmd) => commands::visibility::run_resolve(cmd, &config, format)?,
        Commands::Distance(cmd) => commands::distance::run(cmd, &config, format)?,
        Commands::Distances(cmd) => commands::distance::run_all(cmd, &config, format)?,
        Commands::EdgeWeight(cmd) => commands::distance::run_edge_weight(cmd, format)?,
        Commands::Counts(cmd) => commands::counts::run(cmd, format)?,
    }

    Ok(())
}
