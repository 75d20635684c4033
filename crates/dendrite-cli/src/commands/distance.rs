// crates/dendrite-cli/src/commands/distance.rs
//
// `dendrite distance`, `dendrite distances`, `dendrite edge-weight` —
// inspect the implicit moderator trust graph.

use clap::Args;
use dendrite_trust::{distances_to_admin, edge_weight, shortest_distance_to_admin, DistanceQuery};
use serde_json::json;
use tabled::Tabled;

use crate::config::DendriteConfig;
use crate::output::{format_json, format_score, format_table, OutputFormat};

/// Trust distance from one moderator to the admin.
#[derive(Debug, Args)]
pub struct DistanceCmd {
    /// Path to a JSON ratings table `{ moderator: { item: bool } }`.
    #[arg(long)]
    pub ratings: String,

    /// Moderator to measure.
    #[arg(long)]
    pub moderator: String,

    /// Admin moderator id (defaults to `admin_id` from the config file).
    #[arg(long)]
    pub admin: Option<String>,

    /// Item to leave out of every edge weight.
    #[arg(long)]
    pub ignore: Option<String>,
}

/// Trust distance of every moderator to the admin.
#[derive(Debug, Args)]
pub struct DistancesCmd {
    /// Path to a JSON ratings table `{ moderator: { item: bool } }`.
    #[arg(long)]
    pub ratings: String,

    /// Admin moderator id (defaults to `admin_id` from the config file).
    #[arg(long)]
    pub admin: Option<String>,

    /// Item to leave out of every edge weight.
    #[arg(long)]
    pub ignore: Option<String>,
}

/// Disagreement weight between two moderators.
#[derive(Debug, Args)]
pub struct EdgeWeightCmd {
    /// Path to a JSON ratings table `{ moderator: { item: bool } }`.
    #[arg(long)]
    pub ratings: String,

    /// First moderator.
    #[arg()]
    pub moderator_a: String,

    /// Second moderator.
    #[arg()]
    pub moderator_b: String,

    /// Item to leave out of the overlap.
    #[arg(long)]
    pub ignore: Option<String>,
}

/// A row in the distances table.
#[derive(Tabled)]
struct DistanceRow {
    #[tabled(rename = "Moderator")]
    moderator: String,
    #[tabled(rename = "Distance")]
    distance: String,
    #[tabled(rename = "Influence")]
    influence: String,
}

/// Run the distance command.
pub fn run(
    cmd: &DistanceCmd,
    config: &DendriteConfig,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let admin_id = config.resolve_admin(cmd.admin.as_deref())?;
    let ratings = super::load_ratings(&cmd.ratings)?;

    let query = DistanceQuery {
        moderator_id: &cmd.moderator,
        admin_id: &admin_id,
        ratings: &ratings,
        ignored_item: cmd.ignore.as_deref(),
    };
    let distance = shortest_distance_to_admin(&query);

    match format {
        OutputFormat::Json => println!(
            "{}",
            format_json(&json!({
                "moderatorId": cmd.moderator,
                "adminId": admin_id,
                "distance": distance,
                "influence": 1.0 - distance,
            }))
        ),
        OutputFormat::Table => {
            println!("Moderator:  {}", cmd.moderator);
            println!("Admin:      {}", admin_id);
            println!("Distance:   {}", format_score(distance));
            println!("Influence:  {}", format_score(1.0 - distance));
        }
    }

    Ok(())
}

/// Run the distances command.
pub fn run_all(
    cmd: &DistancesCmd,
    config: &DendriteConfig,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let admin_id = config.resolve_admin(cmd.admin.as_deref())?;
    let ratings = super::load_ratings(&cmd.ratings)?;
    let distances = distances_to_admin(&ratings, &admin_id, cmd.ignore.as_deref());

    match format {
        OutputFormat::Json => println!("{}", format_json(&distances)),
        OutputFormat::Table => {
            let rows: Vec<DistanceRow> = distances
                .iter()
                .map(|(moderator, &distance)| DistanceRow {
                    moderator: moderator.clone(),
                    distance: format_score(distance),
                    influence: format_score(1.0 - distance),
                })
                .collect();
            println!("Trust distances to {}", admin_id);
            println!("{}", format_table(&rows));
        }
    }

    Ok(())
}

/// Run the edge-weight command.
pub fn run_edge_weight(cmd: &EdgeWeightCmd, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let ratings = super::load_ratings(&cmd.ratings)?;
    let weight = edge_weight(&cmd.moderator_a, &cmd.moderator_b, &ratings, cmd.ignore.as_deref());

    match format {
        OutputFormat::Json => println!(
            "{}",
            format_json(&json!({
                "moderatorA": cmd.moderator_a,
                "moderatorB": cmd.moderator_b,
                "weight": weight,
            }))
        ),
        OutputFormat::Table => println!("{}", weight),
    }

    Ok(())
}
