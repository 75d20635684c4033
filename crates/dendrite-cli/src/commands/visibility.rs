// crates/dendrite-cli/src/commands/visibility.rs
//
// `dendrite visibility <request.json>` — score a JSON request envelope.
// `dendrite resolve --records <file> --item <id>` — score from rating records.

use clap::Args;
use dendrite_core::{RatingsTable, DEFAULT_VISIBILITY};
use dendrite_visibility::{
    resolve_visibility, valid_records, VisibilityOutcome, VisibilityRequest,
};
use serde_json::json;
use tabled::Tabled;

use crate::config::DendriteConfig;
use crate::output::{format_json, format_score, format_table, OutputFormat};

/// Score a visibility request envelope.
#[derive(Debug, Args)]
pub struct VisibilityCmd {
    /// Path to a JSON envelope `{ itemId, adminId, ratings }` (`-` for stdin).
    #[arg()]
    pub request: String,

    /// Show the deciding rule and each rater's influence.
    #[arg(long)]
    pub explain: bool,
}

/// Score an item from stored rating records.
#[derive(Debug, Args)]
pub struct ResolveCmd {
    /// Path to a JSON array of `{ moderatorId, variantId, isApproved, ratedAt }` records.
    #[arg(long)]
    pub records: String,

    /// The item (variant) to score.
    #[arg(long)]
    pub item: String,

    /// Admin moderator id (defaults to `admin_id` from the config file).
    #[arg(long)]
    pub admin: Option<String>,

    /// Show the deciding rule and each rater's influence.
    #[arg(long)]
    pub explain: bool,
}

/// A row in the rater influence table.
#[derive(Tabled)]
struct RaterRow {
    #[tabled(rename = "Moderator")]
    moderator: String,
    #[tabled(rename = "Vote")]
    vote: &'static str,
    #[tabled(rename = "Distance")]
    distance: String,
    #[tabled(rename = "Influence")]
    influence: String,
}

/// Run the visibility command.
///
/// An envelope that cannot be decoded still prints the fail-open score.
pub fn run(cmd: &VisibilityCmd, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let input = super::read_input(&cmd.request)?;

    match VisibilityRequest::from_json(&input) {
        Ok(request) => print_outcome(&request, cmd.explain, format),
        Err(e) => {
            tracing::warn!("Unusable request in {}: {}. Defaulting to visible.", cmd.request, e);
            match format {
                OutputFormat::Table => println!("{}", DEFAULT_VISIBILITY),
                OutputFormat::Json => println!(
                    "{}",
                    format_json(&json!({ "visibility": DEFAULT_VISIBILITY, "rule": "invalid_request" }))
                ),
            }
        }
    }

    Ok(())
}

/// Run the resolve command.
pub fn run_resolve(
    cmd: &ResolveCmd,
    config: &DendriteConfig,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let admin_id = config.resolve_admin(cmd.admin.as_deref())?;
    let raw = super::read_json(&cmd.records)?;
    let records = valid_records(&raw);
    tracing::debug!(records = records.len(), "decoded rating records from {}", cmd.records);

    let request = VisibilityRequest::new(cmd.item.clone(), admin_id, RatingsTable::from_records(&records));
    print_outcome(&request, cmd.explain, format);

    Ok(())
}

fn print_outcome(request: &VisibilityRequest, explain: bool, format: OutputFormat) {
    let outcome = resolve_visibility(request);
    let visibility = outcome.visibility().to_string();

    match format {
        OutputFormat::Json => {
            let mut body = json!({
                "itemId": request.item_id,
                "adminId": request.admin_id,
                "visibility": visibility,
            });
            if explain {
                body["outcome"] = serde_json::to_value(&outcome).unwrap_or_default();
            }
            println!("{}", format_json(&body));
        }
        OutputFormat::Table => {
            println!("{}", visibility);
            if explain {
                println!();
                println!("Rule: {}", describe(&outcome));
                if !outcome.raters().is_empty() {
                    let rows: Vec<RaterRow> = outcome
                        .raters()
                        .iter()
                        .map(|r| RaterRow {
                            moderator: r.moderator_id.clone(),
                            vote: if r.approved { "approve" } else { "reject" },
                            distance: format_score(r.distance),
                            influence: format_score(r.influence),
                        })
                        .collect();
                    println!("{}", format_table(&rows));
                }
            }
        }
    }
}

fn describe(outcome: &VisibilityOutcome) -> String {
    match outcome {
        VisibilityOutcome::InvalidRequest => "invalid request, defaulting to visible".to_string(),
        VisibilityOutcome::AdminOverride { approved } => {
            format!("admin override ({})", if *approved { "approved" } else { "rejected" })
        }
        VisibilityOutcome::NoRaters => "no moderator ratings, defaulting to visible".to_string(),
        VisibilityOutcome::SingleRater { moderator_id, .. } => {
            format!("single rater ({}), vote taken as-is", moderator_id)
        }
        VisibilityOutcome::Untrusted { .. } => {
            "no rater has a trust path to the admin, defaulting to visible".to_string()
        }
        VisibilityOutcome::Weighted { raters, .. } => {
            format!("weighted consensus of {} raters", raters.len())
        }
    }
}
