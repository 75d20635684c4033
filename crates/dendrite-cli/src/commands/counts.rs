// crates/dendrite-cli/src/commands/counts.rs
//
// `dendrite counts <records.json>` — valid ratings per moderator.

use clap::Args;
use dendrite_visibility::moderator_rating_counts;
use tabled::Tabled;

use crate::output::{format_json, format_table, OutputFormat};

/// Count valid ratings per moderator.
#[derive(Debug, Args)]
pub struct CountsCmd {
    /// Path to a JSON array of rating records (`-` for stdin).
    #[arg()]
    pub records: String,
}

/// A row in the counts table.
#[derive(Tabled)]
struct CountRow {
    #[tabled(rename = "Moderator")]
    moderator: String,
    #[tabled(rename = "Ratings")]
    count: usize,
}

/// Run the counts command.
///
/// Input that is not valid JSON counts as an empty list.
pub fn run(cmd: &CountsCmd, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let input = super::read_input(&cmd.records)?;
    let parsed = serde_json::from_str(&input).unwrap_or_else(|e| {
        tracing::warn!("Could not parse {}: {}. Treating as empty.", cmd.records, e);
        serde_json::Value::Null
    });
    let counts = moderator_rating_counts(&parsed);

    match format {
        OutputFormat::Json => println!("{}", format_json(&counts)),
        OutputFormat::Table => {
            let rows: Vec<CountRow> = counts
                .into_iter()
                .map(|c| CountRow {
                    moderator: c.moderator_id,
                    count: c.count,
                })
                .collect();
            println!("{}", format_table(&rows));
        }
    }

    Ok(())
}
