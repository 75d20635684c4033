// crates/dendrite-cli/src/commands/mod.rs
//
// Command module declarations and shared input helpers for the Dendrite CLI.

pub mod counts;
pub mod distance;
pub mod visibility;

use std::fs;
use std::io::Read;

use dendrite_core::{DendriteError, RatingsTable};
use serde_json::Value;

/// Read a whole input file, or stdin when `path` is `-`.
pub fn read_input(path: &str) -> Result<String, DendriteError> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(fs::read_to_string(path)?)
}

/// Read and parse a JSON input file.
pub fn read_json(path: &str) -> Result<Value, DendriteError> {
    let contents = read_input(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Load a ratings table file, normalizing malformed entries away.
pub fn load_ratings(path: &str) -> Result<RatingsTable, DendriteError> {
    let raw = read_json(path)?;
    let table = RatingsTable::from_json_value(&raw);
    tracing::debug!(
        moderators = table.len(),
        ratings = table.rating_count(),
        "loaded ratings from {}",
        path
    );
    Ok(table)
}
