// crates/dendrite-core/src/error.rs

use thiserror::Error;

/// Errors raised by the request-handling layers around the resolver.
///
/// The trust and visibility computations themselves never fail; these
/// variants cover decoding envelopes, reading files, and loading config.
#[derive(Debug, Error)]
pub enum DendriteError {
    /// Serialization/deserialization error (JSON envelopes, ratings files).
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Filesystem error while reading inputs or configuration.
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration file could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// Input was well-formed but unusable (e.g. empty identifiers).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for DendriteError {
    fn from(e: serde_json::Error) -> Self {
        DendriteError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for DendriteError {
    fn from(e: std::io::Error) -> Self {
        DendriteError::Io(e.to_string())
    }
}

impl From<toml::de::Error> for DendriteError {
    fn from(e: toml::de::Error) -> Self {
        DendriteError::Config(e.to_string())
    }
}
