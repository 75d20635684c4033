// crates/dendrite-cli/src/config.rs
//
// Runtime configuration for the Dendrite CLI.
// Loaded from a TOML file or populated with sensible defaults.

use std::fs;
use std::path::Path;

use dendrite_core::DendriteError;
use serde::Deserialize;

use crate::output::OutputFormat;

/// Where the CLI looks for its config when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "~/.dendrite/config.toml";

/// Runtime configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DendriteConfig {
    /// Admin moderator used when a command is not given `--admin`.
    #[serde(default)]
    pub admin_id: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format when `--output` is not given.
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for DendriteConfig {
    fn default() -> Self {
        Self {
            admin_id: None,
            log_level: default_log_level(),
            output: OutputFormat::default(),
        }
    }
}

impl DendriteConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// A leading `~/` is expanded to the home directory.
    pub fn load(path: &str) -> Result<Self, DendriteError> {
        let contents = fs::read_to_string(expand_tilde(path))?;
        Self::from_toml(&contents)
    }

    /// Like [`DendriteConfig::load`], but a missing file is `Ok(None)`.
    ///
    /// Unreadable or unparsable files are still errors.
    pub fn load_optional(path: &str) -> Result<Option<Self>, DendriteError> {
        if !Path::new(&expand_tilde(path)).exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, DendriteError> {
        let config: DendriteConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Pick the admin id: the explicit flag wins over the config value.
    pub fn resolve_admin(&self, flag: Option<&str>) -> Result<String, DendriteError> {
        flag.map(str::to_string)
            .or_else(|| self.admin_id.clone())
            .filter(|id| dendrite_core::is_valid_id(id))
            .ok_or_else(|| {
                DendriteError::InvalidInput(
                    "no admin id: pass --admin or set admin_id in the config file".to_string(),
                )
            })
    }
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}/{}", home.display(), rest);
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = DendriteConfig::from_toml("").unwrap();
        assert_eq!(config, DendriteConfig::default());
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.output, OutputFormat::Table);
    }

    #[test]
    fn parses_all_fields() {
        let config = DendriteConfig::from_toml(
            r#"
            admin_id = "matt"
            log_level = "debug"
            output = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.admin_id.as_deref(), Some("matt"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = DendriteConfig::from_toml("output = [").unwrap_err();
        assert!(matches!(err, DendriteError::Config(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = DendriteConfig::load("/nonexistent/dendrite/config.toml").unwrap_err();
        assert!(matches!(err, DendriteError::Io(_)));
    }

    #[test]
    fn optional_load_of_missing_file_is_none() {
        let loaded = DendriteConfig::load_optional("/nonexistent/dendrite/config.toml").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn optional_load_reports_broken_file() {
        let path = std::env::temp_dir().join(format!("dendrite-config-{}.toml", std::process::id()));
        fs::write(&path, "output = [").unwrap();
        let result = DendriteConfig::load_optional(&path.display().to_string());
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(DendriteError::Config(_))));
    }

    #[test]
    fn optional_load_reads_existing_file() {
        let path = std::env::temp_dir().join(format!("dendrite-config-ok-{}.toml", std::process::id()));
        fs::write(&path, "admin_id = \"matt\"").unwrap();
        let loaded = DendriteConfig::load_optional(&path.display().to_string()).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded.and_then(|c| c.admin_id).as_deref(), Some("matt"));
    }

    #[test]
    fn admin_flag_overrides_config() {
        let config = DendriteConfig {
            admin_id: Some("matt".to_string()),
            ..DendriteConfig::default()
        };
        assert_eq!(config.resolve_admin(Some("alice")).unwrap(), "alice");
        assert_eq!(config.resolve_admin(None).unwrap(), "matt");
        assert!(DendriteConfig::default().resolve_admin(None).is_err());
        assert!(DendriteConfig::default().resolve_admin(Some("")).is_err());
    }

    #[test]
    fn tilde_expansion_leaves_other_paths_alone() {
        assert_eq!(expand_tilde("/etc/dendrite.toml"), "/etc/dendrite.toml");
        assert_eq!(expand_tilde("relative/config.toml"), "relative/config.toml");
    }
}
