mod file_config;

pub use file_config::FileConfig;

use crate::changes::InvalidChangePolicy;
use anyhow::{anyhow, Result};
use clap::ValueEnum;
use std::path::PathBuf;

pub const DEFAULT_MIXTAPE_PATH: &str = "mixtape.json";
pub const DEFAULT_CHANGES_PATH: &str = "changes.json";
pub const DEFAULT_OUTPUT_PATH: &str = "output.json";

/// CLI arguments that can be used for config resolution.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub mixtape_path: Option<PathBuf>,
    pub changes_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub on_invalid_change: InvalidChangePolicy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub mixtape_path: PathBuf,
    pub changes_path: PathBuf,
    pub output_path: PathBuf,
    pub on_invalid_change: InvalidChangePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            mixtape_path: PathBuf::from(DEFAULT_MIXTAPE_PATH),
            changes_path: PathBuf::from(DEFAULT_CHANGES_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            on_invalid_change: InvalidChangePolicy::default(),
        }
    }
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();
        let defaults = AppConfig::default();

        let mixtape_path = file
            .mixtape_path
            .map(PathBuf::from)
            .or_else(|| cli.mixtape_path.clone())
            .unwrap_or(defaults.mixtape_path);
        let changes_path = file
            .changes_path
            .map(PathBuf::from)
            .or_else(|| cli.changes_path.clone())
            .unwrap_or(defaults.changes_path);
        let output_path = file
            .output_path
            .map(PathBuf::from)
            .or_else(|| cli.output_path.clone())
            .unwrap_or(defaults.output_path);

        let on_invalid_change = match file.on_invalid_change {
            Some(s) => parse_invalid_change_policy(&s)
                .ok_or_else(|| anyhow!("Invalid on_invalid_change value in config file: {:?}", s))?,
            None => cli.on_invalid_change,
        };

        Ok(Self {
            mixtape_path,
            changes_path,
            output_path,
            on_invalid_change,
        })
    }
}

/// Uses clap's ValueEnum trait for parsing.
fn parse_invalid_change_policy(s: &str) -> Option<InvalidChangePolicy> {
    InvalidChangePolicy::from_str(s, true).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_invalid_change_policy() {
        assert_eq!(
            parse_invalid_change_policy("abort"),
            Some(InvalidChangePolicy::Abort)
        );
        assert_eq!(
            parse_invalid_change_policy("SKIP"),
            Some(InvalidChangePolicy::Skip)
        );
        assert!(parse_invalid_change_policy("ignore").is_none());
    }

    #[test]
    fn test_resolve_defaults() {
        let config = AppConfig::resolve(&CliConfig::default(), None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.mixtape_path, PathBuf::from("mixtape.json"));
        assert_eq!(config.changes_path, PathBuf::from("changes.json"));
        assert_eq!(config.output_path, PathBuf::from("output.json"));
        assert_eq!(config.on_invalid_change, InvalidChangePolicy::Abort);
    }

    #[test]
    fn test_resolve_cli_only() {
        let cli = CliConfig {
            mixtape_path: Some(PathBuf::from("/data/in.json")),
            changes_path: Some(PathBuf::from("/data/changes.json")),
            output_path: Some(PathBuf::from("/data/out.json")),
            on_invalid_change: InvalidChangePolicy::Skip,
        };

        let config = AppConfig::resolve(&cli, None).unwrap();

        assert_eq!(config.mixtape_path, PathBuf::from("/data/in.json"));
        assert_eq!(config.changes_path, PathBuf::from("/data/changes.json"));
        assert_eq!(config.output_path, PathBuf::from("/data/out.json"));
        assert_eq!(config.on_invalid_change, InvalidChangePolicy::Skip);
    }

    #[test]
    fn test_resolve_toml_overrides_cli() {
        let cli = CliConfig {
            mixtape_path: Some(PathBuf::from("/cli/in.json")),
            output_path: Some(PathBuf::from("/cli/out.json")),
            ..Default::default()
        };
        let file_config = FileConfig {
            mixtape_path: Some("/toml/in.json".to_string()),
            on_invalid_change: Some("skip".to_string()),
            ..Default::default()
        };

        let config = AppConfig::resolve(&cli, Some(file_config)).unwrap();

        assert_eq!(config.mixtape_path, PathBuf::from("/toml/in.json"));
        assert_eq!(config.on_invalid_change, InvalidChangePolicy::Skip);
        // CLI value used when TOML doesn't specify
        assert_eq!(config.output_path, PathBuf::from("/cli/out.json"));
        assert_eq!(config.changes_path, PathBuf::from("changes.json"));
    }

    #[test]
    fn test_resolve_bad_policy_error() {
        let file_config = FileConfig {
            on_invalid_change: Some("maybe".to_string()),
            ..Default::default()
        };
        let result = AppConfig::resolve(&CliConfig::default(), Some(file_config));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid on_invalid_change"));
    }

    #[test]
    fn test_load_file_config() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("mixtape.toml");
        std::fs::write(
            &path,
            "mixtape_path = \"in.json\"\non_invalid_change = \"skip\"\n",
        )
        .unwrap();

        let file_config = FileConfig::load(&path).unwrap();

        assert_eq!(file_config.mixtape_path, Some("in.json".to_string()));
        assert_eq!(file_config.on_invalid_change, Some("skip".to_string()));
        assert!(file_config.output_path.is_none());
    }

    #[test]
    fn test_load_missing_file_config() {
        let result = FileConfig::load(std::path::Path::new("/nonexistent/mixtape.toml"));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read config file"));
    }
}
