/// Configuration for a comparison run
///
/// Options come from an optional JSON file and are overridden by values
/// given on the command line.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

/// Path compared as file A when nothing else is configured
pub const DEFAULT_FILE_A: &str = "output.txt";
/// Path compared as file B when nothing else is configured
pub const DEFAULT_FILE_B: &str = "real.txt";

/// Options recognized in a JSON configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    #[serde(alias = "fileA")]
    pub file_a: Option<PathBuf>,
    #[serde(alias = "fileB")]
    pub file_b: Option<PathBuf>,
    #[serde(alias = "labelA")]
    pub label_a: Option<String>,
    #[serde(alias = "labelB")]
    pub label_b: Option<String>,
}

/// Fully resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file_a: PathBuf,
    pub file_b: PathBuf,
    pub label_a: String,
    pub label_b: String,
}

/// Values supplied on the command line; `None` defers to the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub file_a: Option<PathBuf>,
    pub file_b: Option<PathBuf>,
    pub label_a: Option<String>,
    pub label_b: Option<String>,
}

impl Config {
    /// Merge command-line overrides over the file configuration, falling
    /// back to the default paths. Labels default to the paths as given.
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Self {
        let file_a = overrides
            .file_a
            .or(file.file_a)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_A));
        let file_b = overrides
            .file_b
            .or(file.file_b)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_B));

        let label_a = overrides
            .label_a
            .or(file.label_a)
            .unwrap_or_else(|| file_a.display().to_string());
        let label_b = overrides
            .label_b
            .or(file.label_b)
            .unwrap_or_else(|| file_b.display().to_string());

        Self {
            file_a,
            file_b,
            label_a,
            label_b,
        }
    }
}

/// Load configuration from file if provided
pub fn load_config(config_path: Option<&Path>) -> Result<FileConfig> {
    let Some(path) = config_path else {
        return Ok(FileConfig::default());
    };

    let config_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let config = parse_config(&config_str)
        .with_context(|| format!("Invalid JSON in configuration file: {}", path.display()))?;

    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Parse configuration from a JSON string
pub fn parse_config(json: &str) -> Result<FileConfig> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::resolve(FileConfig::default(), Overrides::default());
        assert_eq!(config.file_a, PathBuf::from(DEFAULT_FILE_A));
        assert_eq!(config.file_b, PathBuf::from(DEFAULT_FILE_B));
        assert_eq!(config.label_a, DEFAULT_FILE_A);
        assert_eq!(config.label_b, DEFAULT_FILE_B);
    }

    #[test]
    fn test_parse_camel_case_keys() {
        let file = parse_config(r#"{"fileA": "left.txt", "fileB": "right.txt"}"#).unwrap();
        assert_eq!(file.file_a, Some(PathBuf::from("left.txt")));
        assert_eq!(file.file_b, Some(PathBuf::from("right.txt")));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(parse_config(r#"{"file_c": "x.txt"}"#).is_err());
    }

    #[test]
    fn test_overrides_win() {
        let file = parse_config(r#"{"file_a": "a.txt", "file_b": "b.txt", "label_a": "old"}"#).unwrap();
        let overrides = Overrides {
            file_b: Some(PathBuf::from("other.txt")),
            label_b: Some("new".to_string()),
            ..Overrides::default()
        };
        let config = Config::resolve(file, overrides);
        assert_eq!(config.file_a, PathBuf::from("a.txt"));
        assert_eq!(config.file_b, PathBuf::from("other.txt"));
        assert_eq!(config.label_a, "old");
        assert_eq!(config.label_b, "new");
    }

    #[test]
    fn test_missing_config_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let err = load_config(Some(&temp_dir.path().join("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read configuration file"));
    }
}
