//! User configuration (`config.toml`).
//!
//! ```toml
//! [display]
//! invalid = "invalid input"
//! empty = ""
//! ```
//!
//! A missing default file is not an error. Problems reading or parsing a
//! file are reported as warnings and the defaults are kept.

use directories::ProjectDirs;
use quadcell_engine::engine::DisplayOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::CliError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    display: Option<DisplaySection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DisplaySection {
    invalid: Option<String>,
    empty: Option<String>,
}

/// Settings resolved from the config file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub display: DisplayOptions,
}

impl Config {
    fn from_file(file: ConfigFile) -> Config {
        let mut display = DisplayOptions::default();
        if let Some(section) = file.display {
            if let Some(invalid) = section.invalid {
                display.invalid = invalid;
            }
            if let Some(empty) = section.empty {
                display.empty = empty;
            }
        }
        Config { display }
    }
}

fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "quadcell").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Parse config text. The path is only used in the error message.
pub fn parse_config(content: &str, path: &Path) -> Result<Config, CliError> {
    toml::from_str::<ConfigFile>(content)
        .map(Config::from_file)
        .map_err(|err| CliError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
}

/// Load the config from `explicit` or the user config dir.
/// Returns the config and any warnings to show the user.
pub fn load_config(explicit: Option<&PathBuf>) -> (Config, Vec<String>) {
    let mut warnings = Vec::new();
    let Some(path) = explicit.cloned().or_else(user_config_path) else {
        return (Config::default(), warnings);
    };

    if !path.exists() {
        if explicit.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (Config::default(), warnings);
    }

    let config = match std::fs::read_to_string(&path) {
        Ok(content) => match parse_config(&content, &path) {
            Ok(config) => config,
            Err(err) => {
                warnings.push(err.to_string());
                Config::default()
            }
        },
        Err(err) => {
            warnings.push(format!("Failed to read {}: {}", path.display(), err));
            Config::default()
        }
    };
    tracing::debug!(path = %path.display(), "config loaded");
    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_overrides_markers() {
        let config = parse_config(
            "[display]\ninvalid = \"#ERR\"\nempty = \"-\"\n",
            Path::new("config.toml"),
        )
        .unwrap();
        assert_eq!(config.display.invalid, "#ERR");
        assert_eq!(config.display.empty, "-");
    }

    #[test]
    fn test_parse_config_partial_keeps_defaults() {
        let config = parse_config("[display]\nempty = \"0\"\n", Path::new("config.toml")).unwrap();
        assert_eq!(config.display.invalid, "invalid input");
        assert_eq!(config.display.empty, "0");

        let config = parse_config("", Path::new("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_config_rejects_unknown_keys() {
        let err = parse_config("[display]\ncolour = \"red\"\n", Path::new("x.toml")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse x.toml"));
    }

    #[test]
    fn test_missing_explicit_file_warns() {
        let path = PathBuf::from("/nonexistent/quadcell/config.toml");
        let (config, warnings) = load_config(Some(&path));
        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("not found"));
    }
}
