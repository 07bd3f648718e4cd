use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_FILENAME;

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for dartesc.
    pub dartesc: DartescConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for dartesc. Command-line flags take precedence.
pub struct DartescConfig {
    /// Extension of the files to scan, without the leading dot.
    pub extension: Option<String>,
    /// Directory names (or `*.suffix` patterns) to skip.
    pub exclude_folders: Option<Vec<String>>,
    /// Whether `.gitignore` and friends prune the walk.
    pub respect_gitignore: Option<bool>,
}

impl Config {
    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// The first readable, well-formed `.dartesc.toml` wins. Unreadable or
    /// malformed files are skipped.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        // Walk real ancestors even when given a relative path like ".".
        let mut current = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if current.is_file() {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                if let Ok(content) = fs::read_to_string(&candidate) {
                    if let Ok(mut config) = toml::from_str::<Config>(&content) {
                        config.config_file_path = Some(candidate);
                        return config;
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }
}
