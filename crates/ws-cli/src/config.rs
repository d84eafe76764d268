//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Name of the log file looked up in the home directory.
const DEFAULT_FILE_NAME: &str = ".workstamps.txt";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the workstamps log.
    pub file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            file: home.join(DEFAULT_FILE_NAME),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    ///
    /// Later sources win: built-in defaults, then the user config file,
    /// then `config_path`.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.extract()
    }

    /// Replaces the log path when one was given on the command line.
    #[must_use]
    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        if let Some(file) = file {
            self.file = file;
        }
        self
    }
}

/// Returns `~/.config/workstamps`.
///
/// Only the home directory is looked up, so `XDG_CONFIG_HOME` has no effect.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("workstamps"))
}
