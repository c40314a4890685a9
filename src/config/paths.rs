//! Path management for discogs-cli
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (the binary fills this from `DISCOGS_CLI_CONFIG_DIR`)
//! 2. The platform config directory + `discogs-cli`
//!    (`~/.config/discogs-cli` on Linux, `~/Library/Application Support/discogs-cli`
//!    on macOS, `%APPDATA%\discogs-cli` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::DiscogsError;

const APP_DIR_NAME: &str = "discogs-cli";

/// Manages the paths used by discogs-cli
#[derive(Debug, Clone)]
pub struct CliPaths {
    /// Directory holding `config.json`
    base_dir: PathBuf,
}

impl CliPaths {
    /// Resolve the config directory, preferring an explicit override
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the home directory
    /// cannot be determined.
    pub fn resolve(override_dir: Option<PathBuf>) -> Result<Self, DiscogsError> {
        let base_dir = match override_dir {
            Some(dir) => dir,
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create CliPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), DiscogsError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DiscogsError::Write(format!("Failed to create config directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, DiscogsError> {
    let base = BaseDirs::new()
        .ok_or_else(|| DiscogsError::Config("Could not determine home directory".into()))?;
    Ok(base.config_dir().join(APP_DIR_NAME))
}
