//! User settings for discogs-cli
//!
//! Settings come from an optional `config.json`, then get overridden by
//! environment variables and command-line flags in the binary. The merged
//! value is passed explicitly to every command.

use serde::{Deserialize, Serialize};

use super::paths::CliPaths;
use crate::error::DiscogsError;

/// Default API root
pub const DEFAULT_API_BASE_URL: &str = "https://api.discogs.com";

/// Upper bound on pages fetched for one collection
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// User settings for discogs-cli
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// API root the client talks to
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// User-Agent header sent with every request (the API rejects requests without one)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of pages a single collection fetch may request
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Personal access token used when no flag or `BOT_TOKEN` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_token: Option<String>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("discogs-cli/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            user_agent: default_user_agent(),
            max_pages: default_max_pages(),
            user_token: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &CliPaths) -> Result<Self, DiscogsError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| DiscogsError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| DiscogsError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CliPaths) -> Result<(), DiscogsError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| DiscogsError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| DiscogsError::Write(format!("Failed to write settings file: {}", e)))
    }

    /// Apply overrides coming from the environment or command line
    pub fn with_overrides(mut self, api_base_url: Option<String>, max_pages: Option<u32>) -> Self {
        if let Some(url) = api_base_url {
            self.api_base_url = url;
        }
        if let Some(max) = max_pages {
            self.max_pages = max;
        }
        self
    }

    /// Pick the token to use: explicit value first, then the settings file
    pub fn resolve_token(&self, explicit: Option<String>) -> Result<String, DiscogsError> {
        explicit
            .or_else(|| self.user_token.clone())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                DiscogsError::Config(
                    "A user token is required: pass --user-token or set BOT_TOKEN".into(),
                )
            })
    }

    /// Token shown in `config` output, never the real value
    pub fn masked_token(&self) -> String {
        match &self.user_token {
            Some(token) if token.chars().count() > 4 => {
                let tail: String = token.chars().skip(token.chars().count() - 4).collect();
                format!("****{}", tail)
            }
            Some(_) => "****".to_string(),
            None => "(not set)".to_string(),
        }
    }
}
