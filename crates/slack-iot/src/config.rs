use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::NotifierError;

pub const DEFAULT_BASE_URL: &str = "https://hooks.slack.com/services/";
pub const DEFAULT_CREDENTIALS_FILE: &str = "slack.credentials";

const DEFAULT_SETTINGS_NAME: &str = "slack-iot.toml";

/// Settings a [`Notifier`](crate::Notifier) is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    /// Prefix the credential is appended to.
    pub base_url: String,
    /// File whose first line holds the credential.
    pub credentials_file: PathBuf,
    /// Print messages instead of sending them.
    pub debug: bool,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            credentials_file: PathBuf::from(DEFAULT_CREDENTIALS_FILE),
            debug: false,
        }
    }
}

impl NotifierConfig {
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_credentials_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_file = path.into();
        self
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Optional on-disk settings (`slack-iot.toml`). Every key may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub base_url: Option<String>,
    pub credentials_file: Option<PathBuf>,
    #[serde(default)]
    pub debug: bool,
}

/// Values given explicitly by the caller; these beat the settings file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub credentials_file: Option<PathBuf>,
    pub debug: bool,
}

impl Settings {
    /// Load settings from an explicit path, or search upward from the current
    /// dir and then the user config dir. Nothing found means all defaults.
    pub fn load(path_override: Option<PathBuf>) -> Result<Self, NotifierError> {
        let path = match path_override {
            Some(p) => p,
            None => match find_upwards(DEFAULT_SETTINGS_NAME).or_else(user_settings) {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Result<Self, NotifierError> {
        let config_err = |message: String| NotifierError::Config {
            path: path.to_path_buf(),
            message,
        };
        let contents = fs::read_to_string(path).map_err(|e| config_err(e.to_string()))?;
        let settings: Settings =
            toml::from_str(&contents).map_err(|e| config_err(e.to_string()))?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn into_config(self, overrides: Overrides) -> NotifierConfig {
        let defaults = NotifierConfig::default();
        NotifierConfig {
            base_url: overrides
                .base_url
                .or(self.base_url)
                .unwrap_or(defaults.base_url),
            credentials_file: overrides
                .credentials_file
                .or(self.credentials_file)
                .unwrap_or(defaults.credentials_file),
            debug: overrides.debug || self.debug,
        }
    }
}

fn find_upwards(file_name: &str) -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join(file_name);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

fn user_settings() -> Option<PathBuf> {
    let candidate = dirs::config_dir()?.join("slack-iot").join("config.toml");
    candidate.is_file().then_some(candidate)
}
