//! UI Configuration
//!
//! User-facing strings and asset paths, read from the embedded
//! `goals.config.json`.

use serde::Deserialize;
use tracing::warn;

const EMBEDDED_CONFIG: &str = include_str!("../goals.config.json");

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    InvalidInput(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "Config parse error: {}", err),
            ConfigError::InvalidInput(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            ConfigError::InvalidInput(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Labels and asset paths shown by the components
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    pub title: String,
    pub header_icon: String,
    pub add_goal_label: String,
    pub placeholder: String,
    pub submit_label: String,
    pub cancel_label: String,
    pub form_icon: String,
    pub empty_message: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Course Goals".to_string(),
            header_icon: "public/icon.png".to_string(),
            add_goal_label: "Add New Goal".to_string(),
            placeholder: "Your course goal!".to_string(),
            submit_label: "Add Goal".to_string(),
            cancel_label: "Cancel".to_string(),
            form_icon: "public/goal.png".to_string(),
            empty_message: "No goals yet.".to_string(),
        }
    }
}

impl UiConfig {
    /// Parse a JSON document; missing keys keep their defaults
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: UiConfig = serde_json::from_str(json)?;
        if config.submit_label.is_empty() || config.cancel_label.is_empty() {
            return Err(ConfigError::InvalidInput(
                "form button labels must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Load the embedded config, falling back to defaults
    pub fn load() -> Self {
        Self::from_json(EMBEDDED_CONFIG).unwrap_or_else(|err| {
            warn!(%err, "using default UI config");
            Self::default()
        })
    }
}
