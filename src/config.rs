use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::language::DEFAULT_BASE_URL;

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub data: DataConfig,
    pub services: ServiceConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
}

/// Word-list and template data locations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding one `<category>.txt` word list per category.
    /// The built-in lists are used when unset.
    pub word_dir: Option<PathBuf>,
    /// Template catalog file. The built-in catalog is used when unset.
    pub template_file: Option<PathBuf>,
    /// Append every generated sentence here, one per line.
    pub sentence_log: Option<PathBuf>,
}

/// External language-service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL for the Google Cloud Natural Language API.
    pub language_api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tui: TuiConfig::default(),
            data: DataConfig::default(),
            services: ServiceConfig::default(),
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 50 }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            language_api_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/jabberwock/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e} — using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {} — using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("jabberwock").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
