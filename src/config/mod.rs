use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_LIVE_URL, LOG_FILE_NAME, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_api_token;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Token sent in the auth header of every scores API request.
    pub api_token: String,
    /// Base URL of the scores API, including the trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// URL of the live-scores feed.
    #[serde(default = "default_live_url")]
    pub live_url: String,
    /// Path to the log file. If not specified, logs go to the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Optional HTTP timeout in seconds. The client default applies when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_timeout_seconds: Option<u64>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_live_url() -> String {
    DEFAULT_LIVE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_token: String::new(),
            api_base_url: default_api_base_url(),
            live_url: default_live_url(),
            log_file_path: None,
            http_timeout_seconds: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, the token is taken from the environment or
    /// prompted for, and a new file is written.
    ///
    /// # Environment Variables
    /// - `SOCCER_CLI_API_TOKEN` - Override API token
    /// - `SOCCER_CLI_API_URL` - Override scores API base URL
    /// - `SOCCER_CLI_LOG_FILE` - Override log file path
    /// - `SOCCER_CLI_HTTP_TIMEOUT` - HTTP timeout in seconds
    pub fn load() -> Result<Self, AppError> {
        Self::load_at(&get_config_path(), prompt_for_api_token)
    }

    fn load_at(
        config_path: &str,
        prompt: impl FnOnce() -> Result<String, AppError>,
    ) -> Result<Self, AppError> {
        let mut config = if Path::new(config_path).exists() {
            Self::load_from_path(config_path)?
        } else if let Ok(api_token) = std::env::var(env_vars::API_TOKEN) {
            Config {
                api_token,
                ..Config::default()
            }
        } else {
            let config = Config {
                api_token: prompt()?,
                ..Config::default()
            };
            // An unusable token must not be persisted
            config.validate()?;
            config.save_to_path(config_path)?;
            info!("Created new config file at {config_path}");
            config
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration for a run with a token given on the command line.
    /// File and environment settings still apply, the token wins, and
    /// nothing is prompted for or saved.
    pub fn load_with_token(api_token: String) -> Result<Self, AppError> {
        let config_path = get_config_path();
        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.api_token = api_token;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of file values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_token) = std::env::var(env_vars::API_TOKEN) {
            debug!("Using API token from {}", env_vars::API_TOKEN);
            self.api_token = api_token;
        }

        if let Ok(api_base_url) = std::env::var(env_vars::API_URL) {
            self.api_base_url = api_base_url;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = Some(timeout);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_token,
            &self.api_base_url,
            &self.live_url,
            &self.log_file_path,
        )
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    /// The token is masked except for its last four characters.
    pub fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let mut config = Self::load_from_path(&config_path)?;
            config.apply_env_overrides();
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Token:");
            println!("{}", mask_token(&config.api_token));
            println!("────────────────────────────────────");
            println!("API Base URL:");
            println!("{}", config.api_base_url);
            println!("────────────────────────────────────");
            println!("Live Scores URL:");
            println!("{}", config.live_url);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            match config.http_timeout_seconds {
                Some(seconds) => println!("{seconds} seconds"),
                None => println!("(HTTP client default)"),
            }
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{LOG_FILE_NAME}");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory when needed.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

fn mask_token(token: &str) -> String {
    let visible: String = token
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("{}{}", "*".repeat(token.chars().count().saturating_sub(4)), visible)
}
