//! Application configuration structs
//!
//! Loads configuration from environment variables (with `.env` support).

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub log: LogSettings,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Logging settings
#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

// Default value functions
fn default_app_name() -> String {
    "innkeep".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file first if one is present. All variables are
    /// optional and fall back to development defaults:
    /// `INNKEEP_APP_NAME`, `INNKEEP_ENV` (development|staging|production),
    /// `INNKEEP_LOG_LEVEL`, `INNKEEP_LOG_JSON`.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let env = match env::var("INNKEEP_ENV") {
            Ok(s) => parse_environment(&s).ok_or(ConfigError::InvalidVar("INNKEEP_ENV"))?,
            Err(_) => Environment::default(),
        };

        let json = match env::var("INNKEEP_LOG_JSON") {
            Ok(s) => parse_bool(&s).ok_or(ConfigError::InvalidVar("INNKEEP_LOG_JSON"))?,
            Err(_) => env.is_production(),
        };

        Ok(Self {
            app: AppSettings {
                name: env::var("INNKEEP_APP_NAME").unwrap_or_else(|_| default_app_name()),
                env,
            },
            log: LogSettings {
                level: env::var("INNKEEP_LOG_LEVEL").unwrap_or_else(|_| default_log_level()),
                json,
            },
        })
    }
}

fn parse_environment(s: &str) -> Option<Environment> {
    match s.to_lowercase().as_str() {
        "production" => Some(Environment::Production),
        "staging" => Some(Environment::Staging),
        "development" => Some(Environment::Development),
        _ => None,
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    InvalidVar(&'static str),
}
