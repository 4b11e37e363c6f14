//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Accepted session lifetimes: one second up to 30 days
const SESSION_EXPIRY_RANGE: RangeInclusive<i64> = 1..=30 * 24 * 60 * 60;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub store: StoreConfig,
    pub session: SessionConfig,
    pub retry: RetryConfig,
    pub feed: FeedConfig,
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

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Document store project settings
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub project_id: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Session token settings
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    #[serde(default = "default_session_expiry")]
    pub expiry_secs: i64,
}

/// Retry policy for store writes
#[derive(Debug, Clone, Deserialize)]
pub struct RetryConfig {
    #[serde(default = "default_retry_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_retry_base_delay_ms")]
    pub base_delay_ms: u64,
    #[serde(default = "default_retry_max_jitter_ms")]
    pub max_jitter_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_retry_max_attempts(),
            base_delay_ms: default_retry_base_delay_ms(),
            max_jitter_ms: default_retry_max_jitter_ms(),
        }
    }
}

/// Home feed settings
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_latest_limit")]
    pub latest_limit: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            latest_limit: default_latest_limit(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "pinion".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_session_expiry() -> i64 {
    3600 // 1 hour
}

fn default_retry_max_attempts() -> u32 {
    3
}

fn default_retry_base_delay_ms() -> u64 {
    1000
}

fn default_retry_max_jitter_ms() -> u64 {
    1000
}

fn default_latest_limit() -> usize {
    5
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if required keys are missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::MissingVar(key));

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: match lookup("APP_ENV") {
                    Some(value) => Environment::parse(&value)
                        .ok_or(ConfigError::InvalidValue("APP_ENV", value))?,
                    None => default_env(),
                },
            },
            store: StoreConfig {
                project_id: required("STORE_PROJECT_ID")?,
                api_key: lookup("STORE_API_KEY"),
            },
            session: SessionConfig {
                secret: required("SESSION_SECRET")?,
                expiry_secs: parse_in_range(
                    &lookup,
                    "SESSION_EXPIRY_SECS",
                    default_session_expiry,
                    &SESSION_EXPIRY_RANGE,
                )?,
            },
            retry: RetryConfig {
                max_attempts: parse_or(&lookup, "RETRY_MAX_ATTEMPTS", default_retry_max_attempts)?,
                base_delay_ms: parse_or(
                    &lookup,
                    "RETRY_BASE_DELAY_MS",
                    default_retry_base_delay_ms,
                )?,
                max_jitter_ms: parse_or(
                    &lookup,
                    "RETRY_MAX_JITTER_MS",
                    default_retry_max_jitter_ms,
                )?,
            },
            feed: FeedConfig {
                latest_limit: parse_or(&lookup, "FEED_LATEST_LIMIT", default_latest_limit)?,
            },
        })
    }
}

/// Parse an optional numeric key, falling back to `default` when absent
fn parse_or<F, T>(lookup: &F, key: &'static str, default: fn() -> T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, value)),
        None => Ok(default()),
    }
}

/// Parse an optional numeric key and reject values outside `range`
fn parse_in_range<F, T>(
    lookup: &F,
    key: &'static str,
    default: fn() -> T,
    range: &RangeInclusive<T>,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + PartialOrd + ToString,
{
    let value = parse_or(lookup, key, default)?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue(key, value.to_string()))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
