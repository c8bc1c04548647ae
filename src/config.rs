use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub slack: SlackConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub threads: ThreadConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Bearer token required on internal-facing endpoints such as the
    /// channel-list query.
    #[serde(default)]
    pub api_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SlackConfig {
    /// Per-app signing secret used to authenticate inbound webhooks. A
    /// missing secret is an operator error and fails event callbacks with
    /// a 500 rather than silently accepting unauthenticated traffic.
    #[serde(default)]
    pub signing_secret: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_user_cache_ttl_secs")]
    pub user_cache_ttl_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Cap on concurrent outbound posts when one message fans out to
    /// multiple bridges.
    #[serde(default = "default_outbound_concurrency")]
    pub outbound_concurrency: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThreadConfig {
    #[serde(default = "default_thread_ttl_hours")]
    pub ttl_hours: i64,
    #[serde(default = "default_thread_member_cap")]
    pub member_cap: u32,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_bind_address(),
            api_token: None,
        }
    }
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            signing_secret: None,
            client_id: None,
            client_secret: None,
            api_base_url: default_api_base_url(),
            user_cache_ttl_secs: default_user_cache_ttl_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            outbound_concurrency: default_outbound_concurrency(),
        }
    }
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self {
            ttl_hours: default_thread_ttl_hours(),
            member_cap: default_thread_member_cap(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
        Self::load_from_file(config_path)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.web.port == 0 {
            return Err(ConfigError::InvalidConfig(
                "web.port must be between 1 and 65535".to_string(),
            ));
        }

        if self.slack.api_base_url.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "slack.api_base_url cannot be empty".to_string(),
            ));
        }

        if self.limits.outbound_concurrency == 0 {
            return Err(ConfigError::InvalidConfig(
                "limits.outbound_concurrency must be at least 1".to_string(),
            ));
        }

        if self.threads.ttl_hours < 1 {
            return Err(ConfigError::InvalidConfig(
                "threads.ttl_hours must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("SLACK_SIGNING_SECRET") {
            self.slack.signing_secret = Some(value);
        }
        if let Ok(value) = std::env::var("SLACK_CLIENT_ID") {
            self.slack.client_id = Some(value);
        }
        if let Ok(value) = std::env::var("SLACK_CLIENT_SECRET") {
            self.slack.client_secret = Some(value);
        }
        if let Ok(value) = std::env::var("BRIDGE_API_TOKEN") {
            self.web.api_token = Some(value);
        }
    }
}

fn default_port() -> u16 {
    9010
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_api_base_url() -> String {
    "https://slack.com/api".to_string()
}

fn default_user_cache_ttl_secs() -> u64 {
    3600
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_outbound_concurrency() -> usize {
    8
}

fn default_thread_ttl_hours() -> i64 {
    24
}

fn default_thread_member_cap() -> u32 {
    20
}
