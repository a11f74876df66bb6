//! Client configuration settings
//!
//! Defines all configuration structures and loading logic

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Default API base address
pub const DEFAULT_BASE_URL: &str = "https://api.spendee.com/";

/// Main client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Account credentials
    pub credentials: CredentialsConfig,
    /// Spendee API configuration
    pub api: ApiConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Account credentials used for login
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Spendee API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API base URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: 30,
            user_agent: default_user_agent(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl Settings {
    /// Load configuration from the environment
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let settings = Self {
            credentials: CredentialsConfig {
                email: std::env::var("SPENDEE_EMAIL")
                    .context("SPENDEE_EMAIL environment variable not set")?,
                password: std::env::var("SPENDEE_PASSWORD")
                    .context("SPENDEE_PASSWORD environment variable not set")?,
            },
            api: ApiConfig {
                base_url: get_env_or_default("SPENDEE_BASE_URL", DEFAULT_BASE_URL),
                timeout: get_env_or_default("SPENDEE_TIMEOUT", "30")
                    .parse()
                    .context("Invalid timeout value")?,
                user_agent: std::env::var("SPENDEE_USER_AGENT")
                    .unwrap_or_else(|_| default_user_agent()),
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Build settings for the given credentials with default API and logging options
    pub fn with_credentials(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: CredentialsConfig {
                email: email.into(),
                password: password.into(),
            },
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        if self.credentials.email.trim().is_empty() {
            anyhow::bail!("Spendee email cannot be empty");
        }

        if self.credentials.password.is_empty() {
            anyhow::bail!("Spendee password cannot be empty");
        }

        if !self.api.base_url.starts_with("http") {
            anyhow::bail!("Invalid Spendee base URL format, should start with 'http'");
        }

        if self.api.timeout == 0 {
            anyhow::bail!("Timeout value cannot be 0");
        }

        if EnvFilter::try_new(&self.logging.level).is_err() {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }
}

/// Base URL with exactly one trailing slash, so that `base + version` forms a path
pub fn normalize_base_url(base_url: &str) -> String {
    format!("{}/", base_url.trim_end_matches('/'))
}

fn default_user_agent() -> String {
    format!("spendee-rs/{}", crate::VERSION)
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
