//! Configuration management module
//!
//! Loads client configuration from environment variables and an optional `.env` file

pub mod settings;

pub use settings::{ApiConfig, CredentialsConfig, LoggingConfig, Settings, DEFAULT_BASE_URL};
