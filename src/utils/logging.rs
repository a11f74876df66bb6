//! Logging utilities
//!
//! Subscriber setup for applications embedding the client, and helpers that
//! keep credentials out of log lines

use crate::config::LoggingConfig;
use anyhow::{Context, Result};

/// Body fields that are never logged verbatim
const SECRET_FIELDS: [&str; 2] = ["password", "api_uuid"];

/// Longest string value kept in a body summary
const MAX_LOGGED_STRING: usize = 200;

/// Install a global `tracing` subscriber for the given configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if config.format == "json" {
        // JSON format logs (production environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.as_str())
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .finish(),
        )
    } else {
        // Human readable format (development environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.as_str())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        )
    };

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    tracing::info!("Logging system initialized");
    Ok(())
}

/// Shorten a token to its first characters for logs
pub fn redact_token(token: &str) -> String {
    let visible: String = token.chars().take(8).collect();
    if visible.len() < token.len() {
        format!("{}…", visible)
    } else {
        "***".to_string()
    }
}

/// Truncate a string with a note about original length
fn truncate_content(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len).collect();
        format!("{}... ({} chars truncated)", kept, s.chars().count() - max_len)
    } else {
        s.to_string()
    }
}

/// Copy of a request body that is safe to log: secrets masked, long strings cut
pub fn body_log_summary(body: &serde_json::Value) -> serde_json::Value {
    match body {
        serde_json::Value::Object(map) => serde_json::Value::Object(
            map.iter()
                .map(|(key, value)| {
                    let value = if SECRET_FIELDS.contains(&key.as_str()) {
                        serde_json::Value::String("***".to_string())
                    } else {
                        body_log_summary(value)
                    };
                    (key.clone(), value)
                })
                .collect(),
        ),
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(body_log_summary).collect())
        }
        serde_json::Value::String(s) => {
            serde_json::Value::String(truncate_content(s, MAX_LOGGED_STRING))
        }
        other => other.clone(),
    }
}
