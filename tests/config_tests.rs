//! Configuration module unit tests

use spendee::config::settings::{normalize_base_url, Settings, DEFAULT_BASE_URL};
use spendee::SpendeeClient;
use std::env;
use std::sync::Mutex;

// Environment variables are process-wide
static ENV_LOCK: Mutex<()> = Mutex::new(());

const VARS: [&str; 7] = [
    "SPENDEE_EMAIL",
    "SPENDEE_PASSWORD",
    "SPENDEE_BASE_URL",
    "SPENDEE_TIMEOUT",
    "SPENDEE_USER_AGENT",
    "RUST_LOG",
    "LOG_FORMAT",
];

/// Setup test environment variables
fn setup_test_env() {
    env::set_var("SPENDEE_EMAIL", "fry@planetexpress.com");
    env::set_var("SPENDEE_PASSWORD", "slurm");
    env::set_var("SPENDEE_BASE_URL", "http://127.0.0.1:5000");
    env::set_var("SPENDEE_TIMEOUT", "15");
    env::set_var("SPENDEE_USER_AGENT", "planet-express/3000");
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
}

/// Clean up test environment variables
fn cleanup_test_env() {
    for var in &VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_settings_creation_with_valid_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    setup_test_env();

    let settings = Settings::new();
    cleanup_test_env();

    let settings = settings.unwrap();
    assert_eq!(settings.credentials.email, "fry@planetexpress.com");
    assert_eq!(settings.credentials.password, "slurm");
    assert_eq!(settings.api.base_url, "http://127.0.0.1:5000");
    assert_eq!(settings.api.timeout, 15);
    assert_eq!(settings.api.user_agent, "planet-express/3000");
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.logging.format, "json");
}

#[test]
fn test_settings_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_test_env();
    env::set_var("SPENDEE_EMAIL", "fry@planetexpress.com");
    env::set_var("SPENDEE_PASSWORD", "slurm");

    let settings = Settings::new();
    cleanup_test_env();

    let settings = settings.unwrap();
    assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
    assert_eq!(settings.api.timeout, 30);
    assert!(settings.api.user_agent.starts_with("spendee-rs/"));
    assert_eq!(settings.logging.level, "info");
    assert_eq!(settings.logging.format, "text");
}

#[test]
fn test_settings_creation_missing_email() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_test_env();
    env::set_var("SPENDEE_PASSWORD", "slurm");

    let settings = Settings::new();
    cleanup_test_env();

    let error = settings.unwrap_err();
    assert!(error.to_string().contains("SPENDEE_EMAIL"));
}

#[test]
fn test_settings_creation_missing_password() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_test_env();
    env::set_var("SPENDEE_EMAIL", "fry@planetexpress.com");

    let settings = Settings::new();
    cleanup_test_env();

    let error = settings.unwrap_err();
    assert!(error.to_string().contains("SPENDEE_PASSWORD"));
}

#[test]
fn test_settings_validation_invalid_timeout() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    setup_test_env();
    env::set_var("SPENDEE_TIMEOUT", "soon");
    let unparsable = Settings::new();

    env::set_var("SPENDEE_TIMEOUT", "0");
    let zero = Settings::new();
    cleanup_test_env();

    assert!(unparsable.unwrap_err().to_string().contains("timeout"));
    assert!(zero.unwrap_err().to_string().contains("Timeout value cannot be 0"));
}

#[test]
fn test_settings_validation_invalid_logging() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    setup_test_env();
    env::set_var("LOG_FORMAT", "xml");
    let bad_format = Settings::new();

    env::set_var("LOG_FORMAT", "text");
    env::set_var("RUST_LOG", "spendee=verbose");
    let bad_level = Settings::new();
    cleanup_test_env();

    assert!(bad_format.unwrap_err().to_string().contains("Invalid log format"));
    assert!(bad_level.unwrap_err().to_string().contains("Invalid log level"));
}

#[test]
fn test_settings_validation_invalid_base_url() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    setup_test_env();
    env::set_var("SPENDEE_BASE_URL", "api.spendee.com");

    let settings = Settings::new();
    cleanup_test_env();

    assert!(settings.unwrap_err().to_string().contains("base URL"));
}

#[test]
fn test_client_from_settings_normalizes_base_url() {
    let mut settings = Settings::with_credentials("fry@planetexpress.com", "slurm");
    settings.api.base_url = "http://127.0.0.1:5000".to_string();

    let client = SpendeeClient::from_settings(&settings).unwrap();

    assert_eq!(client.base_url(), "http://127.0.0.1:5000/");
    assert_eq!(
        client.build_url("v1.4", "user-login"),
        "http://127.0.0.1:5000/v1.4/user-login"
    );
    assert_eq!(normalize_base_url(DEFAULT_BASE_URL), DEFAULT_BASE_URL);
}

#[test]
fn test_client_from_invalid_settings_is_a_config_error() {
    let settings = Settings::with_credentials("fry@planetexpress.com", "");

    let error = SpendeeClient::from_settings(&settings).unwrap_err();

    assert_eq!(error.kind(), "config_error");
}
