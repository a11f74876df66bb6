//! Error handling module unit tests

use spendee::utils::error::helpers::*;
use spendee::utils::error::*;
use std::error::Error as _;

fn login_response(body: &str) -> RawResponse {
    RawResponse::new(200, "https://api.spendee.com/v1.4/user-login", body)
}

#[test]
fn test_error_kinds() {
    let test_cases = vec![
        (transport_error(None, None), "transport_error"),
        (unparseable_body_error(login_response("<html>")), "decode_error"),
        (decode_error("missing token", None), "decode_error"),
        (rejected_error(None, login_response("{}")), "rejected"),
        (invalid_request_error("bad header"), "invalid_request"),
        (SpendeeError::Config(anyhow::anyhow!("test")), "config_error"),
    ];

    for (error, expected_kind) in test_cases {
        assert_eq!(error.kind(), expected_kind);
    }
}

#[test]
fn test_fixed_messages() {
    assert_eq!(
        transport_error(None, None).to_string(),
        "Spendee returned a non-200 HTTP code."
    );
    assert_eq!(
        unparseable_body_error(login_response("not json")).to_string(),
        "Response can't be serialized"
    );
    assert_eq!(
        rejected_error(None, login_response("{\"status\":\"ERROR\"}")).to_string(),
        "Unexpected error on the Spendee side"
    );
}

#[test]
fn test_rejection_keeps_service_message_and_response() {
    let body = r#"{"status":"ERROR","error":{"message":"bad creds"}}"#;
    let error = rejected_error(Some("bad creds".to_string()), login_response(body));

    assert!(error.is_rejection());
    assert_eq!(error.message(), "bad creds");
    assert_eq!(error.status(), Some(200));
    assert_eq!(error.raw_response().unwrap().body, body);
}

#[test]
fn test_errors_without_response() {
    let cases = vec![
        transport_error(None, None),
        decode_error("missing token", None),
        invalid_request_error("bad header"),
        SpendeeError::Config(anyhow::anyhow!("missing email")),
    ];

    for error in cases {
        assert!(error.raw_response().is_none());
        assert_eq!(error.status(), None);
        assert!(!error.is_rejection());
    }
}

#[test]
fn test_invalid_request_display() {
    let error = invalid_request_error("header name contains a space");
    assert_eq!(error.to_string(), "Invalid request: header name contains a space");
    assert_eq!(error.message(), "header name contains a space");
}

#[test]
fn test_config_error_from_anyhow() {
    let error: SpendeeError = anyhow::anyhow!("SPENDEE_EMAIL environment variable not set").into();

    assert_eq!(error.kind(), "config_error");
    assert!(error.to_string().starts_with("Configuration error:"));
    assert!(error.message().contains("SPENDEE_EMAIL"));
}

#[test]
fn test_transport_error_without_source() {
    let error = transport_error(Some(RawResponse::new(503, "https://api.spendee.com/v1/wallet-get-all", "")), None);

    assert!(error.source().is_none());
    assert_eq!(error.status(), Some(503));
}

#[test]
fn test_raw_response_serialization() {
    let raw = RawResponse::new(404, "https://api.spendee.com/v9/nothing", "missing");
    let json = serde_json::to_value(&raw).unwrap();

    assert_eq!(json["status"], 404);
    assert_eq!(json["url"], "https://api.spendee.com/v9/nothing");
    assert_eq!(json["body"], "missing");
}
