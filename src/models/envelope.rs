//! Response envelope
//!
//! Every Spendee reply is wrapped in the same envelope:
//!
//! ```json
//! {
//!     "result": {},
//!     "version": "v1.4",
//!     "service": "api.user-login",
//!     "timestamp": "2019-12-29 07:30:01.163292",
//!     "status": "SUCCESS",
//!     "checksum": "addc3a80c74aa7268d14bee0209cc72a"
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status marker of a successful envelope
pub const SUCCESS_STATUS: &str = "SUCCESS";

/// Spendee response envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// `SUCCESS` or an error marker; any other value, string or not, is a failure
    #[serde(default)]
    pub status: Option<Value>,
    /// Endpoint payload
    #[serde(default)]
    pub result: Value,
    /// Error descriptor, usually `{"message": "..."}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<Value>,
}

impl ResponseEnvelope {
    /// Whether the status field carries the success marker
    pub fn is_success(&self) -> bool {
        self.status.as_ref().and_then(Value::as_str) == Some(SUCCESS_STATUS)
    }

    /// Message of the error descriptor, if the descriptor has one
    pub fn error_message(&self) -> Option<String> {
        self.error
            .as_ref()
            .and_then(|error| error.get("message"))
            .and_then(|message| message.as_str())
            .map(|message| message.to_string())
    }

    /// Consume the envelope, keeping only the payload on success
    pub fn into_result(self) -> Result<Value, Option<String>> {
        if self.is_success() {
            Ok(self.result)
        } else {
            Err(self.error_message())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope() {
        let envelope: ResponseEnvelope = serde_json::from_value(json!({
            "result": [1, 2],
            "version": "v1.4",
            "service": "api.wallet-get-all",
            "timestamp": "2019-12-29 07:30:01.163292",
            "status": "SUCCESS",
            "checksum": "addc3a80c74aa7268d14bee0209cc72a"
        }))
        .unwrap();

        assert!(envelope.is_success());
        assert_eq!(envelope.service, Some(json!("api.wallet-get-all")));
        assert_eq!(envelope.into_result(), Ok(json!([1, 2])));
    }

    #[test]
    fn test_error_envelope_message() {
        let envelope: ResponseEnvelope =
            serde_json::from_value(json!({"status": "ERROR", "error": {"message": "bad creds"}}))
                .unwrap();
        assert_eq!(envelope.into_result(), Err(Some("bad creds".to_string())));
    }

    #[test]
    fn test_error_envelope_without_descriptor() {
        let envelope: ResponseEnvelope = serde_json::from_value(json!({"status": "ERROR"})).unwrap();
        assert_eq!(envelope.into_result(), Err(None));

        // descriptor present but without a message
        let envelope: ResponseEnvelope =
            serde_json::from_value(json!({"status": "ERROR", "error": {"code": 17}})).unwrap();
        assert_eq!(envelope.error_message(), None);
    }

    #[test]
    fn test_missing_status_is_not_success() {
        let envelope: ResponseEnvelope = serde_json::from_value(json!({"result": true})).unwrap();
        assert!(!envelope.is_success());
    }

    #[test]
    fn test_missing_result_is_null() {
        let envelope: ResponseEnvelope = serde_json::from_value(json!({"status": "SUCCESS"})).unwrap();
        assert_eq!(envelope.into_result(), Ok(serde_json::Value::Null));
    }

    #[test]
    fn test_metadata_is_not_interpreted() {
        let envelope: ResponseEnvelope = serde_json::from_value(json!({
            "status": "SUCCESS",
            "result": 1,
            "version": 1.4,
            "timestamp": 1577604601,
            "checksum": null
        }))
        .unwrap();
        assert_eq!(envelope.into_result(), Ok(json!(1)));
    }

    #[test]
    fn test_non_string_status_is_not_success() {
        let envelope: ResponseEnvelope = serde_json::from_value(json!({"status": 0})).unwrap();
        assert!(!envelope.is_success());
        assert_eq!(envelope.into_result(), Err(None));
    }
}
