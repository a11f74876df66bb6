//! Error handling module
//!
//! Defines the error type returned by every client operation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message used when the transport fails or the status is not 2xx
pub const NON_SUCCESS_STATUS_MESSAGE: &str = "Spendee returned a non-200 HTTP code.";

/// Message used when the response body is not JSON
pub const UNPARSEABLE_BODY_MESSAGE: &str = "Response can't be serialized";

/// Message used when an error envelope carries no error descriptor
pub const GENERIC_REJECTION_MESSAGE: &str = "Unexpected error on the Spendee side";

/// Raw HTTP response kept for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Final request URL
    pub url: String,
    /// Response body as text
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            url: url.into(),
            body: body.into(),
        }
    }
}

/// Client error types
#[derive(Error, Debug)]
pub enum SpendeeError {
    /// Transport failure or non-2xx status
    #[error("{message}")]
    Transport {
        message: String,
        response: Option<RawResponse>,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Response body could not be decoded
    #[error("{message}")]
    Decode {
        message: String,
        response: Option<RawResponse>,
    },

    /// The service answered with an error envelope
    #[error("{message}")]
    Rejected {
        message: String,
        response: RawResponse,
    },

    /// The request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),
}

impl SpendeeError {
    /// Human-readable message without the variant prefix
    pub fn message(&self) -> String {
        match self {
            SpendeeError::Transport { message, .. }
            | SpendeeError::Decode { message, .. }
            | SpendeeError::Rejected { message, .. } => message.clone(),
            SpendeeError::InvalidRequest(message) => message.clone(),
            SpendeeError::Config(e) => e.to_string(),
        }
    }

    /// Raw response attached to the error, if any
    pub fn raw_response(&self) -> Option<&RawResponse> {
        match self {
            SpendeeError::Transport { response, .. } | SpendeeError::Decode { response, .. } => {
                response.as_ref()
            }
            SpendeeError::Rejected { response, .. } => Some(response),
            SpendeeError::InvalidRequest(_) | SpendeeError::Config(_) => None,
        }
    }

    /// Get error kind string
    pub fn kind(&self) -> &'static str {
        match self {
            SpendeeError::Transport { .. } => "transport_error",
            SpendeeError::Decode { .. } => "decode_error",
            SpendeeError::Rejected { .. } => "rejected",
            SpendeeError::InvalidRequest(_) => "invalid_request",
            SpendeeError::Config(_) => "config_error",
        }
    }

    /// HTTP status of the attached response, if any
    pub fn status(&self) -> Option<u16> {
        self.raw_response().map(|r| r.status)
    }

    /// Whether the service itself refused the call
    pub fn is_rejection(&self) -> bool {
        matches!(self, SpendeeError::Rejected { .. })
    }
}

/// Result type alias
pub type SpendeeResult<T> = Result<T, SpendeeError>;

/// Error construction helpers
pub mod helpers {
    use super::*;

    /// Create a transport error with the fixed non-2xx message
    pub fn transport_error(
        response: Option<RawResponse>,
        source: Option<reqwest::Error>,
    ) -> SpendeeError {
        SpendeeError::Transport {
            message: NON_SUCCESS_STATUS_MESSAGE.to_string(),
            response,
            source,
        }
    }

    /// Create a decode error with the fixed unparseable-body message
    pub fn unparseable_body_error(response: RawResponse) -> SpendeeError {
        SpendeeError::Decode {
            message: UNPARSEABLE_BODY_MESSAGE.to_string(),
            response: Some(response),
        }
    }

    /// Create a decode error with a custom message
    pub fn decode_error(message: impl Into<String>, response: Option<RawResponse>) -> SpendeeError {
        SpendeeError::Decode {
            message: message.into(),
            response,
        }
    }

    /// Create a rejection, falling back to the generic message
    pub fn rejected_error(message: Option<String>, response: RawResponse) -> SpendeeError {
        SpendeeError::Rejected {
            message: message.unwrap_or_else(|| GENERIC_REJECTION_MESSAGE.to_string()),
            response,
        }
    }

    /// Create an invalid request error
    pub fn invalid_request_error(message: impl Into<String>) -> SpendeeError {
        SpendeeError::InvalidRequest(message.into())
    }
}
