//! Typed views over selected `result` payloads

use serde::{Deserialize, Serialize};

/// Result of `user-login` and `user-registration`
///
/// Only the fields the client relies on are typed; the rest of the profile
/// is kept in `profile`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResult {
    /// Authorization token sent back as the `api-uuid` header
    #[serde(default)]
    pub api_uuid: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Remaining profile fields
    #[serde(flatten)]
    pub profile: serde_json::Map<String, serde_json::Value>,
}

impl LoginResult {
    /// Token value when present and non-empty
    pub fn token(&self) -> Option<&str> {
        self.api_uuid.as_deref().filter(|token| !token.is_empty())
    }
}
