//! Account endpoints: registration, login, profile

use super::Endpoint;
use crate::models::{ProfileUpdate, RegistrationRequest};
use crate::services::SpendeeClient;
use crate::utils::error::SpendeeResult;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

impl SpendeeClient {
    /// Sign up a new user with a random device UUID
    pub async fn user_registration(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> SpendeeResult<Value> {
        let request = RegistrationRequest::new(email, password, Uuid::new_v4().to_string());
        self.user_registration_with(&request).await
    }

    /// Sign up with a fully specified registration body
    pub async fn user_registration_with(&self, request: &RegistrationRequest) -> SpendeeResult<Value> {
        info!("Registering Spendee user {}", request.email);
        self.call(Endpoint::UserRegistration, Some(request)).await
    }

    /// Log in with the client's credentials
    ///
    /// Returns the profile including `api_uuid`. The token cache is not touched;
    /// authenticated calls log in on their own when needed.
    pub async fn user_login(&self) -> SpendeeResult<Value> {
        let request = self.login_request();
        self.call(Endpoint::UserLogin, Some(&request)).await
    }

    /// Log in reporting a specific device UUID
    pub async fn user_login_with_device(&self, device_uuid: impl Into<String>) -> SpendeeResult<Value> {
        let mut request = self.login_request();
        request.device_uuid = device_uuid.into();
        self.call(Endpoint::UserLogin, Some(&request)).await
    }

    /// Returns `true` on success
    pub async fn user_logout(&self) -> SpendeeResult<Value> {
        self.call_empty(Endpoint::UserLogout).await
    }

    pub async fn user_get_profile(&self) -> SpendeeResult<Value> {
        self.call_empty(Endpoint::UserGetProfile).await
    }

    /// Update the user profile; the result carries the photo URL
    pub async fn user_update_profile(&self, update: &ProfileUpdate) -> SpendeeResult<Value> {
        self.call(Endpoint::UserUpdateProfile, Some(update)).await
    }

    /// Recently used and all available currencies
    pub async fn user_currencies(&self) -> SpendeeResult<Value> {
        self.call_empty(Endpoint::UserCurrencies).await
    }
}
