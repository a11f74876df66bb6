//! Spendee API client
//!
//! Authenticated request gateway: builds the URL, attaches the `api-uuid`
//! token, executes the call and reduces the response envelope.

use crate::config::settings::{normalize_base_url, CredentialsConfig, Settings};
use crate::endpoints::{Endpoint, HttpMethod};
use crate::models::{LoginRequest, LoginResult, ResponseEnvelope};
use crate::utils::error::{helpers, RawResponse, SpendeeResult};
use crate::utils::logging::{body_log_summary, redact_token};
use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Header carrying the authorization token
pub const AUTH_HEADER: &str = "api-uuid";

/// Query parameters sent when a call supplies none
pub const DEFAULT_QUERY: [(&str, &str); 2] = [("clientVersion", "master"), ("clientPlatform", "WEB")];

/// One call through the gateway
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path segment, e.g. "wallet-get-all"
    pub endpoint: String,
    /// Version tag, e.g. "v1.4"
    pub api_version: String,
    /// Extra headers; `None` means none
    pub headers: Option<HashMap<String, String>>,
    /// Query parameters; `None` means [`DEFAULT_QUERY`]
    pub query: Option<Vec<(String, String)>>,
    /// JSON body
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, endpoint: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            api_version: api_version.into(),
            headers: None,
            query: None,
            body: None,
        }
    }

    /// Request for a registered endpoint
    pub fn for_endpoint(endpoint: Endpoint) -> Self {
        let descriptor = endpoint.descriptor();
        Self::new(descriptor.method, descriptor.path, descriptor.version)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Add a query parameter; the first one replaces the defaults
    pub fn query_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query
            .get_or_insert_with(Vec::new)
            .push((name.into(), value.to_string()));
        self
    }

    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize `body` as the JSON body
    pub fn json<T: Serialize>(self, body: &T) -> SpendeeResult<Self> {
        let value = serde_json::to_value(body).map_err(|e| {
            helpers::invalid_request_error(format!("Failed to serialize request body: {}", e))
        })?;
        Ok(self.body(value))
    }

    /// Whether the call must carry the session token
    pub fn requires_token(&self) -> bool {
        Endpoint::from_path(&self.endpoint).map_or(true, |endpoint| !endpoint.is_bootstrap())
    }

    /// Query actually sent: the caller's parameters, or the defaults
    pub fn effective_query(&self) -> Vec<(String, String)> {
        match &self.query {
            Some(query) => query.clone(),
            None => DEFAULT_QUERY
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }

    /// Header map for the call, with the token injected when given
    pub fn header_map(&self, token: Option<&str>) -> SpendeeResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        if let Some(extra) = &self.headers {
            for (name, value) in extra {
                let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                    helpers::invalid_request_error(format!("Invalid header name '{}': {}", name, e))
                })?;
                let value = HeaderValue::from_str(value).map_err(|e| {
                    helpers::invalid_request_error(format!(
                        "Invalid value for header '{}': {}",
                        name.as_str(),
                        e
                    ))
                })?;
                headers.insert(name, value);
            }
        }

        if let Some(token) = token {
            let value = HeaderValue::from_str(token).map_err(|e| {
                helpers::invalid_request_error(format!("Invalid {} token: {}", AUTH_HEADER, e))
            })?;
            headers.insert(AUTH_HEADER, value);
        }

        Ok(headers)
    }
}

/// Spendee API client
///
/// Clones share the HTTP connection pool and the cached token.
#[derive(Clone)]
pub struct SpendeeClient {
    client: Client,
    base_url: String,
    credentials: CredentialsConfig,
    api_uuid: Arc<Mutex<Option<String>>>,
}

impl fmt::Debug for SpendeeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpendeeClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl SpendeeClient {
    /// Create a client for the default Spendee API address
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> SpendeeResult<Self> {
        Self::from_settings(&Settings::with_credentials(email, password))
    }

    /// Create a client for a custom API address
    pub fn with_base_url(
        email: impl Into<String>,
        password: impl Into<String>,
        base_url: impl Into<String>,
    ) -> SpendeeResult<Self> {
        let mut settings = Settings::with_credentials(email, password);
        settings.api.base_url = base_url.into();
        Self::from_settings(&settings)
    }

    /// Create a client from loaded settings
    pub fn from_settings(settings: &Settings) -> SpendeeResult<Self> {
        settings.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.api.timeout))
            .user_agent(settings.api.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: normalize_base_url(&settings.api.base_url),
            credentials: settings.credentials.clone(),
            api_uuid: Arc::new(Mutex::new(None)),
        })
    }

    /// Base address, always ending with `/`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Currently cached token, if a login already happened
    pub async fn cached_api_uuid(&self) -> Option<String> {
        self.api_uuid.lock().await.clone()
    }

    /// Full URL of an endpoint: `base + version + "/" + endpoint`
    pub fn build_url(&self, api_version: &str, endpoint: &str) -> String {
        format!("{}{}/{}", self.base_url, api_version, endpoint)
    }

    /// Execute a request and return the envelope's `result`
    pub async fn execute(&self, request: ApiRequest) -> SpendeeResult<serde_json::Value> {
        let token = if request.requires_token() {
            Some(self.api_uuid().await?)
        } else {
            None
        };

        self.dispatch(&request, token.as_deref()).await
    }

    /// Call a registered endpoint with an optional JSON body
    pub async fn call<T: Serialize>(
        &self,
        endpoint: Endpoint,
        body: Option<&T>,
    ) -> SpendeeResult<serde_json::Value> {
        let mut request = ApiRequest::for_endpoint(endpoint);
        if let Some(body) = body {
            request = request.json(body)?;
        }
        self.execute(request).await
    }

    /// Call a registered endpoint without a body
    pub async fn call_empty(&self, endpoint: Endpoint) -> SpendeeResult<serde_json::Value> {
        self.execute(ApiRequest::for_endpoint(endpoint)).await
    }

    /// Call a registered endpoint with query parameters instead of the defaults
    pub async fn call_with_query(
        &self,
        endpoint: Endpoint,
        query: Vec<(String, String)>,
    ) -> SpendeeResult<serde_json::Value> {
        let mut request = ApiRequest::for_endpoint(endpoint);
        request.query = Some(query);
        self.execute(request).await
    }

    /// Cached token, logging in first if there is none
    ///
    /// The lock is held across the login so concurrent callers wait for the
    /// first login instead of starting their own.
    async fn api_uuid(&self) -> SpendeeResult<String> {
        let mut cached = self.api_uuid.lock().await;
        if let Some(token) = cached.as_ref() {
            return Ok(token.clone());
        }

        info!("No cached api-uuid, logging in as {}", self.credentials.email);
        let request = ApiRequest::for_endpoint(Endpoint::UserLogin).json(&self.login_request())?;
        let result = self.dispatch(&request, None).await?;

        let login: LoginResult = serde_json::from_value(result)
            .map_err(|e| helpers::decode_error(format!("Unexpected login result: {}", e), None))?;
        let token = login
            .token()
            .map(|token| token.to_string())
            .ok_or_else(|| helpers::decode_error("Login result did not contain an api_uuid", None))?;

        info!("Cached api-uuid {}", redact_token(&token));
        *cached = Some(token.clone());
        Ok(token)
    }

    /// Login body for the stored credentials and a fresh device UUID
    pub(crate) fn login_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.credentials.email.clone(),
            password: self.credentials.password.clone(),
            device_uuid: Uuid::new_v4().to_string(),
        }
    }

    /// Send the request and reduce the response; no token handling
    async fn dispatch(&self, request: &ApiRequest, token: Option<&str>) -> SpendeeResult<serde_json::Value> {
        let url = self.build_url(&request.api_version, &request.endpoint);
        let headers = request.header_map(token)?;
        let query = request.effective_query();

        debug!(
            "Sending Spendee request: {} {} body={}",
            request.method,
            url,
            request
                .body
                .as_ref()
                .map(body_log_summary)
                .unwrap_or(serde_json::Value::Null)
        );

        let mut builder = self
            .client
            .request(request.method.into(), &url)
            .headers(headers)
            .query(&query);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Spendee request to {} failed: {}", url, e);
                return Err(helpers::transport_error(None, Some(e)));
            }
        };

        let status = response.status();
        let final_url = response.url().to_string();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to read Spendee response from {}: {}", final_url, e);
                let raw = RawResponse::new(status.as_u16(), final_url, "");
                return Err(helpers::transport_error(Some(raw), Some(e)));
            }
        };
        let raw = RawResponse::new(status.as_u16(), final_url, body);

        if !status.is_success() {
            error!("Spendee request failed: {} - {}", status, raw.url);
            return Err(helpers::transport_error(Some(raw), None));
        }

        reduce_response(raw)
    }
}

/// Reduce a 2xx response to the envelope's `result`
pub fn reduce_response(raw: RawResponse) -> SpendeeResult<serde_json::Value> {
    let value: serde_json::Value = match serde_json::from_str(&raw.body) {
        Ok(value) => value,
        Err(e) => {
            warn!("Spendee response from {} is not JSON: {}", raw.url, e);
            return Err(helpers::unparseable_body_error(raw));
        }
    };

    let envelope: ResponseEnvelope = match serde_json::from_value(value) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!("Spendee response from {} is not an envelope: {}", raw.url, e);
            return Err(helpers::decode_error(
                "Response envelope has an unexpected shape",
                Some(raw),
            ));
        }
    };

    debug!(
        "Spendee envelope: service={:?} version={:?} status={:?}",
        envelope.service, envelope.version, envelope.status
    );

    envelope.into_result().map_err(|message| {
        warn!(
            "Spendee rejected the call: {}",
            message.as_deref().unwrap_or("<no error descriptor>")
        );
        helpers::rejected_error(message, raw)
    })
}
