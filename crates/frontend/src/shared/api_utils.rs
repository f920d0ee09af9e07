//! API utilities for talking to the back-office API
//!
//! Provides URL construction, the authenticated request helpers and the
//! error type every API module returns.

use contracts::shared::envelope::{error_message_from_body, ApiEnvelope};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::config::config;

/// Failure of a call to the remote API
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Not authenticated")]
    MissingToken,
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Request failed: {status}")]
    Status { status: u16, message: Option<String> },
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// The session is gone; the caller should drop to the login view
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            ApiError::MissingToken | ApiError::Status { status: 401, .. }
        )
    }

    /// Message for the inline alert: the server's text when it sent one,
    /// otherwise the localized fallback of the call site
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(m), ..
            } => m.clone(),
            ApiError::Rejected(m) if !m.trim().is_empty() => m.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Status and body of a finished request
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode a 2xx body as JSON; non-2xx becomes [`ApiError::Status`]
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if !self.ok() {
            return Err(ApiError::Status {
                status: self.status,
                message: error_message_from_body(&self.body),
            });
        }
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Decode a `{status, message, data}` envelope, treating an empty body as success
    /// and an envelope `status` >= 400 as a rejection
    pub fn into_envelope(self) -> Result<ApiEnvelope<serde_json::Value>, ApiError> {
        if self.ok() && self.body.trim().is_empty() {
            return Ok(ApiEnvelope {
                status: None,
                message: None,
                data: None,
            });
        }
        let envelope: ApiEnvelope<serde_json::Value> = self.into_json()?;
        match envelope.status {
            Some(code) if code >= 400 => Err(ApiError::Rejected(
                envelope.message_text().unwrap_or_default().to_string(),
            )),
            _ => Ok(envelope),
        }
    }
}

/// Get the base URL for API requests
pub fn api_base() -> String {
    config().api.base_url.clone()
}

/// Build a full API URL from a path (should start with "/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `/Collection/{id}/{action}` with the id percent-encoded
pub fn collection_path(collection_id: &str, action: &str) -> String {
    format!(
        "/Collection/{}/{}",
        urlencoding::encode(collection_id),
        action
    )
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

async fn read_raw(response: Response) -> Result<RawResponse, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !(200..300).contains(&status) {
        log::warn!("API responded {}: {}", status, body);
    }
    Ok(RawResponse { status, body })
}

/// Authenticated GET
pub async fn get(path: &str, token: &str) -> Result<RawResponse, ApiError> {
    let url = api_url(path);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Authorization", &bearer(token))
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_raw(response).await
}

/// POST a JSON body, with a bearer header when a token is given
pub async fn post<B: Serialize>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<RawResponse, ApiError> {
    let url = api_url(path);
    log::debug!("POST {}", url);

    let mut builder = Request::post(&url);
    if let Some(token) = token {
        builder = builder.header("Authorization", &bearer(token));
    }
    let response = builder
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_raw(response).await
}

/// Fetch with authentication and decode JSON
pub async fn get_json<T: DeserializeOwned>(path: &str, token: &str) -> Result<T, ApiError> {
    get(path, token).await?.into_json()
}

/// POST with authentication and decode JSON
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: &str,
    body: &B,
) -> Result<T, ApiError> {
    post(path, Some(token), body).await?.into_json()
}
