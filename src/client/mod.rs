//! Backend API client module
//!
//! Thin wrapper around a configured `reqwest::Client`: base URL and timeout
//! from configuration, bearer-token attachment via the credential store, and
//! centralized response-error classification. Errors are logged by category
//! and always propagated unchanged to the caller; there is no retry, recovery,
//! or substitution of default data.

mod services;
mod token;

pub use token::CredentialStore;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::logger;

/// API client failure, classified by where the request died
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server responded with an error status
    #[error("API responded {status}: {body}")]
    Status { status: u16, body: String },
    /// The request was sent but no response arrived
    #[error("network unreachable: {0}")]
    Network(#[source] reqwest::Error),
    /// The request could not be constructed
    #[error("request construction failed: {0}")]
    Request(#[source] reqwest::Error),
    /// The response arrived but its body was not valid JSON
    #[error("response decode failed: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Configured HTTP client for the backend API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: CredentialStore,
}

impl ApiClient {
    /// Build a client from configuration: base URL, fixed per-request timeout
    /// (default 30000 ms), JSON default headers.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .default_headers(headers)
            .build()
            .map_err(|e| {
                logger::log_client_error(&format!("Error: {e}"));
                ApiError::Request(e)
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials: CredentialStore::from_config(config),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a resource path with optional query parameters
    pub async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        let mut request = self.http.get(self.url(path));
        if !params.is_empty() {
            request = request.query(params);
        }
        self.execute(request).await
    }

    /// POST a JSON body to a resource path
    pub async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request with the resolved bearer credential attached, classify
    /// and log any failure, and hand the original error to the caller.
    async fn execute(&self, mut request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        if let Some(token) = self.credentials.bearer_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(classify_transport_error)?;
        let status = response.status();

        if status.is_success() {
            return response.json().await.map_err(|e| {
                logger::log_client_error(&format!("Error: {e}"));
                ApiError::Decode(e)
            });
        }

        let body = response.text().await.unwrap_or_default();
        log_status_error(status.as_u16(), &body);
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

/// The server never answered: either the request was malformed before it left,
/// or it was sent and nothing came back.
fn classify_transport_error(e: reqwest::Error) -> ApiError {
    if e.is_builder() {
        logger::log_client_error(&format!("Error: {e}"));
        ApiError::Request(e)
    } else {
        logger::log_client_error("Network Error - check your connection");
        ApiError::Network(e)
    }
}

/// Log a server error response by status category
fn log_status_error(status: u16, body: &str) {
    match status {
        401 => logger::log_client_error("Unauthorized - please sign in again"),
        403 => logger::log_client_error("Forbidden - access denied"),
        404 => logger::log_client_error("Not Found - requested resource missing"),
        500 => logger::log_client_error("Server Error"),
        _ => logger::log_client_error(&format!("API Error ({status}): {body}")),
    }
}
