//! HTTP client wrapper around reqwest
//!
//! One uniform way to call the backend: bearer token attachment, JSON
//! handling, and normalization of every failure into `Error::Api`. Each
//! call is a single fire-and-wait round trip; no retries, no caching.

use crate::client::TokenStore;
use crate::config::ApiConfig;
use crate::error::{Error, Result, GENERIC_API_ERROR};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Shared client for the platform's REST API
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a client from configuration and a token store
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url(),
            tokens,
        })
    }

    /// Origin plus base path, the prefix for every request URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The token store backing this client
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Currently stored bearer token, if any
    pub fn token(&self) -> Option<String> {
        self.tokens.get()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path, &[], None::<&()>).await
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.request(Method::GET, path, query, None::<&()>).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    /// POST with no request body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::POST, path, &[], None::<&()>).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::PATCH, path, &[], Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::DELETE, path, &[], None::<&()>).await
    }

    async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "issuing API request");

        let mut req = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");

        if !query.is_empty() {
            req = req.query(query);
        }

        if let Some(token) = self.tokens.get() {
            req = req.bearer_auth(token);
        }

        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(|e| {
            tracing::debug!(error = %e, %url, "request failed before a response arrived");
            Error::network()
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|_| Error::network())?;

        if !status.is_success() {
            return Err(error_from_body(status.as_u16(), &bytes));
        }

        // 204 and genuinely empty bodies resolve to the empty object
        if status == reqwest::StatusCode::NO_CONTENT || bytes.is_empty() {
            return serde_json::from_value(Value::Object(serde_json::Map::new()))
                .map_err(|_| Error::network());
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, %url, "response body was not valid JSON");
            Error::network()
        })
    }
}

/// Map a non-2xx response into a structured error
///
/// The body's `error` field wins, then `message`, then the generic fallback.
/// A `field` array is preserved for field-level validation errors.
fn error_from_body(status: u16, bytes: &[u8]) -> Error {
    let body: Value = serde_json::from_slice(bytes).unwrap_or(Value::Null);

    let message = body
        .get("error")
        .and_then(Value::as_str)
        .or_else(|| body.get("message").and_then(Value::as_str))
        .unwrap_or(GENERIC_API_ERROR)
        .to_string();

    let fields = body.get("field").and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    });

    Error::api(status, message, fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorKind;

    #[test]
    fn test_error_from_body_prefers_error_field() {
        let err = error_from_body(400, br#"{"error":"Bad","message":"Other"}"#);
        assert_eq!(err.to_string(), "Bad");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_error_from_body_falls_back_to_message() {
        let err = error_from_body(404, br#"{"message":"Course not found"}"#);
        assert_eq!(err.to_string(), "Course not found");
    }

    #[test]
    fn test_error_from_body_generic_fallback() {
        let err = error_from_body(500, b"not json at all");
        assert_eq!(err.to_string(), GENERIC_API_ERROR);
        assert_eq!(err.kind(), Some(ApiErrorKind::Unknown));
    }

    #[test]
    fn test_error_from_body_preserves_field_array() {
        let err = error_from_body(400, br#"{"error":"Invalid","field":["email","password"]}"#);
        assert_eq!(
            err.fields(),
            Some(&["email".to_string(), "password".to_string()][..])
        );
    }

    #[test]
    fn test_auth_statuses_classified() {
        assert_eq!(
            error_from_body(401, br#"{"error":"Invalid credentials"}"#).kind(),
            Some(ApiErrorKind::Auth)
        );
        assert_eq!(
            error_from_body(403, br#"{"error":"Forbidden"}"#).kind(),
            Some(ApiErrorKind::Auth)
        );
    }
}
