//! REST adapter for the clinic backend.
//!
//! [`ApiClient`] owns the HTTP connection pool and the session handle. The
//! endpoint methods live in one file per backend resource, each an
//! `impl ApiClient` block.
//!
//! Every successful body goes through the same normalization: a JSON object
//! carrying a `data` field yields that field, anything else is used as-is.

mod auth;
mod doctor_profiles;
mod feedback;
mod payments;
mod schedules;
mod statistics;
mod test_results;
mod users;

pub use auth::*;
pub use schedules::*;
pub use statistics::*;

use std::time::Instant;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::{ClientConfig, ConfigError};
use crate::session::Session;
use crate::store::StoreError;

/// Errors surfaced by backend calls.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: Value },

    #[error("Not authorized; sign in again")]
    Unauthorized,

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Session store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Human-readable message for notifications.
    ///
    /// Prefers the backend's own `message` field when the error body has one.
    pub fn message(&self) -> String {
        match self {
            ApiError::Status { body, .. } => match body {
                Value::String(text) if !text.is_empty() => text.clone(),
                Value::Object(map) => map
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| self.to_string()),
                _ => self.to_string(),
            },
            other => other.to_string(),
        }
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(StatusCode::UNAUTHORIZED.as_u16()),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Strip a `{ "data": X }` envelope.
pub fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) => data,
            None => Value::Object(map),
        },
        other => other,
    }
}

/// HTTP client for the clinic REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Build a client from validated configuration.
    pub fn new(config: &ClientConfig, session: Session) -> ApiResult<Self> {
        let config = config.clone().validate()?;
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{}", self.base_url, path))
    }

    /// Send a request and return the normalized body.
    async fn execute(&self, mut builder: RequestBuilder) -> ApiResult<Value> {
        if let Some(token) = self.session.bearer_token().await {
            builder = builder.bearer_auth(token);
        }
        let request = builder.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        let started = Instant::now();
        let response = self.http.execute(request).await.map_err(|e| {
            tracing::warn!(%method, %path, error = %e, "Request failed");
            ApiError::from(e)
        })?;
        let status = response.status();
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let text = response.text().await?;

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(%method, %path, status = status.as_u16(), elapsed_ms, "Unauthorized");
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            tracing::warn!(%method, %path, status = status.as_u16(), elapsed_ms, "Request rejected");
            let body: Value = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(%method, %path, status = status.as_u16(), elapsed_ms, "Request completed");

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(unwrap_envelope(serde_json::from_str(&text)?))
    }

    async fn execute_as<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let body = self.execute(builder).await?;
        Ok(serde_json::from_value(body)?)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute_as(self.request(Method::GET, path)).await
    }

    pub(crate) async fn get_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute_as(self.request(Method::GET, path).query(query)).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute_as(self.request(Method::POST, path).json(body)).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute_as(self.request(Method::PUT, path).json(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        self.execute(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}
