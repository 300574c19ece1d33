//! Thin HTTP client over the auth API
//!
//! Every successful call yields an [`ApiResponse`] envelope. Failures are
//! classified into [`ApiErrorKind`] so callers can tell transport trouble from
//! a server rejection.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use vestibule_model::{ApiResponse, RequestOptions};

use crate::infra::storage::{AUTH_TOKEN_KEY, TokenStorage};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const RETRY_BACKOFF: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Transport failure or timeout; no response was received
    Network,
    /// Non-2xx response
    Server { status: u16 },
    /// 2xx response whose body did not match the expected shape
    Decode,
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    /// Parsed JSON error body, when the server sent one
    pub data: Option<Value>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ApiError {
    fn network(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "Request timed out".to_string()
        } else {
            format!("Network error: {}", err)
        };
        Self {
            kind: ApiErrorKind::Network,
            message,
            data: None,
            source: Some(Box::new(err)),
        }
    }

    pub fn server(
        status: u16,
        message: impl Into<String>,
        data: Option<Value>,
    ) -> Self {
        Self {
            kind: ApiErrorKind::Server { status },
            message: message.into(),
            data,
            source: None,
        }
    }

    fn decode(err: serde_json::Error) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            message: format!("Unexpected response body: {}", err),
            data: None,
            source: Some(Box::new(err)),
        }
    }

    /// HTTP status, for server-side failures
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ApiErrorKind::Server { status } => Some(status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        self.kind == ApiErrorKind::Network
    }
}

/// API client with bearer token support
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    options: RequestOptions,
    storage: Arc<dyn TokenStorage>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("options", &self.options)
            .finish()
    }
}

fn has_http_scheme(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Add `http://` when no scheme is given and drop a trailing slash
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let with_scheme = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };
    if with_scheme != raw {
        warn!(
            "[ApiClient] Normalized base URL from '{}' to '{}'",
            raw, with_scheme
        );
    }
    if let Err(err) = url::Url::parse(&with_scheme) {
        warn!(
            "[ApiClient] Base URL '{}' does not parse ({}); requests will fail",
            with_scheme, err
        );
    }
    with_scheme
}

impl ApiClient {
    pub fn new(base_url: &str, storage: Arc<dyn TokenStorage>) -> Self {
        Self::with_options(base_url, RequestOptions::default(), storage)
    }

    pub fn with_options(
        base_url: &str,
        options: RequestOptions,
        storage: Arc<dyn TokenStorage>,
    ) -> Self {
        let base_url = normalize_base_url(base_url);
        let timeout = options.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let client =
            Client::builder().timeout(timeout).build().unwrap_or_else(|err| {
                warn!(
                    "[ApiClient] Falling back to default HTTP client: {}",
                    err
                );
                Client::new()
            });

        info!(
            "[ApiClient] Creating API client with base URL: {}",
            base_url
        );

        Self {
            client,
            base_url,
            options,
            storage,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach configured headers and the stored bearer token
    fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.client.request(method, self.build_url(path));

        for (name, value) in &self.options.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => builder = builder.header(name, value),
                _ => warn!("[ApiClient] Skipping invalid header '{}'", name),
            }
        }

        match self.storage.get_item(AUTH_TOKEN_KEY) {
            Ok(Some(token)) => builder.bearer_auth(token),
            Ok(None) => builder,
            Err(err) => {
                warn!("[ApiClient] Could not read stored token: {}", err);
                builder
            }
        }
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ApiResponse<T>, ApiError> {
        let retries = self.options.retries.unwrap_or(0);
        let mut attempt = 0;

        loop {
            let request = self.build_request(Method::GET, path);
            match self.execute(request).await {
                Err(err) if err.is_network() && attempt < retries => {
                    attempt += 1;
                    debug!(
                        "[ApiClient] GET {} failed ({}), retry {}/{}",
                        path, err, attempt, retries
                    );
                    tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                }
                result => return result,
            }
        }
    }

    /// POST with an optional JSON body. Never retried.
    pub async fn post<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self.build_request(Method::POST, path);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request).await
    }

    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.post::<T, Value>(path, None).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiResponse<T>, ApiError> {
        let response = request.send().await.map_err(ApiError::network)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ApiError::network)?;
        let reason = status.canonical_reason().unwrap_or_default().to_string();

        if status.is_success() {
            let body = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).map_err(ApiError::decode)?
            };
            let message = body_message(&body).unwrap_or(reason);
            let data = serde_json::from_value(body).map_err(ApiError::decode)?;
            return Ok(ApiResponse::new(data, status.as_u16(), message));
        }

        let body: Option<Value> = serde_json::from_slice(&bytes).ok();
        let message = body
            .as_ref()
            .and_then(body_message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                if reason.is_empty() {
                    format!("HTTP {}", status.as_u16())
                } else {
                    reason
                }
            });
        debug!("[ApiClient] Request failed with {}: {}", status, message);
        Err(ApiError::server(status.as_u16(), message, body))
    }
}

fn body_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}
