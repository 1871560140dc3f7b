//! Shared HTTP client bound to one base address.
//!
//! The client is built once from a [`ConfigProvider`] and handed to whoever
//! needs it. Cloning is cheap and shares the underlying connection pool.

use crate::core::{ApiResponse, ConfigProvider};
use crate::utils::error::{ApiError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Per-request overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Replaces the client timeout for this request only.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
    default_headers: HashMap<String, String>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout.as_millis())
            .field("default_headers", &self.default_headers)
            .finish()
    }
}

impl ApiClient {
    /// Builds the client. The base address is not checked here; a bad one
    /// fails the first request instead.
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let header_map = build_header_map(config.default_headers())?;
        let default_headers = header_map
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect::<HashMap<_, _>>();
        let timeout = config.timeout();

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(header_map)
            .user_agent(format!("order-status-client/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::ConfigError {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        info!(
            "Created ApiClient for base_url: {}, timeout: {}ms",
            config.base_url(),
            timeout.as_millis()
        );

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            timeout,
            default_headers,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Headers sent on every request, keyed by lowercase name.
    pub fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// `{base}/{path}` with exactly one slash between, so a base prefix such as
    /// `/api` survives (unlike `Url::join` with an absolute path).
    pub fn resolve_url(&self, path: &str) -> Result<Url> {
        let joined = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        Url::parse(&joined).map_err(|e| ApiError::InvalidUrl {
            url: joined.clone(),
            reason: e.to_string(),
        })
    }

    /// Sends one GET and resolves to the parsed body. Non-2xx statuses come
    /// back as [`ApiError::Status`] with the body untouched.
    pub async fn get<Q>(&self, path: &str, query: &Q, options: &RequestOptions) -> Result<ApiResponse>
    where
        Q: Serialize + ?Sized,
    {
        let timeout = options.timeout.unwrap_or(self.timeout);
        let timeout_ms = timeout.as_millis() as u64;

        let url = self.resolve_url(path)?;
        let mut builder = self.client.get(url).query(query);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let request = builder.build().map_err(ApiError::Request)?;

        debug!("GET {}", request.url());

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::from_transport(e, timeout_ms))?;

        let status = response.status();
        debug!("API response status: {}", status);

        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect::<HashMap<_, _>>();

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::from_transport(e, timeout_ms))?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: body.to_vec(),
            });
        }

        let data = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body)?
        };

        Ok(ApiResponse {
            status: status.as_u16(),
            headers,
            data,
        })
    }
}

/// Configured headers, then the JSON pair on top; those two are always sent.
fn build_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut header_map = HeaderMap::new();
    for (name, value) in headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| ApiError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| ApiError::InvalidHeader {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        header_map.insert(header_name, header_value);
    }
    header_map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    header_map.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(header_map)
}
