//! HTTP client for Azure Resource Manager communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to Resource Manager with automatic retry handling.

use std::collections::HashMap;
use std::time::Duration;

use rand::Rng;

use crate::auth::Credential;
use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::ArmConfig;

/// Base delay for exponential backoff when no `Retry-After` is sent.
pub const RETRY_BASE_DELAY: Duration = Duration::from_secs(1);

/// Upper bound for a computed backoff delay.
pub const RETRY_MAX_DELAY: Duration = Duration::from_secs(30);

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Status codes that are retried: throttling and transient server errors.
const RETRYABLE_STATUS_CODES: [u16; 5] = [429, 500, 502, 503, 504];

/// HTTP client for making requests to Resource Manager.
///
/// The client handles:
/// - URL construction from the configured endpoint, or absolute URLs as-is
/// - Default headers including User-Agent and Accept
/// - A fresh bearer token from the [`Credential`] on every attempt
/// - Automatic retries for 429, 500, 502, 503 and 504 responses
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use azure_arm::{AccessToken, ArmConfig, Credential};
/// use azure_arm::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = ArmConfig::builder()
///     .credential(Credential::Static(AccessToken::new("token")))
///     .build()?;
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/subscriptions")
///     .query_param("api-version", "2022-12-01")
///     .tries(3)
///     .build()?;
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    endpoint: String,
    credential: Credential,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the SDK configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &ArmConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("{user_agent_prefix}azure-arm-sdk/{SDK_VERSION} rust/{rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.resource_manager_endpoint().to_string(),
            credential: config.credential().clone(),
            default_headers,
        }
    }

    /// Returns the Resource Manager base URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Resolves a request path against the endpoint.
    ///
    /// Absolute URLs (next links, polling URLs) are returned unchanged.
    #[must_use]
    pub fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("https://") || path.starts_with("http://") {
            return path.to_string();
        }
        format!("{}/{}", self.endpoint, path.trim_start_matches('/'))
    }

    /// Sends an HTTP request to Resource Manager.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A token cannot be acquired (`Auth`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - Max retries exceeded (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.resolve_url(&request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let token = self.credential.token().await?;

            let mut req_builder = self
                .client
                .request(request.http_method.as_reqwest(), &url)
                .bearer_auth(token.secret());

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            if let Some(query) = &request.query {
                req_builder = req_builder.query(query);
            }

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            tracing::debug!(
                method = %request.http_method,
                url = %url,
                attempt = tries,
                "sending request to Resource Manager"
            );

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await?;
            let body = Self::parse_body(code, &body_text);

            let response = HttpResponse::new(code, res_headers, body);

            if response.is_ok() {
                return Ok(response);
            }

            let error = HttpResponseError {
                code,
                error_code: response.arm_error().map(|detail| detail.code),
                message: response.error_message(),
                request_id: response.request_id().map(String::from),
            };

            if !RETRYABLE_STATUS_CODES.contains(&code) {
                return Err(HttpError::Response(error));
            }

            if tries >= request.tries {
                if request.tries == 1 {
                    return Err(HttpError::Response(error));
                }
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    message: error.message,
                    request_id: error.request_id,
                }));
            }

            let delay = Self::calculate_retry_delay(&response, tries);
            tracing::warn!(
                status = code,
                attempt = tries,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                url = %url,
                "retrying request to Resource Manager"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Parses a response body as JSON.
    ///
    /// Empty bodies become `Null`. Non-JSON error bodies are kept under
    /// `raw_body` so they can be surfaced in error messages.
    fn parse_body(code: u16, body_text: &str) -> serde_json::Value {
        if body_text.trim().is_empty() {
            return serde_json::Value::Null;
        }
        serde_json::from_str(body_text).unwrap_or_else(|_| {
            if code >= 400 {
                serde_json::json!({ "raw_body": body_text })
            } else {
                serde_json::Value::Null
            }
        })
    }

    /// Calculates the delay before the next attempt.
    ///
    /// `Retry-After` wins, up to [`RETRY_MAX_DELAY`]. Otherwise the delay
    /// doubles per attempt from [`RETRY_BASE_DELAY`] to the same cap, plus up
    /// to 250ms of jitter.
    fn calculate_retry_delay(response: &HttpResponse, tries: u32) -> Duration {
        if let Some(retry_after) = response.retry_after() {
            return retry_after.min(RETRY_MAX_DELAY);
        }
        let exponent = tries.saturating_sub(1).min(16);
        let backoff = RETRY_BASE_DELAY
            .saturating_mul(1 << exponent)
            .min(RETRY_MAX_DELAY);
        let jitter = Duration::from_millis(rand::thread_rng().gen_range(0..250));
        backoff + jitter
    }
}
