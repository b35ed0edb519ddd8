//! Resource Manager client shared by every service package.
//!
//! [`ResourceManagerClient`] pins an API version, adds the `api-version`
//! query parameter, maps status codes to [`ArmError`] and hands out pagers
//! and pollers. Service clients such as
//! [`StorageAccountsClient`](crate::services::storage::v2023_01_01::storage_accounts::StorageAccountsClient)
//! are thin typed wrappers around it.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::clients::arm::{ArmError, Operation, OperationResponse, RequestOptions};
use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, ArmConfig};
use crate::odata::Pager;
use crate::pollers::{Poller, PollerError, ResourceManagerPoller};

/// Client for one Resource Manager API version.
///
/// # Example
///
/// ```rust,ignore
/// use azure_arm::{ApiVersion, ArmConfig};
/// use azure_arm::clients::{HttpMethod, Operation, ResourceManagerClient};
///
/// let client = ResourceManagerClient::new(&config, ApiVersion::from_static("2022-09-01"));
///
/// let response = client
///     .execute::<serde_json::Value>(Operation::new(
///         HttpMethod::Get,
///         "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/example",
///         "Resource Group",
///     ))
///     .await?;
/// ```
#[derive(Debug)]
pub struct ResourceManagerClient {
    http_client: HttpClient,
    api_version: ApiVersion,
    tries: u32,
    poll_interval: Duration,
    dropped_connections_allowed: u8,
}

// Verify ResourceManagerClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceManagerClient>();
};

impl ResourceManagerClient {
    /// Creates a client for `api_version`.
    #[must_use]
    pub fn new(config: &ArmConfig, api_version: ApiVersion) -> Self {
        Self {
            http_client: HttpClient::new(config),
            api_version,
            tries: config.tries(),
            poll_interval: config.poll_interval(),
            dropped_connections_allowed: config.dropped_connections_allowed(),
        }
    }

    /// Creates a client that uses `version` instead of the package default.
    #[must_use]
    pub fn with_api_version(
        config: &ArmConfig,
        default_version: &ApiVersion,
        version: ApiVersion,
    ) -> Self {
        if &version == default_version {
            tracing::debug!(
                "Resource Manager client has a redundant API version override to the default {}",
                default_version
            );
        } else {
            tracing::debug!(
                "Resource Manager client overriding default API version {} with {}",
                default_version,
                version
            );
        }

        Self::new(config, version)
    }

    /// Returns the API version sent with every request.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the fallback interval between LRO polls.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Returns how many consecutive dropped connections a poller tolerates.
    #[must_use]
    pub const fn dropped_connections_allowed(&self) -> u8 {
        self.dropped_connections_allowed
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, path: &str, options: &RequestOptions) -> Result<HttpResponse, HttpError> {
        self.send(HttpMethod::Get, path, None, options).await
    }

    /// Sends a PUT request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        options: &RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        self.send(HttpMethod::Put, path, Some(body), options).await
    }

    /// Sends a PATCH request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn patch(
        &self,
        path: &str,
        body: serde_json::Value,
        options: &RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        self.send(HttpMethod::Patch, path, Some(body), options).await
    }

    /// Sends a POST request; action endpoints often take no body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn post(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
        options: &RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        self.send(HttpMethod::Post, path, body, options).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        self.send(HttpMethod::Delete, path, None, options).await
    }

    /// Sends a request, adding `api-version` unless `path` already carries one.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request is invalid or fails.
    pub async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        options: &RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(method, path).tries(self.tries);

        if !has_api_version(path) {
            builder = builder.query_param("api-version", self.api_version.as_str());
        }
        for (key, value) in &options.query {
            builder = builder.query_param(key, value);
        }
        for (key, value) in &options.headers {
            builder = builder.header(key, value);
        }
        if let Some(body) = body {
            builder = builder.body(body).body_type(DataType::Json);
        }

        let request = builder.build()?;
        self.http_client.request(request).await
    }

    /// Runs `operation` and checks the status code.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::NotFound`] on 404, [`ArmError::UnexpectedStatus`]
    /// for a success code outside the expected set, and [`ArmError::Http`]
    /// for other failures.
    pub async fn execute_raw(&self, operation: Operation) -> Result<HttpResponse, ArmError> {
        let resource = operation.resource();
        let expected = operation.expected_status_codes();
        let (method, path, body, options) = operation.into_parts();

        let response = self
            .send(method, &path, body, &options)
            .await
            .map_err(|e| ArmError::from_http_error(e, resource, &path))?;

        if !expected.contains(&response.code) {
            return Err(ArmError::UnexpectedStatus {
                resource,
                code: response.code,
                expected,
                request_id: response.request_id().map(String::from),
            });
        }

        Ok(response)
    }

    /// Runs `operation` and decodes the body as `T`.
    ///
    /// # Errors
    ///
    /// See [`execute_raw`](Self::execute_raw); additionally
    /// [`ArmError::Deserialize`] when the body does not match `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        operation: Operation,
    ) -> Result<OperationResponse<T>, ArmError> {
        let resource = operation.resource();
        let response = self.execute_raw(operation).await?;
        OperationResponse::from_http_response(response, resource)
    }

    /// Runs `operation` and waits for the long-running operation it starts.
    ///
    /// # Errors
    ///
    /// See [`execute_raw`](Self::execute_raw); additionally
    /// [`ArmError::Poller`] when the operation fails or polling gives up.
    pub async fn execute_then_poll(&self, operation: Operation) -> Result<(), ArmError> {
        let method = operation.method();
        let path = operation.path().to_string();
        let response = self.execute_raw(operation).await?;
        self.poll_until_done(&response, method, &path).await
    }

    /// Returns a pager that starts with `operation` and follows `nextLink`.
    #[must_use]
    pub fn list<T: DeserializeOwned>(&self, operation: Operation) -> Pager<'_, T> {
        Pager::new(self, operation)
    }

    /// Picks a poller for the response of a `method` request to `path`.
    ///
    /// Returns `Ok(None)` when the operation already completed.
    ///
    /// # Errors
    ///
    /// Returns [`PollerError::MissingPollingUrl`] for a `202 Accepted` that
    /// cannot be polled.
    pub fn poller_for(
        &self,
        response: &HttpResponse,
        method: HttpMethod,
        path: &str,
    ) -> Result<Option<Poller<ResourceManagerPoller<'_>>>, PollerError> {
        let initial_delay = response.retry_after().unwrap_or(self.poll_interval);
        Ok(ResourceManagerPoller::from_response(self, response, method, path)?
            .map(|poller| Poller::new(poller, initial_delay, self.dropped_connections_allowed)))
    }

    /// Polls the operation started by `response` until it reaches a terminal state.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Poller`] if the operation fails, is cancelled, or
    /// cannot be polled.
    pub async fn poll_until_done(
        &self,
        response: &HttpResponse,
        method: HttpMethod,
        path: &str,
    ) -> Result<(), ArmError> {
        if let Some(mut poller) = self.poller_for(response, method, path)? {
            poller.poll_until_done().await?;
        }
        Ok(())
    }
}

/// Returns `true` when the query string of `path` already has `api-version`.
fn has_api_version(path: &str) -> bool {
    path.split_once('?').is_some_and(|(_, query)| {
        query
            .split('&')
            .any(|pair| pair.split('=').next() == Some("api-version"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AccessToken, Credential};

    fn create_test_config() -> ArmConfig {
        ArmConfig::builder()
            .credential(Credential::Static(AccessToken::new("token")))
            .poll_interval(Duration::from_secs(5))
            .dropped_connections_allowed(2)
            .build()
            .unwrap()
    }

    #[test]
    fn test_has_api_version() {
        assert!(has_api_version("/x?api-version=2023-01-01"));
        assert!(has_api_version(
            "https://management.azure.com/x?$skipToken=abc&api-version=2023-01-01"
        ));
        assert!(!has_api_version("/x"));
        assert!(!has_api_version("/x?not-api-version=1"));
    }

    #[test]
    fn test_client_carries_config_settings() {
        let client = ResourceManagerClient::new(
            &create_test_config(),
            ApiVersion::from_static("2023-01-01"),
        );

        assert_eq!(client.api_version().as_str(), "2023-01-01");
        assert_eq!(client.poll_interval(), Duration::from_secs(5));
        assert_eq!(client.dropped_connections_allowed(), 2);
    }

    #[test]
    fn test_with_api_version_overrides_default() {
        let default_version = ApiVersion::from_static("2023-01-01");
        let client = ResourceManagerClient::with_api_version(
            &create_test_config(),
            &default_version,
            ApiVersion::new("2022-09-01").unwrap(),
        );

        assert_eq!(client.api_version().as_str(), "2022-09-01");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResourceManagerClient>();
    }
}
