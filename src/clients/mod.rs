//! HTTP client types for Azure Resource Manager communication.
//!
//! This module provides the foundational HTTP client layer for making
//! authenticated requests to Resource Manager. It handles request/response
//! processing, retry logic, and ARM-specific header parsing.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client
//! - [`HttpRequest`]: A request to be sent
//! - [`HttpResponse`]: A parsed response
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`DataType`]: Content types for request bodies
//! - [`ResourceManagerClient`]: API-version aware client used by service packages
//! - [`ArmError`]: Operation-level errors
//!
//! # Retry Behavior
//!
//! The client retries transient failures:
//!
//! - **429, 500, 502, 503, 504**: Retries after the `Retry-After` delay, or an
//!   exponential backoff starting at 1 second (capped at 30 seconds) with jitter
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! [`HttpRequest`] defaults to a single attempt. [`ResourceManagerClient`]
//! uses the `tries` value from [`ArmConfig`](crate::ArmConfig).

mod arm;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use arm::{ArmError, Operation, OperationResponse, RequestOptions, ResourceManagerClient};
pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, RETRY_BASE_DELAY, RETRY_MAX_DELAY, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ArmErrorDetail, HttpResponse, MAX_RETRY_AFTER};
