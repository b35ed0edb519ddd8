//! HTTP-specific error types for the Azure Resource Manager SDK.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx responses, carrying the ARM error code
//! - [`MaxHttpRetriesExceededError`]: Retry attempts exhausted on throttling or server errors
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all of the above plus
//!   network and authentication failures
//!
//! # Example
//!
//! ```rust,ignore
//! use azure_arm::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("ARM error {} ({:?}): {}", e.code, e.error_code, e.message);
//!     }
//!     Err(HttpError::MaxRetries(e)) => println!("Gave up after {} tries", e.tries),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::auth::AuthError;

/// Error returned when a request receives a non-successful response.
///
/// The message is built from the ARM error envelope
/// (`{"error": {"code": "...", "message": "..."}}`) when present, and from
/// the raw body otherwise.
///
/// # Example
///
/// ```rust
/// use azure_arm::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     error_code: Some("ResourceNotFound".to_string()),
///     message: "ResourceNotFound: The Resource was not found.".to_string(),
///     request_id: Some("abc-123".to_string()),
/// };
///
/// assert_eq!(
///     error.to_string(),
///     "unexpected status 404 with error: ResourceNotFound: The Resource was not found."
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unexpected status {code} with error: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The ARM error code, e.g. `ResourceGroupNotFound`.
    pub error_code: Option<String>,
    /// Human-readable error message.
    pub message: String,
    /// Value of the `x-ms-request-id` header, for support requests.
    pub request_id: Option<String>,
}

/// Error returned when maximum retry attempts have been exhausted.
///
/// This error is raised when a request keeps failing with a retryable status
/// (429, 500, 502, 503, 504) after all configured attempts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Error message from the last response.
    pub message: String,
    /// Value of the `x-ms-request-id` header of the last response.
    pub request_id: Option<String>,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A PUT or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A request was configured to make zero attempts.
    #[error("A request must be attempted at least once.")]
    ZeroTries,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A bearer token could not be acquired.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl HttpError {
    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            _ => None,
        }
    }

    /// Returns `true` when the server answered 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(404))
    }

    /// Returns `true` for transport-level failures where no response arrived.
    #[must_use]
    pub const fn is_dropped_connection(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Returns the `x-ms-request-id` of the failing response, if any.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Response(e) => e.request_id.as_deref(),
            Self::MaxRetries(e) => e.request_id.as_deref(),
            _ => None,
        }
    }
}
