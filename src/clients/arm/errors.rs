//! Operation-level error types for Resource Manager service clients.
//!
//! The SDK maps responses to semantic error variants:
//!
//! - **404**: [`ArmError::NotFound`] - the resource does not exist
//! - **2xx outside the operation's expected set**: [`ArmError::UnexpectedStatus`]
//! - **Other 4xx/5xx**: [`ArmError::Http`] - wrapped HTTP error
//!
//! # Example
//!
//! ```rust,ignore
//! use azure_arm::clients::ArmError;
//!
//! match client.get_properties(&id, Default::default()).await {
//!     Ok(response) => println!("{:?}", response.model),
//!     Err(e) if e.is_not_found() => println!("{id} is gone"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;
use crate::pollers::PollerError;

/// Errors returned by service client operations.
#[derive(Debug, Error)]
pub enum ArmError {
    /// The resource does not exist (HTTP 404).
    #[error("{resource} {id:?} was not found")]
    NotFound {
        /// The resource type name, e.g. "Storage Account".
        resource: &'static str,
        /// The resource ID or request path.
        id: String,
    },

    /// The server answered with a success code the operation does not expect.
    #[error("{resource}: unexpected status {code}, expected one of {expected:?}")]
    UnexpectedStatus {
        /// The resource type name.
        resource: &'static str,
        /// The status code received.
        code: u16,
        /// The status codes the operation accepts.
        expected: &'static [u16],
        /// Value of the `x-ms-request-id` header.
        request_id: Option<String>,
    },

    /// The request model could not be serialized.
    #[error("{resource}: serializing request body: {source}")]
    Serialize {
        /// The resource type name.
        resource: &'static str,
        /// The serde error.
        #[source]
        source: serde_json::Error,
    },

    /// The response body did not match the expected model.
    #[error("{resource}: decoding response body: {source}")]
    Deserialize {
        /// The resource type name.
        resource: &'static str,
        /// The serde error.
        #[source]
        source: serde_json::Error,
    },

    /// An HTTP-level failure.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A long-running operation did not complete successfully.
    #[error(transparent)]
    Poller(#[from] PollerError),
}

impl ArmError {
    /// Maps an HTTP error to an operation error, turning 404 into [`ArmError::NotFound`].
    #[must_use]
    pub fn from_http_error(error: HttpError, resource: &'static str, id: &str) -> Self {
        if error.is_not_found() {
            return Self::NotFound {
                resource,
                id: id.to_string(),
            };
        }
        Self::Http(error)
    }

    /// Returns `true` when the resource does not exist.
    ///
    /// Use this to treat a missing resource as already deleted.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the HTTP status code associated with the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::UnexpectedStatus { code, .. } => Some(*code),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the `x-ms-request-id` of the failing response, if any.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::UnexpectedStatus { request_id, .. } => request_id.as_deref(),
            Self::Http(e) => e.request_id(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    fn response_error(code: u16) -> HttpError {
        HttpError::Response(HttpResponseError {
            code,
            error_code: Some("Conflict".to_string()),
            message: "Conflict: busy".to_string(),
            request_id: Some("req-9".to_string()),
        })
    }

    #[test]
    fn test_from_http_error_maps_404_to_not_found() {
        let error = ArmError::from_http_error(response_error(404), "Key Vault", "/subscriptions/1/x");
        assert!(error.is_not_found());
        assert_eq!(error.status(), Some(404));
        assert_eq!(
            error.to_string(),
            r#"Key Vault "/subscriptions/1/x" was not found"#
        );
    }

    #[test]
    fn test_from_http_error_keeps_other_errors() {
        let error = ArmError::from_http_error(response_error(409), "Key Vault", "/x");
        assert!(!error.is_not_found());
        assert_eq!(error.status(), Some(409));
        assert_eq!(error.request_id(), Some("req-9"));
    }

    #[test]
    fn test_unexpected_status_message() {
        let error = ArmError::UnexpectedStatus {
            resource: "Topic",
            code: 202,
            expected: &[200],
            request_id: None,
        };
        assert_eq!(
            error.to_string(),
            "Topic: unexpected status 202, expected one of [200]"
        );
    }
}
