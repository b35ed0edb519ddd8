//! Authentication error types.

use thiserror::Error;

/// Errors raised while acquiring or inspecting an access token.
///
/// # Example
///
/// ```rust
/// use azure_arm::auth::AuthError;
///
/// let error = AuthError::TokenRequestFailed {
///     status: 401,
///     message: "AADSTS7000215: Invalid client secret provided.".to_string(),
/// };
/// assert!(error.to_string().contains("401"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The token endpoint rejected the request or could not be reached.
    ///
    /// A `status` of 0 means no HTTP response was received.
    #[error("Token request failed with status {status}: {message}")]
    TokenRequestFailed {
        /// HTTP status code returned by the token endpoint.
        status: u16,
        /// Error body or network error description.
        message: String,
    },

    /// The token endpoint answered with a body that is not a token.
    #[error("Invalid token response: {message}")]
    InvalidTokenResponse {
        /// What was wrong with the response.
        message: String,
    },

    /// A bearer token could not be decoded as a JWT.
    #[error("Invalid JWT: {reason}")]
    InvalidJwt {
        /// The decoding failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_request_failed_message() {
        let error = AuthError::TokenRequestFailed {
            status: 0,
            message: "Network error: connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Token request failed with status 0: Network error: connection refused"
        );
    }

    #[test]
    fn test_invalid_jwt_message() {
        let error = AuthError::InvalidJwt {
            reason: "InvalidToken".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid JWT: InvalidToken");
    }
}
