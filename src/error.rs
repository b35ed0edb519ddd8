//! Error types for the Azure Resource Manager SDK.
//!
//! This module contains the configuration and validation errors raised while
//! building an [`ArmConfig`](crate::ArmConfig) or one of its newtypes.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use azure_arm::{TenantId, ConfigError};
//!
//! let result = TenantId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyTenantId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Tenant ID cannot be empty.
    #[error("Tenant ID cannot be empty. Please provide the Azure AD tenant (directory) ID.")]
    EmptyTenantId,

    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide the application (client) ID.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide a valid client secret.")]
    EmptyClientSecret,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM-DD' optionally followed by '-preview' (e.g., '2023-01-01').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://management.azure.com').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A numeric setting is outside its accepted range.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidSetting {
        /// The name of the setting.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tenant_id_error_message() {
        let message = ConfigError::EmptyTenantId.to_string();
        assert!(message.contains("Tenant ID cannot be empty"));
    }

    #[test]
    fn test_invalid_api_version_error_message() {
        let error = ConfigError::InvalidApiVersion {
            version: "2023-13".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("2023-13"));
        assert!(message.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "credential",
        };
        assert!(error.to_string().contains("'credential'"));
    }

    #[test]
    fn test_invalid_setting_error_message() {
        let error = ConfigError::InvalidSetting {
            field: "tries",
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for 'tries': must be at least 1"
        );
    }
}
