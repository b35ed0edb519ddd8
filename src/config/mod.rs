//! Configuration types for the Azure Resource Manager SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for communication with Azure Resource Manager.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ArmConfig`]: The main configuration struct holding all SDK settings
//! - [`ArmConfigBuilder`]: A builder for constructing [`ArmConfig`] instances
//! - [`Environment`]: The Azure cloud to talk to
//! - [`TenantId`], [`ClientId`]: Validated identifiers for token acquisition
//! - [`ClientSecret`]: A validated client secret with masked debug output
//! - [`Endpoint`]: A validated service URL
//! - [`ApiVersion`]: An ARM `api-version` value
//!
//! # Example
//!
//! ```rust
//! use azure_arm::{ArmConfig, AccessToken, Credential};
//!
//! let config = ArmConfig::builder()
//!     .credential(Credential::Static(AccessToken::new("token")))
//!     .user_agent_prefix("my-tool/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.tries(), 3);
//! ```

mod environment;
mod newtypes;
mod version;

pub use environment::Environment;
pub use newtypes::{ClientId, ClientSecret, Endpoint, TenantId};
pub use version::ApiVersion;

use std::time::Duration;

use crate::auth::Credential;
use crate::error::ConfigError;
use crate::pollers::DEFAULT_NUMBER_OF_DROPPED_CONNECTIONS_TO_ALLOW;

/// Default number of attempts made for each request.
pub const DEFAULT_TRIES: u32 = 3;

/// Default interval between long-running operation polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Configuration for the Azure Resource Manager SDK.
///
/// # Thread Safety
///
/// `ArmConfig` is `Clone`, `Send`, and `Sync`. Clones share the credential's
/// token cache.
#[derive(Clone, Debug)]
pub struct ArmConfig {
    environment: Environment,
    resource_manager_endpoint: Option<Endpoint>,
    credential: Credential,
    user_agent_prefix: Option<String>,
    tries: u32,
    poll_interval: Duration,
    dropped_connections_allowed: u8,
}

impl ArmConfig {
    /// Creates a new builder for constructing an `ArmConfig`.
    #[must_use]
    pub fn builder() -> ArmConfigBuilder {
        ArmConfigBuilder::new()
    }

    /// Returns the Azure environment.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns the Resource Manager base URL.
    ///
    /// An explicit override wins over the environment's endpoint.
    #[must_use]
    pub fn resource_manager_endpoint(&self) -> &str {
        self.resource_manager_endpoint
            .as_ref()
            .map_or_else(
                || self.environment.resource_manager_endpoint(),
                |endpoint| endpoint.as_ref(),
            )
    }

    /// Returns the credential used to authorize requests.
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns how many times a throttled or failed request is attempted.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
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
}

// Verify ArmConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ArmConfig>();
};

/// Builder for constructing [`ArmConfig`] instances.
///
/// The only required field is `credential`.
///
/// # Defaults
///
/// - `environment`: [`Environment::Public`]
/// - `resource_manager_endpoint`: the environment's endpoint
/// - `user_agent_prefix`: `None`
/// - `tries`: 3
/// - `poll_interval`: 10 seconds
/// - `dropped_connections_allowed`: 3
#[derive(Debug, Default)]
pub struct ArmConfigBuilder {
    environment: Option<Environment>,
    resource_manager_endpoint: Option<Endpoint>,
    credential: Option<Credential>,
    user_agent_prefix: Option<String>,
    tries: Option<u32>,
    poll_interval: Option<Duration>,
    dropped_connections_allowed: Option<u8>,
}

impl ArmConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Azure environment.
    #[must_use]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Overrides the Resource Manager endpoint, e.g. to route through a proxy.
    #[must_use]
    pub fn resource_manager_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.resource_manager_endpoint = Some(endpoint);
        self
    }

    /// Sets the credential (required).
    #[must_use]
    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets how many times a request is attempted.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Sets the fallback interval between LRO polls.
    #[must_use]
    pub const fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    /// Sets how many consecutive dropped connections a poller tolerates.
    #[must_use]
    pub const fn dropped_connections_allowed(mut self, allowed: u8) -> Self {
        self.dropped_connections_allowed = Some(allowed);
        self
    }

    /// Builds the [`ArmConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `credential` is not
    /// set, or [`ConfigError::InvalidSetting`] if `tries` is zero.
    pub fn build(self) -> Result<ArmConfig, ConfigError> {
        let credential = self
            .credential
            .ok_or(ConfigError::MissingRequiredField {
                field: "credential",
            })?;

        let tries = self.tries.unwrap_or(DEFAULT_TRIES);
        if tries == 0 {
            return Err(ConfigError::InvalidSetting {
                field: "tries",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(ArmConfig {
            environment: self.environment.unwrap_or_default(),
            resource_manager_endpoint: self.resource_manager_endpoint,
            credential,
            user_agent_prefix: self.user_agent_prefix,
            tries,
            poll_interval: self.poll_interval.unwrap_or(DEFAULT_POLL_INTERVAL),
            dropped_connections_allowed: self
                .dropped_connections_allowed
                .unwrap_or(DEFAULT_NUMBER_OF_DROPPED_CONNECTIONS_TO_ALLOW),
        })
    }
}
