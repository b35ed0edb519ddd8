//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Azure AD tenant (directory) ID.
///
/// # Example
///
/// ```rust
/// use azure_arm::TenantId;
///
/// let tenant = TenantId::new("72f988bf-86f1-41af-91ab-2d7cd011db47").unwrap();
/// assert_eq!(tenant.as_ref(), "72f988bf-86f1-41af-91ab-2d7cd011db47");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TenantId(String);

impl TenantId {
    /// Creates a new validated tenant ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTenantId`] if the value is empty or blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        let id = id.trim();
        if id.is_empty() {
            return Err(ConfigError::EmptyTenantId);
        }
        Ok(Self(id.to_string()))
    }
}

impl AsRef<str> for TenantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated application (client) ID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the value is empty or blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        let id = id.trim();
        if id.is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id.to_string()))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated client secret.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ClientSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use azure_arm::ClientSecret;
///
/// let secret = ClientSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// A validated service endpoint such as `https://management.azure.com`.
///
/// The URL must carry a scheme and a host. A trailing `/` is trimmed so
/// paths can be appended with a single separator.
///
/// # Example
///
/// ```rust
/// use azure_arm::Endpoint;
///
/// let endpoint = Endpoint::new("https://management.azure.com/").unwrap();
/// assert_eq!(endpoint.as_ref(), "https://management.azure.com");
/// assert_eq!(endpoint.scheme(), "https");
/// assert_eq!(endpoint.host_name(), "management.azure.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
    scheme_end: usize,
    host_end: usize,
}

impl Endpoint {
    /// Creates a new validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidEndpoint { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidEndpoint { url });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidEndpoint { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.scheme_end + 3..self.host_end]
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for Endpoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
