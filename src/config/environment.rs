//! Azure cloud environments.

use crate::config::Endpoint;
use std::fmt;

/// The Azure cloud a client talks to.
///
/// Each environment fixes the Resource Manager endpoint, the Azure AD
/// authority host used to acquire tokens, and the token audience.
///
/// # Example
///
/// ```rust
/// use azure_arm::Environment;
///
/// let env = Environment::China;
/// assert_eq!(env.resource_manager_endpoint(), "https://management.chinacloudapi.cn");
/// assert_eq!(env.token_scope(), "https://management.chinacloudapi.cn/.default");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    /// Azure public cloud.
    #[default]
    Public,
    /// Azure China (operated by 21Vianet).
    China,
    /// Azure US Government.
    UsGovernment,
    /// Any other cloud, such as Azure Stack or a local emulator.
    Custom {
        /// Base URL of the Resource Manager API.
        resource_manager: Endpoint,
        /// Azure AD authority host.
        authority: Endpoint,
        /// Audience the access token is requested for.
        token_audience: String,
    },
}

impl Environment {
    /// Returns the Resource Manager base URL.
    #[must_use]
    pub fn resource_manager_endpoint(&self) -> &str {
        match self {
            Self::Public => "https://management.azure.com",
            Self::China => "https://management.chinacloudapi.cn",
            Self::UsGovernment => "https://management.usgovcloudapi.net",
            Self::Custom {
                resource_manager, ..
            } => resource_manager.as_ref(),
        }
    }

    /// Returns the Azure AD authority host.
    #[must_use]
    pub fn authority_host(&self) -> &str {
        match self {
            Self::Public => "https://login.microsoftonline.com",
            Self::China => "https://login.chinacloudapi.cn",
            Self::UsGovernment => "https://login.microsoftonline.us",
            Self::Custom { authority, .. } => authority.as_ref(),
        }
    }

    /// Returns the audience tokens are requested for.
    #[must_use]
    pub fn token_audience(&self) -> &str {
        match self {
            Self::Custom { token_audience, .. } => token_audience,
            _ => self.resource_manager_endpoint(),
        }
    }

    /// Returns the OAuth2 scope used by the client-credentials flow.
    #[must_use]
    pub fn token_scope(&self) -> String {
        format!("{}/.default", self.token_audience().trim_end_matches('/'))
    }

    /// Returns a short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::China => "china",
            Self::UsGovernment => "usgovernment",
            Self::Custom { .. } => "custom",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_cloud_endpoints() {
        let env = Environment::default();
        assert_eq!(env, Environment::Public);
        assert_eq!(env.resource_manager_endpoint(), "https://management.azure.com");
        assert_eq!(env.authority_host(), "https://login.microsoftonline.com");
        assert_eq!(env.token_scope(), "https://management.azure.com/.default");
    }

    #[test]
    fn test_us_government_endpoints() {
        let env = Environment::UsGovernment;
        assert_eq!(
            env.resource_manager_endpoint(),
            "https://management.usgovcloudapi.net"
        );
        assert_eq!(env.authority_host(), "https://login.microsoftonline.us");
    }

    #[test]
    fn test_custom_environment_uses_given_values() {
        let env = Environment::Custom {
            resource_manager: Endpoint::new("https://management.local.azurestack.external")
                .unwrap(),
            authority: Endpoint::new("https://adfs.local.azurestack.external").unwrap(),
            token_audience: "https://management.adfs.azurestack.local/".to_string(),
        };
        assert_eq!(
            env.resource_manager_endpoint(),
            "https://management.local.azurestack.external"
        );
        assert_eq!(
            env.token_scope(),
            "https://management.adfs.azurestack.local/.default"
        );
        assert_eq!(env.to_string(), "custom");
    }
}
