//! Credentials that produce bearer tokens for Resource Manager.
//!
//! # Overview
//!
//! - [`Credential::Static`] wraps a token obtained elsewhere (Azure CLI,
//!   managed identity sidecar, a test fixture).
//! - [`Credential::ClientSecret`] runs the OAuth 2.0 client-credentials grant
//!   for a service principal and caches the resulting token until it is
//!   within five minutes of expiring.
//!
//! # Example
//!
//! ```rust,ignore
//! use azure_arm::{ClientId, ClientSecret, Environment, TenantId};
//! use azure_arm::auth::{ClientSecretCredential, Credential};
//!
//! let credential = Credential::ClientSecret(ClientSecretCredential::new(
//!     &Environment::Public,
//!     TenantId::new("00000000-0000-0000-0000-000000000000")?,
//!     ClientId::new("11111111-1111-1111-1111-111111111111")?,
//!     ClientSecret::new("secret")?,
//! ));
//!
//! let token = credential.token().await?;
//! ```

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::auth::{AccessToken, AuthError};
use crate::config::{ClientId, ClientSecret, Environment, TenantId};

const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

/// Source of bearer tokens for outgoing requests.
#[derive(Clone, Debug)]
pub enum Credential {
    /// A fixed token used as-is for every request.
    Static(AccessToken),
    /// A service principal authenticated with a client secret.
    ClientSecret(ClientSecretCredential),
}

impl Credential {
    /// Returns a token valid for the next request.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if a token cannot be acquired.
    pub async fn token(&self) -> Result<AccessToken, AuthError> {
        match self {
            Self::Static(token) => Ok(token.clone()),
            Self::ClientSecret(credential) => credential.get_token().await,
        }
    }
}

impl From<AccessToken> for Credential {
    fn from(token: AccessToken) -> Self {
        Self::Static(token)
    }
}

impl From<ClientSecretCredential> for Credential {
    fn from(credential: ClientSecretCredential) -> Self {
        Self::ClientSecret(credential)
    }
}

/// Service principal credential using the client-credentials grant.
///
/// Clones share one token cache.
#[derive(Clone)]
pub struct ClientSecretCredential {
    tenant_id: TenantId,
    client_id: ClientId,
    client_secret: ClientSecret,
    token_url: String,
    scope: String,
    client: reqwest::Client,
    cache: Arc<Mutex<Option<AccessToken>>>,
}

// Verify ClientSecretCredential is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientSecretCredential>();
};

impl ClientSecretCredential {
    /// Creates a credential for the given environment's authority.
    #[must_use]
    pub fn new(
        environment: &Environment,
        tenant_id: TenantId,
        client_id: ClientId,
        client_secret: ClientSecret,
    ) -> Self {
        let token_url = format!(
            "{}/{}/oauth2/v2.0/token",
            environment.authority_host().trim_end_matches('/'),
            tenant_id.as_ref()
        );

        Self {
            tenant_id,
            client_id,
            client_secret,
            token_url,
            scope: environment.token_scope(),
            client: reqwest::Client::new(),
            cache: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns the tenant the principal belongs to.
    #[must_use]
    pub const fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    /// Returns the application (client) ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the token endpoint URL.
    #[must_use]
    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Returns the requested scope.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Returns the cached token, requesting a new one when absent or expired.
    ///
    /// Concurrent callers wait on the cache lock, so at most one token request
    /// is in flight per credential.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the token endpoint fails or answers with
    /// something other than a token.
    pub async fn get_token(&self) -> Result<AccessToken, AuthError> {
        let mut cached = self.cache.lock().await;
        if let Some(token) = cached.as_ref().filter(|token| !token.expired()) {
            return Ok(token.clone());
        }

        let token = self.request_token().await?;
        *cached = Some(token.clone());
        Ok(token)
    }

    async fn request_token(&self) -> Result<AccessToken, AuthError> {
        tracing::debug!(
            tenant_id = self.tenant_id.as_ref(),
            client_id = self.client_id.as_ref(),
            "requesting access token"
        );

        let body = format!(
            "grant_type={}&client_id={}&client_secret={}&scope={}",
            CLIENT_CREDENTIALS_GRANT_TYPE,
            urlencoding::encode(self.client_id.as_ref()),
            urlencoding::encode(self.client_secret.as_ref()),
            urlencoding::encode(&self.scope),
        );

        let response = self
            .client
            .post(&self.token_url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| AuthError::TokenRequestFailed {
                status: 0,
                message: format!("Network error: {e}"),
            })?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(AuthError::TokenRequestFailed {
                status,
                message: error_body,
            });
        }

        let token_response: TokenResponse =
            response
                .json()
                .await
                .map_err(|e| AuthError::InvalidTokenResponse {
                    message: format!("Failed to parse token response: {e}"),
                })?;

        Ok(token_response.into_access_token())
    }
}

impl std::fmt::Debug for ClientSecretCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSecretCredential")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret)
            .field("token_url", &self.token_url)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

/// Azure AD token endpoint response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    /// Seconds until expiry. v1 endpoints send this as a string.
    #[serde(default)]
    expires_in: Option<serde_json::Value>,
}

impl TokenResponse {
    fn into_access_token(self) -> AccessToken {
        let expires_in = self.expires_in.as_ref().and_then(|value| match value {
            serde_json::Value::Number(n) => n.as_i64(),
            serde_json::Value::String(s) => s.parse().ok(),
            _ => None,
        });

        // Lifetimes chrono cannot represent fall back to the JWT `exp` claim.
        let expires_on = expires_in
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime));

        match expires_on {
            Some(expires_on) => AccessToken::with_expiry(self.access_token, expires_on),
            None => AccessToken::from_jwt(self.access_token.clone())
                .unwrap_or_else(|_| AccessToken::new(self.access_token)),
        }
    }
}
