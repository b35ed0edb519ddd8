//! Bearer tokens and their claims.
//!
//! ARM accepts Azure AD access tokens in the `Authorization: Bearer` header.
//! [`AccessToken`] carries the raw token and its expiry; [`TokenClaims`]
//! exposes the identity fields embedded in the token.
//!
//! Claims are read without verifying the signature. Resource Manager does the
//! verification; the SDK only needs the expiry and the caller's identity for
//! logging and cache decisions.

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::auth::AuthError;

/// Tokens are treated as expired this many seconds before `expires_on`.
pub const EXPIRY_SKEW_SECONDS: i64 = 300;

/// An OAuth2 bearer token for Azure Resource Manager.
///
/// # Security
///
/// The `Debug` implementation masks the token value.
///
/// # Example
///
/// ```rust
/// use azure_arm::AccessToken;
/// use chrono::{Duration, Utc};
///
/// let token = AccessToken::with_expiry("eyJ0...", Utc::now() + Duration::hours(1));
/// assert!(!token.expired());
/// assert!(!format!("{:?}", token).contains("eyJ0"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    token: String,
    expires_on: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Creates a token without a known expiry. It never reports as expired.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            expires_on: None,
        }
    }

    /// Creates a token that expires at `expires_on`.
    #[must_use]
    pub fn with_expiry(token: impl Into<String>, expires_on: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_on: Some(expires_on),
        }
    }

    /// Creates a token whose expiry is read from the JWT `exp` claim.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidJwt`] if the token is not a decodable JWT.
    pub fn from_jwt(token: impl Into<String>) -> Result<Self, AuthError> {
        let token = token.into();
        let claims = TokenClaims::decode(&token)?;
        Ok(Self {
            expires_on: claims.expires_on(),
            token,
        })
    }

    /// Returns the raw bearer token.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.token
    }

    /// Returns when the token expires, if known.
    #[must_use]
    pub const fn expires_on(&self) -> Option<DateTime<Utc>> {
        self.expires_on
    }

    /// Returns `true` once the token is within [`EXPIRY_SKEW_SECONDS`] of expiring.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires_on.is_some_and(|expires_on| {
            expires_on
                .checked_sub_signed(Duration::seconds(EXPIRY_SKEW_SECONDS))
                .map_or(true, |refresh_at| refresh_at <= Utc::now())
        })
    }

    /// Decodes the identity claims carried by the token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidJwt`] if the token is opaque.
    pub fn claims(&self) -> Result<TokenClaims, AuthError> {
        TokenClaims::decode(&self.token)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"*****")
            .field("expires_on", &self.expires_on)
            .finish()
    }
}

/// Identity claims from an Azure AD access token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Tenant the token was issued in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tid: Option<String>,
    /// Object ID of the principal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oid: Option<String>,
    /// Application ID of the client that requested the token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appid: Option<String>,
    /// Audience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    /// Issuer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Expiry as seconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Decodes the claims of a JWT without verifying its signature.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidJwt`] if the token is malformed.
    pub fn decode(token: &str) -> Result<Self, AuthError> {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let key = DecodingKey::from_secret(&[]);
        decode::<Self>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidJwt {
                reason: e.to_string(),
            })
    }

    /// Returns the `exp` claim as a timestamp.
    #[must_use]
    pub fn expires_on(&self) -> Option<DateTime<Utc>> {
        self.exp
            .and_then(|exp| Utc.timestamp_opt(exp, 0).single())
    }
}
