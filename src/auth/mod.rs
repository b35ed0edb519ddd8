//! Authentication types for the Azure Resource Manager SDK.
//!
//! Every ARM request carries an Azure AD bearer token. This module provides
//! the token type and the credentials that produce it.
//!
//! # Overview
//!
//! - [`AccessToken`]: A bearer token with an optional expiry
//! - [`TokenClaims`]: Identity claims decoded from a token
//! - [`Credential`]: The token source configured on [`ArmConfig`](crate::ArmConfig)
//! - [`ClientSecretCredential`]: Service principal authentication with a client secret
//! - [`AuthError`]: Token acquisition failures
//!
//! # Example
//!
//! ```rust
//! use azure_arm::auth::{AccessToken, Credential};
//!
//! // A token obtained out of band, e.g. `az account get-access-token`
//! let credential = Credential::Static(AccessToken::new("eyJ0eXAi..."));
//! ```

mod credential;
mod errors;
mod token;

pub use credential::{ClientSecretCredential, Credential};
pub use errors::AuthError;
pub use token::{AccessToken, TokenClaims, EXPIRY_SKEW_SECONDS};
