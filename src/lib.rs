//! # Azure Resource Manager SDK
//!
//! Typed bindings for the Azure Resource Manager (ARM) REST API: Resource ID
//! parsing, string enum constants, request and response models, and
//! per-resource clients with paging and long-running operation support.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ArmConfig`] and [`ArmConfigBuilder`]
//! - Validated newtypes for tenant, client and endpoint values
//! - Bearer token acquisition via [`Credential`]
//! - Resource ID parsing, formatting and validation via [`resourceids`] and
//!   the ready-made types in [`commonids`]
//! - String enums that accept values they do not know via [`string_enum!`]
//! - An async HTTP client with retry logic that honours `Retry-After`
//! - `nextLink` paging via [`odata::Pager`]
//! - Long-running operation polling via [`pollers`]
//! - Typed service packages under [`services`]
//!
//! ## Quick Start
//!
//! ```rust
//! use azure_arm::{AccessToken, ArmConfig, Credential};
//! use azure_arm::services::storage::v2023_01_01::storage_accounts::StorageAccountsClient;
//!
//! let config = ArmConfig::builder()
//!     .credential(Credential::Static(AccessToken::new("token")))
//!     .build()
//!     .unwrap();
//!
//! let client = StorageAccountsClient::new(&config);
//! assert_eq!(client.client().api_version().as_str(), "2023-01-01");
//! ```
//!
//! ## Resource IDs
//!
//! ```rust
//! use azure_arm::commonids::StorageAccountId;
//! use azure_arm::ResourceId;
//!
//! let id = StorageAccountId::parse_insensitively(
//!     "/subscriptions/1/resourcegroups/rg/providers/microsoft.storage/storageaccounts/sa",
//! )
//! .unwrap();
//!
//! assert_eq!(id.storage_account_name, "sa");
//! assert_eq!(
//!     id.id(),
//!     "/subscriptions/1/resourceGroups/rg/providers/Microsoft.Storage/storageAccounts/sa"
//! );
//! ```
//!
//! ## Long-running operations
//!
//! Operations that ARM runs asynchronously come in two flavours: the plain
//! method returns the initial response, and the `_then_poll` variant waits
//! until the operation reaches a terminal state.
//!
//! ```rust,ignore
//! use azure_arm::services::eventgrid::v2022_06_15::topics::{TopicId, TopicsClient};
//!
//! let client = TopicsClient::new(&config);
//! let id = TopicId::new("00000000-0000-0000-0000-000000000000", "example-rg", "orders");
//!
//! match client.delete_then_poll(&id).await {
//!     Ok(()) => {}
//!     Err(e) if e.is_not_found() => {}
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Logging
//!
//! The SDK emits [`tracing`](https://docs.rs/tracing) events for retries,
//! polling and paging. Install any subscriber to see them.

pub mod auth;
pub mod clients;
pub mod commonids;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod odata;
pub mod pollers;
pub mod resourceids;
pub mod services;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}

// Re-export public types at crate root for convenience
pub use auth::{AccessToken, AuthError, ClientSecretCredential, Credential};
pub use config::{
    ApiVersion, ArmConfig, ArmConfigBuilder, ClientId, ClientSecret, Endpoint, Environment,
    TenantId,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ArmError, HttpClient, HttpError, HttpMethod, HttpResponse, Operation, OperationResponse,
    ResourceManagerClient,
};

// Re-export Resource ID types
pub use resourceids::{ResourceId, ResourceIdError};
