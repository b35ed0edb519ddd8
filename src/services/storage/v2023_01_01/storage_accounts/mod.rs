//! Storage Accounts (`Microsoft.Storage/storageAccounts`), API version 2023-01-01.
//!
//! Accounts are addressed by [`StorageAccountId`](crate::commonids::StorageAccountId).

mod client;
pub mod constants;
pub mod models;

pub use client::{
    GetPropertiesOperationOptions, ListKeysOperationOptions, StorageAccountsClient, API_VERSION,
};
pub use constants::*;
pub use models::*;
