//! Key vaults.
//!
//! Vaults are identified by [`crate::commonids::KeyVaultId`].

mod client;
pub mod constants;
pub mod models;

pub use client::{ListByResourceGroupOperationOptions, VaultsClient, API_VERSION};
pub use constants::*;
pub use models::*;
