//! Key Vault, API version 2023-07-01.

pub mod vaults;
