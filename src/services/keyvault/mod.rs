//! Azure Key Vault (`Microsoft.KeyVault`).

pub mod v2023_07_01;
