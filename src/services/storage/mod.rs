//! Azure Storage (`Microsoft.Storage`).

pub mod v2023_01_01;
