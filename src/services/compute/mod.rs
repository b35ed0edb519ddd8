//! Azure Compute (`Microsoft.Compute`).

pub mod v2021_11_01;
