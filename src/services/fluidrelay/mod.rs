//! Azure Fluid Relay (`Microsoft.FluidRelay`).

pub mod v2022_05_26;
