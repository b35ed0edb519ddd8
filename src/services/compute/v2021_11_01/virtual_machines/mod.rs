//! Virtual Machines (`Microsoft.Compute/virtualMachines`), API version 2021-11-01.
//!
//! Machines are addressed by [`VirtualMachineId`](crate::commonids::VirtualMachineId).

mod client;
pub mod constants;
pub mod models;

pub use client::{
    DeleteOperationOptions, GetOperationOptions, ListAllOperationOptions,
    PowerOffOperationOptions, VirtualMachinesClient, API_VERSION,
};
pub use constants::*;
pub use models::*;
