//! Fluid Relay servers.

mod client;
pub mod constants;
mod id;
pub mod models;

pub use client::{FluidRelayServersClient, API_VERSION};
pub use constants::*;
pub use id::FluidRelayServerId;
pub use models::*;
