//! Fluid Relay, API version 2022-05-26.

pub mod fluid_relay_servers;
