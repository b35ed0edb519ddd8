//! Typed clients, one package per resource type and API version.
//!
//! Each package lives at `services::<service>::v<api_version>::<package>` and
//! contains:
//!
//! - string enum constants for the closed sets the API uses,
//! - request and response models,
//! - the Resource ID type for the resource, when it is not a common one,
//! - a client whose methods map one-to-one onto the REST operations.
//!
//! Packages for different API versions of the same service sit side by side
//! and share nothing but the crate's runtime types.

pub mod compute;
pub mod eventgrid;
pub mod fluidrelay;
pub mod healthcareapis;
pub mod keyvault;
pub mod storage;
