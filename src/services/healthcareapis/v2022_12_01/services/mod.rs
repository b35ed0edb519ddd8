//! Healthcare APIs (FHIR) services.

mod client;
pub mod constants;
mod id;
pub mod models;

pub use client::{ServicesClient, API_VERSION};
pub use constants::*;
pub use id::ServiceId;
pub use models::*;
