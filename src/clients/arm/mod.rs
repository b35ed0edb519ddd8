//! Resource Manager operation plumbing.
//!
//! This module sits between the raw [`HttpClient`](crate::clients::HttpClient)
//! and the typed service packages:
//!
//! - [`ResourceManagerClient`]: API-version aware client with status mapping
//! - [`Operation`]: method, path, expected status codes and body of one call
//! - [`RequestOptions`]: extra query parameters and headers
//! - [`OperationResponse`]: raw response plus decoded model
//! - [`ArmError`]: operation-level errors (`NotFound`, `UnexpectedStatus`, ...)

mod client;
mod errors;
mod operation;
mod response;

pub use client::ResourceManagerClient;
pub use errors::ArmError;
pub use operation::{Operation, RequestOptions};
pub use response::OperationResponse;
