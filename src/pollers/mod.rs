//! Long-running operation polling.
//!
//! Resource Manager answers slow writes with `201 Created` or `202 Accepted`
//! and leaves the caller to poll. This module provides:
//!
//! - [`Poller`]: the polling loop, with a dropped connection budget
//! - [`PollerType`]: one check of an operation
//! - [`ResourceManagerPoller`]: picks the right strategy for a response
//! - [`LongRunningOperationPoller`]: follows `Azure-AsyncOperation` / `Location`
//! - [`ProvisioningStatePoller`]: re-reads `properties.provisioningState`
//! - [`DeletePoller`]: re-reads a resource until it returns 404
//!
//! # Example
//!
//! ```rust,ignore
//! use azure_arm::clients::{HttpMethod, Operation};
//!
//! let response = client
//!     .execute_raw(Operation::new(HttpMethod::Delete, path, "Topic").expected(&[200, 202, 204]))
//!     .await?;
//!
//! if let Some(mut poller) = client.poller_for(&response, HttpMethod::Delete, path)? {
//!     poller.poll_until_done().await?;
//! }
//! ```

mod delete;
mod errors;
mod long_running;
mod poller;
mod provisioning_state;
mod resource_manager;

pub use delete::DeletePoller;
pub use errors::PollerError;
pub use long_running::{LongRunningOperationKind, LongRunningOperationPoller};
pub use poller::{
    PollResult, Poller, PollerType, PollingStatus, DEFAULT_NUMBER_OF_DROPPED_CONNECTIONS_TO_ALLOW,
};
pub use provisioning_state::{provisioning_state, ProvisioningStatePoller};
pub use resource_manager::ResourceManagerPoller;
