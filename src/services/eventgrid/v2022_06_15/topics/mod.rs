//! Event Grid topics.

mod client;
pub mod constants;
mod id;
pub mod models;

pub use client::{ListByResourceGroupOperationOptions, TopicsClient, API_VERSION};
pub use constants::*;
pub use id::TopicId;
pub use models::*;
