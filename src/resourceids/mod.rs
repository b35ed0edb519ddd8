//! Resource ID parsing and formatting.
//!
//! Every Azure resource is addressed by a path such as
//! `/subscriptions/{id}/resourceGroups/{name}/providers/Microsoft.Storage/storageAccounts/{name}`.
//! This module describes such paths as a list of [`Segment`]s and parses
//! strings against them:
//!
//! - [`Segment`] / [`SegmentKind`]: one piece of a template
//! - [`Parser`]: matches a string against a template, exactly or insensitively
//! - [`ParseResult`]: the parsed values
//! - [`ResourceId`]: implemented by every typed ID
//! - [`ResourceIdError`]: parse failures with example IDs in the message

mod errors;
mod parser;
mod resource_id;
mod segment;

pub use errors::ResourceIdError;
pub use parser::{ParseResult, Parser};
pub use resource_id::{validate_resource_id, ResourceId};
pub use segment::{
    example_id, Segment, SegmentKind, EXAMPLE_RESOURCE_GROUP, EXAMPLE_SCOPE,
    EXAMPLE_SUBSCRIPTION_ID,
};

pub(crate) use resource_id::{impl_resource_id_traits, resource_group_resource_id};
