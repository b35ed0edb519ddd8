//! OData-style paging for list operations.
//!
//! - [`Page`]: one `{"value": [...], "nextLink": ...}` response
//! - [`Pager`]: walks pages by following `nextLink`
//! - [`ListResult`]: every item from a completed walk
//! - [`Predicate`]: filters items while collecting

mod page;
mod pager;
mod predicate;

pub use page::Page;
pub use pager::{ListResult, Pager};
pub use predicate::{optional_eq, Predicate};
