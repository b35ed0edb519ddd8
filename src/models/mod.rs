//! Models shared by every service package.

use std::collections::HashMap;

mod identity;
pub mod location;
mod system_data;

pub use identity::{ManagedServiceIdentity, ManagedServiceIdentityType, UserAssignedIdentityDetails};
pub use system_data::{CreatedByType, SystemData};

/// Resource tags.
pub type Tags = HashMap<String, String>;
