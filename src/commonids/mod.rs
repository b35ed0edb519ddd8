//! Resource IDs shared across services.
//!
//! Service packages reuse these rather than declaring their own, e.g. the
//! Storage Accounts client takes a [`StorageAccountId`] and the Key Vault
//! client a [`KeyVaultId`].
//!
//! # Example
//!
//! ```rust
//! use azure_arm::commonids::{ResourceGroupId, SubscriptionId};
//! use azure_arm::resourceids::ResourceId;
//!
//! let group = ResourceGroupId::new("12345678-1234-9876-4563-123456789012", "example");
//! assert_eq!(
//!     group.id(),
//!     "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example"
//! );
//!
//! let subscription: SubscriptionId = "/subscriptions/12345678-1234-9876-4563-123456789012"
//!     .parse()
//!     .unwrap();
//! assert_eq!(subscription.subscription_id, group.subscription_id);
//! ```

mod resource_group;
mod resource_group_scoped;
mod scope;
mod subnet;
mod subscription;

pub use resource_group::ResourceGroupId;
pub use resource_group_scoped::{
    AppServiceId, AppServicePlanId, KeyVaultId, KubernetesClusterId, ManagedDiskId,
    StorageAccountId, UserAssignedIdentityId, VirtualMachineId, VirtualNetworkId,
};
pub use scope::ScopeId;
pub use subnet::SubnetId;
pub use subscription::SubscriptionId;
