use serde::{Deserialize, Serialize};

use super::constants::{CmkIdentityType, KeyName, ProvisioningState, StorageSku};
use crate::models::{ManagedServiceIdentity, SystemData, Tags};
use crate::odata::{optional_eq, Predicate};

/// The identity that unwraps the customer-managed key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerManagedKeyEncryptionPropertiesKeyEncryptionKeyIdentity {
    /// System or user assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_type: Option<CmkIdentityType>,
    /// The user assigned identity, when `identity_type` is `UserAssigned`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_assigned_identity_resource_id: Option<String>,
}

/// Customer-managed key settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerManagedKeyEncryptionProperties {
    /// The identity used to reach the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_encryption_key_identity:
        Option<CustomerManagedKeyEncryptionPropertiesKeyEncryptionKeyIdentity>,
    /// Versionless key URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_encryption_key_url: Option<String>,
}

/// Encryption settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionProperties {
    /// Customer-managed key settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_managed_key_encryption: Option<CustomerManagedKeyEncryptionProperties>,
}

/// Endpoints exposed by a server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluidRelayEndpoints {
    /// Orderer endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderer_endpoints: Option<Vec<String>>,
    /// Service endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_endpoints: Option<Vec<String>>,
    /// Storage endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_endpoints: Option<Vec<String>>,
}

/// Properties of a Fluid Relay server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluidRelayServerProperties {
    /// Encryption settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<EncryptionProperties>,
    /// Endpoints. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fluid_relay_endpoints: Option<FluidRelayEndpoints>,
    /// The Fluid Relay tenant. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frs_tenant_id: Option<String>,
    /// Provisioning state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<ProvisioningState>,
    /// Storage tier. Set once at creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storagesku: Option<StorageSku>,
}

/// A Fluid Relay server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluidRelayServer {
    /// Resource ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Managed identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<ManagedServiceIdentity>,
    /// Azure region.
    pub location: String,
    /// Server name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Server properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<FluidRelayServerProperties>,
    /// Creation and modification metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_data: Option<SystemData>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    /// Resource type, `Microsoft.FluidRelay/fluidRelayServers`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

/// Properties accepted by an update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FluidRelayServerUpdateProperties {
    /// Encryption settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<EncryptionProperties>,
}

/// The body of an update request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FluidRelayServerUpdate {
    /// Managed identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<ManagedServiceIdentity>,
    /// Azure region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Properties to change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<FluidRelayServerUpdateProperties>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// The two keys of a server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FluidRelayServerKeys {
    /// The primary key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key1: Option<String>,
    /// The secondary key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key2: Option<String>,
}

/// The body of a `regenerateKey` request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenerateKeyRequest {
    /// The key to regenerate.
    pub key_name: KeyName,
}

/// Filters [`FluidRelayServer`]s in `list_by_resource_group_complete_matching_predicate`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FluidRelayServerOperationPredicate {
    /// Match on resource ID.
    pub id: Option<String>,
    /// Match on location.
    pub location: Option<String>,
    /// Match on name.
    pub name: Option<String>,
    /// Match on resource type.
    pub resource_type: Option<String>,
}

impl Predicate<FluidRelayServer> for FluidRelayServerOperationPredicate {
    fn matches(&self, item: &FluidRelayServer) -> bool {
        optional_eq(self.id.as_ref(), item.id.as_ref())
            && optional_eq(self.location.as_ref(), Some(&item.location))
            && optional_eq(self.name.as_ref(), item.name.as_ref())
            && optional_eq(self.resource_type.as_ref(), item.resource_type.as_ref())
    }
}
