use serde::{Deserialize, Serialize};

use super::constants::{
    CertificatePermissions, CreateMode, KeyPermissions, NetworkRuleAction,
    NetworkRuleBypassOptions, Reason, SecretPermissions, SkuFamily, SkuName, StoragePermissions,
    VaultProvisioningState,
};
use crate::models::{SystemData, Tags};
use crate::odata::{optional_eq, Predicate};

/// The SKU of a vault.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sku {
    /// Always `A`.
    pub family: SkuFamily,
    /// `standard` or `premium`.
    pub name: SkuName,
}

/// Object permissions granted by an access policy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    /// Certificate permissions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificates: Option<Vec<CertificatePermissions>>,
    /// Key permissions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<KeyPermissions>>,
    /// Secret permissions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets: Option<Vec<SecretPermissions>>,
    /// Storage permissions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<Vec<StoragePermissions>>,
}

/// An identity and the permissions it holds on the vault.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPolicyEntry {
    /// Application ID of a client acting on behalf of the principal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    /// Object ID of the principal.
    pub object_id: String,
    /// Granted permissions.
    pub permissions: Permissions,
    /// Tenant of the principal.
    pub tenant_id: String,
}

/// An IP network rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpRule {
    /// An IP address or CIDR range.
    pub value: String,
}

/// A virtual network rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualNetworkRule {
    /// The subnet Resource ID.
    pub id: String,
    /// Whether to skip the service endpoint check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_missing_vnet_service_endpoint: Option<bool>,
}

/// Network access rules.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRuleSet {
    /// Traffic that bypasses the rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass: Option<NetworkRuleBypassOptions>,
    /// Action when no rule matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_action: Option<NetworkRuleAction>,
    /// IP rules.
    #[serde(rename = "ipRules", skip_serializing_if = "Option::is_none")]
    pub ip_rules: Option<Vec<IpRule>>,
    /// Virtual network rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_network_rules: Option<Vec<VirtualNetworkRule>>,
}

/// Properties of a vault.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultProperties {
    /// Access policies; ignored when RBAC authorization is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_policies: Option<Vec<AccessPolicyEntry>>,
    /// Whether this request creates or recovers the vault.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_mode: Option<CreateMode>,
    /// Whether purge protection is on. It cannot be turned off.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_purge_protection: Option<bool>,
    /// Whether data plane access uses Azure RBAC instead of access policies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_rbac_authorization: Option<bool>,
    /// Whether soft delete is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_soft_delete: Option<bool>,
    /// Whether VMs may retrieve certificates stored as secrets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_for_deployment: Option<bool>,
    /// Whether Azure Disk Encryption may retrieve secrets and unwrap keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_for_disk_encryption: Option<bool>,
    /// Whether Resource Manager may retrieve secrets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_for_template_deployment: Option<bool>,
    /// Network rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_acls: Option<NetworkRuleSet>,
    /// Provisioning state. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<VaultProvisioningState>,
    /// `Enabled` or `Disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_network_access: Option<String>,
    /// The SKU.
    pub sku: Sku,
    /// Days soft-deleted data is retained, 7 to 90.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soft_delete_retention_in_days: Option<i64>,
    /// Tenant used to authenticate requests to the vault.
    pub tenant_id: String,
    /// The data plane URI. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault_uri: Option<String>,
}

/// A key vault.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vault {
    /// Resource ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Azure region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Vault name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Vault properties.
    pub properties: VaultProperties,
    /// Creation and modification metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_data: Option<SystemData>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    /// Resource type, `Microsoft.KeyVault/vaults`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

/// The body of a create-or-update request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultCreateOrUpdateParameters {
    /// Azure region.
    pub location: String,
    /// Vault properties.
    pub properties: VaultProperties,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// Properties accepted by an update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultPatchProperties {
    /// Access policies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_policies: Option<Vec<AccessPolicyEntry>>,
    /// Whether purge protection is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_purge_protection: Option<bool>,
    /// Whether data plane access uses Azure RBAC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_rbac_authorization: Option<bool>,
    /// Whether VMs may retrieve certificates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_for_deployment: Option<bool>,
    /// Whether Azure Disk Encryption may use the vault.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_for_disk_encryption: Option<bool>,
    /// Whether Resource Manager may retrieve secrets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_for_template_deployment: Option<bool>,
    /// Network rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_acls: Option<NetworkRuleSet>,
    /// `Enabled` or `Disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_network_access: Option<String>,
    /// The SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,
    /// Days soft-deleted data is retained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soft_delete_retention_in_days: Option<i64>,
    /// Tenant used to authenticate requests to the vault.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

/// The body of an update request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultPatchParameters {
    /// Properties to change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<VaultPatchProperties>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// The body of a `checkNameAvailability` request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultCheckNameAvailabilityParameters {
    /// The name to check.
    pub name: String,
    /// Always `Microsoft.KeyVault/vaults`.
    #[serde(rename = "type")]
    pub resource_type: String,
}

impl VaultCheckNameAvailabilityParameters {
    /// Checks `name` as a vault name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_type: "Microsoft.KeyVault/vaults".to_string(),
        }
    }
}

/// The response of `checkNameAvailability`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckNameAvailabilityResult {
    /// Why the name is unavailable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Whether the name can be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_available: Option<bool>,
    /// The reason code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
}

/// Filters [`Vault`]s in `list_by_resource_group_complete_matching_predicate`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VaultOperationPredicate {
    /// Match on resource ID.
    pub id: Option<String>,
    /// Match on location.
    pub location: Option<String>,
    /// Match on name.
    pub name: Option<String>,
    /// Match on resource type.
    pub resource_type: Option<String>,
}

impl Predicate<Vault> for VaultOperationPredicate {
    fn matches(&self, item: &Vault) -> bool {
        optional_eq(self.id.as_ref(), item.id.as_ref())
            && optional_eq(self.location.as_ref(), item.location.as_ref())
            && optional_eq(self.name.as_ref(), item.name.as_ref())
            && optional_eq(self.resource_type.as_ref(), item.resource_type.as_ref())
    }
}
