use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::constants::{
    AccessTier, AccountStatus, Action, Bypass, DefaultAction, DnsEndpointType, KeyPermission,
    KeySource, Kind, MinimumTlsVersion, ProvisioningState, PublicNetworkAccess, Reason, SkuName,
    SkuTier, State,
};
use crate::models::{ManagedServiceIdentity, SystemData, Tags};
use crate::odata::{optional_eq, Predicate};

/// The SKU of a storage account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sku {
    /// Replication SKU.
    pub name: SkuName,
    /// Performance tier. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<SkuTier>,
}

impl Sku {
    /// A SKU with only its name set, as requests expect.
    #[must_use]
    pub const fn new(name: SkuName) -> Self {
        Self { name, tier: None }
    }
}

/// Customer-managed key settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyVaultProperties {
    /// Key name.
    #[serde(rename = "keyname", skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    /// Vault URI.
    #[serde(rename = "keyvaulturi", skip_serializing_if = "Option::is_none")]
    pub key_vault_uri: Option<String>,
    /// Key version; omitted for automatic rotation.
    #[serde(rename = "keyversion", skip_serializing_if = "Option::is_none")]
    pub key_version: Option<String>,
}

/// Encryption settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encryption {
    /// Where keys are held.
    #[serde(rename = "keySource", skip_serializing_if = "Option::is_none")]
    pub key_source: Option<KeySource>,
    /// Customer-managed key settings.
    #[serde(rename = "keyvaultproperties", skip_serializing_if = "Option::is_none")]
    pub key_vault_properties: Option<KeyVaultProperties>,
    /// Whether a second layer of platform encryption is applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_infrastructure_encryption: Option<bool>,
}

/// An IP network rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpRule {
    /// Rule action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    /// An IP address or CIDR range.
    pub value: String,
}

/// A virtual network rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualNetworkRule {
    /// Rule action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    /// The subnet Resource ID.
    pub id: String,
    /// Rule state. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
}

/// Network access rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRuleSet {
    /// Traffic that bypasses the rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass: Option<Bypass>,
    /// Action when no rule matches.
    pub default_action: DefaultAction,
    /// IP rules.
    #[serde(rename = "ipRules", skip_serializing_if = "Option::is_none")]
    pub ip_rules: Option<Vec<IpRule>>,
    /// Virtual network rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_network_rules: Option<Vec<VirtualNetworkRule>>,
}

/// Service endpoints of an account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Blob endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob: Option<String>,
    /// Data Lake Storage endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dfs: Option<String>,
    /// File endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Queue endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,
    /// Table endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    /// Static website endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<String>,
}

/// Properties of a storage account as returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageAccountProperties {
    /// Blob access tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_tier: Option<AccessTier>,
    /// Whether anonymous blob access may be enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_blob_public_access: Option<bool>,
    /// Whether Shared Key authorization is permitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_shared_key_access: Option<bool>,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    /// Endpoint DNS zone type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_endpoint_type: Option<DnsEndpointType>,
    /// Encryption settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<Encryption>,
    /// Whether hierarchical namespace (Data Lake Storage Gen2) is enabled.
    #[serde(rename = "isHnsEnabled", skip_serializing_if = "Option::is_none")]
    pub is_hns_enabled: Option<bool>,
    /// Minimum TLS version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_tls_version: Option<MinimumTlsVersion>,
    /// Network rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_acls: Option<NetworkRuleSet>,
    /// Primary endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_endpoints: Option<Endpoints>,
    /// Primary location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_location: Option<String>,
    /// Provisioning state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<ProvisioningState>,
    /// Public network access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_network_access: Option<PublicNetworkAccess>,
    /// Secondary location, for geo-replicated SKUs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_location: Option<String>,
    /// Availability of the primary location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_of_primary: Option<AccountStatus>,
    /// Whether only HTTPS traffic is accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_https_traffic_only: Option<bool>,
}

/// A storage account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageAccount {
    /// Resource ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Managed identities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<ManagedServiceIdentity>,
    /// Account kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,
    /// Azure region.
    pub location: String,
    /// Account name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Account properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<StorageAccountProperties>,
    /// SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,
    /// Creation and modification metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_data: Option<SystemData>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    /// Resource type, `Microsoft.Storage/storageAccounts`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

/// Properties accepted when creating an account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageAccountPropertiesCreateParameters {
    /// Blob access tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_tier: Option<AccessTier>,
    /// Whether anonymous blob access may be enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_blob_public_access: Option<bool>,
    /// Whether Shared Key authorization is permitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_shared_key_access: Option<bool>,
    /// Endpoint DNS zone type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_endpoint_type: Option<DnsEndpointType>,
    /// Encryption settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<Encryption>,
    /// Whether hierarchical namespace is enabled.
    #[serde(rename = "isHnsEnabled", skip_serializing_if = "Option::is_none")]
    pub is_hns_enabled: Option<bool>,
    /// Minimum TLS version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_tls_version: Option<MinimumTlsVersion>,
    /// Network rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_acls: Option<NetworkRuleSet>,
    /// Public network access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_network_access: Option<PublicNetworkAccess>,
    /// Whether only HTTPS traffic is accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_https_traffic_only: Option<bool>,
}

/// The body of a create request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageAccountCreateParameters {
    /// Managed identities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<ManagedServiceIdentity>,
    /// Account kind.
    pub kind: Kind,
    /// Azure region.
    pub location: String,
    /// Account properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<StorageAccountPropertiesCreateParameters>,
    /// SKU.
    pub sku: Sku,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// Properties accepted when updating an account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageAccountPropertiesUpdateParameters {
    /// Blob access tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_tier: Option<AccessTier>,
    /// Whether anonymous blob access may be enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_blob_public_access: Option<bool>,
    /// Whether Shared Key authorization is permitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_shared_key_access: Option<bool>,
    /// Encryption settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<Encryption>,
    /// Minimum TLS version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_tls_version: Option<MinimumTlsVersion>,
    /// Network rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_acls: Option<NetworkRuleSet>,
    /// Public network access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_network_access: Option<PublicNetworkAccess>,
    /// Whether only HTTPS traffic is accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_https_traffic_only: Option<bool>,
}

/// The body of an update request. Only the fields that are set change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageAccountUpdateParameters {
    /// Managed identities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<ManagedServiceIdentity>,
    /// Account kind; only Storage to StorageV2 upgrades are allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,
    /// Account properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<StorageAccountPropertiesUpdateParameters>,
    /// SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,
    /// Tags; replaces every existing tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// An access key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageAccountKey {
    /// When the key was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    /// `key1`, `key2`, `kerb1` or `kerb2`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    /// Key permissions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<KeyPermission>,
    /// The key itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// The response of `listKeys` and `regenerateKey`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageAccountListKeysResult {
    /// The account keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<StorageAccountKey>>,
}

/// The body of a `regenerateKey` request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageAccountRegenerateKeyParameters {
    /// `key1`, `key2`, `kerb1` or `kerb2`.
    pub key_name: String,
}

/// The body of a `checkNameAvailability` request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageAccountCheckNameAvailabilityParameters {
    /// The name to check.
    pub name: String,
    /// Always `Microsoft.Storage/storageAccounts`.
    #[serde(rename = "type")]
    pub resource_type: String,
}

impl StorageAccountCheckNameAvailabilityParameters {
    /// Checks `name` as a storage account name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_type: "Microsoft.Storage/storageAccounts".to_string(),
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

/// Filters [`StorageAccount`]s in `list_complete_matching_predicate`.
///
/// Unset fields match anything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StorageAccountOperationPredicate {
    /// Match on resource ID.
    pub id: Option<String>,
    /// Match on kind.
    pub kind: Option<Kind>,
    /// Match on location.
    pub location: Option<String>,
    /// Match on name.
    pub name: Option<String>,
    /// Match on resource type.
    pub resource_type: Option<String>,
}

impl Predicate<StorageAccount> for StorageAccountOperationPredicate {
    fn matches(&self, item: &StorageAccount) -> bool {
        optional_eq(self.id.as_ref(), item.id.as_ref())
            && optional_eq(self.kind.as_ref(), item.kind.as_ref())
            && optional_eq(self.location.as_ref(), Some(&item.location))
            && optional_eq(self.name.as_ref(), item.name.as_ref())
            && optional_eq(self.resource_type.as_ref(), item.resource_type.as_ref())
    }
}
