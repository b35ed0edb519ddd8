use serde::{Deserialize, Serialize};

use super::constants::{Kind, ManagedServiceIdentityType, ProvisioningState, PublicNetworkAccess};
use crate::models::{SystemData, Tags};
use crate::odata::{optional_eq, Predicate};

/// An object allowed to access the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccessPolicyEntry {
    /// Azure AD object ID.
    pub object_id: String,
}

/// Container registries the service may import from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAcrConfigurationInfo {
    /// Registry login servers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_servers: Option<Vec<String>>,
}

/// Token validation settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAuthenticationConfigurationInfo {
    /// Expected token audience.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    /// Token issuer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,
    /// Whether the SMART on FHIR proxy is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_proxy_enabled: Option<bool>,
}

/// CORS settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCorsConfigurationInfo {
    /// Whether credentials are allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_credentials: Option<bool>,
    /// Allowed headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,
    /// Preflight cache lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<i64>,
    /// Allowed methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<String>>,
    /// Allowed origins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origins: Option<Vec<String>>,
}

/// Cosmos DB settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCosmosDbConfigurationInfo {
    /// Customer-managed key for the backing database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_vault_key_uri: Option<String>,
    /// Provisioned throughput.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_throughput: Option<i64>,
}

/// `$export` settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceExportConfigurationInfo {
    /// The storage account exports are written to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_account_name: Option<String>,
}

/// Properties of a service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesProperties {
    /// Access policies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_policies: Option<Vec<ServiceAccessPolicyEntry>>,
    /// Registry settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acr_configuration: Option<ServiceAcrConfigurationInfo>,
    /// Token validation settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_configuration: Option<ServiceAuthenticationConfigurationInfo>,
    /// CORS settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors_configuration: Option<ServiceCorsConfigurationInfo>,
    /// Cosmos DB settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cosmos_db_configuration: Option<ServiceCosmosDbConfigurationInfo>,
    /// `$export` settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_configuration: Option<ServiceExportConfigurationInfo>,
    /// Provisioning state. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<ProvisioningState>,
    /// Whether public traffic is accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_network_access: Option<PublicNetworkAccess>,
}

/// The identity of a service. Only system assigned identities are supported.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesResourceIdentity {
    /// `None` or `SystemAssigned`.
    #[serde(rename = "type")]
    pub identity_type: ManagedServiceIdentityType,
    /// Principal of the system assigned identity. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
    /// Tenant of the system assigned identity. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

/// A Healthcare APIs service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesDescription {
    /// Entity tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Resource ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Managed identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<ServicesResourceIdentity>,
    /// FHIR flavour.
    pub kind: Kind,
    /// Azure region.
    pub location: String,
    /// Service name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Service properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<ServicesProperties>,
    /// Creation and modification metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_data: Option<SystemData>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    /// Resource type, `Microsoft.HealthcareApis/services`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

/// Filters [`ServicesDescription`]s in `list_by_resource_group_complete_matching_predicate`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServicesDescriptionOperationPredicate {
    /// Match on entity tag.
    pub etag: Option<String>,
    /// Match on resource ID.
    pub id: Option<String>,
    /// Match on location.
    pub location: Option<String>,
    /// Match on name.
    pub name: Option<String>,
    /// Match on resource type.
    pub resource_type: Option<String>,
}

impl Predicate<ServicesDescription> for ServicesDescriptionOperationPredicate {
    fn matches(&self, item: &ServicesDescription) -> bool {
        optional_eq(self.etag.as_ref(), item.etag.as_ref())
            && optional_eq(self.id.as_ref(), item.id.as_ref())
            && optional_eq(self.location.as_ref(), Some(&item.location))
            && optional_eq(self.name.as_ref(), item.name.as_ref())
            && optional_eq(self.resource_type.as_ref(), item.resource_type.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_service_kind_casing() {
        let service: ServicesDescription = serde_json::from_value(json!({
            "kind": "fhir-R4",
            "location": "westus2",
            "identity": {"type": "SystemAssigned", "principalId": "p"},
            "properties": {
                "accessPolicies": [{"objectId": "o"}],
                "corsConfiguration": {"origins": ["*"], "maxAge": 1440},
                "provisioningState": "Creating"
            }
        }))
        .unwrap();

        assert_eq!(service.kind, Kind::FhirR4);
        assert_eq!(
            service.identity.map(|i| i.identity_type),
            Some(ManagedServiceIdentityType::SystemAssigned)
        );
        let properties = service.properties.unwrap();
        assert_eq!(properties.cors_configuration.unwrap().max_age, Some(1440));
        assert_eq!(properties.provisioning_state, Some(ProvisioningState::Creating));
    }
}
