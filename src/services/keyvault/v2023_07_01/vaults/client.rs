use super::models::{
    CheckNameAvailabilityResult, Vault, VaultCheckNameAvailabilityParameters,
    VaultCreateOrUpdateParameters, VaultOperationPredicate, VaultPatchParameters,
};
use crate::clients::{
    ArmError, HttpMethod, Operation, OperationResponse, RequestOptions, ResourceManagerClient,
};
use crate::commonids::{KeyVaultId, ResourceGroupId, SubscriptionId};
use crate::config::{ApiVersion, ArmConfig};
use crate::odata::{ListResult, Pager};
use crate::resourceids::ResourceId;

/// The API version this package targets.
pub const API_VERSION: ApiVersion = ApiVersion::from_static("2023-07-01");

const RESOURCE: &str = "Key Vault";

/// Options for [`VaultsClient::list_by_resource_group`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListByResourceGroupOperationOptions {
    /// Maximum number of vaults per page.
    pub top: Option<i64>,
}

impl From<ListByResourceGroupOperationOptions> for RequestOptions {
    fn from(options: ListByResourceGroupOperationOptions) -> Self {
        Self::new().optional_query_param("$top", options.top)
    }
}

/// Client for `Microsoft.KeyVault/vaults`.
#[derive(Debug)]
pub struct VaultsClient {
    client: ResourceManagerClient,
}

impl VaultsClient {
    /// Creates a client for [`API_VERSION`].
    #[must_use]
    pub fn new(config: &ArmConfig) -> Self {
        Self {
            client: ResourceManagerClient::new(config, API_VERSION),
        }
    }

    /// Creates a client that sends `version` instead of [`API_VERSION`].
    #[must_use]
    pub fn with_api_version(config: &ArmConfig, version: ApiVersion) -> Self {
        Self {
            client: ResourceManagerClient::with_api_version(config, &API_VERSION, version),
        }
    }

    /// Returns the underlying Resource Manager client.
    #[must_use]
    pub const fn client(&self) -> &ResourceManagerClient {
        &self.client
    }

    /// Reads a vault.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::NotFound`] when the vault does not exist.
    pub async fn get(&self, id: &KeyVaultId) -> Result<OperationResponse<Vault>, ArmError> {
        self.client
            .execute(Operation::new(HttpMethod::Get, id.id(), RESOURCE))
            .await
    }

    fn create_or_update_operation(
        id: &KeyVaultId,
        input: &VaultCreateOrUpdateParameters,
    ) -> Result<Operation, ArmError> {
        Operation::new(HttpMethod::Put, id.id(), RESOURCE)
            .expected(&[200, 201])
            .body(input)
    }

    /// Creates or replaces a vault.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn create_or_update(
        &self,
        id: &KeyVaultId,
        input: &VaultCreateOrUpdateParameters,
    ) -> Result<OperationResponse<Vault>, ArmError> {
        self.client
            .execute(Self::create_or_update_operation(id, input)?)
            .await
    }

    /// Creates or replaces a vault and waits until its DNS name is registered.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Poller`] if provisioning fails.
    pub async fn create_or_update_then_poll(
        &self,
        id: &KeyVaultId,
        input: &VaultCreateOrUpdateParameters,
    ) -> Result<(), ArmError> {
        self.client
            .execute_then_poll(Self::create_or_update_operation(id, input)?)
            .await
    }

    /// Updates selected properties of a vault.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn update(
        &self,
        id: &KeyVaultId,
        input: &VaultPatchParameters,
    ) -> Result<OperationResponse<Vault>, ArmError> {
        let operation = Operation::new(HttpMethod::Patch, id.id(), RESOURCE)
            .expected(&[200, 201])
            .body(input)?;
        self.client.execute(operation).await
    }

    /// Deletes a vault. With soft delete on, the vault can still be recovered.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn delete(&self, id: &KeyVaultId) -> Result<OperationResponse<()>, ArmError> {
        let response = self
            .client
            .execute_raw(Operation::new(HttpMethod::Delete, id.id(), RESOURCE).expected(&[200, 204]))
            .await?;
        Ok(OperationResponse::without_model(response))
    }

    /// Pages through the vaults in a resource group.
    #[must_use]
    pub fn list_by_resource_group(
        &self,
        id: &ResourceGroupId,
        options: ListByResourceGroupOperationOptions,
    ) -> Pager<'_, Vault> {
        self.client.list(
            Operation::new(
                HttpMethod::Get,
                format!("{}/providers/Microsoft.KeyVault/vaults", id.id()),
                RESOURCE,
            )
            .options(options.into()),
        )
    }

    /// Collects the vaults in a resource group.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if any page fails.
    pub async fn list_by_resource_group_complete(
        &self,
        id: &ResourceGroupId,
        options: ListByResourceGroupOperationOptions,
    ) -> Result<ListResult<Vault>, ArmError> {
        self.list_by_resource_group(id, options).collect_all().await
    }

    /// Collects the vaults in a resource group that match `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if any page fails.
    pub async fn list_by_resource_group_complete_matching_predicate(
        &self,
        id: &ResourceGroupId,
        options: ListByResourceGroupOperationOptions,
        predicate: VaultOperationPredicate,
    ) -> Result<ListResult<Vault>, ArmError> {
        self.list_by_resource_group(id, options)
            .collect_matching(predicate)
            .await
    }

    /// Checks whether a vault name is free.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn check_name_availability(
        &self,
        id: &SubscriptionId,
        input: &VaultCheckNameAvailabilityParameters,
    ) -> Result<OperationResponse<CheckNameAvailabilityResult>, ArmError> {
        let operation = Operation::new(
            HttpMethod::Post,
            format!("{}/providers/Microsoft.KeyVault/checkNameAvailability", id.id()),
            RESOURCE,
        )
        .body(input)?;
        self.client.execute(operation).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_options_set_top() {
        let options: RequestOptions = ListByResourceGroupOperationOptions { top: Some(5) }.into();
        assert_eq!(options.query.get("$top").map(String::as_str), Some("5"));
    }

    #[test]
    fn test_check_name_availability_body() {
        let input = VaultCheckNameAvailabilityParameters::new("my-vault");
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({"name": "my-vault", "type": "Microsoft.KeyVault/vaults"})
        );
    }
}
