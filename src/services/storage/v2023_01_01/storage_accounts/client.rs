use super::constants::{ListKeyExpand, StorageAccountExpand};
use super::models::{
    CheckNameAvailabilityResult, StorageAccount, StorageAccountCheckNameAvailabilityParameters,
    StorageAccountCreateParameters, StorageAccountListKeysResult,
    StorageAccountOperationPredicate, StorageAccountRegenerateKeyParameters,
    StorageAccountUpdateParameters,
};
use crate::clients::{
    ArmError, HttpMethod, Operation, OperationResponse, RequestOptions, ResourceManagerClient,
};
use crate::commonids::{ResourceGroupId, StorageAccountId, SubscriptionId};
use crate::config::{ApiVersion, ArmConfig};
use crate::odata::{ListResult, Pager};
use crate::resourceids::ResourceId;

/// The API version this package targets.
pub const API_VERSION: ApiVersion = ApiVersion::from_static("2023-01-01");

const RESOURCE: &str = "Storage Account";

/// Options for [`StorageAccountsClient::get_properties`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GetPropertiesOperationOptions {
    /// Extra properties to return.
    pub expand: Option<StorageAccountExpand>,
}

impl From<GetPropertiesOperationOptions> for RequestOptions {
    fn from(options: GetPropertiesOperationOptions) -> Self {
        Self::new().optional_query_param("$expand", options.expand)
    }
}

/// Options for [`StorageAccountsClient::list_keys`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListKeysOperationOptions {
    /// Extra keys to return.
    pub expand: Option<ListKeyExpand>,
}

impl From<ListKeysOperationOptions> for RequestOptions {
    fn from(options: ListKeysOperationOptions) -> Self {
        Self::new().optional_query_param("$expand", options.expand)
    }
}

/// Client for `Microsoft.Storage/storageAccounts`.
///
/// # Example
///
/// ```rust,ignore
/// use azure_arm::commonids::StorageAccountId;
/// use azure_arm::services::storage::v2023_01_01::storage_accounts::StorageAccountsClient;
///
/// let client = StorageAccountsClient::new(&config);
/// let id = StorageAccountId::new(subscription, "example-rg", "examplesa");
///
/// match client.get_properties(&id, Default::default()).await {
///     Ok(response) => println!("{:?}", response.model),
///     Err(e) if e.is_not_found() => println!("{id} does not exist"),
///     Err(e) => return Err(e.into()),
/// }
/// ```
#[derive(Debug)]
pub struct StorageAccountsClient {
    client: ResourceManagerClient,
}

impl StorageAccountsClient {
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

    /// Reads a storage account.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::NotFound`] when the account does not exist.
    pub async fn get_properties(
        &self,
        id: &StorageAccountId,
        options: GetPropertiesOperationOptions,
    ) -> Result<OperationResponse<StorageAccount>, ArmError> {
        self.client
            .execute(Operation::new(HttpMethod::Get, id.id(), RESOURCE).options(options.into()))
            .await
    }

    fn create_operation(
        id: &StorageAccountId,
        input: &StorageAccountCreateParameters,
    ) -> Result<Operation, ArmError> {
        Operation::new(HttpMethod::Put, id.id(), RESOURCE)
            .expected(&[200, 202])
            .body(input)
    }

    /// Starts creating a storage account. A `202` response has no model.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn create(
        &self,
        id: &StorageAccountId,
        input: &StorageAccountCreateParameters,
    ) -> Result<OperationResponse<StorageAccount>, ArmError> {
        self.client.execute(Self::create_operation(id, input)?).await
    }

    /// Creates a storage account and waits for provisioning to finish.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Poller`] if provisioning fails.
    pub async fn create_then_poll(
        &self,
        id: &StorageAccountId,
        input: &StorageAccountCreateParameters,
    ) -> Result<(), ArmError> {
        self.client
            .execute_then_poll(Self::create_operation(id, input)?)
            .await
    }

    /// Updates a storage account.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn update(
        &self,
        id: &StorageAccountId,
        input: &StorageAccountUpdateParameters,
    ) -> Result<OperationResponse<StorageAccount>, ArmError> {
        let operation = Operation::new(HttpMethod::Patch, id.id(), RESOURCE).body(input)?;
        self.client.execute(operation).await
    }

    /// Deletes a storage account.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails. A missing account is
    /// answered with `204` rather than an error.
    pub async fn delete(&self, id: &StorageAccountId) -> Result<OperationResponse<()>, ArmError> {
        let response = self
            .client
            .execute_raw(Operation::new(HttpMethod::Delete, id.id(), RESOURCE).expected(&[200, 204]))
            .await?;
        Ok(OperationResponse::without_model(response))
    }

    /// Pages through every storage account in a subscription.
    #[must_use]
    pub fn list(&self, id: &SubscriptionId) -> Pager<'_, StorageAccount> {
        self.client.list(Operation::new(
            HttpMethod::Get,
            format!("{}/providers/Microsoft.Storage/storageAccounts", id.id()),
            RESOURCE,
        ))
    }

    /// Collects every storage account in a subscription.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if any page fails.
    pub async fn list_complete(
        &self,
        id: &SubscriptionId,
    ) -> Result<ListResult<StorageAccount>, ArmError> {
        self.list(id).collect_all().await
    }

    /// Collects the storage accounts in a subscription that match `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if any page fails.
    pub async fn list_complete_matching_predicate(
        &self,
        id: &SubscriptionId,
        predicate: StorageAccountOperationPredicate,
    ) -> Result<ListResult<StorageAccount>, ArmError> {
        self.list(id).collect_matching(predicate).await
    }

    /// Pages through the storage accounts in a resource group.
    #[must_use]
    pub fn list_by_resource_group(&self, id: &ResourceGroupId) -> Pager<'_, StorageAccount> {
        self.client.list(Operation::new(
            HttpMethod::Get,
            format!("{}/providers/Microsoft.Storage/storageAccounts", id.id()),
            RESOURCE,
        ))
    }

    /// Collects the storage accounts in a resource group.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if any page fails.
    pub async fn list_by_resource_group_complete(
        &self,
        id: &ResourceGroupId,
    ) -> Result<ListResult<StorageAccount>, ArmError> {
        self.list_by_resource_group(id).collect_all().await
    }

    /// Collects the storage accounts in a resource group that match `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if any page fails.
    pub async fn list_by_resource_group_complete_matching_predicate(
        &self,
        id: &ResourceGroupId,
        predicate: StorageAccountOperationPredicate,
    ) -> Result<ListResult<StorageAccount>, ArmError> {
        self.list_by_resource_group(id)
            .collect_matching(predicate)
            .await
    }

    /// Lists the access keys of a storage account.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn list_keys(
        &self,
        id: &StorageAccountId,
        options: ListKeysOperationOptions,
    ) -> Result<OperationResponse<StorageAccountListKeysResult>, ArmError> {
        self.client
            .execute(
                Operation::new(HttpMethod::Post, format!("{}/listKeys", id.id()), RESOURCE)
                    .options(options.into()),
            )
            .await
    }

    /// Regenerates one access key and returns the new set.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn regenerate_key(
        &self,
        id: &StorageAccountId,
        input: &StorageAccountRegenerateKeyParameters,
    ) -> Result<OperationResponse<StorageAccountListKeysResult>, ArmError> {
        let operation =
            Operation::new(HttpMethod::Post, format!("{}/regenerateKey", id.id()), RESOURCE)
                .body(input)?;
        self.client.execute(operation).await
    }

    /// Checks whether a storage account name is free.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn check_name_availability(
        &self,
        id: &SubscriptionId,
        input: &StorageAccountCheckNameAvailabilityParameters,
    ) -> Result<OperationResponse<CheckNameAvailabilityResult>, ArmError> {
        let operation = Operation::new(
            HttpMethod::Post,
            format!("{}/providers/Microsoft.Storage/checkNameAvailability", id.id()),
            RESOURCE,
        )
        .body(input)?;
        self.client.execute(operation).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::v2023_01_01::storage_accounts::{Kind, Sku, SkuName};

    #[test]
    fn test_get_properties_options() {
        let options: RequestOptions = GetPropertiesOperationOptions {
            expand: Some(StorageAccountExpand::GeoReplicationStats),
        }
        .into();
        assert_eq!(
            options.query.get("$expand").map(String::as_str),
            Some("geoReplicationStats")
        );

        let empty: RequestOptions = GetPropertiesOperationOptions::default().into();
        assert!(empty.query.is_empty());
    }

    #[test]
    fn test_list_keys_options() {
        let options: RequestOptions = ListKeysOperationOptions {
            expand: Some(ListKeyExpand::Kerb),
        }
        .into();
        assert_eq!(options.query.get("$expand").map(String::as_str), Some("kerb"));
    }

    #[test]
    fn test_create_operation_expects_accepted() {
        let id = StorageAccountId::new("1", "rg", "sa");
        let input = StorageAccountCreateParameters {
            identity: None,
            kind: Kind::StorageV2,
            location: "westeurope".to_string(),
            properties: None,
            sku: Sku::new(SkuName::StandardLrs),
            tags: None,
        };

        let operation = StorageAccountsClient::create_operation(&id, &input).unwrap();
        assert_eq!(operation.expected_status_codes(), &[200, 202]);
        assert_eq!(operation.path(), id.id());
        assert_eq!(operation.method(), HttpMethod::Put);
    }

    #[test]
    fn test_api_version() {
        assert_eq!(API_VERSION.as_str(), "2023-01-01");
    }
}
