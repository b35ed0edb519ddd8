use super::id::ServiceId;
use super::models::{ServicesDescription, ServicesDescriptionOperationPredicate};
use crate::clients::{ArmError, HttpMethod, Operation, OperationResponse, ResourceManagerClient};
use crate::commonids::ResourceGroupId;
use crate::config::{ApiVersion, ArmConfig};
use crate::odata::{ListResult, Pager};
use crate::resourceids::ResourceId;

/// The API version this package targets.
pub const API_VERSION: ApiVersion = ApiVersion::from_static("2022-12-01");

const RESOURCE: &str = "Service";

/// Client for `Microsoft.HealthcareApis/services`.
#[derive(Debug)]
pub struct ServicesClient {
    client: ResourceManagerClient,
}

impl ServicesClient {
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

    /// Reads a service.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::NotFound`] when the service does not exist.
    pub async fn get(&self, id: &ServiceId) -> Result<OperationResponse<ServicesDescription>, ArmError> {
        self.client
            .execute(Operation::new(HttpMethod::Get, id.id(), RESOURCE))
            .await
    }

    fn create_or_update_operation(
        id: &ServiceId,
        input: &ServicesDescription,
    ) -> Result<Operation, ArmError> {
        Operation::new(HttpMethod::Put, id.id(), RESOURCE)
            .expected(&[200, 201])
            .body(input)
    }

    /// Starts creating or replacing a service.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn create_or_update(
        &self,
        id: &ServiceId,
        input: &ServicesDescription,
    ) -> Result<OperationResponse<ServicesDescription>, ArmError> {
        self.client
            .execute(Self::create_or_update_operation(id, input)?)
            .await
    }

    /// Creates or replaces a service and waits for provisioning to finish.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Poller`] if provisioning fails.
    pub async fn create_or_update_then_poll(
        &self,
        id: &ServiceId,
        input: &ServicesDescription,
    ) -> Result<(), ArmError> {
        self.client
            .execute_then_poll(Self::create_or_update_operation(id, input)?)
            .await
    }

    fn delete_operation(id: &ServiceId) -> Operation {
        Operation::new(HttpMethod::Delete, id.id(), RESOURCE).expected(&[202, 204])
    }

    /// Starts deleting a service.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn delete(&self, id: &ServiceId) -> Result<OperationResponse<()>, ArmError> {
        let response = self.client.execute_raw(Self::delete_operation(id)).await?;
        Ok(OperationResponse::without_model(response))
    }

    /// Deletes a service and waits until it is gone.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Poller`] if the deletion fails.
    pub async fn delete_then_poll(&self, id: &ServiceId) -> Result<(), ArmError> {
        self.client
            .execute_then_poll(Self::delete_operation(id))
            .await
    }

    /// Pages through the services in a resource group.
    #[must_use]
    pub fn list_by_resource_group(&self, id: &ResourceGroupId) -> Pager<'_, ServicesDescription> {
        self.client.list(Operation::new(
            HttpMethod::Get,
            format!("{}/providers/Microsoft.HealthcareApis/services", id.id()),
            RESOURCE,
        ))
    }

    /// Collects the services in a resource group.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if any page fails.
    pub async fn list_by_resource_group_complete(
        &self,
        id: &ResourceGroupId,
    ) -> Result<ListResult<ServicesDescription>, ArmError> {
        self.list_by_resource_group(id).collect_all().await
    }

    /// Collects the services in a resource group that match `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if any page fails.
    pub async fn list_by_resource_group_complete_matching_predicate(
        &self,
        id: &ResourceGroupId,
        predicate: ServicesDescriptionOperationPredicate,
    ) -> Result<ListResult<ServicesDescription>, ArmError> {
        self.list_by_resource_group(id)
            .collect_matching(predicate)
            .await
    }
}
