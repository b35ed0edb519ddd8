use super::id::FluidRelayServerId;
use super::models::{
    FluidRelayServer, FluidRelayServerKeys, FluidRelayServerOperationPredicate,
    FluidRelayServerUpdate, RegenerateKeyRequest,
};
use crate::clients::{ArmError, HttpMethod, Operation, OperationResponse, ResourceManagerClient};
use crate::commonids::ResourceGroupId;
use crate::config::{ApiVersion, ArmConfig};
use crate::odata::{ListResult, Pager};
use crate::resourceids::ResourceId;

/// The API version this package targets.
pub const API_VERSION: ApiVersion = ApiVersion::from_static("2022-05-26");

const RESOURCE: &str = "Fluid Relay Server";

/// Client for `Microsoft.FluidRelay/fluidRelayServers`.
///
/// Every write completes synchronously, so there are no `_then_poll` variants.
#[derive(Debug)]
pub struct FluidRelayServersClient {
    client: ResourceManagerClient,
}

impl FluidRelayServersClient {
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

    /// Reads a server.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::NotFound`] when the server does not exist.
    pub async fn get(
        &self,
        id: &FluidRelayServerId,
    ) -> Result<OperationResponse<FluidRelayServer>, ArmError> {
        self.client
            .execute(Operation::new(HttpMethod::Get, id.id(), RESOURCE))
            .await
    }

    /// Creates or replaces a server.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn create_or_update(
        &self,
        id: &FluidRelayServerId,
        input: &FluidRelayServer,
    ) -> Result<OperationResponse<FluidRelayServer>, ArmError> {
        let operation = Operation::new(HttpMethod::Put, id.id(), RESOURCE).body(input)?;
        self.client.execute(operation).await
    }

    /// Updates a server.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn update(
        &self,
        id: &FluidRelayServerId,
        input: &FluidRelayServerUpdate,
    ) -> Result<OperationResponse<FluidRelayServer>, ArmError> {
        let operation = Operation::new(HttpMethod::Patch, id.id(), RESOURCE).body(input)?;
        self.client.execute(operation).await
    }

    /// Deletes a server.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn delete(&self, id: &FluidRelayServerId) -> Result<OperationResponse<()>, ArmError> {
        let response = self
            .client
            .execute_raw(Operation::new(HttpMethod::Delete, id.id(), RESOURCE).expected(&[200, 204]))
            .await?;
        Ok(OperationResponse::without_model(response))
    }

    /// Pages through the servers in a resource group.
    #[must_use]
    pub fn list_by_resource_group(&self, id: &ResourceGroupId) -> Pager<'_, FluidRelayServer> {
        self.client.list(Operation::new(
            HttpMethod::Get,
            format!("{}/providers/Microsoft.FluidRelay/fluidRelayServers", id.id()),
            RESOURCE,
        ))
    }

    /// Collects the servers in a resource group.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if any page fails.
    pub async fn list_by_resource_group_complete(
        &self,
        id: &ResourceGroupId,
    ) -> Result<ListResult<FluidRelayServer>, ArmError> {
        self.list_by_resource_group(id).collect_all().await
    }

    /// Collects the servers in a resource group that match `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if any page fails.
    pub async fn list_by_resource_group_complete_matching_predicate(
        &self,
        id: &ResourceGroupId,
        predicate: FluidRelayServerOperationPredicate,
    ) -> Result<ListResult<FluidRelayServer>, ArmError> {
        self.list_by_resource_group(id)
            .collect_matching(predicate)
            .await
    }

    /// Returns both keys of a server.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn list_keys(
        &self,
        id: &FluidRelayServerId,
    ) -> Result<OperationResponse<FluidRelayServerKeys>, ArmError> {
        self.client
            .execute(Operation::new(
                HttpMethod::Post,
                format!("{}/listKeys", id.id()),
                RESOURCE,
            ))
            .await
    }

    /// Regenerates one key and returns both.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn regenerate_key(
        &self,
        id: &FluidRelayServerId,
        input: &RegenerateKeyRequest,
    ) -> Result<OperationResponse<FluidRelayServerKeys>, ArmError> {
        let operation =
            Operation::new(HttpMethod::Post, format!("{}/regenerateKey", id.id()), RESOURCE)
                .body(input)?;
        self.client.execute(operation).await
    }
}
