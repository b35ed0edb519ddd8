use super::constants::InstanceViewTypes;
use super::models::{
    VirtualMachine, VirtualMachineInstanceView, VirtualMachineOperationPredicate,
    VirtualMachineSizeListResult, VirtualMachineUpdate,
};
use crate::clients::{
    ArmError, HttpMethod, Operation, OperationResponse, RequestOptions, ResourceManagerClient,
};
use crate::commonids::{ResourceGroupId, SubscriptionId, VirtualMachineId};
use crate::config::{ApiVersion, ArmConfig};
use crate::odata::{ListResult, Pager};
use crate::resourceids::ResourceId;

/// The API version this package targets.
pub const API_VERSION: ApiVersion = ApiVersion::from_static("2021-11-01");

const RESOURCE: &str = "Virtual Machine";

/// Options for [`VirtualMachinesClient::get`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GetOperationOptions {
    /// Extra data to return.
    pub expand: Option<InstanceViewTypes>,
}

impl From<GetOperationOptions> for RequestOptions {
    fn from(options: GetOperationOptions) -> Self {
        Self::new().optional_query_param("$expand", options.expand)
    }
}

/// Options for [`VirtualMachinesClient::delete`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteOperationOptions {
    /// Skip the guest shutdown. Preview in this API version.
    pub force_deletion: Option<bool>,
}

impl From<DeleteOperationOptions> for RequestOptions {
    fn from(options: DeleteOperationOptions) -> Self {
        Self::new().optional_query_param("forceDeletion", options.force_deletion)
    }
}

/// Options for [`VirtualMachinesClient::power_off`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PowerOffOperationOptions {
    /// Cut power without a graceful guest shutdown.
    pub skip_shutdown: Option<bool>,
}

impl From<PowerOffOperationOptions> for RequestOptions {
    fn from(options: PowerOffOperationOptions) -> Self {
        Self::new().optional_query_param("skipShutdown", options.skip_shutdown)
    }
}

/// Options for [`VirtualMachinesClient::list_all`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListAllOperationOptions {
    /// An OData filter, e.g. `virtualMachineScaleSet/id eq '...'`.
    pub filter: Option<String>,
    /// Return only the runtime status of each machine.
    pub status_only: Option<bool>,
}

impl From<ListAllOperationOptions> for RequestOptions {
    fn from(options: ListAllOperationOptions) -> Self {
        Self::new()
            .optional_query_param("$filter", options.filter)
            .optional_query_param("statusOnly", options.status_only)
    }
}

/// Client for `Microsoft.Compute/virtualMachines`.
///
/// Writes, deletes and power actions are long-running; the `_then_poll`
/// methods block until Compute reports a terminal state.
///
/// # Example
///
/// ```rust,ignore
/// use azure_arm::commonids::VirtualMachineId;
/// use azure_arm::services::compute::v2021_11_01::virtual_machines::{
///     GetOperationOptions, InstanceViewTypes, VirtualMachinesClient,
/// };
///
/// let client = VirtualMachinesClient::new(&config);
/// let id = VirtualMachineId::new(subscription, "example-rg", "web-0");
/// let options = GetOperationOptions {
///     expand: Some(InstanceViewTypes::InstanceView),
/// };
/// let vm = client.get(&id, options).await?.model;
/// ```
#[derive(Debug)]
pub struct VirtualMachinesClient {
    client: ResourceManagerClient,
}

impl VirtualMachinesClient {
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

    /// Reads a virtual machine.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::NotFound`] when the machine does not exist.
    pub async fn get(
        &self,
        id: &VirtualMachineId,
        options: GetOperationOptions,
    ) -> Result<OperationResponse<VirtualMachine>, ArmError> {
        self.client
            .execute(Operation::new(HttpMethod::Get, id.id(), RESOURCE).options(options.into()))
            .await
    }

    fn create_or_update_operation(
        id: &VirtualMachineId,
        input: &VirtualMachine,
    ) -> Result<Operation, ArmError> {
        Operation::new(HttpMethod::Put, id.id(), RESOURCE)
            .expected(&[200, 201])
            .body(input)
    }

    /// Starts creating or replacing a virtual machine.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn create_or_update(
        &self,
        id: &VirtualMachineId,
        input: &VirtualMachine,
    ) -> Result<OperationResponse<VirtualMachine>, ArmError> {
        self.client
            .execute(Self::create_or_update_operation(id, input)?)
            .await
    }

    /// Creates or replaces a virtual machine and waits for provisioning to finish.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Poller`] if provisioning fails.
    pub async fn create_or_update_then_poll(
        &self,
        id: &VirtualMachineId,
        input: &VirtualMachine,
    ) -> Result<(), ArmError> {
        self.client
            .execute_then_poll(Self::create_or_update_operation(id, input)?)
            .await
    }

    fn update_operation(
        id: &VirtualMachineId,
        input: &VirtualMachineUpdate,
    ) -> Result<Operation, ArmError> {
        Operation::new(HttpMethod::Patch, id.id(), RESOURCE)
            .expected(&[200])
            .body(input)
    }

    /// Starts updating a virtual machine.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn update(
        &self,
        id: &VirtualMachineId,
        input: &VirtualMachineUpdate,
    ) -> Result<OperationResponse<VirtualMachine>, ArmError> {
        self.client.execute(Self::update_operation(id, input)?).await
    }

    /// Updates a virtual machine and waits for the update to finish.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Poller`] if the update fails.
    pub async fn update_then_poll(
        &self,
        id: &VirtualMachineId,
        input: &VirtualMachineUpdate,
    ) -> Result<(), ArmError> {
        self.client
            .execute_then_poll(Self::update_operation(id, input)?)
            .await
    }

    fn delete_operation(id: &VirtualMachineId, options: DeleteOperationOptions) -> Operation {
        Operation::new(HttpMethod::Delete, id.id(), RESOURCE)
            .expected(&[200, 202, 204])
            .options(options.into())
    }

    /// Starts deleting a virtual machine.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn delete(
        &self,
        id: &VirtualMachineId,
        options: DeleteOperationOptions,
    ) -> Result<OperationResponse<()>, ArmError> {
        let response = self
            .client
            .execute_raw(Self::delete_operation(id, options))
            .await?;
        Ok(OperationResponse::without_model(response))
    }

    /// Deletes a virtual machine and waits until it is gone.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Poller`] if the deletion fails.
    pub async fn delete_then_poll(
        &self,
        id: &VirtualMachineId,
        options: DeleteOperationOptions,
    ) -> Result<(), ArmError> {
        self.client
            .execute_then_poll(Self::delete_operation(id, options))
            .await
    }

    /// Reads the runtime state of a virtual machine.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn instance_view(
        &self,
        id: &VirtualMachineId,
    ) -> Result<OperationResponse<VirtualMachineInstanceView>, ArmError> {
        self.client
            .execute(Operation::new(
                HttpMethod::Get,
                format!("{}/instanceView", id.id()),
                RESOURCE,
            ))
            .await
    }

    /// Lists the sizes a virtual machine can be resized to.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn list_available_sizes(
        &self,
        id: &VirtualMachineId,
    ) -> Result<OperationResponse<VirtualMachineSizeListResult>, ArmError> {
        self.client
            .execute(Operation::new(
                HttpMethod::Get,
                format!("{}/vmSizes", id.id()),
                RESOURCE,
            ))
            .await
    }

    fn action_operation(id: &VirtualMachineId, action: &str) -> Operation {
        Operation::new(HttpMethod::Post, format!("{}/{action}", id.id()), RESOURCE)
            .expected(&[200, 202])
    }

    fn power_off_operation(id: &VirtualMachineId, options: PowerOffOperationOptions) -> Operation {
        Self::action_operation(id, "powerOff").options(options.into())
    }

    /// Starts powering off a virtual machine. The machine stays allocated and billed.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn power_off(
        &self,
        id: &VirtualMachineId,
        options: PowerOffOperationOptions,
    ) -> Result<OperationResponse<()>, ArmError> {
        let response = self
            .client
            .execute_raw(Self::power_off_operation(id, options))
            .await?;
        Ok(OperationResponse::without_model(response))
    }

    /// Powers off a virtual machine and waits until it has stopped.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Poller`] if the action fails.
    pub async fn power_off_then_poll(
        &self,
        id: &VirtualMachineId,
        options: PowerOffOperationOptions,
    ) -> Result<(), ArmError> {
        self.client
            .execute_then_poll(Self::power_off_operation(id, options))
            .await
    }

    /// Starts deallocating a virtual machine, releasing its compute resources.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn deallocate(
        &self,
        id: &VirtualMachineId,
    ) -> Result<OperationResponse<()>, ArmError> {
        let response = self
            .client
            .execute_raw(Self::action_operation(id, "deallocate"))
            .await?;
        Ok(OperationResponse::without_model(response))
    }

    /// Deallocates a virtual machine and waits until it is deallocated.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Poller`] if the action fails.
    pub async fn deallocate_then_poll(&self, id: &VirtualMachineId) -> Result<(), ArmError> {
        self.client
            .execute_then_poll(Self::action_operation(id, "deallocate"))
            .await
    }

    /// Starts a stopped or deallocated virtual machine.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn start(&self, id: &VirtualMachineId) -> Result<OperationResponse<()>, ArmError> {
        let response = self
            .client
            .execute_raw(Self::action_operation(id, "start"))
            .await?;
        Ok(OperationResponse::without_model(response))
    }

    /// Starts a virtual machine and waits until it is running.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Poller`] if the action fails.
    pub async fn start_then_poll(&self, id: &VirtualMachineId) -> Result<(), ArmError> {
        self.client
            .execute_then_poll(Self::action_operation(id, "start"))
            .await
    }

    /// Pages through the virtual machines in a resource group.
    #[must_use]
    pub fn list(&self, id: &ResourceGroupId) -> Pager<'_, VirtualMachine> {
        self.client.list(Operation::new(
            HttpMethod::Get,
            format!("{}/providers/Microsoft.Compute/virtualMachines", id.id()),
            RESOURCE,
        ))
    }

    /// Collects the virtual machines in a resource group.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if any page fails.
    pub async fn list_complete(
        &self,
        id: &ResourceGroupId,
    ) -> Result<ListResult<VirtualMachine>, ArmError> {
        self.list(id).collect_all().await
    }

    /// Collects the virtual machines in a resource group that match `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if any page fails.
    pub async fn list_complete_matching_predicate(
        &self,
        id: &ResourceGroupId,
        predicate: VirtualMachineOperationPredicate,
    ) -> Result<ListResult<VirtualMachine>, ArmError> {
        self.list(id).collect_matching(predicate).await
    }

    /// Pages through every virtual machine in a subscription.
    #[must_use]
    pub fn list_all(
        &self,
        id: &SubscriptionId,
        options: ListAllOperationOptions,
    ) -> Pager<'_, VirtualMachine> {
        self.client.list(
            Operation::new(
                HttpMethod::Get,
                format!("{}/providers/Microsoft.Compute/virtualMachines", id.id()),
                RESOURCE,
            )
            .options(options.into()),
        )
    }

    /// Collects every virtual machine in a subscription.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if any page fails.
    pub async fn list_all_complete(
        &self,
        id: &SubscriptionId,
        options: ListAllOperationOptions,
    ) -> Result<ListResult<VirtualMachine>, ArmError> {
        self.list_all(id, options).collect_all().await
    }
}
