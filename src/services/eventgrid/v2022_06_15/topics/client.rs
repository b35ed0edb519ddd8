use super::id::TopicId;
use super::models::{Topic, TopicOperationPredicate, TopicSharedAccessKeys, TopicUpdateParameters};
use crate::clients::{
    ArmError, HttpMethod, Operation, OperationResponse, RequestOptions, ResourceManagerClient,
};
use crate::commonids::ResourceGroupId;
use crate::config::{ApiVersion, ArmConfig};
use crate::odata::{ListResult, Pager};
use crate::resourceids::ResourceId;

/// The API version this package targets.
pub const API_VERSION: ApiVersion = ApiVersion::from_static("2022-06-15");

const RESOURCE: &str = "Topic";

/// Options for [`TopicsClient::list_by_resource_group`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListByResourceGroupOperationOptions {
    /// An OData filter on `name`, e.g. `contains(name, 'orders')`.
    pub filter: Option<String>,
    /// Maximum number of topics per page, 1 to 100.
    pub top: Option<i64>,
}

impl From<ListByResourceGroupOperationOptions> for RequestOptions {
    fn from(options: ListByResourceGroupOperationOptions) -> Self {
        Self::new()
            .optional_query_param("$filter", options.filter)
            .optional_query_param("$top", options.top)
    }
}

/// Client for `Microsoft.EventGrid/topics`.
///
/// Writes and deletes are long-running; the `_then_poll` methods block until
/// Event Grid reports a terminal state.
///
/// # Example
///
/// ```rust,ignore
/// use azure_arm::services::eventgrid::v2022_06_15::topics::{TopicId, TopicsClient};
///
/// let client = TopicsClient::new(&config);
/// let id = TopicId::new(subscription, "example-rg", "orders");
/// client.delete_then_poll(&id).await?;
/// ```
#[derive(Debug)]
pub struct TopicsClient {
    client: ResourceManagerClient,
}

impl TopicsClient {
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

    /// Reads a topic.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::NotFound`] when the topic does not exist.
    pub async fn get(&self, id: &TopicId) -> Result<OperationResponse<Topic>, ArmError> {
        self.client
            .execute(Operation::new(HttpMethod::Get, id.id(), RESOURCE))
            .await
    }

    fn create_or_update_operation(id: &TopicId, input: &Topic) -> Result<Operation, ArmError> {
        Operation::new(HttpMethod::Put, id.id(), RESOURCE)
            .expected(&[201])
            .body(input)
    }

    /// Starts creating or replacing a topic.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn create_or_update(
        &self,
        id: &TopicId,
        input: &Topic,
    ) -> Result<OperationResponse<Topic>, ArmError> {
        self.client
            .execute(Self::create_or_update_operation(id, input)?)
            .await
    }

    /// Creates or replaces a topic and waits for provisioning to finish.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Poller`] if provisioning fails.
    pub async fn create_or_update_then_poll(
        &self,
        id: &TopicId,
        input: &Topic,
    ) -> Result<(), ArmError> {
        self.client
            .execute_then_poll(Self::create_or_update_operation(id, input)?)
            .await
    }

    /// Updates a topic and waits for the update to finish.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Poller`] if the update fails.
    pub async fn update_then_poll(
        &self,
        id: &TopicId,
        input: &TopicUpdateParameters,
    ) -> Result<(), ArmError> {
        let operation = Operation::new(HttpMethod::Patch, id.id(), RESOURCE)
            .expected(&[201])
            .body(input)?;
        self.client.execute_then_poll(operation).await
    }

    fn delete_operation(id: &TopicId) -> Operation {
        Operation::new(HttpMethod::Delete, id.id(), RESOURCE).expected(&[200, 202, 204])
    }

    /// Starts deleting a topic.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn delete(&self, id: &TopicId) -> Result<OperationResponse<()>, ArmError> {
        let response = self.client.execute_raw(Self::delete_operation(id)).await?;
        Ok(OperationResponse::without_model(response))
    }

    /// Deletes a topic and waits until it is gone.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Poller`] if the deletion fails.
    pub async fn delete_then_poll(&self, id: &TopicId) -> Result<(), ArmError> {
        self.client
            .execute_then_poll(Self::delete_operation(id))
            .await
    }

    /// Pages through the topics in a resource group.
    #[must_use]
    pub fn list_by_resource_group(
        &self,
        id: &ResourceGroupId,
        options: ListByResourceGroupOperationOptions,
    ) -> Pager<'_, Topic> {
        self.client.list(
            Operation::new(
                HttpMethod::Get,
                format!("{}/providers/Microsoft.EventGrid/topics", id.id()),
                RESOURCE,
            )
            .options(options.into()),
        )
    }

    /// Collects the topics in a resource group.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if any page fails.
    pub async fn list_by_resource_group_complete(
        &self,
        id: &ResourceGroupId,
        options: ListByResourceGroupOperationOptions,
    ) -> Result<ListResult<Topic>, ArmError> {
        self.list_by_resource_group(id, options).collect_all().await
    }

    /// Collects the topics in a resource group that match `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if any page fails.
    pub async fn list_by_resource_group_complete_matching_predicate(
        &self,
        id: &ResourceGroupId,
        options: ListByResourceGroupOperationOptions,
        predicate: TopicOperationPredicate,
    ) -> Result<ListResult<Topic>, ArmError> {
        self.list_by_resource_group(id, options)
            .collect_matching(predicate)
            .await
    }

    /// Returns the shared access keys used to publish events.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError`] if the request fails.
    pub async fn list_shared_access_keys(
        &self,
        id: &TopicId,
    ) -> Result<OperationResponse<TopicSharedAccessKeys>, ArmError> {
        self.client
            .execute(Operation::new(
                HttpMethod::Post,
                format!("{}/listKeys", id.id()),
                RESOURCE,
            ))
            .await
    }
}
