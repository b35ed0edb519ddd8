use crate::resourceids::{impl_resource_id_traits, ParseResult, ResourceId, ResourceIdError, Segment};

/// A Resource Group ID: `/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceGroupId {
    /// The subscription the resource group lives in.
    pub subscription_id: String,
    /// The resource group name.
    pub resource_group_name: String,
}

impl ResourceGroupId {
    /// Creates a Resource Group ID.
    #[must_use]
    pub fn new(subscription_id: impl Into<String>, resource_group_name: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
        }
    }
}

impl ResourceId for ResourceGroupId {
    const DISPLAY_NAME: &'static str = "Resource Group";

    fn segments() -> &'static [Segment] {
        const SEGMENTS: &[Segment] = &[
            Segment::static_value("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
            Segment::static_value("staticResourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName"),
        ];
        SEGMENTS
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self, ResourceIdError> {
        Ok(Self {
            subscription_id: result.require("subscriptionId")?,
            resource_group_name: result.require("resourceGroupName")?,
        })
    }

    fn id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}",
            self.subscription_id, self.resource_group_name
        )
    }

    fn components(&self) -> Vec<String> {
        vec![
            format!("Subscription: {:?}", self.subscription_id),
            format!("Resource Group Name: {:?}", self.resource_group_name),
        ]
    }
}

impl_resource_id_traits!(ResourceGroupId);
