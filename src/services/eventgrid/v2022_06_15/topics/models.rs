use serde::{Deserialize, Serialize};

use super::constants::{
    DataResidencyBoundary, InputSchema, InputSchemaMappingType, IpActionType,
    PublicNetworkAccess, TopicProvisioningState,
};
use crate::models::{ManagedServiceIdentity, SystemData, Tags};
use crate::odata::{optional_eq, Predicate};

/// An inbound IP rule.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundIpRule {
    /// The action taken for matching traffic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<IpActionType>,
    /// An IPv4 address or CIDR range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_mask: Option<String>,
}

/// A field mapped from the payload, with a default when it is absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonFieldWithDefault {
    /// Value used when the payload has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Source field in the payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_field: Option<String>,
}

/// A field mapped from the payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonField {
    /// Source field in the payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_field: Option<String>,
}

/// How a custom schema maps onto the Event Grid schema.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonInputSchemaMappingProperties {
    /// Data version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_version: Option<JsonFieldWithDefault>,
    /// Event time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_time: Option<JsonField>,
    /// Event type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<JsonFieldWithDefault>,
    /// Event ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonField>,
    /// Subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<JsonFieldWithDefault>,
    /// Topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<JsonField>,
}

/// An input schema mapping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSchemaMapping {
    /// Always `Json` in this API version.
    pub input_schema_mapping_type: InputSchemaMappingType,
    /// Field mappings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<JsonInputSchemaMappingProperties>,
}

/// Properties of a topic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicProperties {
    /// Where event data may be replicated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_residency_boundary: Option<DataResidencyBoundary>,
    /// Whether only Azure AD tokens are accepted for publishing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_local_auth: Option<bool>,
    /// The publishing endpoint. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// IP rules, honoured when public network access is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_ip_rules: Option<Vec<InboundIpRule>>,
    /// The schema events are published in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<InputSchema>,
    /// Mapping for `CustomEventSchema`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_schema_mapping: Option<InputSchemaMapping>,
    /// The Azure Monitor resource ID for metrics. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_resource_id: Option<String>,
    /// Provisioning state. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<TopicProvisioningState>,
    /// Whether public traffic is accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_network_access: Option<PublicNetworkAccess>,
}

/// An Event Grid topic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Resource ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Managed identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<ManagedServiceIdentity>,
    /// Azure region.
    pub location: String,
    /// Topic name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Topic properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<TopicProperties>,
    /// Creation and modification metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_data: Option<SystemData>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    /// Resource type, `Microsoft.EventGrid/topics`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

/// Properties accepted by an update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicUpdateParameterProperties {
    /// Where event data may be replicated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_residency_boundary: Option<DataResidencyBoundary>,
    /// Whether only Azure AD tokens are accepted for publishing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_local_auth: Option<bool>,
    /// IP rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_ip_rules: Option<Vec<InboundIpRule>>,
    /// Whether public traffic is accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_network_access: Option<PublicNetworkAccess>,
}

/// The body of an update request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicUpdateParameters {
    /// Managed identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<ManagedServiceIdentity>,
    /// Properties to change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<TopicUpdateParameterProperties>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// The shared access keys of a topic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSharedAccessKeys {
    /// The first key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key1: Option<String>,
    /// The second key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key2: Option<String>,
}

/// Filters [`Topic`]s in `list_by_resource_group_complete_matching_predicate`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopicOperationPredicate {
    /// Match on resource ID.
    pub id: Option<String>,
    /// Match on location.
    pub location: Option<String>,
    /// Match on name.
    pub name: Option<String>,
    /// Match on resource type.
    pub resource_type: Option<String>,
}

impl Predicate<Topic> for TopicOperationPredicate {
    fn matches(&self, item: &Topic) -> bool {
        optional_eq(self.id.as_ref(), item.id.as_ref())
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
    fn test_topic_with_custom_schema() {
        let topic: Topic = serde_json::from_value(json!({
            "location": "westus2",
            "name": "orders",
            "properties": {
                "inputSchema": "CustomEventSchema",
                "inputSchemaMapping": {
                    "inputSchemaMappingType": "Json",
                    "properties": {
                        "subject": {"sourceField": "orderId", "defaultValue": "unknown"},
                        "eventTime": {"sourceField": "placedAt"}
                    }
                },
                "inboundIpRules": [{"ipMask": "10.0.0.0/24", "action": "Allow"}],
                "provisioningState": "Creating",
                "publicNetworkAccess": "Enabled"
            }
        }))
        .unwrap();

        let properties = topic.properties.unwrap();
        assert_eq!(properties.input_schema, Some(InputSchema::CustomEventSchema));
        assert_eq!(
            properties.provisioning_state,
            Some(TopicProvisioningState::Creating)
        );
        let mapping = properties.input_schema_mapping.unwrap().properties.unwrap();
        assert_eq!(
            mapping.subject.and_then(|s| s.default_value).as_deref(),
            Some("unknown")
        );
    }

    #[test]
    fn test_cloud_events_schema_value() {
        assert_eq!(
            InputSchema::CloudEventSchemaV10.as_str(),
            "CloudEventSchemaV1_0"
        );
    }
}
