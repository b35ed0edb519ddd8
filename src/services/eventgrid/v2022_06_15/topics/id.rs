use crate::resourceids::resource_group_resource_id;

resource_group_resource_id! {
    /// An Event Grid Topic ID.
    pub struct TopicId {
        display_name: "Topic",
        provider: "Microsoft.EventGrid",
        resource_type: "topics",
        name_field: topic_name,
        name_segment: "topicName",
        name_label: "Topic Name",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resourceids::{ResourceId, ResourceIdError};

    #[test]
    fn test_id_formats_canonical_casing() {
        let id = TopicId::parse_insensitively(
            "/SUBSCRIPTIONS/1/RESOURCEGROUPS/rg/PROVIDERS/Microsoft.EventGrid/TOPICS/orders",
        )
        .unwrap();
        assert_eq!(
            id.id(),
            "/subscriptions/1/resourceGroups/rg/providers/Microsoft.EventGrid/topics/orders"
        );
    }

    #[test]
    fn test_missing_topic_name() {
        let err =
            TopicId::parse("/subscriptions/1/resourceGroups/rg/providers/Microsoft.EventGrid/topics")
                .unwrap_err();
        match err {
            ResourceIdError::SegmentNotSpecified { segment, .. } => {
                assert_eq!(segment, "topicName");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
