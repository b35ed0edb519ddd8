use crate::resourceids::{impl_resource_id_traits, ParseResult, ResourceId, ResourceIdError, Segment};

/// A Subscription ID: `/subscriptions/{subscriptionId}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    /// The subscription UUID.
    pub subscription_id: String,
}

impl SubscriptionId {
    /// Creates a Subscription ID.
    #[must_use]
    pub fn new(subscription_id: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
        }
    }
}

impl ResourceId for SubscriptionId {
    const DISPLAY_NAME: &'static str = "Subscription";

    fn segments() -> &'static [Segment] {
        const SEGMENTS: &[Segment] = &[
            Segment::static_value("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
        ];
        SEGMENTS
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self, ResourceIdError> {
        Ok(Self {
            subscription_id: result.require("subscriptionId")?,
        })
    }

    fn id(&self) -> String {
        format!("/subscriptions/{}", self.subscription_id)
    }

    fn components(&self) -> Vec<String> {
        vec![format!("Subscription: {:?}", self.subscription_id)]
    }
}

impl_resource_id_traits!(SubscriptionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_id_round_trip() {
        let id = SubscriptionId::parse("/subscriptions/12345678-1234-9876-4563-123456789012").unwrap();
        assert_eq!(id.subscription_id, "12345678-1234-9876-4563-123456789012");
        assert_eq!(id.id(), "/subscriptions/12345678-1234-9876-4563-123456789012");
    }

    #[test]
    fn test_subscription_id_display() {
        let id = SubscriptionId::new("abc");
        assert_eq!(id.to_string(), "Subscription (Subscription: \"abc\")");
    }

    #[test]
    fn test_subscription_id_rejects_resource_group() {
        assert!(SubscriptionId::parse("/subscriptions/abc/resourceGroups/rg").is_err());
    }
}
