use crate::string_enum;

string_enum! {
    /// Where event data may be replicated.
    pub enum DataResidencyBoundary {
        /// The region and its geo pair.
        WithinGeographicalPair => "WithinGeographicalPair",
        /// The region only.
        WithinRegion => "WithinRegion",
    }
}

string_enum! {
    /// The schema events are published in.
    pub enum InputSchema {
        /// CloudEvents 1.0.
        CloudEventSchemaV10 => "CloudEventSchemaV1_0",
        /// A custom schema mapped onto the Event Grid schema.
        CustomEventSchema => "CustomEventSchema",
        /// The Event Grid schema.
        EventGridSchema => "EventGridSchema",
    }
}

string_enum! {
    /// The type of an input schema mapping.
    pub enum InputSchemaMappingType {
        /// Mapping from JSON payload fields.
        Json => "Json",
    }
}

string_enum! {
    /// The action of an inbound IP rule.
    pub enum IpActionType {
        /// Allow matching traffic.
        Allow => "Allow",
    }
}

string_enum! {
    /// Whether the topic accepts traffic from public networks.
    pub enum PublicNetworkAccess {
        /// Public traffic is blocked.
        Disabled => "Disabled",
        /// Public traffic is allowed.
        Enabled => "Enabled",
    }
}

string_enum! {
    /// The provisioning state of a topic.
    pub enum TopicProvisioningState {
        /// Provisioning was cancelled.
        Canceled => "Canceled",
        /// The topic is being created.
        Creating => "Creating",
        /// The topic is being deleted.
        Deleting => "Deleting",
        /// Provisioning failed.
        Failed => "Failed",
        /// Provisioning finished.
        Succeeded => "Succeeded",
        /// The topic is being updated.
        Updating => "Updating",
    }
}
