use crate::commonids::VirtualNetworkId;
use crate::resourceids::{impl_resource_id_traits, ParseResult, ResourceId, ResourceIdError, Segment};

/// A Subnet ID, nested under a virtual network.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubnetId {
    /// The subscription the virtual network lives in.
    pub subscription_id: String,
    /// The resource group the virtual network lives in.
    pub resource_group_name: String,
    /// The parent virtual network.
    pub virtual_network_name: String,
    /// The subnet name.
    pub subnet_name: String,
}

impl SubnetId {
    /// Creates a Subnet ID.
    #[must_use]
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        virtual_network_name: impl Into<String>,
        subnet_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            virtual_network_name: virtual_network_name.into(),
            subnet_name: subnet_name.into(),
        }
    }

    /// Returns the ID of the parent virtual network.
    #[must_use]
    pub fn virtual_network_id(&self) -> VirtualNetworkId {
        VirtualNetworkId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.virtual_network_name.clone(),
        )
    }
}

impl ResourceId for SubnetId {
    const DISPLAY_NAME: &'static str = "Subnet";

    fn segments() -> &'static [Segment] {
        const SEGMENTS: &[Segment] = &[
            Segment::static_value("staticSubscriptions", "subscriptions"),
            Segment::subscription_id("subscriptionId"),
            Segment::static_value("staticResourceGroups", "resourceGroups"),
            Segment::resource_group("resourceGroupName"),
            Segment::static_value("staticProviders", "providers"),
            Segment::resource_provider("staticMicrosoftNetwork", "Microsoft.Network"),
            Segment::static_value("staticVirtualNetworks", "virtualNetworks"),
            Segment::user_specified("virtualNetworkName", "virtualNetworkName"),
            Segment::static_value("staticSubnets", "subnets"),
            Segment::user_specified("subnetName", "subnetName"),
        ];
        SEGMENTS
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self, ResourceIdError> {
        Ok(Self {
            subscription_id: result.require("subscriptionId")?,
            resource_group_name: result.require("resourceGroupName")?,
            virtual_network_name: result.require("virtualNetworkName")?,
            subnet_name: result.require("subnetName")?,
        })
    }

    fn id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Network/virtualNetworks/{}/subnets/{}",
            self.subscription_id, self.resource_group_name, self.virtual_network_name, self.subnet_name
        )
    }

    fn components(&self) -> Vec<String> {
        vec![
            format!("Subscription: {:?}", self.subscription_id),
            format!("Resource Group Name: {:?}", self.resource_group_name),
            format!("Virtual Network Name: {:?}", self.virtual_network_name),
            format!("Subnet Name: {:?}", self.subnet_name),
        ]
    }
}

impl_resource_id_traits!(SubnetId);
