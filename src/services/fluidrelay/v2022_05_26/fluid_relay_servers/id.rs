use crate::resourceids::resource_group_resource_id;

resource_group_resource_id! {
    /// A Fluid Relay Server ID.
    pub struct FluidRelayServerId {
        display_name: "Fluid Relay Server",
        provider: "Microsoft.FluidRelay",
        resource_type: "fluidRelayServers",
        name_field: fluid_relay_server_name,
        name_segment: "fluidRelayServerName",
        name_label: "Fluid Relay Server Name",
    }
}
