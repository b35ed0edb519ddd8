//! IDs of resources that sit directly under a resource group.

use crate::resourceids::resource_group_resource_id;

resource_group_resource_id! {
    /// A Storage Account ID.
    pub struct StorageAccountId {
        display_name: "Storage Account",
        provider: "Microsoft.Storage",
        resource_type: "storageAccounts",
        name_field: storage_account_name,
        name_segment: "storageAccountName",
        name_label: "Storage Account Name",
    }
}

resource_group_resource_id! {
    /// A Key Vault ID.
    pub struct KeyVaultId {
        display_name: "Key Vault",
        provider: "Microsoft.KeyVault",
        resource_type: "vaults",
        name_field: vault_name,
        name_segment: "vaultName",
        name_label: "Vault Name",
    }
}

resource_group_resource_id! {
    /// A User Assigned Identity ID.
    pub struct UserAssignedIdentityId {
        display_name: "User Assigned Identity",
        provider: "Microsoft.ManagedIdentity",
        resource_type: "userAssignedIdentities",
        name_field: user_assigned_identity_name,
        name_segment: "userAssignedIdentityName",
        name_label: "User Assigned Identity Name",
    }
}

resource_group_resource_id! {
    /// A Virtual Network ID.
    pub struct VirtualNetworkId {
        display_name: "Virtual Network",
        provider: "Microsoft.Network",
        resource_type: "virtualNetworks",
        name_field: virtual_network_name,
        name_segment: "virtualNetworkName",
        name_label: "Virtual Network Name",
    }
}

resource_group_resource_id! {
    /// An App Service Plan ID. The API calls these server farms.
    pub struct AppServicePlanId {
        display_name: "App Service Plan",
        provider: "Microsoft.Web",
        resource_type: "serverFarms",
        name_field: server_farm_name,
        name_segment: "serverFarmName",
        name_label: "Server Farm Name",
    }
}

resource_group_resource_id! {
    /// An App Service (web or function app) ID.
    pub struct AppServiceId {
        display_name: "App Service",
        provider: "Microsoft.Web",
        resource_type: "sites",
        name_field: site_name,
        name_segment: "siteName",
        name_label: "Site Name",
    }
}

resource_group_resource_id! {
    /// A Kubernetes (AKS) Cluster ID.
    pub struct KubernetesClusterId {
        display_name: "Kubernetes Cluster",
        provider: "Microsoft.ContainerService",
        resource_type: "managedClusters",
        name_field: managed_cluster_name,
        name_segment: "managedClusterName",
        name_label: "Managed Cluster Name",
    }
}

resource_group_resource_id! {
    /// A Managed Disk ID.
    pub struct ManagedDiskId {
        display_name: "Managed Disk",
        provider: "Microsoft.Compute",
        resource_type: "disks",
        name_field: disk_name,
        name_segment: "diskName",
        name_label: "Disk Name",
    }
}

resource_group_resource_id! {
    /// A Virtual Machine ID.
    pub struct VirtualMachineId {
        display_name: "Virtual Machine",
        provider: "Microsoft.Compute",
        resource_type: "virtualMachines",
        name_field: virtual_machine_name,
        name_segment: "virtualMachineName",
        name_label: "Virtual Machine Name",
    }
}
