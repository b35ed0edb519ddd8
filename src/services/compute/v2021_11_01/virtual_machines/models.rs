use serde::{Deserialize, Serialize};

use super::constants::{
    CachingTypes, DeleteOptions, DiskCreateOptionTypes, DiskDeleteOptionTypes,
    OperatingSystemTypes, StatusLevelTypes, StorageAccountTypes,
    VirtualMachineEvictionPolicyTypes, VirtualMachinePriorityTypes, VirtualMachineSizeTypes,
};
use crate::models::{ManagedServiceIdentity, SystemData, Tags};
use crate::odata::{optional_eq, Predicate};

/// A reference to another resource by ID.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubResource {
    /// Resource ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// The size of a machine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareProfile {
    /// The machine size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vm_size: Option<VirtualMachineSizeTypes>,
}

/// A marketplace, gallery or custom image.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReference {
    /// ID of a custom or gallery image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Marketplace offer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer: Option<String>,
    /// Marketplace publisher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Marketplace SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Image version, or `latest`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// The version `latest` resolved to. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_version: Option<String>,
}

/// Managed disk settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedDiskParameters {
    /// ID of the managed disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Disk encryption set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_encryption_set: Option<SubResource>,
    /// Storage SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_account_type: Option<StorageAccountTypes>,
}

/// The operating system disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsDisk {
    /// Host caching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caching: Option<CachingTypes>,
    /// How the disk is created.
    pub create_option: DiskCreateOptionTypes,
    /// Whether the disk is deleted with the machine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_option: Option<DiskDeleteOptionTypes>,
    /// Size in GiB.
    #[serde(rename = "diskSizeGB", skip_serializing_if = "Option::is_none")]
    pub disk_size_gb: Option<i64>,
    /// Managed disk settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_disk: Option<ManagedDiskParameters>,
    /// Disk name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Operating system family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_type: Option<OperatingSystemTypes>,
    /// Whether write acceleration is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_accelerator_enabled: Option<bool>,
}

/// A data disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataDisk {
    /// Host caching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caching: Option<CachingTypes>,
    /// How the disk is created.
    pub create_option: DiskCreateOptionTypes,
    /// Whether the disk is deleted with the machine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_option: Option<DiskDeleteOptionTypes>,
    /// Size in GiB.
    #[serde(rename = "diskSizeGB", skip_serializing_if = "Option::is_none")]
    pub disk_size_gb: Option<i64>,
    /// Logical unit number, unique per machine.
    pub lun: i64,
    /// Managed disk settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_disk: Option<ManagedDiskParameters>,
    /// Disk name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the disk is being detached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_be_detached: Option<bool>,
    /// Whether write acceleration is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_accelerator_enabled: Option<bool>,
}

/// Disks and image of a machine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageProfile {
    /// Data disks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_disks: Option<Vec<DataDisk>>,
    /// Source image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_reference: Option<ImageReference>,
    /// Operating system disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_disk: Option<OsDisk>,
}

/// An SSH public key written to the machine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshPublicKey {
    /// The public key in OpenSSH format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_data: Option<String>,
    /// Path of the `authorized_keys` file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// SSH settings of a Linux machine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshConfiguration {
    /// Authorized keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_keys: Option<Vec<SshPublicKey>>,
}

/// Linux settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinuxConfiguration {
    /// Whether password login is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_password_authentication: Option<bool>,
    /// Whether the VM agent is installed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provision_vm_agent: Option<bool>,
    /// SSH settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh: Option<SshConfiguration>,
}

/// Windows settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowsConfiguration {
    /// Whether Windows Update runs automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_automatic_updates: Option<bool>,
    /// Whether the VM agent is installed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provision_vm_agent: Option<bool>,
    /// Time zone, e.g. `Pacific Standard Time`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// Operating system settings applied at creation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsProfile {
    /// Administrator password. Write-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_password: Option<String>,
    /// Administrator user name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_username: Option<String>,
    /// Whether extension operations are allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_extension_operations: Option<bool>,
    /// Host name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computer_name: Option<String>,
    /// Base64 custom data. Write-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<String>,
    /// Linux settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linux_configuration: Option<LinuxConfiguration>,
    /// Windows settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows_configuration: Option<WindowsConfiguration>,
}

/// Properties of an attached network interface.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterfaceReferenceProperties {
    /// Whether the interface is deleted with the machine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_option: Option<DeleteOptions>,
    /// Whether this is the primary interface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
}

/// An attached network interface.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInterfaceReference {
    /// Network interface ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Interface properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<NetworkInterfaceReferenceProperties>,
}

/// Network interfaces of a machine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProfile {
    /// Attached interfaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interfaces: Option<Vec<NetworkInterfaceReference>>,
}

/// Boot diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootDiagnostics {
    /// Whether boot diagnostics are collected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Storage URI; managed storage when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_uri: Option<String>,
}

/// Diagnostics settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsProfile {
    /// Boot diagnostics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_diagnostics: Option<BootDiagnostics>,
}

/// Spot pricing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingProfile {
    /// Maximum hourly price in US dollars; `-1` means the on-demand price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}

/// Properties of a virtual machine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineProperties {
    /// Availability set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_set: Option<SubResource>,
    /// Spot pricing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_profile: Option<BillingProfile>,
    /// Diagnostics settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics_profile: Option<DiagnosticsProfile>,
    /// Spot eviction policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eviction_policy: Option<VirtualMachineEvictionPolicyTypes>,
    /// Machine size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_profile: Option<HardwareProfile>,
    /// Runtime state, present when read with `$expand=instanceView`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_view: Option<VirtualMachineInstanceView>,
    /// Bring-your-own-license type, e.g. `Windows_Server`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_type: Option<String>,
    /// Network interfaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_profile: Option<NetworkProfile>,
    /// Operating system settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_profile: Option<OsProfile>,
    /// Scheduling priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<VirtualMachinePriorityTypes>,
    /// Provisioning state. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
    /// Disks and image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_profile: Option<StorageProfile>,
    /// Base64 user data, returned with `$expand=userData`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    /// Unique machine ID. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vm_id: Option<String>,
}

/// A virtual machine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachine {
    /// Resource ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Managed identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<ManagedServiceIdentity>,
    /// Azure region.
    pub location: String,
    /// Machine name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Machine properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<VirtualMachineProperties>,
    /// Creation and modification metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_data: Option<SystemData>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    /// Resource type, `Microsoft.Compute/virtualMachines`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Availability zones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zones: Option<Vec<String>>,
}

/// The body of an update request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VirtualMachineUpdate {
    /// Managed identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<ManagedServiceIdentity>,
    /// Properties to change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<VirtualMachineProperties>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    /// Availability zones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zones: Option<Vec<String>>,
}

/// One status entry of an instance view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceViewStatus {
    /// Status code, e.g. `PowerState/running`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Localized label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_status: Option<String>,
    /// Severity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<StatusLevelTypes>,
    /// Detailed message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// When the status was recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Runtime state of a machine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineInstanceView {
    /// Host name reported by the guest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computer_name: Option<String>,
    /// Operating system name reported by the guest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_name: Option<String>,
    /// Operating system version reported by the guest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
    /// Provisioning and power statuses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statuses: Option<Vec<InstanceViewStatus>>,
}

impl VirtualMachineInstanceView {
    /// Returns the power state, e.g. `running` for `PowerState/running`.
    #[must_use]
    pub fn power_state(&self) -> Option<&str> {
        self.statuses
            .iter()
            .flatten()
            .filter_map(|status| status.code.as_deref())
            .find_map(|code| code.strip_prefix("PowerState/"))
    }
}

/// A size a machine can be resized to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineSize {
    /// Maximum number of data disks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_data_disk_count: Option<i64>,
    /// Memory in MiB.
    #[serde(rename = "memoryInMB", skip_serializing_if = "Option::is_none")]
    pub memory_in_mb: Option<i64>,
    /// Size name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of vCPUs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_cores: Option<i64>,
    /// OS disk limit in MiB.
    #[serde(rename = "osDiskSizeInMB", skip_serializing_if = "Option::is_none")]
    pub os_disk_size_in_mb: Option<i64>,
    /// Temporary disk size in MiB.
    #[serde(rename = "resourceDiskSizeInMB", skip_serializing_if = "Option::is_none")]
    pub resource_disk_size_in_mb: Option<i64>,
}

/// The sizes a machine can be resized to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualMachineSizeListResult {
    /// Available sizes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<VirtualMachineSize>>,
}

/// Filters [`VirtualMachine`]s in `list_complete_matching_predicate`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VirtualMachineOperationPredicate {
    /// Match on resource ID.
    pub id: Option<String>,
    /// Match on location.
    pub location: Option<String>,
    /// Match on name.
    pub name: Option<String>,
    /// Match on resource type.
    pub resource_type: Option<String>,
}

impl Predicate<VirtualMachine> for VirtualMachineOperationPredicate {
    fn matches(&self, item: &VirtualMachine) -> bool {
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
    fn test_linux_machine_round_trips_wire_names() {
        let vm: VirtualMachine = serde_json::from_value(json!({
            "location": "westeurope",
            "name": "web-0",
            "zones": ["1"],
            "properties": {
                "hardwareProfile": {"vmSize": "Standard_D2s_v3"},
                "storageProfile": {
                    "imageReference": {
                        "publisher": "Canonical",
                        "offer": "0001-com-ubuntu-server-jammy",
                        "sku": "22_04-lts",
                        "version": "latest"
                    },
                    "osDisk": {
                        "createOption": "FromImage",
                        "caching": "ReadWrite",
                        "diskSizeGB": 64,
                        "managedDisk": {"storageAccountType": "Premium_LRS"}
                    },
                    "dataDisks": [{"lun": 0, "createOption": "Empty", "diskSizeGB": 128}]
                },
                "osProfile": {
                    "adminUsername": "azureuser",
                    "linuxConfiguration": {
                        "disablePasswordAuthentication": true,
                        "ssh": {"publicKeys": [{
                            "path": "/home/azureuser/.ssh/authorized_keys",
                            "keyData": "ssh-rsa AAAA"
                        }]}
                    }
                },
                "priority": "Spot",
                "evictionPolicy": "Deallocate",
                "billingProfile": {"maxPrice": -1.0}
            }
        }))
        .unwrap();

        let properties = vm.properties.clone().unwrap();
        assert_eq!(
            properties.hardware_profile.unwrap().vm_size,
            Some(VirtualMachineSizeTypes::StandardD2sV3)
        );
        let storage = properties.storage_profile.unwrap();
        let os_disk = storage.os_disk.unwrap();
        assert_eq!(os_disk.create_option, DiskCreateOptionTypes::FromImage);
        assert_eq!(os_disk.disk_size_gb, Some(64));
        assert_eq!(storage.data_disks.unwrap()[0].lun, 0);
        assert_eq!(properties.billing_profile.unwrap().max_price, Some(-1.0));

        let body = serde_json::to_value(&vm).unwrap();
        assert_eq!(
            body["properties"]["storageProfile"]["osDisk"]["diskSizeGB"],
            json!(64)
        );
        assert!(body.get("id").is_none());
    }

    #[test]
    fn test_power_state_from_instance_view() {
        let view: VirtualMachineInstanceView = serde_json::from_value(json!({
            "statuses": [
                {"code": "ProvisioningState/succeeded", "level": "Info"},
                {"code": "PowerState/deallocated", "level": "Info"}
            ]
        }))
        .unwrap();
        assert_eq!(view.power_state(), Some("deallocated"));
        assert_eq!(VirtualMachineInstanceView::default().power_state(), None);
    }

    #[test]
    fn test_predicate_on_location() {
        let predicate = VirtualMachineOperationPredicate {
            location: Some("westeurope".to_string()),
            ..Default::default()
        };
        let vm = VirtualMachine {
            location: "westeurope".to_string(),
            ..Default::default()
        };
        assert!(predicate.matches(&vm));
        assert!(!predicate.matches(&VirtualMachine {
            location: "eastus".to_string(),
            ..Default::default()
        }));
    }
}
