//! Integration tests for the typed service clients.
//!
//! These tests drive each service package against a mock server the way a
//! caller would: typed IDs in, typed models out.

use std::time::Duration;

use azure_arm::commonids::{
    KeyVaultId, ResourceGroupId, StorageAccountId, SubscriptionId, VirtualMachineId,
};
use azure_arm::services::compute::v2021_11_01::virtual_machines::{
    DeleteOperationOptions, DiskCreateOptionTypes, GetOperationOptions, HardwareProfile,
    InstanceViewTypes, OsDisk, PowerOffOperationOptions, StorageProfile, VirtualMachine,
    VirtualMachineOperationPredicate, VirtualMachineProperties, VirtualMachineSizeTypes,
    VirtualMachinesClient,
};
use azure_arm::services::eventgrid::v2022_06_15::topics::{
    ListByResourceGroupOperationOptions, TopicId, TopicsClient,
};
use azure_arm::services::fluidrelay::v2022_05_26::fluid_relay_servers::{
    FluidRelayServerId, FluidRelayServersClient, KeyName, RegenerateKeyRequest,
};
use azure_arm::services::healthcareapis::v2022_12_01::services::{
    Kind as FhirKind, ServiceId, ServicesClient, ServicesDescription,
};
use azure_arm::services::keyvault::v2023_07_01::vaults::{
    Sku as VaultSku, SkuFamily, SkuName as VaultSkuName, VaultCreateOrUpdateParameters,
    VaultProperties, VaultsClient,
};
use azure_arm::services::storage::v2023_01_01::storage_accounts::{
    GetPropertiesOperationOptions, Kind, ProvisioningState, Sku, SkuName,
    StorageAccountCheckNameAvailabilityParameters, StorageAccountCreateParameters,
    StorageAccountExpand, StorageAccountsClient,
};
use azure_arm::{
    AccessToken, ApiVersion, ArmConfig, ArmError, Credential, Endpoint, ResourceId,
};
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SUBSCRIPTION: &str = "12345678-1234-9876-4563-123456789012";

/// Creates a configuration pointing at the mock server.
fn create_config(server: &MockServer) -> ArmConfig {
    ArmConfig::builder()
        .credential(Credential::Static(AccessToken::new("test-token")))
        .resource_manager_endpoint(Endpoint::new(server.uri()).unwrap())
        .poll_interval(Duration::from_millis(10))
        .tries(1)
        .build()
        .unwrap()
}

// === Compute ===

#[tokio::test]
async fn test_virtual_machine_get_with_instance_view() {
    let server = MockServer::start().await;
    let id = VirtualMachineId::new(SUBSCRIPTION, "example-rg", "web-0");
    Mock::given(method("GET"))
        .and(path(id.id()))
        .and(query_param("api-version", "2021-11-01"))
        .and(query_param("$expand", "instanceView"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": id.id(),
            "name": "web-0",
            "type": "Microsoft.Compute/virtualMachines",
            "location": "westeurope",
            "properties": {
                "hardwareProfile": {"vmSize": "Standard_D2s_v3"},
                "provisioningState": "Succeeded",
                "instanceView": {
                    "statuses": [
                        {"code": "ProvisioningState/succeeded", "level": "Info"},
                        {"code": "PowerState/running", "level": "Info"}
                    ]
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = VirtualMachinesClient::new(&create_config(&server));
    let vm = client
        .get(
            &id,
            GetOperationOptions {
                expand: Some(InstanceViewTypes::InstanceView),
            },
        )
        .await
        .unwrap()
        .model
        .unwrap();

    let properties = vm.properties.unwrap();
    assert_eq!(
        properties.hardware_profile.and_then(|h| h.vm_size),
        Some(VirtualMachineSizeTypes::StandardD2sV3)
    );
    assert_eq!(
        properties.instance_view.as_ref().and_then(|v| v.power_state()),
        Some("running")
    );
}

#[tokio::test]
async fn test_virtual_machine_create_or_update_then_poll() {
    let server = MockServer::start().await;
    let id = VirtualMachineId::new(SUBSCRIPTION, "example-rg", "web-0");
    let operation_path = "/subscriptions/1/providers/Microsoft.Compute/locations/westeurope/operations/vm-op";
    Mock::given(method("PUT"))
        .and(path(id.id()))
        .and(body_json(json!({
            "location": "westeurope",
            "properties": {
                "hardwareProfile": {"vmSize": "Standard_B1s"},
                "storageProfile": {"osDisk": {"createOption": "FromImage"}}
            }
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header(
                    "Azure-AsyncOperation",
                    format!("{}{operation_path}", server.uri()).as_str(),
                )
                .set_body_json(json!({
                    "name": "web-0",
                    "location": "westeurope",
                    "properties": {"provisioningState": "Creating"}
                })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(operation_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "InProgress"})))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(operation_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "Succeeded"})))
        .mount(&server)
        .await;

    let client = VirtualMachinesClient::new(&create_config(&server));
    let input = VirtualMachine {
        location: "westeurope".to_string(),
        properties: Some(VirtualMachineProperties {
            hardware_profile: Some(HardwareProfile {
                vm_size: Some(VirtualMachineSizeTypes::StandardB1s),
            }),
            storage_profile: Some(StorageProfile {
                os_disk: Some(OsDisk {
                    caching: None,
                    create_option: DiskCreateOptionTypes::FromImage,
                    delete_option: None,
                    disk_size_gb: None,
                    managed_disk: None,
                    name: None,
                    os_type: None,
                    write_accelerator_enabled: None,
                }),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    };

    assert_ok!(client.create_or_update_then_poll(&id, &input).await);
}

#[tokio::test]
async fn test_virtual_machine_failed_provisioning_is_a_poller_error() {
    let server = MockServer::start().await;
    let id = VirtualMachineId::new(SUBSCRIPTION, "example-rg", "web-0");
    let operation_path = "/subscriptions/1/providers/Microsoft.Compute/locations/westeurope/operations/vm-failed";
    Mock::given(method("PUT"))
        .and(path(id.id()))
        .respond_with(ResponseTemplate::new(201).insert_header(
            "Azure-AsyncOperation",
            format!("{}{operation_path}", server.uri()).as_str(),
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(operation_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "Failed",
            "error": {"code": "SkuNotAvailable", "message": "Standard_B1s is not available"}
        })))
        .mount(&server)
        .await;

    let client = VirtualMachinesClient::new(&create_config(&server));
    let input = VirtualMachine {
        location: "westeurope".to_string(),
        ..Default::default()
    };
    let err = client
        .create_or_update_then_poll(&id, &input)
        .await
        .unwrap_err();

    assert!(matches!(err, ArmError::Poller(_)), "{err:?}");
}

#[tokio::test]
async fn test_virtual_machine_delete_then_poll_with_force() {
    let server = MockServer::start().await;
    let id = VirtualMachineId::new(SUBSCRIPTION, "example-rg", "web-0");
    let operation_path = "/subscriptions/1/providers/Microsoft.Compute/locations/westeurope/operations/vm-delete";
    Mock::given(method("DELETE"))
        .and(path(id.id()))
        .and(query_param("forceDeletion", "true"))
        .respond_with(ResponseTemplate::new(202).insert_header(
            "Azure-AsyncOperation",
            format!("{}{operation_path}", server.uri()).as_str(),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(operation_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "Succeeded"})))
        .mount(&server)
        .await;

    let client = VirtualMachinesClient::new(&create_config(&server));
    assert_ok!(
        client
            .delete_then_poll(
                &id,
                DeleteOperationOptions {
                    force_deletion: Some(true),
                },
            )
            .await
    );
}

#[tokio::test]
async fn test_virtual_machine_list_complete_follows_next_link() {
    let server = MockServer::start().await;
    let list_path = format!(
        "/subscriptions/{SUBSCRIPTION}/resourceGroups/example-rg/providers/Microsoft.Compute/virtualMachines"
    );
    Mock::given(method("GET"))
        .and(path(list_path.as_str()))
        .and(query_param("$skiptoken", "page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"name": "web-2", "location": "northeurope"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(list_path.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [
                {"name": "web-0", "location": "westeurope"},
                {"name": "web-1", "location": "westeurope"}
            ],
            "nextLink": format!("{}{list_path}?api-version=2021-11-01&$skiptoken=page2", server.uri())
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = VirtualMachinesClient::new(&create_config(&server));
    let resource_group = ResourceGroupId::new(SUBSCRIPTION, "example-rg");
    let result = client.list_complete(&resource_group).await.unwrap();

    let names: Vec<_> = result.iter().filter_map(|vm| vm.name.as_deref()).collect();
    assert_eq!(names, ["web-0", "web-1", "web-2"]);
}

#[tokio::test]
async fn test_virtual_machine_list_matching_location() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!(
            "/subscriptions/{SUBSCRIPTION}/resourceGroups/example-rg/providers/Microsoft.Compute/virtualMachines"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [
                {"name": "web-0", "location": "westeurope"},
                {"name": "web-1", "location": "northeurope"}
            ]
        })))
        .mount(&server)
        .await;

    let client = VirtualMachinesClient::new(&create_config(&server));
    let result = client
        .list_complete_matching_predicate(
            &ResourceGroupId::new(SUBSCRIPTION, "example-rg"),
            VirtualMachineOperationPredicate {
                location: Some("northeurope".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name.as_deref(), Some("web-1"));
}

#[tokio::test]
async fn test_virtual_machine_power_off_then_poll() {
    let server = MockServer::start().await;
    let id = VirtualMachineId::new(SUBSCRIPTION, "example-rg", "web-0");
    let status_path = "/subscriptions/1/providers/Microsoft.Compute/locations/westeurope/operations/power";
    Mock::given(method("POST"))
        .and(path(format!("{}/powerOff", id.id())))
        .and(query_param("skipShutdown", "true"))
        .respond_with(
            ResponseTemplate::new(202)
                .insert_header("Location", format!("{}{status_path}", server.uri()).as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(status_path))
        .respond_with(ResponseTemplate::new(202))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(status_path))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = VirtualMachinesClient::new(&create_config(&server));
    assert_ok!(
        client
            .power_off_then_poll(
                &id,
                PowerOffOperationOptions {
                    skip_shutdown: Some(true),
                },
            )
            .await
    );
}

// === Storage ===

#[tokio::test]
async fn test_storage_get_properties() {
    let server = MockServer::start().await;
    let id = StorageAccountId::new(SUBSCRIPTION, "example-rg", "examplesa");
    Mock::given(method("GET"))
        .and(path(id.id()))
        .and(query_param("api-version", "2023-01-01"))
        .and(query_param("$expand", "blobRestoreStatus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": id.id(),
            "name": "examplesa",
            "type": "Microsoft.Storage/storageAccounts",
            "location": "westeurope",
            "kind": "StorageV2",
            "sku": {"name": "Standard_LRS", "tier": "Standard"},
            "properties": {"provisioningState": "Succeeded"}
        })))
        .mount(&server)
        .await;

    let client = StorageAccountsClient::new(&create_config(&server));
    let response = client
        .get_properties(
            &id,
            GetPropertiesOperationOptions {
                expand: Some(StorageAccountExpand::BlobRestoreStatus),
            },
        )
        .await
        .unwrap();

    let account = response.model.unwrap();
    assert_eq!(account.kind, Some(Kind::StorageV2));
    assert_eq!(account.sku.map(|s| s.name), Some(SkuName::StandardLrs));
    assert_eq!(
        account.properties.and_then(|p| p.provisioning_state),
        Some(ProvisioningState::Succeeded)
    );
}

#[tokio::test]
async fn test_storage_get_missing_account() {
    let server = MockServer::start().await;
    let id = StorageAccountId::new(SUBSCRIPTION, "example-rg", "missing");
    Mock::given(method("GET"))
        .and(path(id.id()))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": "ResourceNotFound", "message": "not found"}
        })))
        .mount(&server)
        .await;

    let client = StorageAccountsClient::new(&create_config(&server));
    let err = client
        .get_properties(&id, GetPropertiesOperationOptions::default())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_storage_create_then_poll() {
    let server = MockServer::start().await;
    let id = StorageAccountId::new(SUBSCRIPTION, "example-rg", "examplesa");
    let status_url = format!("{}/providers/Microsoft.Storage/locations/westeurope/asyncoperations/abc", server.uri());
    Mock::given(method("PUT"))
        .and(path(id.id()))
        .and(body_json(json!({
            "kind": "StorageV2",
            "location": "westeurope",
            "sku": {"name": "Standard_LRS"}
        })))
        .respond_with(ResponseTemplate::new(202).insert_header("Location", status_url.as_str()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/providers/Microsoft.Storage/locations/westeurope/asyncoperations/abc"))
        .respond_with(ResponseTemplate::new(202))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/providers/Microsoft.Storage/locations/westeurope/asyncoperations/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "examplesa"})))
        .mount(&server)
        .await;

    let client = StorageAccountsClient::new(&create_config(&server));
    let input = StorageAccountCreateParameters {
        identity: None,
        kind: Kind::StorageV2,
        location: "westeurope".to_string(),
        properties: None,
        sku: Sku::new(SkuName::StandardLrs),
        tags: None,
    };

    assert_ok!(client.create_then_poll(&id, &input).await);
}

#[tokio::test]
async fn test_storage_list_by_subscription() {
    let server = MockServer::start().await;
    let subscription = SubscriptionId::new(SUBSCRIPTION);
    Mock::given(method("GET"))
        .and(path(format!(
            "/subscriptions/{SUBSCRIPTION}/providers/Microsoft.Storage/storageAccounts"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [
                {"name": "a", "location": "westeurope"},
                {"name": "b", "location": "northeurope"}
            ]
        })))
        .mount(&server)
        .await;

    let client = StorageAccountsClient::new(&create_config(&server));
    let result = client.list_complete(&subscription).await.unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[1].location, "northeurope");
}

#[tokio::test]
async fn test_storage_check_name_availability() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!(
            "/subscriptions/{SUBSCRIPTION}/providers/Microsoft.Storage/checkNameAvailability"
        )))
        .and(body_json(json!({
            "name": "examplesa",
            "type": "Microsoft.Storage/storageAccounts"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "nameAvailable": false,
            "reason": "AlreadyExists",
            "message": "The storage account named examplesa is already taken."
        })))
        .mount(&server)
        .await;

    let client = StorageAccountsClient::new(&create_config(&server));
    let response = client
        .check_name_availability(
            &SubscriptionId::new(SUBSCRIPTION),
            &StorageAccountCheckNameAvailabilityParameters::new("examplesa"),
        )
        .await
        .unwrap();

    assert_eq!(response.model.unwrap().name_available, Some(false));
}

#[tokio::test]
async fn test_storage_delete_of_missing_account_succeeds() {
    let server = MockServer::start().await;
    let id = StorageAccountId::new(SUBSCRIPTION, "example-rg", "gone");
    Mock::given(method("DELETE"))
        .and(path(id.id()))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = StorageAccountsClient::new(&create_config(&server));
    let response = client.delete(&id).await.unwrap();

    assert_eq!(response.status(), 204);
    assert!(response.model.is_none());
}

#[tokio::test]
async fn test_api_version_override() {
    let server = MockServer::start().await;
    let id = StorageAccountId::new(SUBSCRIPTION, "example-rg", "examplesa");
    Mock::given(method("GET"))
        .and(path(id.id()))
        .and(query_param("api-version", "2022-09-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"location": "westeurope"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = StorageAccountsClient::with_api_version(
        &create_config(&server),
        ApiVersion::new("2022-09-01").unwrap(),
    );
    client
        .get_properties(&id, GetPropertiesOperationOptions::default())
        .await
        .unwrap();
}

// === Key Vault ===

#[tokio::test]
async fn test_key_vault_create_waits_for_dns_registration() {
    let server = MockServer::start().await;
    let id = KeyVaultId::new(SUBSCRIPTION, "example-rg", "example-kv");
    let vault = |state: &str| {
        json!({
            "id": id.id(),
            "name": "example-kv",
            "location": "westeurope",
            "properties": {
                "tenantId": "00000000-0000-0000-0000-000000000000",
                "sku": {"family": "A", "name": "standard"},
                "provisioningState": state
            }
        })
    };
    Mock::given(method("PUT"))
        .and(path(id.id()))
        .and(query_param("api-version", "2023-07-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vault("RegisteringDns")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(id.id()))
        .respond_with(ResponseTemplate::new(200).set_body_json(vault("RegisteringDns")))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(id.id()))
        .respond_with(ResponseTemplate::new(200).set_body_json(vault("Succeeded")))
        .mount(&server)
        .await;

    let client = VaultsClient::new(&create_config(&server));
    let input = VaultCreateOrUpdateParameters {
        location: "westeurope".to_string(),
        properties: VaultProperties {
            access_policies: Some(Vec::new()),
            create_mode: None,
            enable_purge_protection: None,
            enable_rbac_authorization: Some(true),
            enable_soft_delete: None,
            enabled_for_deployment: None,
            enabled_for_disk_encryption: None,
            enabled_for_template_deployment: None,
            network_acls: None,
            provisioning_state: None,
            public_network_access: None,
            sku: VaultSku {
                family: SkuFamily::A,
                name: VaultSkuName::Standard,
            },
            soft_delete_retention_in_days: Some(7),
            tenant_id: "00000000-0000-0000-0000-000000000000".to_string(),
            vault_uri: None,
        },
        tags: None,
    };

    assert_ok!(client.create_or_update_then_poll(&id, &input).await);

    let gets = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.method == wiremock::http::Method::Get)
        .count();
    assert_eq!(gets, 2);
}

// === Fluid Relay ===

#[tokio::test]
async fn test_fluid_relay_regenerate_key() {
    let server = MockServer::start().await;
    let id = FluidRelayServerId::new(SUBSCRIPTION, "example-rg", "relay");
    Mock::given(method("POST"))
        .and(path(format!("{}/regenerateKey", id.id())))
        .and(query_param("api-version", "2022-05-26"))
        .and(body_json(json!({"keyName": "key1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key1": "new-primary",
            "key2": "secondary"
        })))
        .mount(&server)
        .await;

    let client = FluidRelayServersClient::new(&create_config(&server));
    let keys = client
        .regenerate_key(
            &id,
            &RegenerateKeyRequest {
                key_name: KeyName::Key1,
            },
        )
        .await
        .unwrap()
        .into_model()
        .unwrap();

    assert_eq!(keys.key1.as_deref(), Some("new-primary"));
}

#[tokio::test]
async fn test_fluid_relay_list_keys_without_body() {
    let server = MockServer::start().await;
    let id = FluidRelayServerId::new(SUBSCRIPTION, "example-rg", "relay");
    Mock::given(method("POST"))
        .and(path(format!("{}/listKeys", id.id())))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key1": "primary",
            "key2": "secondary"
        })))
        .mount(&server)
        .await;

    let client = FluidRelayServersClient::new(&create_config(&server));
    let keys = client.list_keys(&id).await.unwrap().into_model().unwrap();

    assert_eq!(keys.key2.as_deref(), Some("secondary"));
    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

// === Event Grid ===

#[tokio::test]
async fn test_topic_delete_then_poll() {
    let server = MockServer::start().await;
    let id = TopicId::new(SUBSCRIPTION, "example-rg", "orders");
    let operation_path = "/subscriptions/1/providers/Microsoft.EventGrid/locations/westus2/operationsStatus/op";
    Mock::given(method("DELETE"))
        .and(path(id.id()))
        .and(query_param("api-version", "2022-06-15"))
        .respond_with(ResponseTemplate::new(202).insert_header(
            "Azure-AsyncOperation",
            format!("{}{operation_path}?api-version=2022-06-15", server.uri()).as_str(),
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(operation_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "Deleting"})))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(operation_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "Succeeded"})))
        .mount(&server)
        .await;

    let client = TopicsClient::new(&create_config(&server));
    assert_ok!(client.delete_then_poll(&id).await);
}

#[tokio::test]
async fn test_topic_list_passes_filter_and_top() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!(
            "/subscriptions/{SUBSCRIPTION}/resourceGroups/example-rg/providers/Microsoft.EventGrid/topics"
        )))
        .and(query_param("$filter", "contains(name, 'orders')"))
        .and(query_param("$top", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"name": "orders", "location": "westus2"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TopicsClient::new(&create_config(&server));
    let result = client
        .list_by_resource_group_complete(
            &ResourceGroupId::new(SUBSCRIPTION, "example-rg"),
            ListByResourceGroupOperationOptions {
                filter: Some("contains(name, 'orders')".to_string()),
                top: Some(10),
            },
        )
        .await
        .unwrap();

    assert_eq!(result[0].name.as_deref(), Some("orders"));
}

// === Healthcare APIs ===

#[tokio::test]
async fn test_healthcare_service_create_failure() {
    let server = MockServer::start().await;
    let id = ServiceId::new(SUBSCRIPTION, "example-rg", "fhir");
    let operation_path = "/providers/Microsoft.HealthcareApis/locations/westus2/operationresults/op";
    Mock::given(method("PUT"))
        .and(path(id.id()))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header(
                    "Azure-AsyncOperation",
                    format!("{}{operation_path}", server.uri()).as_str(),
                )
                .set_body_json(json!({
                    "kind": "fhir-R4",
                    "location": "westus2",
                    "properties": {"provisioningState": "Creating"}
                })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(operation_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "Failed",
            "error": {"code": "ServiceNameUnavailable", "message": "The name fhir is taken."}
        })))
        .mount(&server)
        .await;

    let client = ServicesClient::new(&create_config(&server));
    let input = ServicesDescription {
        etag: None,
        id: None,
        identity: None,
        kind: FhirKind::FhirR4,
        location: "westus2".to_string(),
        name: None,
        properties: None,
        system_data: None,
        tags: None,
        resource_type: None,
    };

    let err = client
        .create_or_update_then_poll(&id, &input)
        .await
        .unwrap_err();

    assert!(matches!(err, ArmError::Poller(_)));
    assert!(err.to_string().contains("ServiceNameUnavailable"));
}

#[tokio::test]
async fn test_healthcare_service_delete_then_poll() {
    let server = MockServer::start().await;
    let id = ServiceId::new(SUBSCRIPTION, "example-rg", "fhir");
    Mock::given(method("DELETE"))
        .and(path(id.id()))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(id.id()))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = ServicesClient::new(&create_config(&server));
    assert_ok!(client.delete_then_poll(&id).await);
}
