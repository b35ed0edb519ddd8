//! Integration tests for Resource ID parsing, formatting and validation.

use azure_arm::commonids::{
    KeyVaultId, ResourceGroupId, ScopeId, StorageAccountId, SubnetId, SubscriptionId,
    VirtualNetworkId,
};
use azure_arm::resourceids::{validate_resource_id, ResourceIdError};
use azure_arm::services::eventgrid::v2022_06_15::topics::TopicId;
use azure_arm::services::fluidrelay::v2022_05_26::fluid_relay_servers::FluidRelayServerId;
use azure_arm::services::healthcareapis::v2022_12_01::services::ServiceId;
use azure_arm::ResourceId;
use serde::{Deserialize, Serialize};

const SUBSCRIPTION: &str = "12345678-1234-9876-4563-123456789012";

#[test]
fn test_every_common_id_round_trips() {
    let subscription = SubscriptionId::new(SUBSCRIPTION);
    assert_eq!(SubscriptionId::parse(&subscription.id()).unwrap(), subscription);

    let resource_group = ResourceGroupId::new(SUBSCRIPTION, "example-rg");
    assert_eq!(
        ResourceGroupId::parse(&resource_group.id()).unwrap(),
        resource_group
    );

    let vault = KeyVaultId::new(SUBSCRIPTION, "example-rg", "example-kv");
    assert_eq!(KeyVaultId::parse(&vault.id()).unwrap(), vault);

    let subnet = SubnetId::new(SUBSCRIPTION, "example-rg", "example-vnet", "internal");
    assert_eq!(SubnetId::parse(&subnet.id()).unwrap(), subnet);
    assert_eq!(
        subnet.virtual_network_id(),
        VirtualNetworkId::new(SUBSCRIPTION, "example-rg", "example-vnet")
    );
}

#[test]
fn test_service_ids_round_trip() {
    let topic = TopicId::new(SUBSCRIPTION, "example-rg", "orders");
    assert_eq!(TopicId::parse(&topic.id()).unwrap(), topic);

    let relay = FluidRelayServerId::new(SUBSCRIPTION, "example-rg", "relay");
    assert_eq!(FluidRelayServerId::parse(&relay.id()).unwrap(), relay);

    let service = ServiceId::new(SUBSCRIPTION, "example-rg", "fhir");
    assert_eq!(ServiceId::parse(&service.id()).unwrap(), service);
}

#[test]
fn test_parse_insensitively_normalises_static_segments() {
    let input = "/Subscriptions/1/ResourceGroups/Example-RG/Providers/MICROSOFT.STORAGE/StorageAccounts/SA";

    assert!(StorageAccountId::parse(input).is_err());

    let id = StorageAccountId::parse_insensitively(input).unwrap();
    assert_eq!(id.resource_group_name, "Example-RG");
    assert_eq!(id.storage_account_name, "SA");
    assert_eq!(
        id.id(),
        "/subscriptions/1/resourceGroups/Example-RG/providers/Microsoft.Storage/storageAccounts/SA"
    );
}

#[test]
fn test_wrong_resource_type_is_reported_with_an_example() {
    let err = KeyVaultId::parse(
        "/subscriptions/1/resourceGroups/rg/providers/Microsoft.Storage/storageAccounts/sa",
    )
    .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("Expected a Key Vault that matched"));
    assert!(message.contains(&format!(
        "/subscriptions/{SUBSCRIPTION}/resourceGroups/example-resource-group/providers/Microsoft.KeyVault/vaults/vaultName"
    )));
}

#[test]
fn test_trailing_segments_are_rejected() {
    let err = ResourceGroupId::parse("/subscriptions/1/resourceGroups/rg/providers/Microsoft.Web")
        .unwrap_err();

    match err {
        ResourceIdError::NumberOfSegmentsDidntMatch {
            expected,
            actual,
            segments,
            ..
        } => {
            assert_eq!(expected, 4);
            assert_eq!(actual, 6);
            assert!(segments.contains("Segment 0"));
        }
        other => panic!("expected NumberOfSegmentsDidntMatch, got: {other:?}"),
    }
}

#[test]
fn test_empty_input() {
    assert_eq!(
        SubscriptionId::parse("").unwrap_err(),
        ResourceIdError::Empty {
            display_name: "Subscription"
        }
    );
}

#[test]
fn test_scope_accepts_any_resource_id() {
    let inputs = [
        "/subscriptions/1",
        "/subscriptions/1/resourceGroups/rg",
        "/providers/Microsoft.Management/managementGroups/root",
    ];
    for input in inputs {
        let scope = ScopeId::parse(input).unwrap();
        assert_eq!(scope.id(), input);
    }
    assert_eq!(ScopeId::new("subscriptions/1").scope, "/subscriptions/1");
}

#[test]
fn test_scope_with_empty_component_is_rejected() {
    assert!(ScopeId::parse("/subscriptions//resourceGroups/rg").is_err());
    assert!(ScopeId::parse("/subscriptions/1/").is_err());
}

#[test]
fn test_validate_resource_id_collects_messages() {
    let ok = validate_resource_id::<TopicId>(
        "/subscriptions/1/resourceGroups/rg/providers/Microsoft.EventGrid/topics/orders",
        "topic_id",
    );
    assert!(ok.is_empty());

    let errors = validate_resource_id::<TopicId>("/subscriptions/1", "topic_id");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("topic_id: parsing"));
}

#[test]
fn test_display_lists_components() {
    let id = ResourceGroupId::new("1", "rg");
    assert_eq!(
        id.to_string(),
        "Resource Group (Subscription: \"1\"\nResource Group Name: \"rg\")"
    );
}

#[test]
fn test_from_str() {
    let id: StorageAccountId =
        "/subscriptions/1/resourceGroups/rg/providers/Microsoft.Storage/storageAccounts/sa"
            .parse()
            .unwrap();
    assert_eq!(id.storage_account_name, "sa");
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Assignment {
    scope: ScopeId,
    vault: KeyVaultId,
}

#[test]
fn test_ids_serialize_as_strings() {
    let assignment = Assignment {
        scope: ScopeId::new("/subscriptions/1"),
        vault: KeyVaultId::new("1", "rg", "kv"),
    };

    let value = serde_json::to_value(&assignment).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "scope": "/subscriptions/1",
            "vault": "/subscriptions/1/resourceGroups/rg/providers/Microsoft.KeyVault/vaults/kv"
        })
    );

    let back: Assignment = serde_json::from_value(serde_json::json!({
        "scope": "/subscriptions/1",
        "vault": "/subscriptions/1/resourcegroups/rg/providers/Microsoft.KeyVault/Vaults/kv"
    }))
    .unwrap();
    assert_eq!(back, assignment);
}

#[test]
fn test_invalid_id_fails_deserialization() {
    let result: Result<Assignment, _> = serde_json::from_value(serde_json::json!({
        "scope": "/subscriptions/1",
        "vault": "not-an-id"
    }));
    assert!(result.is_err());
}
