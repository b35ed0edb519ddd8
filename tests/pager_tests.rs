//! Integration tests for `nextLink` paging.

use std::time::Duration;

use azure_arm::commonids::ResourceGroupId;
use azure_arm::services::storage::v2023_01_01::storage_accounts::{
    StorageAccount, StorageAccountOperationPredicate, StorageAccountsClient,
};
use azure_arm::{AccessToken, ArmConfig, Credential, Endpoint};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LIST_PATH: &str =
    "/subscriptions/1/resourceGroups/example-rg/providers/Microsoft.Storage/storageAccounts";

fn create_client(server: &MockServer) -> StorageAccountsClient {
    let config = ArmConfig::builder()
        .credential(Credential::Static(AccessToken::new("test-token")))
        .resource_manager_endpoint(Endpoint::new(server.uri()).unwrap())
        .poll_interval(Duration::from_millis(10))
        .build()
        .unwrap();
    StorageAccountsClient::new(&config)
}

fn resource_group() -> ResourceGroupId {
    ResourceGroupId::new("1", "example-rg")
}

fn account(name: &str) -> serde_json::Value {
    json!({
        "id": format!("{LIST_PATH}/{name}"),
        "name": name,
        "type": "Microsoft.Storage/storageAccounts",
        "location": "westeurope",
        "kind": "StorageV2"
    })
}

fn names(items: &[StorageAccount]) -> Vec<&str> {
    items.iter().filter_map(|a| a.name.as_deref()).collect()
}

#[tokio::test]
async fn test_collect_all_follows_next_link() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .and(query_param("api-version", "2023-01-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [account("one"), account("two")],
            "nextLink": format!("{}/page-2?$skipToken=abc", server.uri())
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page-2"))
        .and(query_param("$skipToken", "abc"))
        .and(query_param("api-version", "2023-01-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [account("three")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client
        .list_by_resource_group_complete(&resource_group())
        .await
        .unwrap();

    assert_eq!(names(&result), vec!["one", "two", "three"]);
    assert_eq!(
        result.latest_http_response.as_ref().map(|r| r.code),
        Some(200)
    );
}

#[tokio::test]
async fn test_odata_next_link_is_followed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [account("one")],
            "@odata.nextLink": format!("{}/page-2", server.uri())
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [account("two")],
            "@odata.nextLink": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client
        .list_by_resource_group_complete(&resource_group())
        .await
        .unwrap();

    assert_eq!(names(&result), vec!["one", "two"]);
}

#[tokio::test]
async fn test_repeated_next_link_stops_paging() {
    let server = MockServer::start().await;
    let page_two = format!("{}/page-2", server.uri());
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [account("one")],
            "nextLink": page_two
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [account("two")],
            "nextLink": page_two
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client
        .list_by_resource_group_complete(&resource_group())
        .await
        .unwrap();

    assert_eq!(names(&result), vec!["one", "two"]);
}

#[tokio::test]
async fn test_collect_matching_predicate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [account("one"), account("two"), account("three")]
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let predicate = StorageAccountOperationPredicate {
        name: Some("two".to_string()),
        ..Default::default()
    };
    let result = client
        .list_by_resource_group_complete_matching_predicate(&resource_group(), predicate)
        .await
        .unwrap();

    assert_eq!(names(&result), vec!["two"]);
}

#[tokio::test]
async fn test_next_page_reads_one_page_at_a_time() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [account("one")],
            "nextLink": format!("{}/page-2", server.uri())
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": []})))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let mut pager = client.list_by_resource_group(&resource_group());

    let first = pager.next_page().await.unwrap().unwrap();
    assert_eq!(names(&first), vec!["one"]);
    assert!(pager.latest_http_response().is_some());

    let second = pager.next_page().await.unwrap().unwrap();
    assert!(second.is_empty());

    assert!(pager.next_page().await.unwrap().is_none());
    assert!(pager.next_page().await.unwrap().is_none());
}

#[tokio::test]
async fn test_page_that_does_not_decode_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"name": "missing-location"}]
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = client
        .list_by_resource_group_complete(&resource_group())
        .await
        .unwrap_err();

    assert!(matches!(err, azure_arm::ArmError::Deserialize { .. }));
}

#[tokio::test]
async fn test_closure_predicate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [account("alpha"), account("beta"), account("alps")]
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client
        .list_by_resource_group(&resource_group())
        .collect_matching(|a: &StorageAccount| {
            a.name.as_deref().is_some_and(|n| n.starts_with("al"))
        })
        .await
        .unwrap();

    assert_eq!(names(&result.into_items()), vec!["alpha", "alps"]);
}
