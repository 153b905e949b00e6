//! Tests for the Global Search client

use super::*;
use crate::config::ServiceConfig;
use crate::error::Error;
use crate::http::{HttpClient, HttpClientConfig, SDK_ANALYTICS_HEADER};
use crate::pagination::{ListOptions, PageFetcher};
use crate::record::ExtensibleRecord;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service(server: &MockServer) -> GlobalSearchV2 {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .no_rate_limit()
        .max_retries(0)
        .build();
    GlobalSearchV2::new(HttpClient::with_config(config).unwrap())
}

#[test]
fn test_search_options_builder() {
    let options = SearchOptions::new()
        .query("name:vm*")
        .fields(["name", "crn"])
        .account_id("acc-1")
        .limit(10)
        .timeout(500)
        .sort(["name", "-family"])
        .transaction_id("tx-1")
        .header("X-Test", "1");

    assert_eq!(options.query.as_deref(), Some("name:vm*"));
    assert_eq!(
        options.fields,
        Some(vec!["name".to_string(), "crn".to_string()])
    );
    assert_eq!(options.limit, Some(10));
    assert_eq!(options.headers.len(), 1);
    assert!(options.cursor().is_none());
}

#[test]
fn test_search_options_cursor() {
    let mut options = SearchOptions::new().search_cursor("abc");
    assert_eq!(options.cursor(), Some("abc"));

    options.set_cursor(None);
    assert!(options.search_cursor.is_none());
}

#[test]
fn test_result_item_keeps_requested_fields() {
    let item: ResultItem = serde_json::from_value(json!({
        "crn": "crn:v1:bluemix:public:vm:us-south:a/acc-1::instance:1",
        "name": "my-vm",
        "tags": ["env:prod"]
    }))
    .unwrap();

    assert_eq!(
        item.crn.as_deref(),
        Some("crn:v1:bluemix:public:vm:us-south:a/acc-1::instance:1")
    );
    assert_eq!(item.get_property("name"), Some(&json!("my-vm")));
    assert_eq!(item.get_property("tags"), Some(&json!(["env:prod"])));
    assert!(item.get_property("crn").is_none());
}

#[tokio::test]
async fn test_search_request_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/resources/search"))
        .and(query_param("account_id", "acc-1"))
        .and(query_param("limit", "2"))
        .and(query_param("sort", "name,-family"))
        .and(header("transaction-id", "tx-1"))
        .and(header(
            SDK_ANALYTICS_HEADER,
            "service_name=global_search;service_version=V2;operation_id=Search",
        ))
        .and(body_json(json!({
            "query": "name:vm*",
            "fields": ["name"],
            "search_cursor": "cur-1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "search_cursor": "cur-2",
            "limit": 2,
            "items": [{"crn": "crn:1", "name": "vm-1"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = SearchOptions::new()
        .query("name:vm*")
        .fields(["name"])
        .search_cursor("cur-1")
        .account_id("acc-1")
        .limit(2)
        .sort(["name", "-family"])
        .transaction_id("tx-1");

    let result = service(&server).search(&options).await.unwrap();

    assert_eq!(result.search_cursor.as_deref(), Some("cur-2"));
    assert_eq!(result.limit, Some(2.0));
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].crn.as_deref(), Some("crn:1"));
    assert_eq!(result.items[0].get_property("name"), Some(&json!("vm-1")));
}

#[tokio::test]
async fn test_get_supported_types() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/resources/supported_types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "supported_types": ["cf-space", "resource-instance"]
        })))
        .mount(&server)
        .await;

    let types = service(&server).get_supported_types().await.unwrap();
    assert_eq!(types.supported_types, vec!["cf-space", "resource-instance"]);
}

#[tokio::test]
async fn test_search_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/resources/search"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad query"))
        .mount(&server)
        .await;

    let err = service(&server)
        .search(&SearchOptions::new().query("("))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 400, .. }));
}

#[tokio::test]
async fn test_fetch_page_locators() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/resources/search"))
        .and(body_json(json!({"query": "full"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "search_cursor": "next-cursor",
            "items": [{"crn": "crn:1"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v3/resources/search"))
        .and(body_json(json!({"query": "empty"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "search_cursor": "still-a-cursor",
            "items": []
        })))
        .mount(&server)
        .await;

    let service = service(&server);

    let page = service
        .fetch_page(&SearchOptions::new().query("full"))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.next, Some(crate::pagination::NextLocator::token("next-cursor")));

    let page = service
        .fetch_page(&SearchOptions::new().query("empty"))
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert!(!page.has_next());
}

#[test]
fn test_new_search_pager_rejects_cursor() {
    let client = HttpClient::with_config(HttpClientConfig::default()).unwrap();
    let service = GlobalSearchV2::new(client);

    let err = service
        .new_search_pager(&SearchOptions::new().search_cursor("abc"))
        .unwrap_err();
    assert!(matches!(err, Error::Config { .. }));

    let pager = service.new_search_pager(&SearchOptions::new()).unwrap();
    assert!(pager.has_next());
}

#[test]
fn test_from_config_uses_default_url() {
    let service = GlobalSearchV2::from_config(&ServiceConfig::default()).unwrap();
    assert_eq!(
        service.client().config().base_url.as_deref(),
        Some(DEFAULT_SERVICE_URL)
    );
}
