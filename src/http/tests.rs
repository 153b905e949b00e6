//! Tests for the HTTP transport module

use super::*;
use crate::error::Error;
use crate::types::BackoffType;
use reqwest::Method;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_config(server: &MockServer) -> HttpClientConfig {
    HttpClientConfig::builder()
        .base_url(server.uri())
        .no_rate_limit()
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(5),
            Duration::from_millis(20),
        )
        .build()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_retries, 3);
    assert!(config.base_url.is_none());
    assert!(config.bearer_token.is_none());
    assert!(config.rate_limit.is_some());
    assert!(config.user_agent.starts_with("platform-services-rust/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://resource-controller.cloud.ibm.com")
        .timeout(Duration::from_secs(60))
        .max_retries(5)
        .backoff(
            BackoffType::Linear,
            Duration::from_millis(200),
            Duration::from_secs(10),
        )
        .header("X-Custom", "value")
        .bearer_token("token-1")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(
        config.base_url.as_deref(),
        Some("https://resource-controller.cloud.ibm.com")
    );
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.max_retries, 5);
    assert_eq!(config.backoff_type, BackoffType::Linear);
    assert_eq!(config.initial_backoff, Duration::from_millis(200));
    assert_eq!(config.max_backoff, Duration::from_secs(10));
    assert_eq!(
        config.default_headers.get("X-Custom").map(String::as_str),
        Some("value")
    );
    assert_eq!(config.bearer_token.as_deref(), Some("token-1"));
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("limit", "10")
        .query_opt("start", Some("abc"))
        .query_opt::<String>("name", None)
        .header("transaction-id", "gst-1")
        .headers(sdk_headers("resource_controller", "V2", "ListResourceKeys"))
        .json(serde_json::json!({"key": "value"}))
        .timeout(Duration::from_secs(10))
        .retries(2);

    assert_eq!(config.query.get("limit").map(String::as_str), Some("10"));
    assert_eq!(config.query.get("start").map(String::as_str), Some("abc"));
    assert!(!config.query.contains_key("name"));
    assert_eq!(config.headers.len(), 2);
    assert!(config.headers.contains_key(SDK_ANALYTICS_HEADER));
    assert!(config.body.is_some());
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
    assert_eq!(config.max_retries, Some(2));
}

#[tokio::test]
async fn test_get_json_with_query_and_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/resource_instances"))
        .and(query_param("limit", "2"))
        .and(header("Authorization", "Bearer token-1"))
        .and(header("X-Default", "yes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rows_count": 0,
            "resources": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = mock_config(&mock_server);
    config.bearer_token = Some("token-1".to_string());
    config
        .default_headers
        .insert("X-Default".to_string(), "yes".to_string());

    let client = HttpClient::with_config(config).unwrap();
    let body: serde_json::Value = client
        .get_json("/v2/resource_instances", RequestConfig::new().query("limit", "2"))
        .await
        .unwrap();

    assert_eq!(body["rows_count"], 0);
}

#[tokio::test]
async fn test_post_json_sends_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/resources/search"))
        .and(body_json(serde_json::json!({"query": "name:vm*"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": []
        })))
        .mount(&mock_server)
        .await;

    let client = HttpClient::with_config(mock_config(&mock_server)).unwrap();
    let body: serde_json::Value = client
        .post_json(
            "v3/resources/search",
            RequestConfig::new().json(serde_json::json!({"query": "name:vm*"})),
        )
        .await
        .unwrap();

    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/resource_keys/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::with_config(mock_config(&mock_server)).unwrap();
    let err = client
        .request(Method::GET, "/v2/resource_keys/missing", RequestConfig::new())
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "not found");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_retry_on_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let client = HttpClient::with_config(mock_config(&mock_server)).unwrap();
    let body: serde_json::Value = client.get_json("/flaky", RequestConfig::new()).await.unwrap();

    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_retries_exhausted_returns_last_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = HttpClient::with_config(mock_config(&mock_server)).unwrap();
    let err = client
        .request(Method::GET, "/down", RequestConfig::new().retries(2))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_rate_limited_then_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/busy"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "0"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/busy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let client = HttpClient::with_config(mock_config(&mock_server)).unwrap();
    let response = client
        .request(Method::GET, "/busy", RequestConfig::new())
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_rate_limited_without_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/busy"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "7"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::with_config(mock_config(&mock_server)).unwrap();
    let err = client
        .request(Method::GET, "/busy", RequestConfig::new().retries(0))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::RateLimited {
            retry_after_seconds: 7
        }
    ));
}

#[tokio::test]
async fn test_invalid_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/garbage"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::with_config(mock_config(&mock_server)).unwrap();
    let err = client
        .get_json::<serde_json::Value>("/garbage", RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_absolute_url_ignores_base() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/absolute"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url("http://unused.invalid")
        .no_rate_limit()
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let response = client
        .request(
            Method::GET,
            &format!("{}/absolute", mock_server.uri()),
            RequestConfig::new(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 204);
}

#[test]
fn test_calculate_backoff() {
    let cases = [
        (BackoffType::Constant, [100, 100, 100]),
        (BackoffType::Linear, [100, 200, 300]),
        (BackoffType::Exponential, [100, 200, 400]),
    ];

    for (backoff_type, expected) in cases {
        let config = HttpClientConfig::builder()
            .backoff(
                backoff_type,
                Duration::from_millis(100),
                Duration::from_secs(10),
            )
            .build();
        let client = HttpClient::with_config(config).unwrap();

        for (attempt, millis) in expected.iter().enumerate() {
            assert_eq!(
                client.calculate_backoff(attempt as u32),
                Duration::from_millis(*millis)
            );
        }
    }
}

#[test]
fn test_calculate_backoff_respects_max() {
    let config = HttpClientConfig::builder()
        .backoff(
            BackoffType::Exponential,
            Duration::from_secs(1),
            Duration::from_secs(5),
        )
        .build();
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(client.calculate_backoff(10), Duration::from_secs(5));
    assert_eq!(client.calculate_backoff(40), Duration::from_secs(5));
}

#[test]
fn test_http_client_debug_hides_token() {
    let config = HttpClientConfig::builder().bearer_token("secret").build();
    let client = HttpClient::with_config(config).unwrap();
    let debug = format!("{client:?}");

    assert!(debug.contains("has_bearer_token: true"));
    assert!(!debug.contains("secret"));
    assert!(client.has_rate_limiter());
}

// ============================================================================
// Path Encoding
// ============================================================================

#[test]
fn test_encode_path_keeps_plain_segments() {
    assert_eq!(
        encode_path(&["v2", "resource_instances", "inst-1", "lock"]).unwrap(),
        "v2/resource_instances/inst-1/lock"
    );
}

#[test]
fn test_encode_path_escapes_reserved_characters() {
    assert_eq!(
        encode_path(&["v2", "resource_keys", "crn:v1:a/acc:guid::"]).unwrap(),
        "v2/resource_keys/crn:v1:a%2Facc:guid::"
    );
    assert_eq!(
        encode_path(&["v2", "resource_keys", "a?b#c d"]).unwrap(),
        "v2/resource_keys/a%3Fb%23c%20d"
    );
}
