mod support;

use hotspot_client::{ApiClient, ApiError, RequestOptions};
use hotspot_models::SearchResult;
use serde_json::json;

#[tokio::test]
async fn decodes_success_body_into_requested_type() {
    let mut server = support::serve_json(
        200,
        json!([{
            "label": "Carlton, 3053",
            "suburb": "Carlton",
            "postcode": "3053",
            "lga": "Melbourne",
            "risk_score": 0.42
        }]),
    )
    .await;
    let api = ApiClient::new(&server.base_url);

    let results: Vec<SearchResult> = api
        .request("/search", RequestOptions::get().with_query("q", "carlton"))
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].postcode, "3053");

    let request = server.next_request().await;
    assert_eq!(request.request_line(), "GET /api/v1/search?q=carlton HTTP/1.1");
    assert_eq!(request.header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn non_success_status_is_an_api_error() {
    let server = support::serve_json(404, json!({ "detail": "Postcode 9999 not found" })).await;
    let api = ApiClient::new(&server.base_url);

    let err = api
        .get::<serde_json::Value>("/postcode/9999/feed")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "API request failed: 404");
}

#[tokio::test]
async fn server_error_is_an_api_error() {
    let server = support::serve_json(500, json!({})).await;
    let api = ApiClient::new(&server.base_url);

    let err = api.get::<serde_json::Value>("/stats/summary").await.unwrap_err();

    assert!(matches!(err, ApiError::Api { status: 500, .. }));
}

#[tokio::test]
async fn malformed_json_is_a_network_error() {
    let server = support::serve(vec![(200, "{ not json".to_string())]).await;
    let api = ApiClient::new(&server.base_url);

    let err = api.get::<serde_json::Value>("/search").await.unwrap_err();

    assert!(matches!(err, ApiError::Network { .. }), "got {err:?}");
    assert!(err.to_string().starts_with("Network error: "));
}

#[tokio::test]
async fn mismatched_payload_is_a_network_error() {
    let server = support::serve_json(200, json!({ "unexpected": true })).await;
    let api = ApiClient::new(&server.base_url);

    let err = api.get::<Vec<SearchResult>>("/search").await.unwrap_err();

    assert!(matches!(err, ApiError::Network { .. }), "got {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let api = ApiClient::new(format!("http://{addr}/api/v1"));

    let err = api.get::<serde_json::Value>("/search").await.unwrap_err();

    assert!(matches!(err, ApiError::Network { .. }), "got {err:?}");
}

#[tokio::test]
async fn caller_headers_override_defaults_on_the_wire() {
    let mut server = support::serve_json(200, json!({ "ok": true })).await;
    let api = ApiClient::new(&server.base_url);

    let options = RequestOptions::post_json(&json!({ "hello": "world" }))
        .unwrap()
        .with_header("Content-Type", "application/vnd.hotspot+json")
        .with_header("X-Client", "cli");
    let _: serde_json::Value = api.request("/contact", options).await.unwrap();

    let request = server.next_request().await;
    assert!(request.request_line().starts_with("POST /api/v1/contact "));
    assert_eq!(
        request.header("content-type"),
        Some("application/vnd.hotspot+json")
    );
    assert_eq!(request.header("x-client"), Some("cli"));
    assert_eq!(request.body, r#"{"hello":"world"}"#);
}
