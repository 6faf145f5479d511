mod common;

use common::FakeBackend;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use serde_json::json;
use std::sync::Arc;
use taptable_client::{
    ApiClient, ClientError, MemoryTokenStore, Navigator, RecordingNavigator, RequestOptions,
    TOKEN_KEY, TokenStore,
};

fn message_of(err: &ClientError) -> String {
    match err {
        ClientError::Api { message, .. } => message.clone(),
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_success_returns_body_unchanged() {
    let backend = FakeBackend::start().await;
    let tables = json!([{"id": 1, "number": "5", "seats": 4, "extra": {"nested": true}}]);
    backend.respond("GET", "/api/tables", 200, tables.clone());

    let client = backend.client();
    let body = client
        .request("api/tables", RequestOptions::get())
        .await
        .unwrap();
    assert_eq!(body, Some(tables));
    assert_eq!(backend.last_request().path, "/api/tables");
}

#[tokio::test]
async fn test_empty_or_non_json_body_is_none() {
    let backend = FakeBackend::start().await;
    backend.respond_raw("POST", "/api/menu/reclassify/1", 200, "");
    backend.respond_raw("GET", "/api/health", 200, "<html>ok</html>");

    let client = backend.client();
    let empty = client
        .request("/api/menu/reclassify/1", RequestOptions::post())
        .await
        .unwrap();
    assert_eq!(empty, None);

    let html = client
        .request("/api/health", RequestOptions::get())
        .await
        .unwrap();
    assert_eq!(html, None);
}

#[tokio::test]
async fn test_unauthorized_clears_token() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/orders", 401, json!({"error": "Invalid token"}));

    let client = backend.client();
    client.set_token("stale").unwrap();

    let err = client
        .request("/api/orders", RequestOptions::get())
        .await
        .unwrap_err();
    assert!(err.is_auth_failure());
    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    assert_eq!(err.to_string(), "Invalid token");
    assert_eq!(client.token(), None);

    // The next call goes out unauthenticated
    let _ = client.request("/api/orders", RequestOptions::get()).await;
    assert_eq!(backend.last_request().header("authorization"), None);
}

#[tokio::test]
async fn test_forbidden_clears_token() {
    let backend = FakeBackend::start().await;
    backend.respond_raw("GET", "/api/settings", 403, "");

    let client = backend.client();
    client.set_token("t").unwrap();

    let err = client.get_settings().await.unwrap_err();
    assert!(err.is_auth_failure());
    assert_eq!(message_of(&err), "HTTP 403");
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_status_messages() {
    let backend = FakeBackend::start().await;
    backend.respond_raw("POST", "/api/tables", 400, "");
    backend.respond_raw("GET", "/api/restaurants/9", 404, "");
    backend.respond_raw("GET", "/api/orders", 500, "");
    backend.respond("GET", "/api/settings", 500, json!({"error": "db down"}));
    backend.respond_raw("GET", "/api/health", 418, "");

    let client = backend.client();

    let err = client
        .request("/api/tables", RequestOptions::post())
        .await
        .unwrap_err();
    assert_eq!(message_of(&err), "Invalid input. Please check your data.");

    let err = client.get_restaurant(9).await.unwrap_err();
    assert_eq!(message_of(&err), "Resource not found.");

    let err = client.get_orders().await.unwrap_err();
    assert_eq!(message_of(&err), "Server error. Please try again later.");

    let err = client.get_settings().await.unwrap_err();
    assert_eq!(message_of(&err), "db down");
    assert!(matches!(
        err,
        ClientError::Api { body: Some(ref b), .. } if b["error"] == "db down"
    ));

    let err = client.health_check().await.unwrap_err();
    assert_eq!(message_of(&err), "HTTP 418");
}

#[tokio::test]
async fn test_bearer_header_follows_token() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/tables", 200, json!([]));

    let client = backend.client();

    client.get_tables().await.unwrap();
    let request = backend.last_request();
    assert_eq!(request.header("authorization"), None);
    assert_eq!(request.header("content-type"), Some("application/json"));

    client.set_token("abc").unwrap();
    client.get_tables().await.unwrap();
    assert_eq!(
        backend.last_request().header("authorization"),
        Some("Bearer abc")
    );

    client.clear_token().unwrap();
    client.get_tables().await.unwrap();
    assert_eq!(backend.last_request().header("authorization"), None);
}

#[tokio::test]
async fn test_caller_headers_override_defaults() {
    let backend = FakeBackend::start().await;
    backend.respond("POST", "/api/orders", 200, json!({"ok": true}));

    let client = backend.client();
    client.set_token("session").unwrap();

    let options = RequestOptions::post()
        .json(&json!({"a": 1}))
        .unwrap()
        .header(AUTHORIZATION, HeaderValue::from_static("Bearer override"))
        .header(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    client.request("/api/orders", options).await.unwrap();

    let request = backend.last_request();
    assert_eq!(request.header("authorization"), Some("Bearer override"));
    assert_eq!(request.header("content-type"), Some("text/plain"));
    assert_eq!(request.json(), json!({"a": 1}));
}

#[tokio::test]
async fn test_query_pairs_appended_in_order() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/orders", 200, json!([]));

    let client = backend.client();
    let options = RequestOptions::get().query(vec![
        ("status".to_string(), "pending".to_string()),
        ("page".to_string(), "2".to_string()),
    ]);
    client.request("/api/orders", options).await.unwrap();

    assert_eq!(
        backend.last_request().query.as_deref(),
        Some("status=pending&page=2")
    );
}

#[tokio::test]
async fn test_clients_sharing_store_see_each_others_token() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/tables", 200, json!([]));

    let store = Arc::new(MemoryTokenStore::new());
    let first = ApiClient::builder()
        .config(backend.config())
        .token_store(store.clone())
        .build()
        .unwrap();
    let second = ApiClient::builder()
        .config(backend.config())
        .token_store(store)
        .build()
        .unwrap();

    first.set_token("shared").unwrap();
    second.get_tables().await.unwrap();
    assert_eq!(
        backend.last_request().header("authorization"),
        Some("Bearer shared")
    );
    assert_eq!(second.token().as_deref(), Some("shared"));

    first.clear_token().unwrap();
    second.get_tables().await.unwrap();
    assert_eq!(backend.last_request().header("authorization"), None);
}

#[tokio::test]
async fn test_rejected_admin_session_redirects_to_login() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/orders", 401, json!({"error": "expired"}));

    let navigator = Arc::new(RecordingNavigator::at("/admin/orders"));
    let client = ApiClient::builder()
        .config(backend.config())
        .navigator(navigator.clone())
        .build()
        .unwrap();
    client.set_token("expired").unwrap();

    client.get_orders().await.unwrap_err();
    assert_eq!(navigator.redirects(), vec!["/admin/login".to_string()]);
    assert_eq!(navigator.current_path(), Some("/admin/login".to_string()));
}

#[tokio::test]
async fn test_no_redirect_outside_admin_or_without_token() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/orders", 401, json!({"error": "expired"}));

    // Customer page
    let navigator = Arc::new(RecordingNavigator::at("/menu/1/table_4"));
    let client = ApiClient::builder()
        .config(backend.config())
        .navigator(navigator.clone())
        .build()
        .unwrap();
    client.set_token("t").unwrap();
    client.get_orders().await.unwrap_err();
    assert!(navigator.redirects().is_empty());
    assert!(!client.is_authenticated());

    // Already on the login page
    let navigator = Arc::new(RecordingNavigator::at("/admin/login"));
    let client = ApiClient::builder()
        .config(backend.config())
        .navigator(navigator.clone())
        .build()
        .unwrap();
    client.set_token("t").unwrap();
    client.get_orders().await.unwrap_err();
    assert!(navigator.redirects().is_empty());

    // No session to end
    let navigator = Arc::new(RecordingNavigator::at("/admin/orders"));
    let client = ApiClient::builder()
        .config(backend.config())
        .navigator(navigator.clone())
        .build()
        .unwrap();
    let err = client.get_orders().await.unwrap_err();
    assert!(err.is_auth_failure());
    assert!(navigator.redirects().is_empty());
}

#[tokio::test]
async fn test_custom_admin_section_and_token_key() {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/orders", 401, json!({"error": "expired"}));

    let store = Arc::new(MemoryTokenStore::new());
    let navigator = Arc::new(RecordingNavigator::at("/menu/1/table_2"));
    let client = ApiClient::builder()
        .config(
            backend
                .config()
                .with_admin_section("/dashboard", "/dashboard/signin")
                .with_token_key("owner_token"),
        )
        .token_store(store.clone())
        .navigator(navigator.clone())
        .build()
        .unwrap();

    client.set_token("t").unwrap();
    assert_eq!(store.load("owner_token").unwrap().as_deref(), Some("t"));
    assert_eq!(store.load(TOKEN_KEY).unwrap(), None);

    // The user moves into the dashboard before the session expires
    navigator.set_path("/dashboard/orders");
    client.get_orders().await.unwrap_err();

    assert_eq!(navigator.redirects(), vec!["/dashboard/signin".to_string()]);
    assert_eq!(store.load("owner_token").unwrap(), None);
}

#[tokio::test]
async fn test_network_failure_propagates() {
    // Grab a free port, then close it
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = ApiClient::new(
        taptable_client::ClientConfig::new().with_base_url(format!("http://127.0.0.1:{port}")),
    )
    .unwrap();
    client.set_token("kept").unwrap();

    let err = client.health_check().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
    assert_eq!(client.token().as_deref(), Some("kept"));
}
