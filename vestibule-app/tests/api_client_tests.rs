mod common;

use std::sync::Arc;
use std::time::Duration;

use common::unreachable_base_url;
use serde_json::{Value, json};
use vestibule_app::infra::api_client::{ApiClient, ApiErrorKind};
use vestibule_app::infra::storage::{
    AUTH_TOKEN_KEY, MemoryTokenStorage, TokenStorage,
};
use vestibule_model::{ApiErrorResponse, RequestOptions};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(base_url, Arc::new(MemoryTokenStorage::new()))
}

fn client_with(base_url: &str, options: RequestOptions) -> ApiClient {
    ApiClient::with_options(
        base_url,
        options,
        Arc::new(MemoryTokenStorage::new()),
    )
}

#[tokio::test]
async fn success_is_wrapped_in_an_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "all good", "uptime": 42 })),
        )
        .mount(&server)
        .await;

    let response = client(&server.uri())
        .get::<Value>("/status")
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.message, "all good");
    assert_eq!(response.data["uptime"], 42);
}

#[tokio::test]
async fn envelope_message_falls_back_to_reason_phrase() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/things"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([1, 2])))
        .mount(&server)
        .await;

    let response = client(&server.uri())
        .post::<Vec<u8>, _>("/things", Some(&json!({ "name": "thing" })))
        .await
        .unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(response.message, "Created");
    assert_eq!(response.data, vec![1, 2]);
}

#[tokio::test]
async fn empty_body_decodes_as_unit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let response = client(&server.uri())
        .post_empty::<()>("/auth/logout")
        .await
        .unwrap();

    assert_eq!(response.status, 204);
    assert_eq!(response.message, "No Content");
}

#[tokio::test]
async fn server_error_keeps_message_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation failed",
            "status": 422,
            "errors": { "email": ["is invalid"] }
        })))
        .mount(&server)
        .await;

    let err = client(&server.uri())
        .post_empty::<Value>("/auth/register")
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Server { status: 422 });
    assert_eq!(err.status(), Some(422));
    assert_eq!(err.to_string(), "Validation failed");

    let body: ApiErrorResponse =
        serde_json::from_value(err.data.expect("error body kept")).unwrap();
    assert_eq!(
        body.errors.unwrap()["email"],
        vec!["is invalid".to_string()]
    );
}

#[tokio::test]
async fn server_error_without_body_uses_reason_phrase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client(&server.uri())
        .get::<Value>("/auth/me")
        .await
        .unwrap_err();

    assert_eq!(err.message, "Service Unavailable");
    assert!(err.data.is_none());
}

#[tokio::test]
async fn stored_token_and_extra_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer abc"))
        .and(header("x-client", "vestibule"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let storage = Arc::new(MemoryTokenStorage::new());
    storage.set_item(AUTH_TOKEN_KEY, "abc").unwrap();
    let client = ApiClient::with_options(
        &server.uri(),
        RequestOptions::default().with_header("X-Client", "vestibule"),
        storage,
    );

    client.get::<Value>("/auth/me").await.unwrap();
}

#[tokio::test]
async fn posts_are_never_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        client_with(&server.uri(), RequestOptions::default().with_retries(3));
    let err = client.post_empty::<Value>("/auth/login").await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn server_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        client_with(&server.uri(), RequestOptions::default().with_retries(2));
    assert!(client.get::<Value>("/auth/me").await.is_err());
}

#[tokio::test]
async fn network_errors_surface_after_retries() {
    let client = client_with(
        &unreachable_base_url(),
        RequestOptions::default().with_retries(2),
    );
    let err = client.get::<Value>("/auth/me").await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Network);
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn slow_responses_time_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = client_with(
        &server.uri(),
        RequestOptions::default().with_timeout(Duration::from_millis(100)),
    );
    let err = client.get::<Value>("/auth/me").await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Network);
    assert_eq!(err.message, "Request timed out");
}
