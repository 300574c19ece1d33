//! Shared fixtures for the integration tests
#![allow(dead_code)]

use std::net::TcpListener;
use std::path::Path;
use std::sync::Arc;

use serde_json::{Value, json};
use vestibule_app::app::bootstrap::{AppConfig, base_state};
use vestibule_app::infra::api_client::ApiClient;
use vestibule_app::infra::services::auth::{AuthService, HttpAuthService};
use vestibule_app::infra::storage::{
    FileTokenStorage, MemoryTokenStorage, TokenStorage,
};
use vestibule_app::infra::testing::stubs::StubAuthService;
use vestibule_app::state::State;
use vestibule_model::{RequestOptions, User};

pub const EMAIL: &str = "test@example.com";
pub const PASSWORD: &str = "password123";
pub const TOKEN: &str = "mock-jwt-token";

pub fn john_doe_json() -> Value {
    json!({
        "id": "1",
        "email": EMAIL,
        "firstName": "John",
        "lastName": "Doe",
        "role": "user",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z",
        "isActive": true
    })
}

pub fn john_doe() -> User {
    serde_json::from_value(john_doe_json()).expect("fixture user parses")
}

pub fn login_response_json() -> Value {
    json!({
        "user": john_doe_json(),
        "token": TOKEN,
        "refreshToken": "mock-refresh-token"
    })
}

/// Service plus a handle on its storage, talking to `base_url`
pub fn http_service(
    base_url: &str,
) -> (HttpAuthService, Arc<MemoryTokenStorage>) {
    http_service_with(base_url, RequestOptions::default())
}

pub fn http_service_with(
    base_url: &str,
    options: RequestOptions,
) -> (HttpAuthService, Arc<MemoryTokenStorage>) {
    let storage = Arc::new(MemoryTokenStorage::new());
    let shared: Arc<dyn TokenStorage> = storage.clone();
    let client = ApiClient::with_options(base_url, options, shared.clone());
    (HttpAuthService::new(client, shared), storage)
}

/// Service backed by a token file at `token_file`
pub fn file_service(
    base_url: &str,
    token_file: &Path,
) -> (HttpAuthService, Arc<FileTokenStorage>) {
    let storage = Arc::new(FileTokenStorage::at_path(token_file));
    let shared: Arc<dyn TokenStorage> = storage.clone();
    let client = ApiClient::new(base_url, shared.clone());
    (HttpAuthService::new(client, shared), storage)
}

/// A base URL nothing is listening on
pub fn unreachable_base_url() -> String {
    let listener =
        TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

/// Shell state wired to the HTTP service with in-memory token storage
pub fn http_state(base_url: &str) -> State {
    base_state(&AppConfig::new(base_url).with_memory_storage(true))
}

/// Shell state whose auth calls go to `stub`
pub fn stub_state(stub: &StubAuthService) -> State {
    let mut state = http_state("http://localhost:3000/api");
    let service: Arc<dyn AuthService> = Arc::new(stub.clone());
    state.domains.auth.state.auth_service = service;
    state
}
