use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use iced::Task;

use crate::common::messages::DomainMessage;
use crate::domains::auth::messages as auth_messages;
use crate::infra::api_client::ApiClient;
use crate::infra::config::Config;
use crate::infra::services::auth::{AuthService, HttpAuthService};
use crate::infra::storage::{
    FileTokenStorage, MemoryTokenStorage, TokenStorage,
};
use crate::state::State;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub config: Config,
    pub use_memory_storage: bool,
    /// Token file to use instead of the platform data directory
    pub token_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            config: Config {
                api_base_url: api_base_url.into(),
                ..Config::default()
            },
            use_memory_storage: false,
            token_path: None,
        }
    }

    /// Resolve configuration the way the binary does: config file first,
    /// then `VESTIBULE_*` environment overrides.
    pub fn from_environment() -> Self {
        Self {
            config: Config::load(),
            use_memory_storage: false,
            token_path: None,
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.config.api_base_url
    }

    /// Keep the session token in memory only. Nothing survives a restart.
    pub fn with_memory_storage(mut self, enabled: bool) -> Self {
        self.use_memory_storage = enabled;
        self
    }

    pub fn with_token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }
}

fn token_storage(config: &AppConfig) -> Arc<dyn TokenStorage> {
    if config.use_memory_storage {
        return Arc::new(MemoryTokenStorage::new());
    }

    if let Some(path) = &config.token_path {
        return Arc::new(FileTokenStorage::at_path(path));
    }

    match FileTokenStorage::new().context("opening token storage") {
        Ok(storage) => Arc::new(storage),
        Err(err) => {
            log::error!(
                "[Storage] {:#}; falling back to in-memory token storage",
                err
            );
            Arc::new(MemoryTokenStorage::new())
        }
    }
}

/// Wire the HTTP-backed services and return the initial state.
pub fn base_state(config: &AppConfig) -> State {
    let storage = token_storage(config);
    let client = ApiClient::with_options(
        config.api_base_url(),
        config.config.request_options(),
        Arc::clone(&storage),
    );
    let auth_service: Arc<dyn AuthService> =
        Arc::new(HttpAuthService::new(client, storage));

    State::new(auth_service)
}

/// Boot logic for the running application, returning the initial state and
/// the session restore task.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<DomainMessage>) {
    let state = base_state(config);
    let task = restore_session(&state);
    (state, task)
}

/// Ask the server who we are when a token survived from a previous run.
pub fn restore_session(state: &State) -> Task<DomainMessage> {
    let auth_service = Arc::clone(&state.domains.auth.state.auth_service);

    if !auth_service.is_authenticated() {
        log::debug!("[Auth] No stored token, starting at the welcome screen");
        return Task::none();
    }

    log::info!("[Auth] Stored token found, restoring session");
    Task::perform(
        async move { auth_service.get_current_user().await },
        |user| DomainMessage::Auth(auth_messages::Message::SessionRestored(user)),
    )
}
