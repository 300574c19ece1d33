//! Authentication service trait and its HTTP implementation
//!
//! This is the contract the update loop uses to talk to the auth API. For the
//! in-memory stand-in used by tests see
//! `infra::testing::stubs::StubAuthService`.

use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};
use serde_json::Value;
use vestibule_model::{LoginRequest, LoginResponse, RegisterRequest, User, routes};

use crate::domains::auth::errors::{AuthError, AuthResult, FailureCause};
use crate::infra::api_client::ApiClient;
use crate::infra::storage::{AUTH_TOKEN_KEY, TokenStorage};

#[async_trait]
pub trait AuthService: Send + Sync + std::fmt::Debug {
    /// Exchange credentials for a user and a stored session token.
    /// Input is not validated here.
    async fn login_user(&self, email: &str, password: &str)
    -> AuthResult<User>;

    /// Best-effort server logout. The stored token is removed regardless
    /// of the outcome and no error is surfaced.
    async fn logout_user(&self);

    /// The user the stored token belongs to, or `None` on any failure
    async fn get_current_user(&self) -> Option<User>;

    async fn register_user(&self, request: RegisterRequest)
    -> AuthResult<User>;

    /// Whether a session token is present right now. Says nothing about
    /// whether the server still honours it.
    fn is_authenticated(&self) -> bool;
}

#[derive(Debug, Clone)]
pub struct HttpAuthService {
    client: ApiClient,
    storage: Arc<dyn TokenStorage>,
}

impl HttpAuthService {
    pub fn new(client: ApiClient, storage: Arc<dyn TokenStorage>) -> Self {
        Self { client, storage }
    }

    fn store_token(&self, token: &str) -> Result<(), FailureCause> {
        if token.is_empty() {
            warn!("[Auth] Server returned an empty token, nothing stored");
            return Ok(());
        }
        self.storage.set_item(AUTH_TOKEN_KEY, token)?;
        Ok(())
    }

    async fn authenticate<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<User, FailureCause> {
        let response = self
            .client
            .post::<LoginResponse, B>(path, Some(body))
            .await?;
        let LoginResponse { user, token, .. } = response.into_data();
        self.store_token(&token)?;
        Ok(user)
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn login_user(
        &self,
        email: &str,
        password: &str,
    ) -> AuthResult<User> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.authenticate(routes::auth::LOGIN, &request).await {
            Ok(user) => {
                info!("[Auth] Logged in as {}", user.email);
                Ok(user)
            }
            Err(cause) => {
                warn!("[Auth] Login failed: {}", cause);
                Err(AuthError::LoginFailed(cause))
            }
        }
    }

    async fn logout_user(&self) {
        if let Err(err) = self
            .client
            .post_empty::<Value>(routes::auth::LOGOUT)
            .await
        {
            warn!("[Auth] Logout request failed: {}", err);
        }

        if let Err(err) = self.storage.remove_item(AUTH_TOKEN_KEY) {
            warn!("[Auth] Could not remove stored token: {}", err);
        }
        info!("[Auth] Logged out");
    }

    async fn get_current_user(&self) -> Option<User> {
        match self.client.get::<User>(routes::auth::ME).await {
            Ok(response) => Some(response.into_data()),
            Err(err) => {
                warn!("[Auth] Could not fetch current user: {}", err);
                None
            }
        }
    }

    async fn register_user(
        &self,
        request: RegisterRequest,
    ) -> AuthResult<User> {
        match self.authenticate(routes::auth::REGISTER, &request).await {
            Ok(user) => {
                info!("[Auth] Registered {}", user.email);
                Ok(user)
            }
            Err(cause) => {
                warn!("[Auth] Registration failed: {}", cause);
                Err(AuthError::RegistrationFailed(cause))
            }
        }
    }

    fn is_authenticated(&self) -> bool {
        match self.storage.get_item(AUTH_TOKEN_KEY) {
            Ok(token) => token.is_some_and(|t| !t.is_empty()),
            Err(err) => {
                warn!("[Auth] Could not read stored token: {}", err);
                false
            }
        }
    }
}
