use crate::{
    domains::auth::errors::{AuthError, AuthResult, FailureCause},
    infra::{api_client::ApiError, services::auth::AuthService},
};

use vestibule_model::{RegisterRequest, Role, User, chrono::Utc};

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// A call the stub received, in order. Passwords are not recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCall {
    Login { email: String },
    Logout,
    GetCurrentUser,
    Register { email: String },
}

/// `AuthService` that answers from memory and records every call
#[derive(Debug, Clone)]
pub struct StubAuthService {
    inner: Arc<RwLock<InnerAuthState>>,
}

#[derive(Debug)]
struct InnerAuthState {
    user: User,
    password: String,
    token_present: bool,
    calls: Vec<AuthCall>,
}

impl Default for StubAuthService {
    fn default() -> Self {
        Self::new()
    }
}

impl StubAuthService {
    /// Accepts `test@example.com` / `password123` as John Doe
    pub fn new() -> Self {
        let demo_user = User {
            id: "1".into(),
            email: "test@example.com".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            role: Role::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            is_active: true,
            avatar: None,
        };

        Self {
            inner: Arc::new(RwLock::new(InnerAuthState {
                user: demo_user,
                password: "password123".into(),
                token_present: false,
                calls: Vec::new(),
            })),
        }
    }

    pub fn with_user(self, user: User, password: impl Into<String>) -> Self {
        {
            let mut guard = self.inner.write().expect("lock poisoned");
            guard.user = user;
            guard.password = password.into();
        }
        self
    }

    /// Pretend a token survived from an earlier run
    pub fn with_stored_token(self) -> Self {
        self.inner.write().expect("lock poisoned").token_present = true;
        self
    }

    pub fn calls(&self) -> Vec<AuthCall> {
        self.inner.read().expect("lock poisoned").calls.clone()
    }

    fn record(&self, call: AuthCall) {
        self.inner.write().expect("lock poisoned").calls.push(call);
    }
}

#[async_trait]
impl AuthService for StubAuthService {
    async fn login_user(
        &self,
        email: &str,
        password: &str,
    ) -> AuthResult<User> {
        self.record(AuthCall::Login {
            email: email.to_string(),
        });

        let mut guard = self.inner.write().expect("lock poisoned");
        if guard.user.email == email && guard.password == password {
            guard.token_present = true;
            Ok(guard.user.clone())
        } else {
            Err(AuthError::LoginFailed(FailureCause::Api(ApiError::server(
                401,
                "Invalid credentials",
                None,
            ))))
        }
    }

    async fn logout_user(&self) {
        self.record(AuthCall::Logout);
        self.inner.write().expect("lock poisoned").token_present = false;
    }

    async fn get_current_user(&self) -> Option<User> {
        self.record(AuthCall::GetCurrentUser);
        let guard = self.inner.read().expect("lock poisoned");
        guard.token_present.then(|| guard.user.clone())
    }

    async fn register_user(
        &self,
        request: RegisterRequest,
    ) -> AuthResult<User> {
        self.record(AuthCall::Register {
            email: request.email.clone(),
        });

        let mut guard = self.inner.write().expect("lock poisoned");
        guard.user = User {
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            ..guard.user.clone()
        };
        guard.password = request.password;
        guard.token_present = true;
        Ok(guard.user.clone())
    }

    fn is_authenticated(&self) -> bool {
        self.inner.read().expect("lock poisoned").token_present
    }
}
