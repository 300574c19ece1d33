//! Authentication domain
//!
//! Credential validation, the login form state machine and the update
//! handlers that call into [`AuthService`].

pub mod commands;
pub mod errors;
pub mod login_form;
pub mod messages;
pub mod security;
pub mod update;
pub mod update_handlers;
pub mod validation;

use std::sync::Arc;

use crate::infra::services::auth::AuthService;

pub use errors::{AuthError, AuthResult, ValidationError};
pub use login_form::{FormStatus, LoginForm};

pub struct AuthDomainState {
    /// Trait-based authentication service
    pub auth_service: Arc<dyn AuthService>,
}

impl AuthDomainState {
    pub fn new(auth_service: Arc<dyn AuthService>) -> Self {
        Self { auth_service }
    }
}

impl std::fmt::Debug for AuthDomainState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthDomainState")
            .field("auth_service", &"AuthService(..)")
            .finish()
    }
}

#[derive(Debug)]
pub struct AuthDomain {
    pub state: AuthDomainState,
}

impl AuthDomain {
    pub fn new(state: AuthDomainState) -> Self {
        Self { state }
    }
}
