//! Async bodies for the tasks the auth update handlers spawn

use std::sync::Arc;

use vestibule_model::{LoginRequest, User};

use crate::infra::services::auth::AuthService;

/// Run a login and flatten the error to its user-facing message
pub async fn login(
    auth_service: Arc<dyn AuthService>,
    credentials: LoginRequest,
) -> Result<User, String> {
    auth_service
        .login_user(&credentials.email, &credentials.password)
        .await
        .map_err(|err| err.to_string())
}

pub async fn logout(auth_service: Arc<dyn AuthService>) {
    auth_service.logout_user().await;
}
