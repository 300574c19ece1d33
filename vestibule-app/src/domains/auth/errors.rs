use thiserror::Error;

use crate::infra::api_client::ApiError;
use crate::infra::storage::StorageError;

/// User-facing message for every login failure
pub const LOGIN_FAILED_MESSAGE: &str =
    "Login failed. Please check your credentials.";

/// User-facing message for every registration failure
pub const REGISTRATION_FAILED_MESSAGE: &str =
    "Registration failed. Please try again.";

/// Field-level validation failures, checked before any network call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "email",
            Self::PasswordTooShort => "password",
        }
    }
}

/// Why a login or registration call failed
#[derive(Debug, Error)]
pub enum FailureCause {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Error)]
pub enum AuthError {
    /// Shown as a fixed message. The cause stays reachable through
    /// `source()` for logs and callers that need to branch on it.
    #[error("{}", LOGIN_FAILED_MESSAGE)]
    LoginFailed(#[source] FailureCause),

    #[error("{}", REGISTRATION_FAILED_MESSAGE)]
    RegistrationFailed(#[source] FailureCause),
}

impl AuthError {
    pub fn cause(&self) -> &FailureCause {
        match self {
            Self::LoginFailed(cause) | Self::RegistrationFailed(cause) => cause,
        }
    }
}

pub type AuthResult<T> = Result<T, AuthError>;
