//! Local credential checks run before the login request is sent.
//!
//! Both validators are pure and total. Input is not trimmed: surrounding
//! whitespace makes an email invalid.

use std::sync::LazyLock;

use regex::Regex;

use crate::domains::auth::errors::ValidationError;

pub const MIN_PASSWORD_LENGTH: usize = 8;

// local@domain.tld: no whitespace or '@' anywhere else, at least one dot in
// the domain and no empty labels
static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$")
        .inspect_err(|err| log::error!("[Auth] Invalid email pattern: {}", err))
        .ok()
});

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

/// Length is counted in characters, not bytes
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Email first, then password; the first failure wins
pub fn validate_credentials(
    email: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if !validate_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !validate_password(password) {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}
