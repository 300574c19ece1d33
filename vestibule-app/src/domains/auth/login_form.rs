//! Login form state machine
//!
//! ```text
//! Idle --submit--> Validating --invalid--> Error(field message)
//!                             --valid----> Submitting --Ok--> Success
//!                                                     --Err-> Error(message)
//! ```
//!
//! Validation is synchronous, so `Validating` is only observable inside
//! [`LoginForm::submit`]. Editing a field clears a displayed error.

use vestibule_model::{LoginRequest, User};

use crate::domains::auth::security::SecureCredential;
use crate::domains::auth::validation::validate_credentials;

/// Shown when a failed attempt carries no message of its own
pub const FALLBACK_ERROR: &str = "Login failed";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Validating,
    Submitting,
    Error(String),
    Success,
}

/// Credentials handed to the auth service, tagged with the attempt they
/// belong to
#[derive(Debug, Clone)]
pub struct Submission {
    pub attempt: u64,
    pub credentials: LoginRequest,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    password: SecureCredential,
    pub show_password: bool,
    status: FormStatus,
    /// Set by the parent when a cancel control should be offered
    pub cancellable: bool,
    attempt: u64,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancellable(mut self, cancellable: bool) -> Self {
        self.cancellable = cancellable;
        self
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }

    /// Last submitted attempt number; zero before the first submit
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn can_cancel(&self) -> bool {
        self.cancellable
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() { "Logging in..." } else { "Login" }
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.clear_error();
    }

    pub fn set_password(&mut self, password: String) {
        self.password.replace(password);
        self.clear_error();
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    fn clear_error(&mut self) {
        if matches!(self.status, FormStatus::Error(_)) {
            self.status = FormStatus::Idle;
        }
    }

    /// Validate and, if the input passes, start a new attempt.
    ///
    /// Returns `None` when a request is already in flight or validation
    /// failed. In both cases no network call may be made.
    pub fn submit(&mut self) -> Option<Submission> {
        if self.is_busy() {
            log::debug!("[LoginForm] Submit ignored, request in flight");
            return None;
        }

        self.status = FormStatus::Validating;
        if let Err(err) =
            validate_credentials(&self.email, self.password.expose_secret())
        {
            log::debug!("[LoginForm] Validation failed on {}", err.field());
            self.status = FormStatus::Error(err.to_string());
            return None;
        }

        self.status = FormStatus::Submitting;
        self.attempt += 1;

        Some(Submission {
            attempt: self.attempt,
            credentials: LoginRequest {
                email: self.email.clone(),
                password: self.password.expose_secret().to_string(),
            },
        })
    }

    /// Apply the outcome of `attempt`. Returns the user on success so the
    /// parent can take over. Outcomes of superseded attempts are ignored.
    pub fn resolve(
        &mut self,
        attempt: u64,
        result: Result<User, String>,
    ) -> Option<User> {
        if attempt != self.attempt || !self.is_busy() {
            log::debug!(
                "[LoginForm] Ignoring result for stale attempt {} (current {})",
                attempt,
                self.attempt
            );
            return None;
        }

        match result {
            Ok(user) => {
                self.status = FormStatus::Success;
                self.password.clear();
                Some(user)
            }
            Err(message) => {
                let message = if message.trim().is_empty() {
                    FALLBACK_ERROR.to_string()
                } else {
                    message
                };
                self.status = FormStatus::Error(message);
                None
            }
        }
    }
}
