//! Display text for each screen, computed from state so it can be checked
//! without rendering.

use vestibule_model::User;

use crate::domains::auth::LoginForm;

pub const APP_TITLE: &str = "Vestibule";
pub const APP_SUBTITLE: &str = "Secure sign-in";
pub const FOOTER_TEXT: &str = "Vestibule client";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeViewModel {
    pub title: &'static str,
    pub prompt: &'static str,
    pub login_label: &'static str,
}

impl Default for WelcomeViewModel {
    fn default() -> Self {
        Self {
            title: "Welcome to Our Application",
            prompt: "Please login to access your dashboard",
            login_label: "Login",
        }
    }
}

/// The password is not copied here; views read it from the form itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginFormViewModel {
    pub heading: &'static str,
    pub email: String,
    pub show_password: bool,
    pub error: Option<String>,
    pub submit_label: &'static str,
    /// False while a request is in flight
    pub submit_enabled: bool,
    pub show_cancel: bool,
}

impl From<&LoginForm> for LoginFormViewModel {
    fn from(form: &LoginForm) -> Self {
        Self {
            heading: "Login",
            email: form.email.clone(),
            show_password: form.show_password,
            error: form.error().map(str::to_string),
            submit_label: form.submit_label(),
            submit_enabled: !form.is_busy(),
            show_cancel: form.can_cancel(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardViewModel {
    pub greeting: String,
    pub email_line: String,
    pub role_line: String,
    pub logout_label: &'static str,
}

impl From<&User> for DashboardViewModel {
    fn from(user: &User) -> Self {
        Self {
            greeting: format!("Welcome, {}!", user.full_name()),
            email_line: format!("Email: {}", user.email),
            role_line: format!("Role: {}", user.role),
            logout_label: "Logout",
        }
    }
}
