use vestibule_model::User;

use crate::domains::auth::LoginForm;

/// Which screen is mounted. At most one user is held, and only while the
/// dashboard is shown.
#[derive(Debug, Clone, Default)]
pub enum ViewState {
    #[default]
    Welcome,
    LoginForm(LoginForm),
    Dashboard(User),
}

impl ViewState {
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Welcome => "Welcome",
            ViewState::LoginForm(_) => "LoginForm",
            ViewState::Dashboard(_) => "Dashboard",
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            ViewState::Dashboard(user) => Some(user),
            _ => None,
        }
    }
}
