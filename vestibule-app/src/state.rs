use std::sync::Arc;

use vestibule_model::User;

use crate::domains::DomainRegistry;
use crate::domains::auth::LoginForm;
use crate::domains::ui::types::ViewState;
use crate::infra::services::auth::AuthService;

#[derive(Debug)]
pub struct State {
    pub domains: DomainRegistry,
}

impl State {
    pub fn new(auth_service: Arc<dyn AuthService>) -> Self {
        Self {
            domains: DomainRegistry::new(auth_service),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.domains.ui.state.view
    }

    /// The user shown on the dashboard, if any
    pub fn current_user(&self) -> Option<&User> {
        self.domains.ui.state.view.user()
    }

    pub fn login_form(&self) -> Option<&LoginForm> {
        match &self.domains.ui.state.view {
            ViewState::LoginForm(form) => Some(form),
            _ => None,
        }
    }

    pub fn login_form_mut(&mut self) -> Option<&mut LoginForm> {
        match &mut self.domains.ui.state.view {
            ViewState::LoginForm(form) => Some(form),
            _ => None,
        }
    }
}
