//! Domain modules for the Vestibule client
//!
//! `auth` owns the session and the login form flow, `ui` owns which screen
//! is mounted and how it renders.

pub mod auth;
pub mod ui;

use std::sync::Arc;

use crate::infra::services::auth::AuthService;

/// Domain registry that holds every domain's state
#[derive(Debug)]
pub struct DomainRegistry {
    pub auth: auth::AuthDomain,
    pub ui: ui::UiDomain,
}

impl DomainRegistry {
    pub fn new(auth_service: Arc<dyn AuthService>) -> Self {
        Self {
            auth: auth::AuthDomain::new(auth::AuthDomainState::new(
                auth_service,
            )),
            ui: ui::UiDomain::default(),
        }
    }
}
