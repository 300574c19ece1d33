use std::sync::Arc;

use iced::Task;
use vestibule_model::User;

use crate::domains::auth::{commands, messages as auth};
use crate::domains::ui::types::ViewState;
use crate::state::State;

/// Accept a restored session only while nothing else has been chosen
pub fn handle_session_restored(
    state: &mut State,
    user: Option<User>,
) -> Option<User> {
    let Some(user) = user else {
        log::info!("[Auth] Stored token was not accepted, staying on welcome");
        return None;
    };

    if !matches!(state.domains.ui.state.view, ViewState::Welcome) {
        log::debug!(
            "[Auth] Ignoring restored session for {}: user already navigated",
            user.email
        );
        return None;
    }

    log::info!("[Auth] Restored session for {}", user.email);
    Some(user)
}

pub fn handle_logout(state: &mut State) -> Task<auth::Message> {
    let svc = Arc::clone(&state.domains.auth.state.auth_service);
    Task::perform(commands::logout(svc), |_| auth::Message::LogoutComplete)
}

pub fn handle_logout_complete(_state: &mut State) -> Task<auth::Message> {
    log::debug!("[Auth] Server logout finished");
    Task::none()
}
