use super::update_handlers::*;
use crate::common::messages::{
    CrossDomainEvent, DomainMessage, DomainUpdateResult,
};
use crate::domains::auth::messages as auth;
use crate::state::State;
use iced::Task;

// Helper macro to wrap task results
macro_rules! wrap_task {
    ($task:expr) => {
        DomainUpdateResult::task($task.map(DomainMessage::Auth))
    };
}

pub fn update_auth(
    state: &mut State,
    message: auth::Message,
) -> DomainUpdateResult {
    match message {
        // Login form input
        auth::Message::EmailChanged(email) => {
            wrap_task!(handle_email_changed(state, email))
        }

        auth::Message::PasswordChanged(password) => {
            wrap_task!(handle_password_changed(state, password))
        }

        auth::Message::TogglePasswordVisibility => {
            wrap_task!(handle_toggle_password_visibility(state))
        }

        auth::Message::Submit => wrap_task!(handle_submit(state)),

        // Login results
        auth::Message::LoginFinished { attempt, result } => {
            match handle_login_finished(state, attempt, result) {
                Some(user) => DomainUpdateResult::with_events(
                    Task::none(),
                    vec![CrossDomainEvent::UserAuthenticated(user)],
                ),
                None => DomainUpdateResult::none(),
            }
        }

        auth::Message::SessionRestored(user) => {
            match handle_session_restored(state, user) {
                Some(user) => DomainUpdateResult::with_events(
                    Task::none(),
                    vec![CrossDomainEvent::UserAuthenticated(user)],
                ),
                None => DomainUpdateResult::none(),
            }
        }

        // The screen goes back to welcome right away; the server call
        // finishes in the background
        auth::Message::Logout => DomainUpdateResult::with_events(
            handle_logout(state).map(DomainMessage::Auth),
            vec![CrossDomainEvent::UserLoggedOut],
        ),

        auth::Message::LogoutComplete => {
            wrap_task!(handle_logout_complete(state))
        }
    }
}
