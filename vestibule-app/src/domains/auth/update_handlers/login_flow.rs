use std::sync::Arc;

use iced::Task;
use vestibule_model::User;

use crate::domains::auth::{commands, messages as auth};
use crate::state::State;

pub fn handle_email_changed(
    state: &mut State,
    email: String,
) -> Task<auth::Message> {
    if let Some(form) = state.login_form_mut() {
        form.set_email(email);
    }
    Task::none()
}

pub fn handle_password_changed(
    state: &mut State,
    password: String,
) -> Task<auth::Message> {
    if let Some(form) = state.login_form_mut() {
        form.set_password(password);
    }
    Task::none()
}

pub fn handle_toggle_password_visibility(
    state: &mut State,
) -> Task<auth::Message> {
    if let Some(form) = state.login_form_mut() {
        form.toggle_password_visibility();
    }
    Task::none()
}

/// Validate the form and, when it passes, start the login request
pub fn handle_submit(state: &mut State) -> Task<auth::Message> {
    let auth_service = Arc::clone(&state.domains.auth.state.auth_service);

    let Some(form) = state.login_form_mut() else {
        log::debug!("[Auth] Submit without a mounted login form");
        return Task::none();
    };

    let Some(submission) = form.submit() else {
        return Task::none();
    };

    let attempt = submission.attempt;
    log::info!(
        "[Auth] Login attempt #{} for {}",
        attempt,
        submission.credentials.email
    );

    Task::perform(
        commands::login(auth_service, submission.credentials),
        move |result| auth::Message::LoginFinished { attempt, result },
    )
}

/// Feed a login outcome to the form. Returns the user when the form
/// accepted a success for its current attempt.
pub fn handle_login_finished(
    state: &mut State,
    attempt: u64,
    result: Result<User, String>,
) -> Option<User> {
    let Some(form) = state.login_form_mut() else {
        log::info!(
            "[Auth] Dropping result of attempt #{}: login form is no longer shown",
            attempt
        );
        return None;
    };

    if let Err(message) = &result {
        log::debug!("[Auth] Attempt #{} failed: {}", attempt, message);
    }

    form.resolve(attempt, result)
}
