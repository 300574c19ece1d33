mod common;

use std::collections::VecDeque;

use common::*;
use futures::StreamExt;
use iced::Task;
use vestibule_app::app::bootstrap::{AppConfig, runtime_boot};
use vestibule_app::common::messages::DomainMessage;
use vestibule_app::domains::auth::FormStatus;
use vestibule_app::domains::auth::messages::Message as AuthMessage;
use vestibule_app::domains::ui::messages::Message as UiMessage;
use vestibule_app::domains::ui::types::ViewState;
use vestibule_app::domains::ui::view_models::{
    DashboardViewModel, LoginFormViewModel, WelcomeViewModel,
};
use vestibule_app::infra::services::auth::AuthService;
use vestibule_app::infra::testing::stubs::{AuthCall, StubAuthService};
use vestibule_app::state::State;
use vestibule_app::update::update;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Apply a message and drop whatever task it returns
fn send(state: &mut State, message: impl Into<DomainMessage>) {
    let _ = update(state, message.into());
}

/// Run a task to completion and collect the messages it produces
async fn drain(task: Task<DomainMessage>) -> Vec<DomainMessage> {
    let mut outputs = Vec::new();
    let Some(mut stream) = iced_runtime::task::into_stream(task) else {
        return outputs;
    };

    while let Some(action) = stream.next().await {
        if let iced_runtime::Action::Output(message) = action {
            outputs.push(message);
        }
    }
    outputs
}

/// Apply a message, then keep feeding every message its tasks produce back
/// into `update` until nothing is left. Returns the produced messages.
async fn dispatch(
    state: &mut State,
    message: impl Into<DomainMessage>,
) -> Vec<DomainMessage> {
    let mut produced = Vec::new();
    let mut queue = VecDeque::from([message.into()]);

    while let Some(message) = queue.pop_front() {
        for output in drain(update(state, message)).await {
            produced.push(output.clone());
            queue.push_back(output);
        }
    }
    produced
}

fn fill_in(state: &mut State, email: &str, password: &str) {
    send(state, AuthMessage::EmailChanged(email.into()));
    send(state, AuthMessage::PasswordChanged(password.into()));
}

fn fill_and_submit(state: &mut State, email: &str, password: &str) {
    fill_in(state, email, password);
    send(state, AuthMessage::Submit);
}

fn form_error(state: &State) -> Option<String> {
    state
        .login_form()
        .and_then(|form| form.error().map(str::to_string))
}

fn login_succeeded(messages: &[DomainMessage], attempt: u64) -> bool {
    messages.iter().any(|message| {
        matches!(
            message,
            DomainMessage::Auth(AuthMessage::LoginFinished { attempt: a, result: Ok(_) })
                if *a == attempt
        )
    })
}

fn logout_completed(messages: &[DomainMessage]) -> bool {
    messages
        .iter()
        .any(|m| matches!(m, DomainMessage::Auth(AuthMessage::LogoutComplete)))
}

#[test]
fn starts_on_welcome() {
    let state = stub_state(&StubAuthService::new());
    assert!(matches!(state.view(), ViewState::Welcome));
    assert!(state.current_user().is_none());

    let vm = WelcomeViewModel::default();
    assert_eq!(vm.title, "Welcome to Our Application");
    assert_eq!(vm.prompt, "Please login to access your dashboard");
    assert_eq!(vm.login_label, "Login");
}

#[test]
fn login_button_mounts_a_cancellable_form() {
    let mut state = stub_state(&StubAuthService::new());
    send(&mut state, UiMessage::ShowLogin);

    let form = state.login_form().expect("form mounted");
    let vm = LoginFormViewModel::from(form);
    assert_eq!(vm.heading, "Login");
    assert_eq!(vm.submit_label, "Login");
    assert!(vm.submit_enabled);
    assert!(vm.show_cancel);
}

#[test]
fn invalid_email_is_rejected_without_a_service_call() {
    let stub = StubAuthService::new();
    let mut state = stub_state(&stub);
    send(&mut state, UiMessage::ShowLogin);

    fill_and_submit(&mut state, "invalid-email", PASSWORD);

    assert_eq!(
        form_error(&state).as_deref(),
        Some("Please enter a valid email address")
    );
    assert_eq!(state.login_form().map(|f| f.attempt()), Some(0));
    assert!(stub.calls().is_empty());
}

#[test]
fn short_password_is_rejected_without_a_service_call() {
    let stub = StubAuthService::new();
    let mut state = stub_state(&stub);
    send(&mut state, UiMessage::ShowLogin);

    fill_and_submit(&mut state, EMAIL, "123");

    assert_eq!(
        form_error(&state).as_deref(),
        Some("Password must be at least 8 characters long")
    );
    assert!(stub.calls().is_empty());
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let mut state = stub_state(&StubAuthService::new());
    send(&mut state, UiMessage::ShowLogin);
    fill_and_submit(&mut state, EMAIL, PASSWORD);
    send(&mut state, AuthMessage::Submit);

    let form = state.login_form().unwrap();
    assert_eq!(form.status(), &FormStatus::Submitting);
    assert_eq!(form.attempt(), 1);
    assert_eq!(LoginFormViewModel::from(form).submit_label, "Logging in...");
}

#[tokio::test]
async fn successful_login_shows_dashboard_and_logout_returns_to_welcome() {
    let stub = StubAuthService::new();
    let mut state = stub_state(&stub);
    send(&mut state, UiMessage::ShowLogin);
    fill_in(&mut state, EMAIL, PASSWORD);

    let produced = dispatch(&mut state, AuthMessage::Submit).await;
    assert!(login_succeeded(&produced, 1));

    let user = state.current_user().expect("dashboard shown");
    let vm = DashboardViewModel::from(user);
    assert_eq!(vm.greeting, "Welcome, John Doe!");
    assert_eq!(vm.email_line, "Email: test@example.com");
    assert_eq!(vm.role_line, "Role: user");
    assert_eq!(vm.logout_label, "Logout");
    assert!(stub.is_authenticated());

    let produced = dispatch(&mut state, AuthMessage::Logout).await;
    assert!(logout_completed(&produced));
    assert!(matches!(state.view(), ViewState::Welcome));
    assert!(state.current_user().is_none());

    assert_eq!(
        stub.calls(),
        vec![
            AuthCall::Login {
                email: EMAIL.into()
            },
            AuthCall::Logout
        ]
    );
    assert!(!stub.is_authenticated());
}

#[tokio::test]
async fn failed_login_shows_the_service_message() {
    let stub = StubAuthService::new();
    let mut state = stub_state(&stub);
    send(&mut state, UiMessage::ShowLogin);
    fill_in(&mut state, EMAIL, "wrong-password");

    let produced = dispatch(&mut state, AuthMessage::Submit).await;

    assert!(!login_succeeded(&produced, 1));
    assert_eq!(
        form_error(&state).as_deref(),
        Some("Login failed. Please check your credentials.")
    );
    assert_eq!(
        state.login_form().map(|f| f.status().clone()),
        Some(FormStatus::Error(
            "Login failed. Please check your credentials.".into()
        ))
    );
    assert!(state.current_user().is_none());
}

#[tokio::test]
async fn cancel_drops_a_late_result() {
    let stub = StubAuthService::new();
    let mut state = stub_state(&stub);
    send(&mut state, UiMessage::ShowLogin);
    fill_in(&mut state, EMAIL, PASSWORD);

    let in_flight = update(&mut state, AuthMessage::Submit.into());
    send(&mut state, UiMessage::CancelLogin);
    assert!(matches!(state.view(), ViewState::Welcome));

    let late = drain(in_flight).await;
    assert!(login_succeeded(&late, 1));
    for message in late {
        send(&mut state, message);
    }

    assert!(matches!(state.view(), ViewState::Welcome));
    assert_eq!(
        stub.calls(),
        vec![AuthCall::Login {
            email: EMAIL.into()
        }]
    );
}

#[test]
fn restored_session_opens_dashboard_only_from_welcome() {
    let user = john_doe();
    let mut state = stub_state(&StubAuthService::new());
    send(&mut state, AuthMessage::SessionRestored(None));
    assert!(matches!(state.view(), ViewState::Welcome));

    send(&mut state, UiMessage::ShowLogin);
    send(&mut state, AuthMessage::SessionRestored(Some(user.clone())));
    assert!(state.login_form().is_some());

    send(&mut state, UiMessage::CancelLogin);
    send(&mut state, AuthMessage::SessionRestored(Some(user)));
    assert_eq!(
        state.current_user().map(|u| u.full_name()).as_deref(),
        Some("John Doe")
    );
}

#[test]
fn password_never_appears_in_message_debug() {
    let message: DomainMessage =
        AuthMessage::PasswordChanged(PASSWORD.into()).into();
    assert!(!format!("{:?}", message).contains(PASSWORD));
}

#[tokio::test]
async fn end_to_end_against_a_mock_api() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(login_response_json()),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut state = http_state(&server.uri());
    send(&mut state, UiMessage::ShowLogin);

    // Blocked submissions never reach the server; expect(1) holds us to it
    fill_in(&mut state, "invalid-email", PASSWORD);
    assert!(dispatch(&mut state, AuthMessage::Submit).await.is_empty());
    assert_eq!(
        form_error(&state).as_deref(),
        Some("Please enter a valid email address")
    );
    fill_in(&mut state, EMAIL, "123");
    assert!(dispatch(&mut state, AuthMessage::Submit).await.is_empty());
    assert_eq!(
        form_error(&state).as_deref(),
        Some("Password must be at least 8 characters long")
    );

    fill_in(&mut state, EMAIL, PASSWORD);
    let produced = dispatch(&mut state, AuthMessage::Submit).await;
    assert!(login_succeeded(&produced, 1));

    let greeting = state
        .current_user()
        .map(|user| DashboardViewModel::from(user).greeting);
    assert_eq!(greeting.as_deref(), Some("Welcome, John Doe!"));
    let service = state.domains.auth.state.auth_service.clone();
    assert!(service.is_authenticated());

    let produced = dispatch(&mut state, AuthMessage::Logout).await;
    assert!(logout_completed(&produced));
    assert!(matches!(state.view(), ViewState::Welcome));
    assert!(!service.is_authenticated());
}

#[tokio::test]
async fn boot_with_a_stored_token_restores_the_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(john_doe_json()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let token_file = dir.path().join("local_storage.json");
    std::fs::write(
        &token_file,
        serde_json::json!({ "authToken": TOKEN }).to_string(),
    )
    .unwrap();

    let config = AppConfig::new(server.uri()).with_token_path(&token_file);
    let (mut state, boot_task) = runtime_boot(&config);
    assert!(matches!(state.view(), ViewState::Welcome));

    let produced = drain(boot_task).await;
    assert!(produced.iter().any(|m| matches!(
        m,
        DomainMessage::Auth(AuthMessage::SessionRestored(Some(_)))
    )));
    for message in produced {
        send(&mut state, message);
    }

    assert_eq!(
        state.current_user().map(|u| u.email.as_str()),
        Some(EMAIL)
    );
}

#[tokio::test]
async fn boot_without_a_token_stays_on_welcome() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(john_doe_json()))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::new(server.uri())
        .with_token_path(dir.path().join("local_storage.json"));
    let (state, boot_task) = runtime_boot(&config);

    assert!(drain(boot_task).await.is_empty());
    assert!(matches!(state.view(), ViewState::Welcome));
}
