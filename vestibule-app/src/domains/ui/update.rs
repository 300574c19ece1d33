use crate::common::messages::DomainUpdateResult;
use crate::domains::auth::LoginForm;
use crate::domains::ui::messages as ui;
use crate::domains::ui::types::ViewState;
use crate::state::State;

pub fn update_ui(state: &mut State, message: ui::Message) -> DomainUpdateResult {
    let view = &mut state.domains.ui.state.view;

    match message {
        ui::Message::ShowLogin => {
            if matches!(view, ViewState::Welcome) {
                *view = ViewState::LoginForm(LoginForm::new().cancellable(true));
            } else {
                log::debug!("[Shell] ShowLogin ignored on {}", view.name());
            }
        }

        ui::Message::CancelLogin => {
            if let ViewState::LoginForm(form) = view {
                if form.is_busy() {
                    log::info!(
                        "[Shell] Login cancelled with attempt #{} in flight; its result will be dropped",
                        form.attempt()
                    );
                }
                *view = ViewState::Welcome;
            }
        }
    }

    DomainUpdateResult::none()
}
