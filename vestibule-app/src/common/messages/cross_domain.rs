//! Cross-domain event coordination
//!
//! Auth handlers never touch the mounted screen directly. They emit events and
//! this module applies them to the UI domain.

use crate::common::messages::{CrossDomainEvent, DomainMessage};
use crate::domains::ui::types::ViewState;
use crate::state::State;
use iced::Task;

pub fn handle_event(
    state: &mut State,
    event: CrossDomainEvent,
) -> Task<DomainMessage> {
    log::debug!("[CrossDomain] Processing event: {:?}", event);

    match event {
        CrossDomainEvent::UserAuthenticated(user) => {
            log::info!("[CrossDomain] Showing dashboard for {}", user.email);
            state.domains.ui.state.view = ViewState::Dashboard(user);
            Task::none()
        }
        CrossDomainEvent::UserLoggedOut => {
            state.domains.ui.state.view = ViewState::Welcome;
            Task::none()
        }
    }
}
