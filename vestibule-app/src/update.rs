//! Root update: route each message to its domain, then apply the
//! cross-domain events the domain emitted.

use iced::Task;

use crate::common::messages::cross_domain::handle_event;
use crate::common::messages::{DomainMessage, DomainUpdateResult};
use crate::domains::auth::update::update_auth;
use crate::domains::ui::update::update_ui;
use crate::state::State;

pub fn update(state: &mut State, message: DomainMessage) -> Task<DomainMessage> {
    log::trace!("[Shell] {}", message.name());

    let DomainUpdateResult { task, events } = match message {
        DomainMessage::Auth(msg) => update_auth(state, msg),
        DomainMessage::Ui(msg) => update_ui(state, msg),
        DomainMessage::NoOp => DomainUpdateResult::none(),
    };

    if events.is_empty() {
        return task;
    }

    let mut tasks = Vec::with_capacity(events.len() + 1);
    tasks.push(task);
    for event in events {
        tasks.push(handle_event(state, event));
    }
    Task::batch(tasks)
}
