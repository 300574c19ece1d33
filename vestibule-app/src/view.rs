//! Root-level view composition

use crate::common::messages::DomainMessage;
use crate::domains::ui::types::ViewState;
use crate::domains::ui::views::{
    view_dashboard, view_footer, view_header, view_login_form, view_welcome,
};
use crate::state::State;
use iced::widget::{column, container};
use iced::{Element, Length, Theme};

pub fn view(
    state: &State,
    _window_id: iced::window::Id,
) -> Element<'_, DomainMessage, Theme, iced::Renderer> {
    let body = match state.view() {
        ViewState::Welcome => view_welcome(),
        ViewState::LoginForm(form) => view_login_form(form),
        ViewState::Dashboard(user) => view_dashboard(user),
    };

    container(column![view_header(), body, view_footer()])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
