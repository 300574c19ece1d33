use crate::common::messages::DomainMessage;
use crate::domains::auth::messages as auth;
use crate::domains::ui::theme::{Button, VestibuleTheme};
use crate::domains::ui::view_models::DashboardViewModel;
use crate::domains::ui::views::components::{card, page_container, spacing, title};
use iced::{
    Alignment, Element, Length,
    widget::{button, column, text},
};
use vestibule_model::User;

pub fn view_dashboard<'a>(user: &'a User) -> Element<'a, DomainMessage> {
    let vm = DashboardViewModel::from(user);

    let logout_button = button(
        text(vm.logout_label)
            .size(16)
            .align_x(iced::alignment::Horizontal::Center),
    )
    .on_press(DomainMessage::Auth(auth::Message::Logout))
    .width(Length::Fill)
    .padding([12, 24])
    .style(Button::Secondary.style());

    let content = column![
        title(vm.greeting),
        spacing(16.0),
        text(vm.email_line)
            .size(16)
            .color(VestibuleTheme::TEXT_SECONDARY),
        text(vm.role_line)
            .size(16)
            .color(VestibuleTheme::TEXT_SECONDARY),
        spacing(24.0),
        logout_button,
    ]
    .spacing(4)
    .align_x(Alignment::Center);

    page_container(card(content)).into()
}
