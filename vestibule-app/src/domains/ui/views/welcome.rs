use crate::common::messages::DomainMessage;
use crate::domains::ui::messages as ui;
use crate::domains::ui::theme::Button;
use crate::domains::ui::view_models::WelcomeViewModel;
use crate::domains::ui::views::components::{
    card, page_container, spacing, subtitle, title,
};
use iced::{
    Alignment, Element, Length,
    widget::{button, column, text},
};

pub fn view_welcome<'a>() -> Element<'a, DomainMessage> {
    let vm = WelcomeViewModel::default();

    let login_button = button(
        text(vm.login_label)
            .size(16)
            .align_x(iced::alignment::Horizontal::Center),
    )
    .on_press(DomainMessage::Ui(ui::Message::ShowLogin))
    .width(Length::Fill)
    .padding([12, 24])
    .style(Button::Primary.style());

    let content = column![
        title(vm.title),
        spacing(8.0),
        subtitle(vm.prompt),
        spacing(24.0),
        login_button,
    ]
    .align_x(Alignment::Center);

    page_container(card(content)).into()
}
