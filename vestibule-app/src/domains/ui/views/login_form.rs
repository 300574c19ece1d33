use crate::common::messages::DomainMessage;
use crate::domains::auth::{LoginForm, messages as auth};
use crate::domains::ui::messages as ui;
use crate::domains::ui::theme::{Button, VestibuleTheme, text_input_style};
use crate::domains::ui::view_models::LoginFormViewModel;
use crate::domains::ui::views::components::{
    card, error_message, page_container, spacing, title,
};
use iced::{
    Alignment, Element, Length, Theme,
    widget::{button, column, row, text, text_input},
};

pub fn view_login_form<'a>(form: &'a LoginForm) -> Element<'a, DomainMessage> {
    let vm = LoginFormViewModel::from(form);

    let email_input = text_input("you@example.com", &form.email)
        .on_input(|value| DomainMessage::Auth(auth::Message::EmailChanged(value)))
        .on_submit(DomainMessage::Auth(auth::Message::Submit))
        .padding(12)
        .size(16)
        .style(text_input_style())
        .width(Length::Fill);

    let password_input = text_input("Password", form.password())
        .on_input(|value| {
            DomainMessage::Auth(auth::Message::PasswordChanged(value))
        })
        .on_submit(DomainMessage::Auth(auth::Message::Submit))
        .secure(!vm.show_password)
        .padding(12)
        .size(16)
        .style(text_input_style())
        .width(Length::Fill);

    let visibility_button =
        button(text(if vm.show_password { "Hide" } else { "Show" }).size(14))
            .on_press(DomainMessage::Auth(
                auth::Message::TogglePasswordVisibility,
            ))
            .style(|theme: &Theme, status| {
                let base = Button::Secondary.style()(theme, status);
                iced::widget::button::Style {
                    border: iced::Border {
                        width: 0.0,
                        ..base.border
                    },
                    ..base
                }
            })
            .padding(8);

    let password_row = row![password_input, visibility_button]
        .spacing(8)
        .align_y(Alignment::Center);

    // Keep the widget tree stable when the error appears so inputs keep focus
    let error_slot: Element<'a, DomainMessage> =
        form.error().map(error_message).unwrap_or_else(|| spacing(0.0));

    let submit_label = text(vm.submit_label)
        .size(16)
        .align_x(iced::alignment::Horizontal::Center);
    let submit_button = if vm.submit_enabled {
        button(submit_label)
            .on_press(DomainMessage::Auth(auth::Message::Submit))
            .style(Button::Primary.style())
    } else {
        // No on_press while a request is in flight
        button(submit_label).style(Button::Disabled.style())
    };
    let submit_button = submit_button.padding([12, 24]).width(Length::Fill);

    let mut actions = row![].spacing(12);
    if vm.show_cancel {
        actions = actions.push(
            button(
                text("Cancel")
                    .size(16)
                    .align_x(iced::alignment::Horizontal::Center),
            )
            .on_press(DomainMessage::Ui(ui::Message::CancelLogin))
            .padding([12, 24])
            .width(Length::Fill)
            .style(Button::Secondary.style()),
        );
    }
    actions = actions.push(submit_button);

    let content = column![
        title(vm.heading),
        spacing(20.0),
        text("Email").size(14).color(VestibuleTheme::TEXT_SECONDARY),
        email_input,
        spacing(8.0),
        text("Password")
            .size(14)
            .color(VestibuleTheme::TEXT_SECONDARY),
        password_row,
        spacing(12.0),
        error_slot,
        spacing(12.0),
        actions,
    ]
    .spacing(6)
    .align_x(Alignment::Start);

    page_container(card(content)).into()
}
