//! Shared building blocks for the screens

use crate::common::messages::DomainMessage;
use crate::domains::ui::theme::{Container as ContainerStyle, VestibuleTheme};
use iced::{
    Element, Length, Theme,
    widget::{Container, Space, container, text},
};

/// Centers a screen's content in the space between header and footer
pub fn page_container<'a>(
    content: impl Into<Element<'a, DomainMessage>>,
) -> Container<'a, DomainMessage> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .padding(20)
}

pub fn card<'a>(
    content: impl Into<Element<'a, DomainMessage>>,
) -> Container<'a, DomainMessage> {
    container(content)
        .width(Length::Fixed(400.0))
        .padding(30)
        .style(ContainerStyle::Card.style())
}

pub fn title<'a>(content: impl Into<String>) -> Element<'a, DomainMessage> {
    text(content.into())
        .size(28)
        .align_x(iced::alignment::Horizontal::Center)
        .into()
}

pub fn subtitle<'a>(content: impl Into<String>) -> Element<'a, DomainMessage> {
    text(content.into())
        .size(16)
        .color(VestibuleTheme::TEXT_SECONDARY)
        .align_x(iced::alignment::Horizontal::Center)
        .into()
}

pub fn error_message<'a>(message: &'a str) -> Element<'a, DomainMessage> {
    container(text(message).size(14).style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().danger.base.color),
    }))
    .padding(10)
    .width(Length::Fill)
    .style(ContainerStyle::ErrorBox.style())
    .into()
}

pub fn spacing<'a>(height: f32) -> Element<'a, DomainMessage> {
    Space::new().height(Length::Fixed(height)).into()
}
