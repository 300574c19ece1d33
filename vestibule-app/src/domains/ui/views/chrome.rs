//! Header and footer shown around every screen

use crate::common::messages::DomainMessage;
use crate::domains::ui::theme::{Container as ContainerStyle, VestibuleTheme};
use crate::domains::ui::view_models::{APP_SUBTITLE, APP_TITLE, FOOTER_TEXT};
use iced::{
    Alignment, Element, Length,
    widget::{container, row, text},
};

pub fn view_header<'a>() -> Element<'a, DomainMessage> {
    container(
        row![
            text(APP_TITLE).size(22),
            text(APP_SUBTITLE)
                .size(14)
                .color(VestibuleTheme::TEXT_SECONDARY),
        ]
        .spacing(16)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([14, 24])
    .style(ContainerStyle::Header.style())
    .into()
}

pub fn view_footer<'a>() -> Element<'a, DomainMessage> {
    container(
        text(FOOTER_TEXT)
            .size(12)
            .color(VestibuleTheme::TEXT_DIMMED),
    )
    .width(Length::Fill)
    .align_x(iced::alignment::Horizontal::Center)
    .padding(12)
    .into()
}
