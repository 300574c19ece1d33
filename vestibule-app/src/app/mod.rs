use std::sync::Arc;

use iced::{Application, Font, Program as IcedProgram, Settings, Theme};

use crate::common::messages::DomainMessage;
use crate::state::State;
use crate::{update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build the Vestibule application using the provided configuration.
pub fn application(
    config: AppConfig,
) -> Application<
    impl IcedProgram<State = State, Message = DomainMessage, Theme = Theme>,
> {
    let config = Arc::new(config);

    let boot_config = Arc::clone(&config);
    iced::application(
        move || bootstrap::runtime_boot(&boot_config),
        update::update,
        app_view,
    )
    .settings(default_settings())
    .title("Vestibule")
    .theme(app_theme)
    .window(iced::window::Settings {
        size: iced::Size::new(960.0, 640.0),
        resizable: true,
        decorations: true,
        ..Default::default()
    })
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("vestibule".to_string());
    settings.antialiasing = true;
    settings.default_font = Font::MONOSPACE;
    settings
}

// Upstream iced 0.14 passes no window id to `view`; `view::view` ignores it.
fn app_view(state: &State) -> iced::Element<'_, DomainMessage, Theme, iced::Renderer> {
    view::view(state, iced::window::Id::unique())
}

fn app_theme(_: &State) -> Theme {
    crate::domains::ui::theme::VestibuleTheme::theme()
}
