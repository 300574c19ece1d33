use iced::{
    Background, Border, Color, Shadow, Theme, theme,
    widget::{button, container, text_input},
};

/// Dark theme with a teal accent
#[derive(Debug, Clone, Copy)]
pub struct VestibuleTheme;

impl VestibuleTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.05, 0.06, 0.07);
    pub const SURFACE: Color = Color::from_rgb(0.10, 0.11, 0.13);
    pub const BORDER_COLOR: Color = Color::from_rgb(0.20, 0.22, 0.25);

    pub const ACCENT: Color = Color::from_rgb(0.0, 0.62, 0.62);
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.0, 0.72, 0.72);
    pub const ACCENT_PRESSED: Color = Color::from_rgb(0.0, 0.50, 0.50);
    pub const ACCENT_GLOW: Color = Color::from_rgba(0.0, 0.62, 0.62, 0.3);

    pub const TEXT_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.5, 0.5, 0.5);

    pub const SUCCESS: Color = Color::from_rgb(0.0, 0.8, 0.4);
    pub const ERROR: Color = Color::from_rgb(1.0, 0.2, 0.2);

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;
        palette.success = Self::SUCCESS;
        palette.danger = Self::ERROR;

        Theme::custom("Vestibule Dark", palette)
    }
}

// Container styles using closures
#[derive(Debug)]
pub enum Container {
    Card,
    Header,
    ErrorBox,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Card => |_| container::Style {
                text_color: Some(VestibuleTheme::TEXT_PRIMARY),
                background: Some(Background::Color(VestibuleTheme::SURFACE)),
                border: Border {
                    color: VestibuleTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
                ..Default::default()
            },
            Container::Header => |_| container::Style {
                text_color: Some(VestibuleTheme::TEXT_PRIMARY),
                background: Some(Background::Color(VestibuleTheme::SURFACE)),
                border: Border::default(),
                shadow: Shadow::default(),
                ..Default::default()
            },
            Container::ErrorBox => |_| container::Style {
                text_color: Some(VestibuleTheme::ERROR),
                background: Some(Background::Color(
                    VestibuleTheme::ERROR.scale_alpha(0.1),
                )),
                border: Border {
                    color: VestibuleTheme::ERROR.scale_alpha(0.3),
                    width: 1.0,
                    radius: 4.0.into(),
                },
                shadow: Shadow::default(),
                ..Default::default()
            },
        }
    }
}

// Button styles using closures
#[derive(Debug)]
pub enum Button {
    Primary,
    Secondary,
    Disabled,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Primary => |_, status| {
                let (background, shadow) = match status {
                    button::Status::Hovered => (
                        VestibuleTheme::ACCENT_HOVER,
                        Shadow {
                            color: VestibuleTheme::ACCENT_GLOW,
                            offset: iced::Vector::new(0.0, 2.0),
                            blur_radius: 12.0,
                        },
                    ),
                    button::Status::Pressed => {
                        (VestibuleTheme::ACCENT_PRESSED, Shadow::default())
                    }
                    _ => (VestibuleTheme::ACCENT, Shadow::default()),
                };

                button::Style {
                    text_color: VestibuleTheme::TEXT_PRIMARY,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: background,
                        width: 1.0,
                        radius: 4.0.into(),
                    },
                    shadow,
                    ..Default::default()
                }
            },
            Button::Secondary => |_, status| {
                let text_color = match status {
                    button::Status::Hovered => VestibuleTheme::TEXT_PRIMARY,
                    _ => VestibuleTheme::TEXT_SECONDARY,
                };

                button::Style {
                    text_color,
                    background: None,
                    border: Border {
                        color: VestibuleTheme::BORDER_COLOR,
                        width: 1.0,
                        radius: 4.0.into(),
                    },
                    shadow: Shadow::default(),
                    ..Default::default()
                }
            },
            Button::Disabled => |_, _| button::Style {
                text_color: VestibuleTheme::TEXT_DIMMED,
                background: Some(Background::Color(
                    VestibuleTheme::SURFACE.scale_alpha(0.5),
                )),
                border: Border {
                    color: VestibuleTheme::BORDER_COLOR.scale_alpha(0.5),
                    width: 1.0,
                    radius: 4.0.into(),
                },
                shadow: Shadow::default(),
                ..Default::default()
            },
        }
    }
}

pub fn text_input_style() -> fn(&Theme, text_input::Status) -> text_input::Style
{
    |_, status| {
        let border_color = match status {
            text_input::Status::Focused { .. } => VestibuleTheme::ACCENT,
            _ => VestibuleTheme::BORDER_COLOR,
        };

        text_input::Style {
            background: Background::Color(VestibuleTheme::BACKGROUND),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: 4.0.into(),
            },
            icon: VestibuleTheme::TEXT_SECONDARY,
            placeholder: VestibuleTheme::TEXT_DIMMED,
            value: VestibuleTheme::TEXT_PRIMARY,
            selection: VestibuleTheme::ACCENT_GLOW,
        }
    }
}
