//! UI domain: the mounted screen, its view models and widgets

pub mod messages;
pub mod theme;
pub mod types;
pub mod update;
pub mod view_models;
pub mod views;

use types::ViewState;

#[derive(Debug, Default)]
pub struct UiDomainState {
    pub view: ViewState,
}

#[derive(Debug, Default)]
pub struct UiDomain {
    pub state: UiDomainState,
}
