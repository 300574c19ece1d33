#[derive(Clone, Debug)]
pub enum Message {
    /// Mount the login form from the welcome screen
    ShowLogin,
    /// Unmount the login form without contacting the server
    CancelLogin,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShowLogin => "UI::ShowLogin",
            Self::CancelLogin => "UI::CancelLogin",
        }
    }
}
