use vestibule_model::User;

#[derive(Clone)]
pub enum Message {
    // Login form input
    EmailChanged(String),
    PasswordChanged(String),
    TogglePasswordVisibility,
    Submit,

    /// Outcome of a login attempt, tagged with the attempt number
    LoginFinished {
        attempt: u64,
        result: Result<User, String>,
    },

    /// Outcome of the boot-time `/auth/me` lookup
    SessionRestored(Option<User>),

    Logout,
    LogoutComplete,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::EmailChanged(_) => "Auth::EmailChanged",
            Self::PasswordChanged(_) => "Auth::PasswordChanged",
            Self::TogglePasswordVisibility => "Auth::TogglePasswordVisibility",
            Self::Submit => "Auth::Submit",
            Self::LoginFinished { .. } => "Auth::LoginFinished",
            Self::SessionRestored(_) => "Auth::SessionRestored",
            Self::Logout => "Auth::Logout",
            Self::LogoutComplete => "Auth::LogoutComplete",
        }
    }
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmailChanged(email) => write!(f, "EmailChanged({})", email),
            // Never print the password
            Self::PasswordChanged(_) => write!(f, "PasswordChanged(***)"),
            Self::TogglePasswordVisibility => {
                write!(f, "TogglePasswordVisibility")
            }
            Self::Submit => write!(f, "Submit"),
            Self::LoginFinished { attempt, result } => match result {
                Ok(user) => write!(
                    f,
                    "LoginFinished(#{}, Ok({}))",
                    attempt, user.email
                ),
                Err(err) => write!(f, "LoginFinished(#{}, Err({}))", attempt, err),
            },
            Self::SessionRestored(user) => write!(
                f,
                "SessionRestored({:?})",
                user.as_ref().map(|u| &u.email)
            ),
            Self::Logout => write!(f, "Logout"),
            Self::LogoutComplete => write!(f, "LogoutComplete"),
        }
    }
}
