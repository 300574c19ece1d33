/// Authentication routes, relative to the configured API base URL
pub mod auth {
    pub const LOGIN: &str = "/auth/login";
    pub const LOGOUT: &str = "/auth/logout";
    pub const ME: &str = "/auth/me";
    pub const REGISTER: &str = "/auth/register";
}
