pub mod auth;

pub use auth::{AuthCall, StubAuthService};
