pub mod login_flow;
pub mod session;

pub use login_flow::*;
pub use session::*;
