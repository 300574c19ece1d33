pub mod chrome;
pub mod components;
pub mod dashboard;
pub mod login_form;
pub mod welcome;

pub use chrome::{view_footer, view_header};
pub use dashboard::view_dashboard;
pub use login_form::view_login_form;
pub use welcome::view_welcome;
