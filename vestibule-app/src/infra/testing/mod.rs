//! In-memory stand-ins for the services, used by the integration tests
pub mod stubs;
