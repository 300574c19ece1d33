//! Infrastructure: HTTP transport, token storage, configuration and the
//! service implementations the domains call into.

pub mod api_client;
pub mod config;
pub mod services;
pub mod storage;
pub mod testing;
