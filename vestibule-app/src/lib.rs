//! Vestibule desktop client library
//!
//! The `vestibule` binary in `src/main.rs` is a thin wrapper over this crate.
//! Modules are public so the integration tests under `tests/` can drive the
//! update loop and the HTTP-backed services directly.
//!
//! Notes
//! - `domains` holds the auth and UI state machines and their views.
//! - `infra` holds the HTTP client, token storage, configuration and the
//!   service implementations the domains call into.

pub mod app;
pub mod common;
pub mod domains;
pub mod infra;
pub mod state;
pub mod update;
pub mod view;
