//! Core data model definitions shared across Vestibule crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod api;
pub mod prelude;
pub mod routes;
pub mod user;

// Intentionally curated re-exports for downstream consumers.
pub use api::{
    ApiErrorResponse, ApiResponse, Pagination, PaginatedResponse,
    RequestOptions,
};
pub use user::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest, Role,
    UnknownRole, UpdateUserRequest, User,
};
