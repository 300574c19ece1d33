//! Client focused snapshot of the types surface.
//! Prefer importing from this module in presentation layers.

pub use super::api::{
    ApiErrorResponse, ApiResponse, Pagination, PaginatedResponse,
    RequestOptions,
};
pub use super::routes;
pub use super::user::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest, Role,
    UpdateUserRequest, User,
};
