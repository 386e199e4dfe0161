//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`. These wrappers mirror their JSON
//! shape inside the inbound adapter, where framework concerns belong.

use utoipa::ToSchema;

/// Stable machine-readable error codes.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested user does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The user name is already taken.
    #[schema(rename = "conflict")]
    Conflict,
    /// The user store cannot be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Error response envelope. Clients should rely on the status code only.
#[derive(ToSchema)]
#[schema(as = Error)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    code: ErrorCodeSchema,
    #[schema(example = "user 999 not found")]
    message: String,
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Validation context such as `{"field": "id", "code": "invalid_parameter"}`.
    details: Option<serde_json::Value>,
}

/// A stored user.
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserSchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    id: i64,
    /// Unique, case-sensitive name.
    #[schema(example = "alice", max_length = 255)]
    name: String,
}

/// Body accepted by `POST /users` and `PUT /users/{id}`.
#[derive(ToSchema)]
#[schema(as = UserNameRequest)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserNameRequestSchema {
    #[schema(example = "daniel", min_length = 1, max_length = 255)]
    name: String,
}
