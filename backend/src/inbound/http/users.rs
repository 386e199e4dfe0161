//! Users API handlers.
//!
//! ```text
//! GET    /users?limit=2
//! GET    /users/1
//! POST   /users      {"name":"daniel"}
//! PUT    /users/3    name=chally
//! DELETE /users/1
//! ```
//!
//! Bodies are decoded as JSON or as `application/x-www-form-urlencoded`
//! according to `Content-Type`. Any other media type yields no `name`.
//!
//! Each handler validates its whole input before calling a port, so a bad
//! request never reaches the store.

use actix_web::{HttpMessage, HttpRequest, HttpResponse, delete, get, post, put, web};
use serde::Deserialize;

use crate::domain::User;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserNameRequestSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    BodyFormat, validate_id, validate_limit, validate_user_body,
};

/// Query string for `GET /users`.
///
/// `limit` is kept as text so the handler can report a precise validation
/// error instead of the extractor's generic one.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Maximum number of users to return. Defaults to 10.
    #[param(value_type = Option<i64>, minimum = 0, example = 2)]
    pub limit: Option<String>,
}

/// List users in ascending id order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_backend::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 400, description = "limit is not a non-negative integer", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: web::Query<ListUsersQuery>,
) -> ApiResult<web::Json<Vec<User>>> {
    let limit = validate_limit(query.limit.as_deref(), state.default_limit)?;
    let users = state.users_query.list_users(limit).await?;
    Ok(web::Json(users))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 400, description = "id is not an integer", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = validate_id(&path)?;
    let user = state.users_query.get_user(id).await?;
    Ok(web::Json(user))
}

/// Create a user; the store assigns the id.
#[utoipa::path(
    post,
    path = "/users",
    request_body(content(
        (UserNameRequestSchema = "application/json"),
        (UserNameRequestSchema = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 201, description = "Created", body = UserSchema),
        (status = 400, description = "name is missing or invalid", body = ErrorSchema),
        (status = 409, description = "name already taken", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let name = validate_user_body(BodyFormat::from_content_type(req.content_type()), &body)?;
    let user = state.users_command.create_user(name).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Replace a user's name.
///
/// Checks run in a fixed order and the first failure wins: id format, body,
/// existence, then uniqueness.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body(content(
        (UserNameRequestSchema = "application/json"),
        (UserNameRequestSchema = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 200, description = "Updated", body = UserSchema),
        (status = 400, description = "id is not an integer or name is missing", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 409, description = "name taken by another user", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<web::Json<User>> {
    let id = validate_id(&path)?;
    let name = validate_user_body(BodyFormat::from_content_type(req.content_type()), &body)?;
    let user = state.users_command.update_user(id, name).await?;
    Ok(web::Json(user))
}

/// Delete a user. Deleting an id that does not exist also returns 204.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "id is not an integer", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = validate_id(&path)?;
    state.users_command.delete_user(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
