//! User management controller.

use crate::{
    extractors::SessionUser,
    responses::{no_content, ok, AppError, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Router,
};
use placehub_core::UserId;
use placehub_service::UserResponse;
use serde::Deserialize;
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/:id", delete(delete_user))
        .route("/userbyemail", get(user_by_email))
}

/// Query parameters for the email lookup.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// List all users.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Missing user.read permission")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    user: SessionUser,
) -> ApiResult<Vec<UserResponse>> {
    debug!("List users request");

    state.require_permission(&user, "user.read").await?;

    let users = state.user_service.list_users().await?;
    ok(users)
}

/// Find a user by email.
#[utoipa::path(
    get,
    path = "/userbyemail",
    tag = "users",
    params(("email" = String, Query, description = "Email address to look up")),
    responses(
        (status = 200, description = "Matching user", body = UserResponse),
        (status = 404, description = "No user with that email")
    )
)]
pub async fn user_by_email(
    State(state): State<AppState>,
    user: SessionUser,
    Query(query): Query<EmailQuery>,
) -> ApiResult<UserResponse> {
    debug!("User lookup request for: {}", query.email);

    state.require_permission(&user, "user.read").await?;

    let response = state.user_service.get_user_by_email(&query.email).await?;
    ok(response)
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<UserId>,
) -> Result<StatusCode, AppError> {
    debug!("Delete user request: {}", id);

    state.require_permission(&user, "user.delete").await?;

    state.user_service.delete_user(id).await?;
    Ok(no_content())
}
