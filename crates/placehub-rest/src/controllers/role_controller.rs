//! Role management controller.

use crate::{
    extractors::SessionUser,
    responses::{created, no_content, ok, AppError, ApiResponse, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use placehub_core::RoleId;
use placehub_service::{CreateRoleRequest, RoleResponse, UpdateRoleRequest};
use tracing::debug;

/// Creates the role router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/roles", get(list_roles).post(create_role))
        .route("/roles/id/:id", get(get_role))
        .route("/roles/name/:name", get(roles_by_name))
        .route("/roles/:id", put(update_role).delete(delete_role))
}

/// List all roles.
#[utoipa::path(
    get,
    path = "/roles",
    tag = "roles",
    responses(
        (status = 200, description = "All roles", body = [RoleResponse]),
        (status = 403, description = "Missing role.read permission")
    )
)]
pub async fn list_roles(
    State(state): State<AppState>,
    user: SessionUser,
) -> ApiResult<Vec<RoleResponse>> {
    debug!("List roles request");

    state.require_permission(&user, "role.read").await?;

    let roles = state.role_service.list_roles().await?;
    ok(roles)
}

/// Get a role by id.
#[utoipa::path(
    get,
    path = "/roles/id/{id}",
    tag = "roles",
    params(("id" = i32, Path, description = "Role id")),
    responses(
        (status = 200, description = "Matching role", body = RoleResponse),
        (status = 404, description = "Role not found")
    )
)]
pub async fn get_role(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<RoleId>,
) -> ApiResult<RoleResponse> {
    debug!("Get role request: {}", id);

    state.require_permission(&user, "role.read").await?;

    let role = state.role_service.get_role(id).await?;
    ok(role)
}

/// Search roles by name.
#[utoipa::path(
    get,
    path = "/roles/name/{name}",
    tag = "roles",
    params(("name" = String, Path, description = "Name fragment to search for")),
    responses(
        (status = 200, description = "Matching roles", body = [RoleResponse])
    )
)]
pub async fn roles_by_name(
    State(state): State<AppState>,
    user: SessionUser,
    Path(name): Path<String>,
) -> ApiResult<Vec<RoleResponse>> {
    debug!("Role search request: {}", name);

    state.require_permission(&user, "role.read").await?;

    let roles = state.role_service.search_roles(&name).await?;
    ok(roles)
}

/// Create a new role.
#[utoipa::path(
    post,
    path = "/roles",
    tag = "roles",
    request_body = CreateRoleRequest,
    responses(
        (status = 201, description = "Role created", body = RoleResponse),
        (status = 403, description = "Missing role.create permission")
    )
)]
pub async fn create_role(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<CreateRoleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RoleResponse>>), AppError> {
    debug!("Create role request: {}", request.name);

    state.require_permission(&user, "role.create").await?;

    let role = state.role_service.create_role(request).await?;
    Ok(created(role))
}

/// Update a role.
#[utoipa::path(
    put,
    path = "/roles/{id}",
    tag = "roles",
    params(("id" = i32, Path, description = "Role id")),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Role updated", body = RoleResponse),
        (status = 404, description = "Role not found")
    )
)]
pub async fn update_role(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<RoleId>,
    Json(request): Json<UpdateRoleRequest>,
) -> ApiResult<RoleResponse> {
    debug!("Update role request: {}", id);

    state.require_permission(&user, "role.update").await?;

    let role = state.role_service.update_role(id, request).await?;
    ok(role)
}

/// Delete a role.
#[utoipa::path(
    delete,
    path = "/roles/{id}",
    tag = "roles",
    params(("id" = i32, Path, description = "Role id")),
    responses(
        (status = 204, description = "Role deleted"),
        (status = 404, description = "Role not found"),
        (status = 409, description = "Role is still assigned to users")
    )
)]
pub async fn delete_role(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<RoleId>,
) -> Result<StatusCode, AppError> {
    debug!("Delete role request: {}", id);

    state.require_permission(&user, "role.delete").await?;

    state.role_service.delete_role(id).await?;
    Ok(no_content())
}
