//! Permission management controller.

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
use placehub_core::PermissionId;
use placehub_service::{CreatePermissionRequest, PermissionResponse, UpdatePermissionRequest};
use tracing::debug;

/// Creates the permission router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/permissions", get(list_permissions).post(create_permission))
        .route("/permissions/id/:id", get(get_permission))
        .route("/permissions/name/:name", get(permissions_by_name))
        .route(
            "/permissions/:id",
            put(update_permission).delete(delete_permission),
        )
}

/// List all permissions.
#[utoipa::path(
    get,
    path = "/permissions",
    tag = "permissions",
    responses(
        (status = 200, description = "All permissions", body = [PermissionResponse]),
        (status = 403, description = "Missing permission.read permission")
    )
)]
pub async fn list_permissions(
    State(state): State<AppState>,
    user: SessionUser,
) -> ApiResult<Vec<PermissionResponse>> {
    debug!("List permissions request");

    state.require_permission(&user, "permission.read").await?;

    let permissions = state.permission_service.list_permissions().await?;
    ok(permissions)
}

/// Get a permission by id.
#[utoipa::path(
    get,
    path = "/permissions/id/{id}",
    tag = "permissions",
    params(("id" = i32, Path, description = "Permission id")),
    responses(
        (status = 200, description = "Matching permission", body = PermissionResponse),
        (status = 404, description = "Permission not found")
    )
)]
pub async fn get_permission(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<PermissionId>,
) -> ApiResult<PermissionResponse> {
    debug!("Get permission request: {}", id);

    state.require_permission(&user, "permission.read").await?;

    let permission = state.permission_service.get_permission(id).await?;
    ok(permission)
}

/// Search permissions by name.
#[utoipa::path(
    get,
    path = "/permissions/name/{name}",
    tag = "permissions",
    params(("name" = String, Path, description = "Name fragment to search for")),
    responses(
        (status = 200, description = "Matching permissions", body = [PermissionResponse])
    )
)]
pub async fn permissions_by_name(
    State(state): State<AppState>,
    user: SessionUser,
    Path(name): Path<String>,
) -> ApiResult<Vec<PermissionResponse>> {
    debug!("Permission search request: {}", name);

    state.require_permission(&user, "permission.read").await?;

    let permissions = state.permission_service.search_permissions(&name).await?;
    ok(permissions)
}

/// Create a new permission.
#[utoipa::path(
    post,
    path = "/permissions",
    tag = "permissions",
    request_body = CreatePermissionRequest,
    responses(
        (status = 201, description = "Permission created", body = PermissionResponse),
        (status = 403, description = "Missing permission.create permission")
    )
)]
pub async fn create_permission(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<CreatePermissionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PermissionResponse>>), AppError> {
    debug!("Create permission request: {}", request.name);

    state.require_permission(&user, "permission.create").await?;

    let permission = state.permission_service.create_permission(request).await?;
    Ok(created(permission))
}

/// Update a permission.
#[utoipa::path(
    put,
    path = "/permissions/{id}",
    tag = "permissions",
    params(("id" = i32, Path, description = "Permission id")),
    request_body = UpdatePermissionRequest,
    responses(
        (status = 200, description = "Permission updated", body = PermissionResponse),
        (status = 404, description = "Permission not found")
    )
)]
pub async fn update_permission(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<PermissionId>,
    Json(request): Json<UpdatePermissionRequest>,
) -> ApiResult<PermissionResponse> {
    debug!("Update permission request: {}", id);

    state.require_permission(&user, "permission.update").await?;

    let permission = state
        .permission_service
        .update_permission(id, request)
        .await?;
    ok(permission)
}

/// Delete a permission.
#[utoipa::path(
    delete,
    path = "/permissions/{id}",
    tag = "permissions",
    params(("id" = i32, Path, description = "Permission id")),
    responses(
        (status = 204, description = "Permission deleted"),
        (status = 404, description = "Permission not found")
    )
)]
pub async fn delete_permission(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<PermissionId>,
) -> Result<StatusCode, AppError> {
    debug!("Delete permission request: {}", id);

    state.require_permission(&user, "permission.delete").await?;

    state.permission_service.delete_permission(id).await?;
    Ok(no_content())
}
