//! Role-permission grant controller.

use crate::{
    extractors::SessionUser,
    responses::{no_content, ok, AppError, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use placehub_core::{PermissionId, RoleId};
use placehub_service::{GrantResponse, PermissionResponse, RolePermissionRequest, RoleResponse};
use tracing::debug;

/// Creates the role-permission router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/rolepermissions",
            get(list_grants).post(assign_permission).delete(remove_permission),
        )
        .route("/rolepermissions/role/:role_id", get(permissions_by_role))
        .route(
            "/rolepermissions/permission/:permission_id",
            get(roles_by_permission),
        )
}

/// List all role-permission grants.
#[utoipa::path(
    get,
    path = "/rolepermissions",
    tag = "rolepermissions",
    responses(
        (status = 200, description = "All grants", body = [GrantResponse]),
        (status = 403, description = "Missing permission.read permission")
    )
)]
pub async fn list_grants(
    State(state): State<AppState>,
    user: SessionUser,
) -> ApiResult<Vec<GrantResponse>> {
    debug!("List role-permission grants request");

    state.require_permission(&user, "permission.read").await?;

    let grants = state.role_permission_service.list_grants().await?;
    ok(grants)
}

/// List the permissions granted to a role.
#[utoipa::path(
    get,
    path = "/rolepermissions/role/{role_id}",
    tag = "rolepermissions",
    params(("role_id" = i32, Path, description = "Role id")),
    responses(
        (status = 200, description = "Permissions held by the role", body = [PermissionResponse])
    )
)]
pub async fn permissions_by_role(
    State(state): State<AppState>,
    user: SessionUser,
    Path(role_id): Path<RoleId>,
) -> ApiResult<Vec<PermissionResponse>> {
    debug!("List permissions for role {}", role_id);

    state.require_permission(&user, "permission.read").await?;

    let permissions = state
        .role_permission_service
        .permissions_for_role(role_id)
        .await?;
    ok(permissions)
}

/// List the roles holding a permission.
#[utoipa::path(
    get,
    path = "/rolepermissions/permission/{permission_id}",
    tag = "rolepermissions",
    params(("permission_id" = i32, Path, description = "Permission id")),
    responses(
        (status = 200, description = "Roles holding the permission", body = [RoleResponse])
    )
)]
pub async fn roles_by_permission(
    State(state): State<AppState>,
    user: SessionUser,
    Path(permission_id): Path<PermissionId>,
) -> ApiResult<Vec<RoleResponse>> {
    debug!("List roles for permission {}", permission_id);

    state.require_permission(&user, "permission.read").await?;

    let roles = state
        .role_permission_service
        .roles_for_permission(permission_id)
        .await?;
    ok(roles)
}

/// Grant a permission to a role.
#[utoipa::path(
    post,
    path = "/rolepermissions",
    tag = "rolepermissions",
    request_body = RolePermissionRequest,
    responses(
        (status = 204, description = "Permission granted"),
        (status = 403, description = "Missing permission.assign permission"),
        (status = 409, description = "Permission already granted")
    )
)]
pub async fn assign_permission(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<RolePermissionRequest>,
) -> Result<StatusCode, AppError> {
    debug!(
        "Assign permission {} to role {}",
        request.permission_id, request.role_id
    );

    state.require_permission(&user, "permission.assign").await?;

    state.role_permission_service.assign(request).await?;
    Ok(no_content())
}

/// Revoke a permission from a role.
#[utoipa::path(
    delete,
    path = "/rolepermissions",
    tag = "rolepermissions",
    request_body = RolePermissionRequest,
    responses(
        (status = 204, description = "Permission revoked"),
        (status = 404, description = "Grant not found")
    )
)]
pub async fn remove_permission(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<RolePermissionRequest>,
) -> Result<StatusCode, AppError> {
    debug!(
        "Revoke permission {} from role {}",
        request.permission_id, request.role_id
    );

    state.require_permission(&user, "permission.assign").await?;

    state.role_permission_service.remove(request).await?;
    Ok(no_content())
}
