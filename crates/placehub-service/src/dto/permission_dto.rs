//! Permission and role-permission DTOs.

use chrono::{DateTime, Utc};
use placehub_core::validation::rules;
use placehub_core::{Permission, PermissionId, RoleId, RolePermissionGrant};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a permission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePermissionRequest {
    #[validate(custom(function = rules::valid_permission_name))]
    pub name: String,

    #[validate(length(max = 255, message = "Description cannot exceed 255 characters"))]
    pub description: Option<String>,
}

/// Request to replace a permission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePermissionRequest {
    #[validate(custom(function = rules::valid_permission_name))]
    pub name: String,

    #[validate(length(max = 255, message = "Description cannot exceed 255 characters"))]
    pub description: Option<String>,
}

/// Permission response DTO.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PermissionResponse {
    pub id: PermissionId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Permission> for PermissionResponse {
    fn from(permission: Permission) -> Self {
        Self {
            id: permission.id,
            name: permission.name,
            description: permission.description,
            created_at: permission.created_at,
            updated_at: permission.updated_at,
        }
    }
}

/// Request to grant or revoke a permission on a role.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RolePermissionRequest {
    #[validate(range(min = 1, message = "Invalid role id"))]
    pub role_id: RoleId,

    #[validate(range(min = 1, message = "Invalid permission id"))]
    pub permission_id: PermissionId,
}

/// A role-permission grant with both sides resolved by name.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GrantResponse {
    pub role_id: RoleId,
    pub role_name: String,
    pub permission_id: PermissionId,
    pub permission_name: String,
    pub permission_description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<RolePermissionGrant> for GrantResponse {
    fn from(grant: RolePermissionGrant) -> Self {
        Self {
            role_id: grant.role_id,
            role_name: grant.role_name,
            permission_id: grant.permission_id,
            permission_name: grant.permission_name,
            permission_description: grant.permission_description,
            created_at: grant.created_at,
        }
    }
}
