//! Role and permission entities for RBAC.

use super::{PermissionId, RoleId};
use crate::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A role groups permissions and is assigned to users.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Unique identifier.
    pub id: RoleId,

    /// Role name, unique.
    pub name: String,

    /// Free-text description.
    pub description: Option<String>,

    /// Whether the role can be assigned.
    pub is_active: bool,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Entity<RoleId> for Role {
    fn id(&self) -> &RoleId {
        &self.id
    }
}

/// A named permission like `user.read` or `job.create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    /// Unique identifier.
    pub id: PermissionId,

    /// Permission name, unique, dot-separated.
    pub name: String,

    /// Free-text description.
    pub description: Option<String>,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Entity<PermissionId> for Permission {
    fn id(&self) -> &PermissionId {
        &self.id
    }
}

/// A grant of one permission to one role, joined with both names for
/// display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RolePermissionGrant {
    /// Role side of the grant.
    pub role_id: RoleId,
    /// Role display name.
    pub role_name: String,
    /// Permission side of the grant.
    pub permission_id: PermissionId,
    /// Permission name.
    pub permission_name: String,
    /// Permission description.
    pub permission_description: Option<String>,
    /// When the grant was made.
    pub created_at: DateTime<Utc>,
}
