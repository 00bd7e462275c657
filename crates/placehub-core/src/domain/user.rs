//! User entity.

use super::{RoleId, UserId};
use crate::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account on the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Email address, unique per account.
    pub email: String,

    /// Password hash (never exposed via API). Nullable in the schema for
    /// externally provisioned accounts.
    #[serde(skip_serializing)]
    pub password: Option<String>,

    /// Role granted to this account.
    pub role_id: RoleId,

    /// Whether the account may log in.
    pub is_active: bool,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Entity<UserId> for User {
    fn id(&self) -> &UserId {
        &self.id
    }
}
