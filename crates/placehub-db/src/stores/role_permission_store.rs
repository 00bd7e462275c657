//! Role-permission grant store.
//!
//! Authorization checks funnel through [`RolePermissionStore::role_has_permission`];
//! it deliberately answers `false` on storage errors so a flaky database
//! denies access instead of failing requests open.

use super::permission_store::PermissionRow;
use super::role_store::RoleRow;
use crate::executor::QueryExecutor;
use crate::pool::DatabaseInterface;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use placehub_core::{
    Interface, Permission, PermissionId, PlacehubResult, Role, RoleId, RolePermissionGrant, UserId,
};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, error};

/// Data access for role-permission grants.
#[async_trait]
pub trait RolePermissionStore: Interface + Send + Sync {
    /// Grants a permission to a role. Granting twice is a no-op.
    async fn assign(&self, role_id: RoleId, permission_id: PermissionId) -> PlacehubResult<()>;

    /// Revokes a grant. Returns `true` if a row was removed.
    async fn remove(&self, role_id: RoleId, permission_id: PermissionId) -> PlacehubResult<bool>;

    /// Fetches every grant with role and permission names attached.
    async fn list_detailed(&self) -> PlacehubResult<Vec<RolePermissionGrant>>;

    /// Fetches the permissions granted to a role.
    async fn permissions_for_role(&self, role_id: RoleId) -> PlacehubResult<Vec<Permission>>;

    /// Fetches the roles holding a permission.
    async fn roles_for_permission(&self, permission_id: PermissionId) -> PlacehubResult<Vec<Role>>;

    /// Whether a role holds a permission by name. Never fails; storage
    /// errors are logged and reported as `false`.
    async fn role_has_permission(&self, role_id: RoleId, permission_name: &str) -> bool;

    /// Whether a user holds a permission by name, resolved through the
    /// database-side `user_has_permission` function. Never fails; storage
    /// errors are logged and reported as `false`.
    async fn user_has_permission(&self, user_id: UserId, permission_name: &str) -> bool;
}

/// PostgreSQL role-permission store.
#[derive(Component)]
#[shaku(interface = RolePermissionStore)]
pub struct PgRolePermissionStore {
    #[shaku(inject)]
    database: Arc<dyn DatabaseInterface>,
}

impl PgRolePermissionStore {
    /// Creates a new PostgreSQL role-permission store.
    #[must_use]
    pub fn new(database: Arc<dyn DatabaseInterface>) -> Self {
        Self { database }
    }

    fn executor(&self) -> QueryExecutor {
        QueryExecutor::new(Arc::clone(&self.database))
    }
}

#[derive(Debug, FromRow)]
struct GrantRow {
    role_id: i32,
    role_name: String,
    permission_id: i32,
    permission_name: String,
    permission_description: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<GrantRow> for RolePermissionGrant {
    fn from(row: GrantRow) -> Self {
        RolePermissionGrant {
            role_id: row.role_id,
            role_name: row.role_name,
            permission_id: row.permission_id,
            permission_name: row.permission_name,
            permission_description: row.permission_description,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl RolePermissionStore for PgRolePermissionStore {
    async fn assign(&self, role_id: RoleId, permission_id: PermissionId) -> PlacehubResult<()> {
        debug!("Assigning permission {} to role {}", permission_id, role_id);

        self.executor()
            .execute(move |pool| async move {
                sqlx::query(
                    r#"
                    INSERT INTO rolepermissions (role_id, permission_id)
                    VALUES ($1, $2)
                    ON CONFLICT (role_id, permission_id) DO NOTHING
                    "#,
                )
                .bind(role_id)
                .bind(permission_id)
                .execute(&pool)
                .await
                .map(|_| ())
            })
            .await
    }

    async fn remove(&self, role_id: RoleId, permission_id: PermissionId) -> PlacehubResult<bool> {
        debug!(
            "Removing permission {} from role {}",
            permission_id, role_id
        );

        let affected = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query(
                    "DELETE FROM rolepermissions WHERE role_id = $1 AND permission_id = $2",
                )
                .bind(role_id)
                .bind(permission_id)
                .execute(&pool)
                .await
                .map(|done| done.rows_affected())
            })
            .await?;

        Ok(affected > 0)
    }

    async fn list_detailed(&self) -> PlacehubResult<Vec<RolePermissionGrant>> {
        debug!("Fetching all role-permission grants");

        let rows: Vec<GrantRow> = self
            .executor()
            .fetch_all(
                r#"
                SELECT role_id, role_name, permission_id, permission_name,
                       permission_description, created_at
                FROM role_permissions_detailed
                ORDER BY role_name, permission_name
                "#,
            )
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn permissions_for_role(&self, role_id: RoleId) -> PlacehubResult<Vec<Permission>> {
        debug!("Fetching permissions for role: {}", role_id);

        let rows: Vec<PermissionRow> = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, PermissionRow>(
                    r#"
                    SELECT p.id, p.name, p.description, p.created_at, p.updated_at
                    FROM permissions p
                    JOIN rolepermissions rp ON p.id = rp.permission_id
                    WHERE rp.role_id = $1
                    ORDER BY p.name
                    "#,
                )
                .bind(role_id)
                .fetch_all(&pool)
                .await
            })
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn roles_for_permission(&self, permission_id: PermissionId) -> PlacehubResult<Vec<Role>> {
        debug!("Fetching roles holding permission: {}", permission_id);

        let rows: Vec<RoleRow> = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, RoleRow>(
                    r#"
                    SELECT r.id, r.name, r.description, r.is_active, r.created_at, r.updated_at
                    FROM roles r
                    JOIN rolepermissions rp ON r.id = rp.role_id
                    WHERE rp.permission_id = $1
                    ORDER BY r.name
                    "#,
                )
                .bind(permission_id)
                .fetch_all(&pool)
                .await
            })
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn role_has_permission(&self, role_id: RoleId, permission_name: &str) -> bool {
        let result = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, (String,)>(
                    r#"
                    SELECT p.name
                    FROM permissions p
                    JOIN rolepermissions rp ON p.id = rp.permission_id
                    WHERE rp.role_id = $1 AND p.name = $2
                    "#,
                )
                .bind(role_id)
                .bind(permission_name)
                .fetch_all(&pool)
                .await
            })
            .await;

        match result {
            Ok(rows) => !rows.is_empty(),
            Err(e) => {
                error!(
                    "Error checking permission {} for role {}: {}",
                    permission_name, role_id, e
                );
                false
            }
        }
    }

    async fn user_has_permission(&self, user_id: UserId, permission_name: &str) -> bool {
        let result = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, (bool,)>("SELECT user_has_permission($1, $2)")
                    .bind(user_id)
                    .bind(permission_name)
                    .fetch_one(&pool)
                    .await
            })
            .await;

        match result {
            Ok((granted,)) => granted,
            Err(e) => {
                error!(
                    "Error checking permission {} for user {}: {}",
                    permission_name, user_id, e
                );
                false
            }
        }
    }
}

impl std::fmt::Debug for PgRolePermissionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgRolePermissionStore").finish_non_exhaustive()
    }
}
