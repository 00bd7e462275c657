//! Permission store.

use crate::executor::QueryExecutor;
use crate::pool::DatabaseInterface;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use placehub_core::{Interface, Permission, PermissionId, PlacehubResult};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// Input for creating or replacing a permission.
#[derive(Debug, Clone)]
pub struct NewPermission {
    pub name: String,
    pub description: Option<String>,
}

/// Data access for permissions.
#[async_trait]
pub trait PermissionStore: Interface + Send + Sync {
    /// Persists a new permission.
    async fn create(&self, data: &NewPermission) -> PlacehubResult<Permission>;

    /// Fetches all permissions.
    async fn list_all(&self) -> PlacehubResult<Vec<Permission>>;

    /// Replaces a permission's fields. Returns `None` if it does not exist.
    async fn update(
        &self,
        id: PermissionId,
        data: &NewPermission,
    ) -> PlacehubResult<Option<Permission>>;

    /// Deletes a permission. Returns `true` if a row was removed.
    async fn delete(&self, id: PermissionId) -> PlacehubResult<bool>;

    /// Finds a permission by ID.
    async fn find_by_id(&self, id: PermissionId) -> PlacehubResult<Option<Permission>>;

    /// Substring search by permission name. Case-sensitive, permission names
    /// are lowercase by convention.
    async fn search_by_name(&self, name: &str) -> PlacehubResult<Vec<Permission>>;
}

/// PostgreSQL permission store.
#[derive(Component)]
#[shaku(interface = PermissionStore)]
pub struct PgPermissionStore {
    #[shaku(inject)]
    database: Arc<dyn DatabaseInterface>,
}

impl PgPermissionStore {
    /// Creates a new PostgreSQL permission store.
    #[must_use]
    pub fn new(database: Arc<dyn DatabaseInterface>) -> Self {
        Self { database }
    }

    fn executor(&self) -> QueryExecutor {
        QueryExecutor::new(Arc::clone(&self.database))
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct PermissionRow {
    id: i32,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PermissionRow> for Permission {
    fn from(row: PermissionRow) -> Self {
        Permission {
            id: row.id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl PermissionStore for PgPermissionStore {
    async fn create(&self, data: &NewPermission) -> PlacehubResult<Permission> {
        debug!("Creating permission: {}", data.name);

        let row = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, PermissionRow>(
                    r#"
                    INSERT INTO permissions (name, description)
                    VALUES ($1, $2)
                    RETURNING id, name, description, created_at, updated_at
                    "#,
                )
                .bind(&data.name)
                .bind(&data.description)
                .fetch_one(&pool)
                .await
            })
            .await?;

        Ok(row.into())
    }

    async fn list_all(&self) -> PlacehubResult<Vec<Permission>> {
        debug!("Fetching all permissions from the database");

        let rows: Vec<PermissionRow> = self
            .executor()
            .fetch_all(
                r#"
                SELECT id, name, description, created_at, updated_at
                FROM permissions
                ORDER BY id
                "#,
            )
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(
        &self,
        id: PermissionId,
        data: &NewPermission,
    ) -> PlacehubResult<Option<Permission>> {
        debug!("Updating permission: {}", id);

        let row = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, PermissionRow>(
                    r#"
                    UPDATE permissions
                    SET name = $1, description = $2
                    WHERE id = $3
                    RETURNING id, name, description, created_at, updated_at
                    "#,
                )
                .bind(&data.name)
                .bind(&data.description)
                .bind(id)
                .fetch_optional(&pool)
                .await
            })
            .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: PermissionId) -> PlacehubResult<bool> {
        debug!("Deleting permission: {}", id);

        let affected = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query("DELETE FROM permissions WHERE id = $1")
                    .bind(id)
                    .execute(&pool)
                    .await
                    .map(|done| done.rows_affected())
            })
            .await?;

        Ok(affected > 0)
    }

    async fn find_by_id(&self, id: PermissionId) -> PlacehubResult<Option<Permission>> {
        debug!("Finding permission by id: {}", id);

        let row = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, PermissionRow>(
                    r#"
                    SELECT id, name, description, created_at, updated_at
                    FROM permissions
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .fetch_optional(&pool)
                .await
            })
            .await?;

        Ok(row.map(Into::into))
    }

    async fn search_by_name(&self, name: &str) -> PlacehubResult<Vec<Permission>> {
        debug!("Searching permissions by name: {}", name);

        let pattern = format!("%{name}%");
        let rows: Vec<PermissionRow> = self
            .executor()
            .execute(move |pool| {
                let pattern = pattern.clone();
                async move {
                    sqlx::query_as::<_, PermissionRow>(
                        r#"
                        SELECT id, name, description, created_at, updated_at
                        FROM permissions
                        WHERE name LIKE $1
                        "#,
                    )
                    .bind(pattern)
                    .fetch_all(&pool)
                    .await
                }
            })
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl std::fmt::Debug for PgPermissionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgPermissionStore").finish_non_exhaustive()
    }
}
