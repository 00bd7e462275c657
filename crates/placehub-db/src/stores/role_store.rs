//! Role store.

use crate::executor::QueryExecutor;
use crate::pool::DatabaseInterface;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use placehub_core::{Interface, PlacehubError, PlacehubResult, Role, RoleId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// Input for creating or replacing a role.
#[derive(Debug, Clone)]
pub struct NewRole {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Data access for roles.
#[async_trait]
pub trait RoleStore: Interface + Send + Sync {
    /// Persists a new role.
    async fn create(&self, data: &NewRole) -> PlacehubResult<Role>;

    /// Fetches all roles ordered by ID.
    async fn list_all(&self) -> PlacehubResult<Vec<Role>>;

    /// Replaces a role's fields. Returns `None` if the role does not exist.
    async fn update(&self, id: RoleId, data: &NewRole) -> PlacehubResult<Option<Role>>;

    /// Deletes a role. Fails with a conflict while any user still holds the
    /// role; the count check and the delete run in one transaction so a
    /// concurrent assignment cannot slip between them. Returns `true` if a
    /// row was removed.
    async fn delete(&self, id: RoleId) -> PlacehubResult<bool>;

    /// Finds a role by ID.
    async fn find_by_id(&self, id: RoleId) -> PlacehubResult<Option<Role>>;

    /// Case-insensitive substring search by role name.
    async fn search_by_name(&self, name: &str) -> PlacehubResult<Vec<Role>>;
}

/// PostgreSQL role store.
#[derive(Component)]
#[shaku(interface = RoleStore)]
pub struct PgRoleStore {
    #[shaku(inject)]
    database: Arc<dyn DatabaseInterface>,
}

impl PgRoleStore {
    /// Creates a new PostgreSQL role store.
    #[must_use]
    pub fn new(database: Arc<dyn DatabaseInterface>) -> Self {
        Self { database }
    }

    fn executor(&self) -> QueryExecutor {
        QueryExecutor::new(Arc::clone(&self.database))
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct RoleRow {
    id: i32,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RoleRow> for Role {
    fn from(row: RoleRow) -> Self {
        Role {
            id: row.id,
            name: row.name,
            description: row.description,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

enum RoleDeletion {
    Blocked(i64),
    Deleted(bool),
}

#[async_trait]
impl RoleStore for PgRoleStore {
    async fn create(&self, data: &NewRole) -> PlacehubResult<Role> {
        debug!("Creating role: {}", data.name);

        let row = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, RoleRow>(
                    r#"
                    INSERT INTO roles (name, description, is_active)
                    VALUES ($1, $2, $3)
                    RETURNING id, name, description, is_active, created_at, updated_at
                    "#,
                )
                .bind(&data.name)
                .bind(&data.description)
                .bind(data.is_active)
                .fetch_one(&pool)
                .await
            })
            .await?;

        Ok(row.into())
    }

    async fn list_all(&self) -> PlacehubResult<Vec<Role>> {
        debug!("Fetching all roles from the database");

        let rows: Vec<RoleRow> = self
            .executor()
            .fetch_all(
                r#"
                SELECT id, name, description, is_active, created_at, updated_at
                FROM roles
                ORDER BY id
                "#,
            )
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: RoleId, data: &NewRole) -> PlacehubResult<Option<Role>> {
        debug!("Updating role: {}", id);

        let row = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, RoleRow>(
                    r#"
                    UPDATE roles
                    SET name = $1, description = $2, is_active = $3
                    WHERE id = $4
                    RETURNING id, name, description, is_active, created_at, updated_at
                    "#,
                )
                .bind(&data.name)
                .bind(&data.description)
                .bind(data.is_active)
                .bind(id)
                .fetch_optional(&pool)
                .await
            })
            .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: RoleId) -> PlacehubResult<bool> {
        debug!("Deleting role: {}", id);

        let outcome = self
            .executor()
            .transaction(move |tx| {
                Box::pin(async move {
                    let (assigned,): (i64,) =
                        sqlx::query_as("SELECT COUNT(*) FROM users WHERE role_id = $1")
                            .bind(id)
                            .fetch_one(&mut **tx)
                            .await?;

                    if assigned > 0 {
                        return Ok(RoleDeletion::Blocked(assigned));
                    }

                    let done = sqlx::query("DELETE FROM roles WHERE id = $1")
                        .bind(id)
                        .execute(&mut **tx)
                        .await?;

                    Ok(RoleDeletion::Deleted(done.rows_affected() > 0))
                })
            })
            .await?;

        match outcome {
            RoleDeletion::Blocked(assigned) => Err(PlacehubError::conflict(format!(
                "Cannot delete role. {assigned} users are assigned to this role."
            ))),
            RoleDeletion::Deleted(removed) => Ok(removed),
        }
    }

    async fn find_by_id(&self, id: RoleId) -> PlacehubResult<Option<Role>> {
        debug!("Finding role by id: {}", id);

        let row = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, RoleRow>(
                    r#"
                    SELECT id, name, description, is_active, created_at, updated_at
                    FROM roles
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

    async fn search_by_name(&self, name: &str) -> PlacehubResult<Vec<Role>> {
        debug!("Searching roles by name: {}", name);

        let pattern = format!("%{name}%");
        let rows: Vec<RoleRow> = self
            .executor()
            .execute(move |pool| {
                let pattern = pattern.clone();
                async move {
                    sqlx::query_as::<_, RoleRow>(
                        r#"
                        SELECT id, name, description, is_active, created_at, updated_at
                        FROM roles
                        WHERE name ILIKE $1
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

impl std::fmt::Debug for PgRoleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgRoleStore").finish_non_exhaustive()
    }
}
