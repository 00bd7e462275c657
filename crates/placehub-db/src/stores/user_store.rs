//! User store.

use crate::executor::QueryExecutor;
use crate::pool::DatabaseInterface;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use placehub_core::{Interface, PlacehubResult, RoleId, User, UserId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// Input for creating a user.
///
/// `password` carries a pre-computed hash; hashing happens in the service
/// layer so the store never sees plaintext.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
    pub role_id: RoleId,
}

/// Data access for users.
#[async_trait]
pub trait UserStore: Interface + Send + Sync {
    /// Persists a new user. A duplicate email surfaces as a conflict.
    async fn create(&self, data: &NewUser) -> PlacehubResult<User>;

    /// Fetches all users.
    async fn list_all(&self) -> PlacehubResult<Vec<User>>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> PlacehubResult<Option<User>>;

    /// Finds a user by email address.
    async fn find_by_email(&self, email: &str) -> PlacehubResult<Option<User>>;

    /// Deletes a user. Returns `true` if a row was removed.
    async fn delete(&self, id: UserId) -> PlacehubResult<bool>;
}

/// PostgreSQL user store.
#[derive(Component)]
#[shaku(interface = UserStore)]
pub struct PgUserStore {
    #[shaku(inject)]
    database: Arc<dyn DatabaseInterface>,
}

impl PgUserStore {
    /// Creates a new PostgreSQL user store.
    #[must_use]
    pub fn new(database: Arc<dyn DatabaseInterface>) -> Self {
        Self { database }
    }

    fn executor(&self) -> QueryExecutor {
        QueryExecutor::new(Arc::clone(&self.database))
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i32,
    name: String,
    email: String,
    password: Option<String>,
    role_id: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
            password: row.password,
            role_id: row.role_id,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, data: &NewUser) -> PlacehubResult<User> {
        debug!("Creating user: {}", data.email);

        let row = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, UserRow>(
                    r#"
                    INSERT INTO users (name, email, password, role_id)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, name, email, password, role_id, is_active, created_at, updated_at
                    "#,
                )
                .bind(&data.name)
                .bind(&data.email)
                .bind(&data.password)
                .bind(data.role_id)
                .fetch_one(&pool)
                .await
            })
            .await?;

        Ok(row.into())
    }

    async fn list_all(&self) -> PlacehubResult<Vec<User>> {
        debug!("Fetching all users from the database");

        let rows: Vec<UserRow> = self
            .executor()
            .fetch_all(
                r#"
                SELECT id, name, email, password, role_id, is_active, created_at, updated_at
                FROM users
                ORDER BY id
                "#,
            )
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: UserId) -> PlacehubResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, UserRow>(
                    r#"
                    SELECT id, name, email, password, role_id, is_active, created_at, updated_at
                    FROM users
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

    async fn find_by_email(&self, email: &str) -> PlacehubResult<Option<User>> {
        debug!("Finding user by email: {}", email);

        let row = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, UserRow>(
                    r#"
                    SELECT id, name, email, password, role_id, is_active, created_at, updated_at
                    FROM users
                    WHERE email = $1
                    "#,
                )
                .bind(email)
                .fetch_optional(&pool)
                .await
            })
            .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: UserId) -> PlacehubResult<bool> {
        debug!("Deleting user: {}", id);

        let affected = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query("DELETE FROM users WHERE id = $1")
                    .bind(id)
                    .execute(&pool)
                    .await
                    .map(|done| done.rows_affected())
            })
            .await?;

        Ok(affected > 0)
    }
}

impl std::fmt::Debug for PgUserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgUserStore").finish_non_exhaustive()
    }
}
