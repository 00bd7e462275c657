//! Login session store.

use crate::executor::QueryExecutor;
use crate::pool::DatabaseInterface;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use placehub_core::{Interface, PlacehubResult, Session, UserId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// Data access for login sessions.
#[async_trait]
pub trait SessionStore: Interface + Send + Sync {
    /// Persists a new session.
    async fn create(
        &self,
        sid: &str,
        user_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> PlacehubResult<Session>;

    /// Finds a session by its identifier.
    async fn find(&self, sid: &str) -> PlacehubResult<Option<Session>>;

    /// Deletes a session. Returns `true` if a row was removed.
    async fn delete(&self, sid: &str) -> PlacehubResult<bool>;

    /// Removes all sessions past their expiry. Returns the number removed.
    async fn delete_expired(&self) -> PlacehubResult<u64>;
}

/// PostgreSQL session store.
#[derive(Component)]
#[shaku(interface = SessionStore)]
pub struct PgSessionStore {
    #[shaku(inject)]
    database: Arc<dyn DatabaseInterface>,
}

impl PgSessionStore {
    /// Creates a new PostgreSQL session store.
    #[must_use]
    pub fn new(database: Arc<dyn DatabaseInterface>) -> Self {
        Self { database }
    }

    fn executor(&self) -> QueryExecutor {
        QueryExecutor::new(Arc::clone(&self.database))
    }
}

#[derive(Debug, FromRow)]
struct SessionRow {
    sid: String,
    user_id: i32,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Session {
            sid: row.sid,
            user_id: row.user_id,
            created_at: row.created_at,
            expires_at: row.expires_at,
        }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn create(
        &self,
        sid: &str,
        user_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> PlacehubResult<Session> {
        debug!("Creating session for user {}", user_id);

        let row = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, SessionRow>(
                    r#"
                    INSERT INTO user_sessions (sid, user_id, expires_at)
                    VALUES ($1, $2, $3)
                    RETURNING sid, user_id, created_at, expires_at
                    "#,
                )
                .bind(sid)
                .bind(user_id)
                .bind(expires_at)
                .fetch_one(&pool)
                .await
            })
            .await?;

        Ok(row.into())
    }

    async fn find(&self, sid: &str) -> PlacehubResult<Option<Session>> {
        let row = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, SessionRow>(
                    r#"
                    SELECT sid, user_id, created_at, expires_at
                    FROM user_sessions
                    WHERE sid = $1
                    "#,
                )
                .bind(sid)
                .fetch_optional(&pool)
                .await
            })
            .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, sid: &str) -> PlacehubResult<bool> {
        debug!("Deleting session");

        let affected = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query("DELETE FROM user_sessions WHERE sid = $1")
                    .bind(sid)
                    .execute(&pool)
                    .await
                    .map(|done| done.rows_affected())
            })
            .await?;

        Ok(affected > 0)
    }

    async fn delete_expired(&self) -> PlacehubResult<u64> {
        let removed = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query("DELETE FROM user_sessions WHERE expires_at <= NOW()")
                    .execute(&pool)
                    .await
                    .map(|done| done.rows_affected())
            })
            .await?;

        if removed > 0 {
            debug!("Removed {} expired sessions", removed);
        }
        Ok(removed)
    }
}

impl std::fmt::Debug for PgSessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgSessionStore").finish_non_exhaustive()
    }
}
