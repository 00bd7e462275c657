//! Notice store.

use crate::executor::QueryExecutor;
use crate::pool::DatabaseInterface;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use placehub_core::{Interface, Notice, NoticeId, NoticeKind, PlacehubResult, UserId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// Input for creating a notice.
#[derive(Debug, Clone)]
pub struct NewNotice {
    pub author: UserId,
    pub content: String,
    pub kind: NoticeKind,
    pub is_public: bool,
    /// Expiry text stored exactly as supplied.
    pub expires_at: Option<String>,
}

/// Data access for notices.
#[async_trait]
pub trait NoticeStore: Interface + Send + Sync {
    /// Persists a new notice.
    async fn create(&self, data: &NewNotice) -> PlacehubResult<Notice>;

    /// Deletes a notice. Returns `true` if a row was removed.
    async fn delete(&self, id: NoticeId) -> PlacehubResult<bool>;

    /// Finds a notice by ID.
    async fn find_by_id(&self, id: NoticeId) -> PlacehubResult<Option<Notice>>;

    /// Fetches all public notices, newest first.
    async fn list_public(&self) -> PlacehubResult<Vec<Notice>>;
}

/// PostgreSQL notice store.
#[derive(Component)]
#[shaku(interface = NoticeStore)]
pub struct PgNoticeStore {
    #[shaku(inject)]
    database: Arc<dyn DatabaseInterface>,
}

impl PgNoticeStore {
    /// Creates a new PostgreSQL notice store.
    #[must_use]
    pub fn new(database: Arc<dyn DatabaseInterface>) -> Self {
        Self { database }
    }

    fn executor(&self) -> QueryExecutor {
        QueryExecutor::new(Arc::clone(&self.database))
    }
}

#[derive(Debug, FromRow)]
struct NoticeRow {
    id: i32,
    author: i32,
    content: String,
    #[sqlx(rename = "type")]
    kind: String,
    is_public: bool,
    expires_at: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<NoticeRow> for Notice {
    fn from(row: NoticeRow) -> Self {
        Notice {
            id: row.id,
            author: row.author,
            content: row.content,
            kind: NoticeKind::parse(&row.kind).unwrap_or_default(),
            is_public: row.is_public,
            created_at: row.created_at,
            expires_at: row.expires_at,
        }
    }
}

#[async_trait]
impl NoticeStore for PgNoticeStore {
    async fn create(&self, data: &NewNotice) -> PlacehubResult<Notice> {
        debug!("Creating notice by author {}", data.author);

        let kind = data.kind.to_string();
        let row = self
            .executor()
            .execute(move |pool| {
                let kind = kind.clone();
                async move {
                    sqlx::query_as::<_, NoticeRow>(
                        r#"
                        INSERT INTO notices (author, content, type, is_public, expires_at)
                        VALUES ($1, $2, $3, $4, $5)
                        RETURNING id, author, content, type, is_public, expires_at, created_at
                        "#,
                    )
                    .bind(data.author)
                    .bind(&data.content)
                    .bind(kind)
                    .bind(data.is_public)
                    .bind(&data.expires_at)
                    .fetch_one(&pool)
                    .await
                }
            })
            .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: NoticeId) -> PlacehubResult<bool> {
        debug!("Deleting notice: {}", id);

        let affected = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query("DELETE FROM notices WHERE id = $1")
                    .bind(id)
                    .execute(&pool)
                    .await
                    .map(|done| done.rows_affected())
            })
            .await?;

        Ok(affected > 0)
    }

    async fn find_by_id(&self, id: NoticeId) -> PlacehubResult<Option<Notice>> {
        debug!("Finding notice by id: {}", id);

        let row = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, NoticeRow>(
                    r#"
                    SELECT id, author, content, type, is_public, expires_at, created_at
                    FROM notices
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

    async fn list_public(&self) -> PlacehubResult<Vec<Notice>> {
        debug!("Fetching all notices from the database");

        let rows: Vec<NoticeRow> = self
            .executor()
            .fetch_all(
                r#"
                SELECT id, author, content, type, is_public, expires_at, created_at
                FROM notices
                WHERE is_public = true
                ORDER BY created_at DESC
                "#,
            )
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl std::fmt::Debug for PgNoticeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgNoticeStore").finish_non_exhaustive()
    }
}
