//! Company store.

use crate::executor::QueryExecutor;
use crate::pool::DatabaseInterface;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use placehub_core::{Company, CompanyId, Interface, PlacehubResult};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// Input for creating or replacing a company.
#[derive(Debug, Clone)]
pub struct NewCompany {
    pub name: String,
    pub email: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub headquarters: Option<String>,
    pub sub_branch_location: Option<String>,
}

/// Data access for companies.
#[async_trait]
pub trait CompanyStore: Interface + Send + Sync {
    /// Persists a new company.
    async fn create(&self, data: &NewCompany) -> PlacehubResult<Company>;

    /// Replaces a company's fields. Returns `None` if the company does not exist.
    async fn update(&self, id: CompanyId, data: &NewCompany) -> PlacehubResult<Option<Company>>;

    /// Deletes a company. Returns `true` if a row was removed.
    async fn delete(&self, id: CompanyId) -> PlacehubResult<bool>;

    /// Finds a company by ID.
    async fn find_by_id(&self, id: CompanyId) -> PlacehubResult<Option<Company>>;

    /// Fetches all companies, newest first.
    async fn list_all(&self) -> PlacehubResult<Vec<Company>>;

    /// Case-insensitive substring search over name, email and description.
    async fn search(&self, term: &str) -> PlacehubResult<Vec<Company>>;
}

/// PostgreSQL company store.
#[derive(Component)]
#[shaku(interface = CompanyStore)]
pub struct PgCompanyStore {
    #[shaku(inject)]
    database: Arc<dyn DatabaseInterface>,
}

impl PgCompanyStore {
    /// Creates a new PostgreSQL company store.
    #[must_use]
    pub fn new(database: Arc<dyn DatabaseInterface>) -> Self {
        Self { database }
    }

    fn executor(&self) -> QueryExecutor {
        QueryExecutor::new(Arc::clone(&self.database))
    }
}

#[derive(Debug, FromRow)]
struct CompanyRow {
    id: i32,
    name: String,
    email: Option<String>,
    logo: Option<String>,
    description: Option<String>,
    headquarters: Option<String>,
    sub_branch_location: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: row.id,
            name: row.name,
            email: row.email,
            logo: row.logo,
            description: row.description,
            headquarters: row.headquarters,
            sub_branch_location: row.sub_branch_location,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl CompanyStore for PgCompanyStore {
    async fn create(&self, data: &NewCompany) -> PlacehubResult<Company> {
        debug!("Creating company: {}", data.name);

        let row = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, CompanyRow>(
                    r#"
                    INSERT INTO companies (name, email, logo, description, headquarters, sub_branch_location)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    RETURNING id, name, email, logo, description, headquarters,
                              sub_branch_location, created_at, updated_at
                    "#,
                )
                .bind(&data.name)
                .bind(&data.email)
                .bind(&data.logo)
                .bind(&data.description)
                .bind(&data.headquarters)
                .bind(&data.sub_branch_location)
                .fetch_one(&pool)
                .await
            })
            .await?;

        Ok(row.into())
    }

    async fn update(&self, id: CompanyId, data: &NewCompany) -> PlacehubResult<Option<Company>> {
        debug!("Updating company: {}", id);

        let row = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, CompanyRow>(
                    r#"
                    UPDATE companies
                    SET name = $1, email = $2, logo = $3, description = $4,
                        headquarters = $5, sub_branch_location = $6
                    WHERE id = $7
                    RETURNING id, name, email, logo, description, headquarters,
                              sub_branch_location, created_at, updated_at
                    "#,
                )
                .bind(&data.name)
                .bind(&data.email)
                .bind(&data.logo)
                .bind(&data.description)
                .bind(&data.headquarters)
                .bind(&data.sub_branch_location)
                .bind(id)
                .fetch_optional(&pool)
                .await
            })
            .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: CompanyId) -> PlacehubResult<bool> {
        debug!("Deleting company: {}", id);

        let affected = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query("DELETE FROM companies WHERE id = $1")
                    .bind(id)
                    .execute(&pool)
                    .await
                    .map(|done| done.rows_affected())
            })
            .await?;

        Ok(affected > 0)
    }

    async fn find_by_id(&self, id: CompanyId) -> PlacehubResult<Option<Company>> {
        debug!("Finding company by id: {}", id);

        let row = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, CompanyRow>(
                    r#"
                    SELECT id, name, email, logo, description, headquarters,
                           sub_branch_location, created_at, updated_at
                    FROM companies
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

    async fn list_all(&self) -> PlacehubResult<Vec<Company>> {
        debug!("Fetching all companies from the database");

        let rows: Vec<CompanyRow> = self
            .executor()
            .fetch_all(
                r#"
                SELECT id, name, email, logo, description, headquarters,
                       sub_branch_location, created_at, updated_at
                FROM companies
                ORDER BY created_at DESC
                "#,
            )
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn search(&self, term: &str) -> PlacehubResult<Vec<Company>> {
        debug!("Searching companies: {}", term);

        let pattern = format!("%{term}%");
        let rows: Vec<CompanyRow> = self
            .executor()
            .execute(move |pool| {
                let pattern = pattern.clone();
                async move {
                    sqlx::query_as::<_, CompanyRow>(
                        r#"
                        SELECT id, name, email, logo, description, headquarters,
                               sub_branch_location, created_at, updated_at
                        FROM companies
                        WHERE name ILIKE $1 OR email ILIKE $1 OR description ILIKE $1
                        ORDER BY created_at DESC
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

impl std::fmt::Debug for PgCompanyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgCompanyStore").finish_non_exhaustive()
    }
}
