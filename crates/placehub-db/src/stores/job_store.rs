//! Job posting store.

use crate::executor::QueryExecutor;
use crate::pool::DatabaseInterface;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use placehub_core::{CompanyRef, Interface, Job, JobId, JobListing, PlacehubResult};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// Input for creating or replacing a job posting.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub company_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub req_skills: Vec<String>,
    pub salary_range: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub is_active: bool,
}

/// Data access for job postings.
#[async_trait]
pub trait JobStore: Interface + Send + Sync {
    /// Persists a new job posting.
    async fn create(&self, data: &NewJob) -> PlacehubResult<Job>;

    /// Replaces a job posting. Returns `None` if the job does not exist.
    async fn update(&self, id: JobId, data: &NewJob) -> PlacehubResult<Option<Job>>;

    /// Deletes a job posting. Returns `true` if a row was removed.
    async fn delete(&self, id: JobId) -> PlacehubResult<bool>;

    /// Finds a job posting by ID.
    async fn find_by_id(&self, id: JobId) -> PlacehubResult<Option<Job>>;

    /// Fetches all jobs joined with their company, newest first, in the
    /// listing shape served to clients and written to the cache.
    async fn list_formatted(&self) -> PlacehubResult<Vec<JobListing>>;
}

/// PostgreSQL job store.
#[derive(Component)]
#[shaku(interface = JobStore)]
pub struct PgJobStore {
    #[shaku(inject)]
    database: Arc<dyn DatabaseInterface>,
}

impl PgJobStore {
    /// Creates a new PostgreSQL job store.
    #[must_use]
    pub fn new(database: Arc<dyn DatabaseInterface>) -> Self {
        Self { database }
    }

    fn executor(&self) -> QueryExecutor {
        QueryExecutor::new(Arc::clone(&self.database))
    }
}

#[derive(Debug, FromRow)]
struct JobRow {
    id: i32,
    company_id: i32,
    title: String,
    description: Option<String>,
    req_skills: Option<Vec<String>>,
    salary_range: Option<String>,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    location: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        Job {
            id: row.id,
            company_id: row.company_id,
            title: row.title,
            description: row.description,
            req_skills: row.req_skills.unwrap_or_default(),
            salary_range: row.salary_range,
            start_date: row.start_date,
            end_date: row.end_date,
            location: row.location,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct JobListingRow {
    id: i32,
    title: String,
    description: Option<String>,
    req_skills: Option<Vec<String>>,
    salary_range: Option<String>,
    company_id: i32,
    company_name: Option<String>,
    location: Option<String>,
    is_active: bool,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
}

impl From<JobListingRow> for JobListing {
    fn from(row: JobListingRow) -> Self {
        JobListing {
            id: row.id,
            title: row.title,
            description: row.description,
            req_skills: row.req_skills.unwrap_or_default(),
            salary_range: row.salary_range,
            company: CompanyRef {
                id: row.company_id,
                name: row.company_name,
            },
            location: row.location,
            is_active: row.is_active,
            start_date: row.start_date,
            end_date: row.end_date,
        }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn create(&self, data: &NewJob) -> PlacehubResult<Job> {
        debug!("Creating job: {}", data.title);

        let row = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, JobRow>(
                    r#"
                    INSERT INTO jobs
                        (company_id, title, description, req_skills, salary_range,
                         start_date, end_date, location, is_active)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                    RETURNING id, company_id, title, description, req_skills, salary_range,
                              start_date, end_date, location, is_active, created_at, updated_at
                    "#,
                )
                .bind(data.company_id)
                .bind(&data.title)
                .bind(&data.description)
                .bind(&data.req_skills)
                .bind(&data.salary_range)
                .bind(data.start_date)
                .bind(data.end_date)
                .bind(&data.location)
                .bind(data.is_active)
                .fetch_one(&pool)
                .await
            })
            .await?;

        Ok(row.into())
    }

    async fn update(&self, id: JobId, data: &NewJob) -> PlacehubResult<Option<Job>> {
        debug!("Updating job: {}", id);

        let row = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, JobRow>(
                    r#"
                    UPDATE jobs
                    SET company_id = $1, title = $2, description = $3, req_skills = $4,
                        salary_range = $5, start_date = $6, end_date = $7, location = $8,
                        is_active = $9
                    WHERE id = $10
                    RETURNING id, company_id, title, description, req_skills, salary_range,
                              start_date, end_date, location, is_active, created_at, updated_at
                    "#,
                )
                .bind(data.company_id)
                .bind(&data.title)
                .bind(&data.description)
                .bind(&data.req_skills)
                .bind(&data.salary_range)
                .bind(data.start_date)
                .bind(data.end_date)
                .bind(&data.location)
                .bind(data.is_active)
                .bind(id)
                .fetch_optional(&pool)
                .await
            })
            .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: JobId) -> PlacehubResult<bool> {
        debug!("Deleting job: {}", id);

        let affected = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query("DELETE FROM jobs WHERE id = $1")
                    .bind(id)
                    .execute(&pool)
                    .await
                    .map(|done| done.rows_affected())
            })
            .await?;

        Ok(affected > 0)
    }

    async fn find_by_id(&self, id: JobId) -> PlacehubResult<Option<Job>> {
        debug!("Finding job by id: {}", id);

        let row = self
            .executor()
            .execute(move |pool| async move {
                sqlx::query_as::<_, JobRow>(
                    r#"
                    SELECT id, company_id, title, description, req_skills, salary_range,
                           start_date, end_date, location, is_active, created_at, updated_at
                    FROM jobs
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

    async fn list_formatted(&self) -> PlacehubResult<Vec<JobListing>> {
        debug!("Fetching all jobs from the database");

        let rows: Vec<JobListingRow> = self
            .executor()
            .fetch_all(
                r#"
                SELECT j.id, j.title, j.description, j.req_skills, j.salary_range,
                       j.company_id, c.name AS company_name,
                       j.location, j.is_active, j.start_date, j.end_date
                FROM jobs j
                LEFT JOIN companies c ON j.company_id = c.id
                ORDER BY j.created_at DESC
                "#,
            )
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl std::fmt::Debug for PgJobStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgJobStore").finish_non_exhaustive()
    }
}
