//! Job posting service.
//!
//! Mutations write through the store and trigger a background cache
//! refresh. The public listing is served from the cache when it holds
//! anything usable and falls back to the database otherwise; it never
//! fails outward.

use crate::dto::{CreateJobRequest, JobResponse, UpdateJobRequest};
use crate::warmer::{spawn_refresh_jobs, CacheWarmer};
use async_trait::async_trait;
use placehub_cache::{keys, CacheStore};
use placehub_core::{Interface, JobId, JobListing, PlacehubError, PlacehubResult, ValidateExt};
use placehub_db::{JobStore, NewJob};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Job posting use cases.
#[async_trait]
pub trait JobService: Interface + Send + Sync {
    /// Creates a job posting.
    async fn create_job(&self, request: CreateJobRequest) -> PlacehubResult<JobResponse>;

    /// Updates a job posting. Absent request fields keep their stored
    /// values.
    async fn update_job(&self, id: JobId, request: UpdateJobRequest)
        -> PlacehubResult<JobResponse>;

    /// Deletes a job posting.
    async fn delete_job(&self, id: JobId) -> PlacehubResult<()>;

    /// Fetches a single job posting.
    async fn get_job(&self, id: JobId) -> PlacehubResult<JobResponse>;

    /// Lists job postings for the public board, cache first.
    async fn list_jobs(&self) -> Vec<JobListing>;
}

/// Job service implementation.
#[derive(Component)]
#[shaku(interface = JobService)]
pub struct JobServiceImpl {
    #[shaku(inject)]
    jobs: Arc<dyn JobStore>,

    #[shaku(inject)]
    cache: Arc<dyn CacheStore>,

    #[shaku(inject)]
    warmer: Arc<dyn CacheWarmer>,
}

impl JobServiceImpl {
    /// Creates a new job service.
    pub fn new(
        jobs: Arc<dyn JobStore>,
        cache: Arc<dyn CacheStore>,
        warmer: Arc<dyn CacheWarmer>,
    ) -> Self {
        Self {
            jobs,
            cache,
            warmer,
        }
    }

    /// Serves the listing from the cache. Returns `None` when the cache
    /// errors or holds nothing usable, in which case the database
    /// answers instead.
    async fn cached_jobs(&self) -> Option<Vec<JobListing>> {
        let keys = match self.cache.keys_matching(keys::JOB_SCAN_PATTERN).await {
            Ok(keys) => keys,
            Err(e) => {
                warn!("Job cache scan failed: {}", e);
                return None;
            }
        };
        if keys.is_empty() {
            debug!("Job cache is cold");
            return None;
        }

        let values = match self.cache.multi_get(&keys).await {
            Ok(values) => values,
            Err(e) => {
                warn!("Job cache read failed: {}", e);
                return None;
            }
        };

        let listings: Vec<JobListing> = values
            .into_iter()
            .flatten()
            .filter_map(|raw| serde_json::from_str(&raw).ok())
            .collect();

        if listings.is_empty() {
            debug!("Job cache had no usable entries");
            return None;
        }

        info!("Serving {} job listings from cache", listings.len());
        Some(listings)
    }

    async fn jobs_from_database(&self) -> Vec<JobListing> {
        debug!("Serving job listings from the database");
        match self.jobs.list_formatted().await {
            Ok(listings) => listings,
            Err(e) => {
                error!("Failed to load job listings: {}", e);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl JobService for JobServiceImpl {
    async fn create_job(&self, request: CreateJobRequest) -> PlacehubResult<JobResponse> {
        debug!("Creating job: {}", request.title);
        request.validate_request()?;

        let data = NewJob {
            company_id: request.company_id,
            title: request.title,
            description: Some(request.description),
            req_skills: request.req_skills,
            salary_range: Some(request.salary_range),
            start_date: Some(request.start_date),
            end_date: Some(request.end_date),
            location: request.location,
            is_active: request.is_active,
        };

        let job = self.jobs.create(&data).await?;
        info!("Job created: {}", job.id);

        spawn_refresh_jobs(Arc::clone(&self.warmer));
        Ok(JobResponse::from(job))
    }

    async fn update_job(
        &self,
        id: JobId,
        request: UpdateJobRequest,
    ) -> PlacehubResult<JobResponse> {
        debug!("Updating job: {}", id);
        request.validate_request()?;

        let existing = self
            .jobs
            .find_by_id(id)
            .await?
            .ok_or_else(|| PlacehubError::not_found("Job", id))?;

        // Absent fields fall back to the stored row.
        let data = NewJob {
            company_id: request.company_id.unwrap_or(existing.company_id),
            title: request.title.unwrap_or(existing.title),
            description: request.description.or(existing.description),
            req_skills: request.req_skills.unwrap_or(existing.req_skills),
            salary_range: request.salary_range.or(existing.salary_range),
            start_date: request.start_date.or(existing.start_date),
            end_date: request.end_date.or(existing.end_date),
            location: request.location.or(existing.location),
            is_active: request.is_active.unwrap_or(existing.is_active),
        };

        let job = self
            .jobs
            .update(id, &data)
            .await?
            .ok_or_else(|| PlacehubError::not_found("Job", id))?;
        info!("Job updated: {}", job.id);

        spawn_refresh_jobs(Arc::clone(&self.warmer));
        Ok(JobResponse::from(job))
    }

    async fn delete_job(&self, id: JobId) -> PlacehubResult<()> {
        debug!("Deleting job: {}", id);

        let deleted = self.jobs.delete(id).await?;
        if !deleted {
            return Err(PlacehubError::not_found("Job", id));
        }
        info!("Job deleted: {}", id);

        spawn_refresh_jobs(Arc::clone(&self.warmer));
        Ok(())
    }

    async fn get_job(&self, id: JobId) -> PlacehubResult<JobResponse> {
        let job = self
            .jobs
            .find_by_id(id)
            .await?
            .ok_or_else(|| PlacehubError::not_found("Job", id))?;

        Ok(JobResponse::from(job))
    }

    async fn list_jobs(&self) -> Vec<JobListing> {
        if let Some(listings) = self.cached_jobs().await {
            return listings;
        }
        self.jobs_from_database().await
    }
}

impl std::fmt::Debug for JobServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobServiceImpl").finish_non_exhaustive()
    }
}
