//! Job posting controller.
//!
//! The public listing is served from the cache read path; mutations are
//! permission-guarded and trigger a cache refresh in the background.

use crate::{
    extractors::SessionUser,
    responses::{created, no_content, ok, AppError, ApiResponse, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use placehub_core::{JobId, JobListing};
use placehub_service::{CreateJobRequest, JobResponse, UpdateJobRequest};
use tracing::debug;

/// Creates the job router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(list_jobs).post(create_job))
        .route(
            "/jobs/:id",
            get(get_job).put(update_job).delete(delete_job),
        )
}

/// List all active job postings. Public endpoint.
#[utoipa::path(
    get,
    path = "/jobs",
    tag = "jobs",
    responses(
        (status = 200, description = "Active job postings", body = [JobListing])
    )
)]
pub async fn list_jobs(State(state): State<AppState>) -> ApiResult<Vec<JobListing>> {
    debug!("List jobs request");

    let jobs = state.job_service.list_jobs().await;
    ok(jobs)
}

/// Get a job posting by id. Public endpoint.
#[utoipa::path(
    get,
    path = "/jobs/{id}",
    tag = "jobs",
    params(("id" = i32, Path, description = "Job id")),
    responses(
        (status = 200, description = "Matching job", body = JobResponse),
        (status = 404, description = "Job not found")
    )
)]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<JobId>,
) -> ApiResult<JobResponse> {
    debug!("Get job request: {}", id);

    let job = state.job_service.get_job(id).await?;
    ok(job)
}

/// Create a new job posting.
#[utoipa::path(
    post,
    path = "/jobs",
    tag = "jobs",
    request_body = CreateJobRequest,
    responses(
        (status = 201, description = "Job created", body = JobResponse),
        (status = 403, description = "Missing job.create permission")
    )
)]
pub async fn create_job(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<ApiResponse<JobResponse>>), AppError> {
    debug!("Create job request: {}", request.title);

    state.require_permission(&user, "job.create").await?;

    let job = state.job_service.create_job(request).await?;
    Ok(created(job))
}

/// Update a job posting.
#[utoipa::path(
    put,
    path = "/jobs/{id}",
    tag = "jobs",
    params(("id" = i32, Path, description = "Job id")),
    request_body = UpdateJobRequest,
    responses(
        (status = 200, description = "Job updated", body = JobResponse),
        (status = 404, description = "Job not found")
    )
)]
pub async fn update_job(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<JobId>,
    Json(request): Json<UpdateJobRequest>,
) -> ApiResult<JobResponse> {
    debug!("Update job request: {}", id);

    state.require_permission(&user, "job.update").await?;

    let job = state.job_service.update_job(id, request).await?;
    ok(job)
}

/// Delete a job posting.
#[utoipa::path(
    delete,
    path = "/jobs/{id}",
    tag = "jobs",
    params(("id" = i32, Path, description = "Job id")),
    responses(
        (status = 204, description = "Job deleted"),
        (status = 404, description = "Job not found")
    )
)]
pub async fn delete_job(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<JobId>,
) -> Result<StatusCode, AppError> {
    debug!("Delete job request: {}", id);

    state.require_permission(&user, "job.delete").await?;

    state.job_service.delete_job(id).await?;
    Ok(no_content())
}
