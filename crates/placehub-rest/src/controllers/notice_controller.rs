//! Notice board controller.
//!
//! Public reads come from the cache read path; expired notices are
//! filtered out even when the store has not yet evicted them.

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
use placehub_core::{Notice, NoticeId};
use placehub_service::CreateNoticeRequest;
use tracing::debug;

/// Creates the notice router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notices", get(list_notices).post(create_notice))
        .route("/notices/:id", get(get_notice).delete(delete_notice))
}

/// List all public notices. Public endpoint.
#[utoipa::path(
    get,
    path = "/notices",
    tag = "notices",
    responses(
        (status = 200, description = "Public notices", body = [Notice])
    )
)]
pub async fn list_notices(State(state): State<AppState>) -> ApiResult<Vec<Notice>> {
    debug!("List notices request");

    let notices = state.notice_service.list_notices().await;
    ok(notices)
}

/// Get a notice by id. Public endpoint.
#[utoipa::path(
    get,
    path = "/notices/{id}",
    tag = "notices",
    params(("id" = i32, Path, description = "Notice id")),
    responses(
        (status = 200, description = "Matching notice", body = Notice),
        (status = 404, description = "Notice not found")
    )
)]
pub async fn get_notice(
    State(state): State<AppState>,
    Path(id): Path<NoticeId>,
) -> ApiResult<Notice> {
    debug!("Get notice request: {}", id);

    let notice = state.notice_service.get_notice(id).await?;
    ok(notice)
}

/// Post a new notice.
#[utoipa::path(
    post,
    path = "/notices",
    tag = "notices",
    request_body = CreateNoticeRequest,
    responses(
        (status = 201, description = "Notice posted", body = Notice),
        (status = 403, description = "Missing notice.create permission")
    )
)]
pub async fn create_notice(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<CreateNoticeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Notice>>), AppError> {
    debug!("Create notice request from author {}", request.author);

    state.require_permission(&user, "notice.create").await?;

    let notice = state.notice_service.create_notice(request).await?;
    Ok(created(notice))
}

/// Delete a notice.
#[utoipa::path(
    delete,
    path = "/notices/{id}",
    tag = "notices",
    params(("id" = i32, Path, description = "Notice id")),
    responses(
        (status = 204, description = "Notice deleted"),
        (status = 404, description = "Notice not found")
    )
)]
pub async fn delete_notice(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<NoticeId>,
) -> Result<StatusCode, AppError> {
    debug!("Delete notice request: {}", id);

    state.require_permission(&user, "notice.delete").await?;

    state.notice_service.delete_notice(id).await?;
    Ok(no_content())
}
