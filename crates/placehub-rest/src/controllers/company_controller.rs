//! Company management controller.

use crate::{
    extractors::SessionUser,
    responses::{created, no_content, ok, AppError, ApiResponse, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use placehub_core::CompanyId;
use placehub_service::{CompanyResponse, CreateCompanyRequest, UpdateCompanyRequest};
use serde::Deserialize;
use tracing::debug;

/// Creates the company router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/companies", get(list_companies).post(create_company))
        .route("/companies/search", get(search_companies))
        .route(
            "/companies/:id",
            get(get_company).put(update_company).delete(delete_company),
        )
}

/// Query parameters for company search.
#[derive(Debug, Deserialize)]
pub struct CompanySearchQuery {
    pub q: String,
}

/// List all companies.
#[utoipa::path(
    get,
    path = "/companies",
    tag = "companies",
    responses(
        (status = 200, description = "All companies", body = [CompanyResponse]),
        (status = 403, description = "Missing company.read permission")
    )
)]
pub async fn list_companies(
    State(state): State<AppState>,
    user: SessionUser,
) -> ApiResult<Vec<CompanyResponse>> {
    debug!("List companies request");

    state.require_permission(&user, "company.read").await?;

    let companies = state.company_service.list_companies().await?;
    ok(companies)
}

/// Search companies by name, email or description.
#[utoipa::path(
    get,
    path = "/companies/search",
    tag = "companies",
    params(("q" = String, Query, description = "Search term")),
    responses(
        (status = 200, description = "Matching companies", body = [CompanyResponse])
    )
)]
pub async fn search_companies(
    State(state): State<AppState>,
    user: SessionUser,
    Query(query): Query<CompanySearchQuery>,
) -> ApiResult<Vec<CompanyResponse>> {
    debug!("Company search request: {}", query.q);

    state.require_permission(&user, "company.read").await?;

    let companies = state.company_service.search_companies(&query.q).await?;
    ok(companies)
}

/// Get a company by id.
#[utoipa::path(
    get,
    path = "/companies/{id}",
    tag = "companies",
    params(("id" = i32, Path, description = "Company id")),
    responses(
        (status = 200, description = "Matching company", body = CompanyResponse),
        (status = 404, description = "Company not found")
    )
)]
pub async fn get_company(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<CompanyId>,
) -> ApiResult<CompanyResponse> {
    debug!("Get company request: {}", id);

    state.require_permission(&user, "company.read").await?;

    let company = state.company_service.get_company(id).await?;
    ok(company)
}

/// Create a new company.
#[utoipa::path(
    post,
    path = "/companies",
    tag = "companies",
    request_body = CreateCompanyRequest,
    responses(
        (status = 201, description = "Company created", body = CompanyResponse),
        (status = 403, description = "Missing company.create permission")
    )
)]
pub async fn create_company(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CompanyResponse>>), AppError> {
    debug!("Create company request: {}", request.name);

    state.require_permission(&user, "company.create").await?;

    let company = state.company_service.create_company(request).await?;
    Ok(created(company))
}

/// Update a company.
#[utoipa::path(
    put,
    path = "/companies/{id}",
    tag = "companies",
    params(("id" = i32, Path, description = "Company id")),
    request_body = UpdateCompanyRequest,
    responses(
        (status = 200, description = "Company updated", body = CompanyResponse),
        (status = 404, description = "Company not found")
    )
)]
pub async fn update_company(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<CompanyId>,
    Json(request): Json<UpdateCompanyRequest>,
) -> ApiResult<CompanyResponse> {
    debug!("Update company request: {}", id);

    state.require_permission(&user, "company.update").await?;

    let company = state.company_service.update_company(id, request).await?;
    ok(company)
}

/// Delete a company.
#[utoipa::path(
    delete,
    path = "/companies/{id}",
    tag = "companies",
    params(("id" = i32, Path, description = "Company id")),
    responses(
        (status = 204, description = "Company deleted"),
        (status = 404, description = "Company not found")
    )
)]
pub async fn delete_company(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<CompanyId>,
) -> Result<StatusCode, AppError> {
    debug!("Delete company request: {}", id);

    state.require_permission(&user, "company.delete").await?;

    state.company_service.delete_company(id).await?;
    Ok(no_content())
}
