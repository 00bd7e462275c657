//! OpenAPI documentation configuration.
//!
//! This module provides OpenAPI/Swagger documentation generation for the REST API.

use crate::controllers::HealthResponse;
use placehub_core::{CompanyRef, ErrorResponse, FieldError, JobListing, Notice, NoticeKind};
use placehub_service::{
    CompanyResponse, CreateCompanyRequest, CreateJobRequest, CreateNoticeRequest,
    CreatePermissionRequest, CreateRoleRequest, GrantResponse, JobResponse, LoginRequest,
    LoginResponse, MessageResponse, PermissionResponse, RegisterRequest, RolePermissionRequest,
    RoleResponse, UpdateCompanyRequest, UpdateJobRequest, UpdatePermissionRequest,
    UpdateRoleRequest, UserResponse,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI documentation for the PlaceHub API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "PlaceHub API",
        version = "1.0.0",
        description = "RESTful API for the PlaceHub placement platform",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Auth endpoints
        crate::controllers::auth_controller::register,
        crate::controllers::auth_controller::login,
        crate::controllers::auth_controller::logout,
        crate::controllers::auth_controller::user_data,
        // User endpoints
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::user_by_email,
        crate::controllers::user_controller::delete_user,
        // Role endpoints
        crate::controllers::role_controller::list_roles,
        crate::controllers::role_controller::get_role,
        crate::controllers::role_controller::roles_by_name,
        crate::controllers::role_controller::create_role,
        crate::controllers::role_controller::update_role,
        crate::controllers::role_controller::delete_role,
        // Permission endpoints
        crate::controllers::permission_controller::list_permissions,
        crate::controllers::permission_controller::get_permission,
        crate::controllers::permission_controller::permissions_by_name,
        crate::controllers::permission_controller::create_permission,
        crate::controllers::permission_controller::update_permission,
        crate::controllers::permission_controller::delete_permission,
        // Role-permission endpoints
        crate::controllers::role_permission_controller::list_grants,
        crate::controllers::role_permission_controller::permissions_by_role,
        crate::controllers::role_permission_controller::roles_by_permission,
        crate::controllers::role_permission_controller::assign_permission,
        crate::controllers::role_permission_controller::remove_permission,
        // Company endpoints
        crate::controllers::company_controller::list_companies,
        crate::controllers::company_controller::search_companies,
        crate::controllers::company_controller::get_company,
        crate::controllers::company_controller::create_company,
        crate::controllers::company_controller::update_company,
        crate::controllers::company_controller::delete_company,
        // Job endpoints
        crate::controllers::job_controller::list_jobs,
        crate::controllers::job_controller::get_job,
        crate::controllers::job_controller::create_job,
        crate::controllers::job_controller::update_job,
        crate::controllers::job_controller::delete_job,
        // Notice endpoints
        crate::controllers::notice_controller::list_notices,
        crate::controllers::notice_controller::get_notice,
        crate::controllers::notice_controller::create_notice,
        crate::controllers::notice_controller::delete_notice,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::database_health,
    ),
    components(
        schemas(
            // Core types
            ErrorResponse,
            FieldError,
            JobListing,
            CompanyRef,
            Notice,
            NoticeKind,
            // Auth DTOs
            LoginRequest,
            RegisterRequest,
            LoginResponse,
            MessageResponse,
            UserResponse,
            // RBAC DTOs
            CreateRoleRequest,
            UpdateRoleRequest,
            RoleResponse,
            CreatePermissionRequest,
            UpdatePermissionRequest,
            PermissionResponse,
            RolePermissionRequest,
            GrantResponse,
            // Company DTOs
            CreateCompanyRequest,
            UpdateCompanyRequest,
            CompanyResponse,
            // Job DTOs
            CreateJobRequest,
            UpdateJobRequest,
            JobResponse,
            // Notice DTOs
            CreateNoticeRequest,
            // Health
            HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "users", description = "User management endpoints"),
        (name = "roles", description = "Role management endpoints"),
        (name = "permissions", description = "Permission management endpoints"),
        (name = "rolepermissions", description = "Role-permission grant endpoints"),
        (name = "companies", description = "Company management endpoints"),
        (name = "jobs", description = "Job posting endpoints"),
        (name = "notices", description = "Notice board endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Security addon for session cookie authentication.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "placehub_sid",
                    "Session cookie issued by the login endpoint",
                ))),
            );
        }
    }
}
