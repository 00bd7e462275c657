//! Application state for Axum handlers.

use crate::responses::AppError;
use placehub_core::PlacehubError;
use placehub_db::DatabaseInterface;
use placehub_service::{
    AuthService, CompanyService, CurrentUser, JobService, NoticeService, PermissionService,
    RolePermissionService, RoleService, UserService,
};
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub role_service: Arc<dyn RoleService>,
    pub permission_service: Arc<dyn PermissionService>,
    pub role_permission_service: Arc<dyn RolePermissionService>,
    pub company_service: Arc<dyn CompanyService>,
    pub job_service: Arc<dyn JobService>,
    pub notice_service: Arc<dyn NoticeService>,
    pub database: Arc<dyn DatabaseInterface>,
    /// Name of the session cookie issued on login.
    pub session_cookie: String,
}

impl AppState {
    /// Creates the application state by resolving every service from a
    /// Shaku module.
    pub fn from_module<M>(module: &M, session_cookie: impl Into<String>) -> Self
    where
        M: Module
            + HasComponent<dyn AuthService>
            + HasComponent<dyn UserService>
            + HasComponent<dyn RoleService>
            + HasComponent<dyn PermissionService>
            + HasComponent<dyn RolePermissionService>
            + HasComponent<dyn CompanyService>
            + HasComponent<dyn JobService>
            + HasComponent<dyn NoticeService>
            + HasComponent<dyn DatabaseInterface>,
    {
        Self {
            auth_service: module.resolve(),
            user_service: module.resolve(),
            role_service: module.resolve(),
            permission_service: module.resolve(),
            role_permission_service: module.resolve(),
            company_service: module.resolve(),
            job_service: module.resolve(),
            notice_service: module.resolve(),
            database: module.resolve(),
            session_cookie: session_cookie.into(),
        }
    }

    /// Rejects the request unless the caller's role holds the named
    /// permission.
    pub async fn require_permission(
        &self,
        user: &CurrentUser,
        permission: &'static str,
    ) -> Result<(), AppError> {
        let allowed = self
            .role_permission_service
            .role_has_permission(user.role_id, permission)
            .await;
        if allowed {
            Ok(())
        } else {
            Err(AppError(PlacehubError::forbidden(format!(
                "Access denied. Required permission: {}",
                permission
            ))))
        }
    }
}
