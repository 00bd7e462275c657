//! Main application router.

use crate::{
    controllers::{
        auth_controller, company_controller, health_controller, job_controller, notice_controller,
        permission_controller, role_controller, role_permission_controller, user_controller,
    },
    middleware::{logging_middleware, session_middleware, SessionLayerState},
    openapi::ApiDoc,
    state::AppState,
};
use axum::{middleware, routing::get, Router};
use placehub_config::{SecurityConfig, ServerConfig};
use placehub_db::DatabaseInterface;
use placehub_service::{
    AuthService, CompanyService, JobService, NoticeService, PermissionService,
    RolePermissionService, RoleService, UserService,
};
use shaku::{HasComponent, Module};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the main application router from a Shaku module.
///
/// The module must provide every service component plus the database
/// manager for the health probe.
pub fn create_router<M>(
    module: &M,
    server_config: &ServerConfig,
    security_config: &SecurityConfig,
) -> Router
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
    let state = AppState::from_module(module, security_config.session_cookie.clone());

    build_router(state, server_config)
}

/// Assembles the router around an already-built application state.
pub fn build_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);

    let session_state = SessionLayerState::new(
        Arc::clone(&state.auth_service),
        state.session_cookie.clone(),
    );

    // Every API route sees the resolved session; handlers decide whether
    // authentication and permissions are required.
    let api_router = Router::new()
        .merge(auth_controller::router())
        .merge(user_controller::router())
        .merge(role_controller::router())
        .merge(permission_controller::router())
        .merge(role_permission_controller::router())
        .merge(company_controller::router())
        .merge(job_controller::router())
        .merge(notice_controller::router())
        .layer(middleware::from_fn_with_state(
            session_state,
            session_middleware,
        ))
        .with_state(state.clone());

    let router = Router::new()
        // Health endpoints (no auth required)
        .merge(health_controller::router().with_state(state))
        // API v1
        .nest("/api/v1", api_router)
        // Swagger UI and OpenAPI spec
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Root endpoint
        .route("/", get(root))
        // Add middleware layers
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with REST endpoints and Swagger UI at /swagger-ui");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        if server_config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        CorsLayer::new()
    }
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "PlaceHub API v1"
}
