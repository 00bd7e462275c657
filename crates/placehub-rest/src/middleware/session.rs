//! Session resolution middleware.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use placehub_service::AuthService;
use std::sync::Arc;
use tracing::debug;

/// Session middleware state.
#[derive(Clone)]
pub struct SessionLayerState {
    pub auth_service: Arc<dyn AuthService>,
    pub cookie_name: String,
}

impl SessionLayerState {
    /// Creates a new session middleware state.
    pub fn new(auth_service: Arc<dyn AuthService>, cookie_name: impl Into<String>) -> Self {
        Self {
            auth_service,
            cookie_name: cookie_name.into(),
        }
    }
}

/// Session middleware that resolves the session cookie.
///
/// Looks up the session id from the request cookie, resolves it to the
/// authenticated caller, and adds the caller to the request extensions.
/// Requests without a valid session pass through unchanged; the handler
/// decides whether authentication is required.
pub async fn session_middleware(
    State(state): State<SessionLayerState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let jar = CookieJar::from_headers(request.headers());

    if let Some(cookie) = jar.get(&state.cookie_name) {
        match state.auth_service.resolve_session(cookie.value()).await {
            Ok(user) => {
                debug!("Authenticated user: {}", user.user_id);
                request.extensions_mut().insert(user);
            }
            Err(e) => {
                debug!("Session resolution failed: {}", e);
            }
        }
    }

    Ok(next.run(request).await)
}
