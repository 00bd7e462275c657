//! Authenticated session extractor.

use crate::responses::ApiResponse;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use placehub_core::{ErrorResponse, PlacehubError};
use placehub_service::CurrentUser;

/// Extractor for the authenticated caller.
///
/// The session middleware resolves the session cookie and stores the
/// caller in the request extensions; this extractor pulls it out and
/// rejects the request with 401 when no valid session was presented.
pub struct SessionUser(pub CurrentUser);

impl std::ops::Deref for SessionUser {
    type Target = CurrentUser;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Error type for authentication extraction.
pub struct AuthError(PlacehubError);

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::UNAUTHORIZED);

        let error_response = ErrorResponse::from_error(&self.0);
        let body = Json(ApiResponse::<()>::error(error_response));

        (status, body).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts.extensions.get::<CurrentUser>().copied().ok_or_else(|| {
            AuthError(PlacehubError::unauthorized("Authentication required"))
        })?;

        Ok(SessionUser(user))
    }
}
