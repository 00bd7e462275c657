//! Authentication controller.

use crate::{
    extractors::SessionUser,
    responses::{created, ok, AppError, ApiResponse, ApiResult},
    state::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use placehub_core::PlacehubError;
use placehub_service::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserResponse,
};
use tracing::debug;

/// Creates the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", get(logout))
        .route("/userdata", get(user_data))
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), AppError> {
    debug!("Registration request for: {}", request.email);

    let response = state.auth_service.register(request).await?;
    Ok(created(response))
}

/// Login with email and password. Issues a session cookie on success.
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid email or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), AppError> {
    debug!("Login request for: {}", request.email);

    let outcome = state.auth_service.login(request).await?;

    let cookie = Cookie::build((state.session_cookie.clone(), outcome.session.sid))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    let response = LoginResponse {
        message: "Login successful".to_string(),
        user: outcome.user,
    };

    Ok((jar.add(cookie), Json(ApiResponse::success(response))))
}

/// Logout the current session and clear the cookie.
#[utoipa::path(
    get,
    path = "/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    _user: SessionUser,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<MessageResponse>>), AppError> {
    debug!("Logout request");

    let sid = jar
        .get(&state.session_cookie)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| AppError(PlacehubError::unauthorized("Authentication required")))?;

    let response = state.auth_service.logout(&sid).await?;

    let removal = Cookie::build((state.session_cookie.clone(), ""))
        .path("/")
        .build();

    Ok((jar.remove(removal), Json(ApiResponse::success(response))))
}

/// Get the authenticated caller's profile.
#[utoipa::path(
    get,
    path = "/userdata",
    tag = "auth",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn user_data(
    State(state): State<AppState>,
    user: SessionUser,
) -> ApiResult<UserResponse> {
    debug!("User data request for: {}", user.user_id);

    let response = state.auth_service.current_user(user.user_id).await?;
    ok(response)
}
