//! Authentication-related DTOs.

use placehub_core::{RoleId, Session, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::UserResponse;

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(range(min = 1, message = "Invalid role id"))]
    pub role_id: RoleId,
}

/// Body of a successful login response. The session identifier itself
/// travels in the session cookie, not in the body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Outcome of a successful login. The REST layer turns the session into
/// a cookie and the user into the response body.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub session: Session,
    pub user: UserResponse,
}

/// Authenticated caller resolved from the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub role_id: RoleId,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
