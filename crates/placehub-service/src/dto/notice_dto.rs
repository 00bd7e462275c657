//! Notice DTOs.

use placehub_core::{NoticeKind, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_true() -> bool {
    true
}

/// Request to post a notice.
///
/// `expires_at` is stored verbatim; expiry classification happens when
/// the notice is cached or served, not here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateNoticeRequest {
    #[validate(range(min = 1, message = "Invalid author id"))]
    pub author: UserId,

    #[validate(length(min = 1, max = 1000, message = "Content must be 1-1000 characters"))]
    pub content: String,

    #[serde(rename = "type", default)]
    pub kind: NoticeKind,

    #[serde(default = "default_true")]
    pub is_public: bool,

    pub expires_at: Option<String>,
}
