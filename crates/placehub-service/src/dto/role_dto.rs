//! Role-related DTOs.

use chrono::{DateTime, Utc};
use placehub_core::validation::rules;
use placehub_core::{Role, RoleId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_true() -> bool {
    true
}

/// Request to create a role.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRoleRequest {
    #[validate(
        length(min = 2, max = 64, message = "Role name must be 2-64 characters"),
        custom(function = rules::not_blank)
    )]
    pub name: String,

    #[validate(length(max = 255, message = "Description cannot exceed 255 characters"))]
    pub description: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Request to replace a role.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRoleRequest {
    #[validate(
        length(min = 2, max = 64, message = "Role name must be 2-64 characters"),
        custom(function = rules::not_blank)
    )]
    pub name: String,

    #[validate(length(max = 255, message = "Description cannot exceed 255 characters"))]
    pub description: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Role response DTO.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoleResponse {
    pub id: RoleId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
            description: role.description,
            is_active: role.is_active,
            created_at: role.created_at,
            updated_at: role.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_role_request_valid() {
        let request = CreateRoleRequest {
            name: "Moderator".to_string(),
            description: Some("Moderates notices".to_string()),
            is_active: true,
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_role_request_blank_name() {
        let request = CreateRoleRequest {
            name: "   ".to_string(),
            description: None,
            is_active: true,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_role_request_defaults_active() {
        let request: CreateRoleRequest =
            serde_json::from_str(r#"{"name": "Moderator"}"#).unwrap();

        assert!(request.is_active);
    }
}
