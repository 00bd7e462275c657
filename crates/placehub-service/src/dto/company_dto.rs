//! Company-related DTOs.

use chrono::{DateTime, Utc};
use placehub_core::validation::rules;
use placehub_core::{Company, CompanyId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a company.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCompanyRequest {
    #[validate(
        length(min = 2, max = 100, message = "Company name must be 2-100 characters"),
        custom(function = rules::not_blank)
    )]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(url(message = "Invalid logo URL"))]
    pub logo: Option<String>,

    #[validate(length(max = 1000, message = "Description cannot exceed 1000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 255))]
    pub headquarters: Option<String>,

    #[validate(length(max = 255))]
    pub sub_branch_location: Option<String>,
}

/// Request to replace a company.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCompanyRequest {
    #[validate(
        length(min = 2, max = 100, message = "Company name must be 2-100 characters"),
        custom(function = rules::not_blank)
    )]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(url(message = "Invalid logo URL"))]
    pub logo: Option<String>,

    #[validate(length(max = 1000, message = "Description cannot exceed 1000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 255))]
    pub headquarters: Option<String>,

    #[validate(length(max = 255))]
    pub sub_branch_location: Option<String>,
}

/// Company response DTO.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyResponse {
    pub id: CompanyId,
    pub name: String,
    pub email: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub headquarters: Option<String>,
    pub sub_branch_location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            email: company.email,
            logo: company.logo,
            description: company.description,
            headquarters: company.headquarters,
            sub_branch_location: company.sub_branch_location,
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}
