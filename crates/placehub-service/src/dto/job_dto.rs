//! Job posting DTOs.

use chrono::{DateTime, Utc};
use placehub_core::{CompanyId, Job, JobId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_true() -> bool {
    true
}

/// Request to create a job posting.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateJobRequest {
    #[validate(range(min = 1, message = "Invalid company id"))]
    pub company_id: CompanyId,

    #[validate(length(min = 2, max = 100, message = "Title must be 2-100 characters"))]
    pub title: String,

    #[validate(length(min = 10, max = 1000, message = "Description must be 10-1000 characters"))]
    pub description: String,

    pub req_skills: Vec<String>,

    #[validate(length(min = 1, message = "Salary range is required"))]
    pub salary_range: String,

    pub start_date: DateTime<Utc>,

    pub end_date: DateTime<Utc>,

    #[validate(length(max = 100, message = "Location cannot exceed 100 characters"))]
    pub location: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Request to update a job posting. Absent fields keep their current
/// values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateJobRequest {
    #[validate(range(min = 1, message = "Invalid company id"))]
    pub company_id: Option<CompanyId>,

    #[validate(length(min = 2, max = 100, message = "Title must be 2-100 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 10, max = 1000, message = "Description must be 10-1000 characters"))]
    pub description: Option<String>,

    pub req_skills: Option<Vec<String>>,

    #[validate(length(min = 1, message = "Salary range cannot be empty"))]
    pub salary_range: Option<String>,

    pub start_date: Option<DateTime<Utc>>,

    pub end_date: Option<DateTime<Utc>>,

    #[validate(length(max = 100, message = "Location cannot exceed 100 characters"))]
    pub location: Option<String>,

    pub is_active: Option<bool>,
}

/// Job row response DTO, used by the management endpoints. The public
/// listing endpoint serves the wire-format `JobListing` instead.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobResponse {
    pub id: JobId,
    pub company_id: CompanyId,
    pub title: String,
    pub description: Option<String>,
    pub req_skills: Vec<String>,
    pub salary_range: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            company_id: job.company_id,
            title: job.title,
            description: job.description,
            req_skills: job.req_skills,
            salary_range: job.salary_range,
            start_date: job.start_date,
            end_date: job.end_date,
            location: job.location,
            is_active: job.is_active,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn valid_create_request() -> CreateJobRequest {
        CreateJobRequest {
            company_id: 2,
            title: "Backend Engineer".to_string(),
            description: "Build and operate the job board backend.".to_string(),
            req_skills: vec!["rust".to_string(), "sql".to_string()],
            salary_range: "90k-120k".to_string(),
            start_date: Utc::now(),
            end_date: Utc::now() + Duration::days(30),
            location: Some("Remote".to_string()),
            is_active: true,
        }
    }

    #[test]
    fn test_create_job_request_valid() {
        assert!(valid_create_request().validate().is_ok());
    }

    #[test]
    fn test_create_job_request_short_title() {
        let request = CreateJobRequest {
            title: "X".to_string(),
            ..valid_create_request()
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_job_request_short_description() {
        let request = CreateJobRequest {
            description: "too short".to_string(),
            ..valid_create_request()
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_job_request_all_fields_optional() {
        let request: UpdateJobRequest = serde_json::from_str("{}").unwrap();

        assert!(request.validate().is_ok());
        assert!(request.title.is_none());
        assert!(request.is_active.is_none());
    }
}
