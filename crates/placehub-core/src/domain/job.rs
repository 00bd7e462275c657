//! Job posting entity and the formatted listing served to clients.

use super::{CompanyId, JobId};
use crate::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job posting as stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique identifier.
    pub id: JobId,

    /// Company offering the position.
    pub company_id: CompanyId,

    /// Position title.
    pub title: String,

    /// Full description of the position.
    pub description: Option<String>,

    /// Required skills.
    pub req_skills: Vec<String>,

    /// Salary range as free text (e.g. "6-8 LPA").
    pub salary_range: Option<String>,

    /// Application window start.
    pub start_date: Option<DateTime<Utc>>,

    /// Application window end. Listings without one are treated as
    /// open-ended and cached with a default time-to-live.
    pub end_date: Option<DateTime<Utc>>,

    /// Location of the position.
    pub location: Option<String>,

    /// Whether the posting is visible.
    pub is_active: bool,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Entity<JobId> for Job {
    fn id(&self) -> &JobId {
        &self.id
    }
}

/// Lightweight company reference embedded in a job listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CompanyRef {
    /// Company identifier.
    pub id: CompanyId,
    /// Company display name, absent when the company row is gone.
    pub name: Option<String>,
}

/// A job listing in the wire format served to clients and written to the
/// cache: the job row joined with its company, camel-cased.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    /// Unique identifier.
    pub id: JobId,
    /// Position title.
    pub title: String,
    /// Full description of the position.
    pub description: Option<String>,
    /// Required skills.
    pub req_skills: Vec<String>,
    /// Salary range as free text.
    pub salary_range: Option<String>,
    /// Company offering the position.
    pub company: CompanyRef,
    /// Location of the position.
    pub location: Option<String>,
    /// Whether the posting is visible.
    pub is_active: bool,
    /// Application window start.
    pub start_date: Option<DateTime<Utc>>,
    /// Application window end.
    pub end_date: Option<DateTime<Utc>>,
}

impl JobListing {
    /// Default time-to-live for listings without an end date.
    pub const DEFAULT_TTL_SECS: i64 = 86_400;

    /// Remaining lifetime of this listing in whole seconds at `now`.
    ///
    /// Listings without an end date get [`Self::DEFAULT_TTL_SECS`]. A
    /// non-positive result means the application window has closed.
    #[must_use]
    pub fn ttl_seconds(&self, now: DateTime<Utc>) -> i64 {
        match self.end_date {
            Some(end) => (end - now).num_seconds(),
            None => Self::DEFAULT_TTL_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn listing(end_date: Option<DateTime<Utc>>) -> JobListing {
        JobListing {
            id: 5,
            title: "Backend Engineer".to_string(),
            description: Some("Build resilient services".to_string()),
            req_skills: vec!["rust".to_string(), "postgres".to_string()],
            salary_range: Some("6-8 LPA".to_string()),
            company: CompanyRef {
                id: 2,
                name: Some("Initech".to_string()),
            },
            location: Some("Remote".to_string()),
            is_active: true,
            start_date: None,
            end_date,
        }
    }

    #[test]
    fn test_ttl_from_end_date() {
        let now = Utc::now();
        let job = listing(Some(now + Duration::seconds(3600)));
        let ttl = job.ttl_seconds(now);
        assert!((3599..=3600).contains(&ttl));
    }

    #[test]
    fn test_ttl_default_without_end_date() {
        let job = listing(None);
        assert_eq!(job.ttl_seconds(Utc::now()), JobListing::DEFAULT_TTL_SECS);
    }

    #[test]
    fn test_ttl_negative_for_closed_listing() {
        let now = Utc::now();
        let job = listing(Some(now - Duration::seconds(10)));
        assert!(job.ttl_seconds(now) <= 0);
    }

    #[test]
    fn test_listing_serializes_camel_case() {
        let job = listing(None);
        let json = serde_json::to_string(&job).unwrap();
        assert!(json.contains("\"reqSkills\""));
        assert!(json.contains("\"salaryRange\""));
        assert!(json.contains("\"isActive\""));
        assert!(json.contains("\"endDate\""));
        assert!(json.contains("\"company\""));
        assert!(!json.contains("\"req_skills\""));
    }
}
