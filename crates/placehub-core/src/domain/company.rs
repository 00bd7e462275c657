//! Company entity.

use super::CompanyId;
use crate::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A company recruiting through the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Unique identifier.
    pub id: CompanyId,

    /// Company display name.
    pub name: String,

    /// Contact email.
    pub email: Option<String>,

    /// Logo URL.
    pub logo: Option<String>,

    /// Free-text description.
    pub description: Option<String>,

    /// Headquarters location.
    pub headquarters: Option<String>,

    /// Secondary branch location.
    pub sub_branch_location: Option<String>,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Entity<CompanyId> for Company {
    fn id(&self) -> &CompanyId {
        &self.id
    }
}
