//! Domain entities for the placement platform.

pub mod company;
pub mod job;
pub mod notice;
pub mod role;
pub mod session;
pub mod user;

pub use company::*;
pub use job::*;
pub use notice::*;
pub use role::*;
pub use session::*;
pub use user::*;

/// Identifier for a job posting.
pub type JobId = i32;
/// Identifier for a notice.
pub type NoticeId = i32;
/// Identifier for a company.
pub type CompanyId = i32;
/// Identifier for a user.
pub type UserId = i32;
/// Identifier for a role.
pub type RoleId = i32;
/// Identifier for a permission.
pub type PermissionId = i32;
