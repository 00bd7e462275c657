//! SQL accessors for the platform's entities.
//!
//! Each store pairs an interface trait with a PostgreSQL implementation.
//! All queries run through the resilient [`QueryExecutor`], so the
//! stores inherit retry-with-reconnect behavior without repeating it.
//!
//! [`QueryExecutor`]: crate::executor::QueryExecutor

pub mod company_store;
pub mod job_store;
pub mod notice_store;
pub mod permission_store;
pub mod role_permission_store;
pub mod role_store;
pub mod session_store;
pub mod user_store;

pub use company_store::{CompanyStore, NewCompany, PgCompanyStore};
pub use job_store::{JobStore, NewJob, PgJobStore};
pub use notice_store::{NewNotice, NoticeStore, PgNoticeStore};
pub use permission_store::{NewPermission, PermissionStore, PgPermissionStore};
pub use role_permission_store::{PgRolePermissionStore, RolePermissionStore};
pub use role_store::{NewRole, PgRoleStore, RoleStore};
pub use session_store::{PgSessionStore, SessionStore};
pub use user_store::{NewUser, PgUserStore, UserStore};
