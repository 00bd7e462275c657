//! # PlaceHub Database Layer
//!
//! PostgreSQL access for the placement platform. The pool is owned by a
//! [`Database`] manager that builds it lazily, discards it on fatal
//! connection errors, and rebuilds it after a short delay. All SQL runs
//! through a [`QueryExecutor`] that retries connection-class failures with
//! exponential backoff; everything else fails fast.

pub mod executor;
pub mod pool;
pub mod retry;
pub mod stores;

pub use executor::{is_connection_error, QueryExecutor};
pub use pool::{Database, DatabaseHealth, DatabaseInterface, DatabaseParameters};
pub use sqlx::PgPool;
pub use retry::RetryPolicy;
pub use stores::{
    CompanyStore, JobStore, NewCompany, NewJob, NewNotice, NewPermission, NewRole, NewUser,
    NoticeStore, PermissionStore, PgCompanyStore, PgJobStore, PgNoticeStore, PgPermissionStore,
    PgRoleStore, PgRolePermissionStore, PgSessionStore, PgUserStore, RolePermissionStore,
    RoleStore, SessionStore, UserStore,
};
