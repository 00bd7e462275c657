//! # PlaceHub Service
//!
//! Business logic service layer for PlaceHub.
//! Contains use cases, cache warming, and application services.

pub mod auth_service;
pub mod company_service;
pub mod dto;
pub mod job_service;
pub mod notice_service;
pub mod permission_service;
pub mod role_permission_service;
pub mod role_service;
pub mod user_service;
pub mod warmer;

pub use auth_service::*;
pub use company_service::*;
pub use dto::*;
pub use job_service::*;
pub use notice_service::*;
pub use permission_service::*;
pub use role_permission_service::*;
pub use role_service::*;
pub use user_service::*;
pub use warmer::*;
