//! Data Transfer Objects (DTOs).

mod auth_dto;
mod company_dto;
mod job_dto;
mod notice_dto;
mod permission_dto;
mod role_dto;
mod user_dto;

pub use auth_dto::*;
pub use company_dto::*;
pub use job_dto::*;
pub use notice_dto::*;
pub use permission_dto::*;
pub use role_dto::*;
pub use user_dto::*;
