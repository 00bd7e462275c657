//! REST API controllers.

pub mod auth_controller;
pub mod company_controller;
pub mod health_controller;
pub mod job_controller;
pub mod notice_controller;
pub mod permission_controller;
pub mod role_controller;
pub mod role_permission_controller;
pub mod user_controller;

pub use health_controller::*;
