//! Custom Axum extractors.

mod session_user;

pub use session_user::*;
