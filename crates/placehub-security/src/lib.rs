//! # PlaceHub Security
//!
//! Security module for PlaceHub providing password hashing and session
//! identifier generation.

pub mod password;
pub mod session;

pub use password::*;
pub use session::*;
