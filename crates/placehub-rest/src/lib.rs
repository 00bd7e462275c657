//! # PlaceHub REST
//!
//! REST API layer using Axum for PlaceHub.
//! Provides HTTP endpoints for jobs, notices, companies, user management,
//! role-based access control, and health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
