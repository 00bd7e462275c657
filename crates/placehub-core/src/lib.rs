//! # PlaceHub Core
//!
//! Core types, traits, and error definitions for the PlaceHub placement
//! platform. This crate provides the foundational abstractions shared by
//! the storage, cache, service, and REST layers.

pub mod domain;
pub mod error;
pub mod result;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use result::*;
pub use traits::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
