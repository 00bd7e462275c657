//! # PlaceHub Server Library
//!
//! Wires configuration, dependency injection, and the Axum router into
//! a running HTTP server.

pub mod di;
pub mod startup;
