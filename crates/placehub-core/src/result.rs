//! Result type aliases for PlaceHub.

use crate::PlacehubError;

/// A specialized `Result` type for PlaceHub operations.
pub type PlacehubResult<T> = Result<T, PlacehubError>;
