//! Cache layer for PlaceHub.
//!
//! The [`CacheStore`] trait abstracts the key-value store the population
//! pipelines write to and the read path scans. [`RedisStore`] is the
//! production backend; [`MemoryStore`] backs cache-disabled deployments
//! and tests. Writes can be staged into a [`CachePipeline`] and submitted
//! in one round trip.

pub mod keys;
pub mod memory_store;
pub mod redis_store;
pub mod store;

pub use memory_store::MemoryStore;
pub use redis_store::{RedisStore, RedisStoreParameters};
pub use store::{CachePipeline, CacheStore, StagedWrite};
