//! Redis-backed cache store.

use crate::store::{CachePipeline, CacheStore, StagedWrite};
use async_trait::async_trait;
use deadpool_redis::Pool;
use placehub_core::{PlacehubError, PlacehubResult};
use redis::AsyncCommands;
use shaku::Component;
use tracing::debug;

/// Redis cache store over a deadpool connection pool.
#[derive(Component)]
#[shaku(interface = CacheStore)]
pub struct RedisStore {
    /// Redis connection pool. Absent only when the store was built
    /// without parameters.
    pool: Option<Pool>,
}

impl RedisStore {
    /// Creates a new Redis store.
    #[must_use]
    pub fn new(pool: Pool) -> Self {
        Self { pool: Some(pool) }
    }

    /// Get a connection from the pool.
    async fn conn(&self) -> PlacehubResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool
                .get()
                .await
                .map_err(|e| PlacehubError::cache(format!("Failed to get Redis connection: {}", e))),
            None => Err(PlacehubError::cache("Redis pool not configured")),
        }
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> PlacehubResult<Option<String>> {
        let mut conn = self.conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| PlacehubError::cache(format!("Failed to get key '{}': {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> PlacehubResult<()> {
        let mut conn = self.conn().await?;
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(|e| PlacehubError::cache(format!("Failed to set key '{}': {}", key, e)))?;

        debug!("Cached key '{}'", key);
        Ok(())
    }

    async fn set_with_expiry(&self, key: &str, value: &str, ttl_secs: u64) -> PlacehubResult<()> {
        let mut conn = self.conn().await?;
        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| PlacehubError::cache(format!("Failed to set key '{}': {}", key, e)))?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, key: &str) -> PlacehubResult<bool> {
        let mut conn = self.conn().await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| PlacehubError::cache(format!("Failed to delete key '{}': {}", key, e)))?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }

    async fn keys_matching(&self, pattern: &str) -> PlacehubResult<Vec<String>> {
        let mut conn = self.conn().await?;
        let keys: Vec<String> = redis::cmd("KEYS")
            .arg(pattern)
            .query_async(&mut *conn)
            .await
            .map_err(|e| PlacehubError::cache(format!("Failed to scan keys: {}", e)))?;

        debug!("Found {} keys matching pattern '{}'", keys.len(), pattern);
        Ok(keys)
    }

    async fn multi_get(&self, keys: &[String]) -> PlacehubResult<Vec<Option<String>>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn().await?;
        let values: Vec<Option<String>> = redis::cmd("MGET")
            .arg(keys)
            .query_async(&mut *conn)
            .await
            .map_err(|e| PlacehubError::cache(format!("Failed to mget {} keys: {}", keys.len(), e)))?;

        Ok(values)
    }

    async fn execute(&self, batch: CachePipeline) -> PlacehubResult<()> {
        if batch.is_empty() {
            return Ok(());
        }

        let count = batch.len();
        let mut pipe = redis::pipe();
        for write in batch.into_writes() {
            match write {
                StagedWrite::Set { key, value } => {
                    pipe.set(key, value).ignore();
                }
                StagedWrite::SetWithExpiry {
                    key,
                    value,
                    ttl_secs,
                } => {
                    pipe.set_ex(key, value, ttl_secs).ignore();
                }
            }
        }

        let mut conn = self.conn().await?;
        let _: () = pipe
            .query_async(&mut *conn)
            .await
            .map_err(|e| PlacehubError::cache(format!("Failed to execute pipeline: {}", e)))?;

        debug!("Executed cache pipeline with {} writes", count);
        Ok(())
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore").finish_non_exhaustive()
    }
}
