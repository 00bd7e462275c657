//! Cache store abstraction and the staged write pipeline.

use async_trait::async_trait;
use placehub_core::PlacehubResult;
use shaku::Interface;

/// A write staged into a [`CachePipeline`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagedWrite {
    /// `SET key value` without a time-to-live.
    Set { key: String, value: String },
    /// `SETEX key ttl value`.
    SetWithExpiry {
        key: String,
        value: String,
        ttl_secs: u64,
    },
}

/// A batch of cache writes submitted in a single round trip.
///
/// The batch is not atomic across keys; each write lands independently.
/// Callers stage writes while iterating their data set and submit the
/// batch once via [`CacheStore::execute`].
#[derive(Debug, Clone, Default)]
pub struct CachePipeline {
    writes: Vec<StagedWrite>,
}

impl CachePipeline {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages a `SET` without a time-to-live.
    pub fn stage_set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.writes.push(StagedWrite::Set {
            key: key.into(),
            value: value.into(),
        });
    }

    /// Stages a `SETEX` with a time-to-live in seconds.
    pub fn stage_set_with_expiry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        ttl_secs: u64,
    ) {
        self.writes.push(StagedWrite::SetWithExpiry {
            key: key.into(),
            value: value.into(),
            ttl_secs,
        });
    }

    /// Number of staged writes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// True when nothing has been staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Consumes the pipeline, yielding the staged writes in order.
    #[must_use]
    pub fn into_writes(self) -> Vec<StagedWrite> {
        self.writes
    }
}

/// Key-value cache store.
///
/// Values are JSON strings; serialization stays with the caller so reads
/// can drop individual unparseable entries instead of failing wholesale.
#[async_trait]
pub trait CacheStore: Interface + Send + Sync {
    /// Gets a value. Returns `None` if the key is absent or expired.
    async fn get(&self, key: &str) -> PlacehubResult<Option<String>>;

    /// Sets a value without a time-to-live.
    async fn set(&self, key: &str, value: &str) -> PlacehubResult<()>;

    /// Sets a value that expires after `ttl_secs` seconds.
    async fn set_with_expiry(&self, key: &str, value: &str, ttl_secs: u64) -> PlacehubResult<()>;

    /// Deletes a key. Returns `true` if it existed.
    async fn delete(&self, key: &str) -> PlacehubResult<bool>;

    /// Lists keys matching a glob-style pattern such as `job_*`.
    async fn keys_matching(&self, pattern: &str) -> PlacehubResult<Vec<String>>;

    /// Gets many values at once, position-aligned with `keys`. Absent or
    /// expired keys yield `None` at their position.
    async fn multi_get(&self, keys: &[String]) -> PlacehubResult<Vec<Option<String>>>;

    /// Submits a staged batch in one round trip. An empty batch is a
    /// no-op.
    async fn execute(&self, batch: CachePipeline) -> PlacehubResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_starts_empty() {
        let pipeline = CachePipeline::new();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.len(), 0);
    }

    #[test]
    fn test_pipeline_preserves_order() {
        let mut pipeline = CachePipeline::new();
        pipeline.stage_set("notice_1", "{}");
        pipeline.stage_set_with_expiry("5_2", "{}", 3600);
        pipeline.stage_set("notice_2", "{}");

        let writes = pipeline.into_writes();
        assert_eq!(writes.len(), 3);
        assert_eq!(
            writes[0],
            StagedWrite::Set {
                key: "notice_1".to_string(),
                value: "{}".to_string()
            }
        );
        assert_eq!(
            writes[1],
            StagedWrite::SetWithExpiry {
                key: "5_2".to_string(),
                value: "{}".to_string(),
                ttl_secs: 3600
            }
        );
    }
}
