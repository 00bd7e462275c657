//! In-memory cache store.
//!
//! A drop-in stand-in for Redis when caching is disabled. Entries expire
//! on read; there is no background eviction.

use crate::store::{CachePipeline, CacheStore, StagedWrite};
use async_trait::async_trait;
use placehub_core::PlacehubResult;
use shaku::Component;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Process-local cache store backed by a hash map.
#[derive(Component)]
#[shaku(interface = CacheStore)]
pub struct MemoryStore {
    #[shaku(force_default)]
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Matches a key against a glob pattern. Only the `*` wildcard is
/// supported, which is all the scan patterns use.
fn matches_pattern(key: &str, pattern: &str) -> bool {
    if !pattern.contains('*') {
        return key == pattern;
    }

    let parts: Vec<&str> = pattern.split('*').collect();
    let mut rest = key;
    for (i, part) in parts.iter().enumerate() {
        if i == 0 {
            if !rest.starts_with(part) {
                return false;
            }
            rest = &rest[part.len()..];
        } else if i == parts.len() - 1 {
            return rest.ends_with(part);
        } else if let Some(idx) = rest.find(part) {
            rest = &rest[idx + part.len()..];
        } else {
            return false;
        }
    }

    true
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> PlacehubResult<Option<String>> {
        let mut entries = self.entries.lock().await;
        let expired = entries
            .get(key)
            .is_some_and(|entry| entry.is_expired(Instant::now()));
        if expired {
            entries.remove(key);
            return Ok(None);
        }

        Ok(entries.get(key).map(|entry| entry.value.clone()))
    }

    async fn set(&self, key: &str, value: &str) -> PlacehubResult<()> {
        let mut entries = self.entries.lock().await;
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: None,
            },
        );
        Ok(())
    }

    async fn set_with_expiry(&self, key: &str, value: &str, ttl_secs: u64) -> PlacehubResult<()> {
        let mut entries = self.entries.lock().await;
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Some(Instant::now() + Duration::from_secs(ttl_secs)),
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> PlacehubResult<bool> {
        Ok(self.entries.lock().await.remove(key).is_some())
    }

    async fn keys_matching(&self, pattern: &str) -> PlacehubResult<Vec<String>> {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;
        entries.retain(|_, entry| !entry.is_expired(now));

        Ok(entries
            .keys()
            .filter(|key| matches_pattern(key, pattern))
            .cloned()
            .collect())
    }

    async fn multi_get(&self, keys: &[String]) -> PlacehubResult<Vec<Option<String>>> {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;
        let mut values = Vec::with_capacity(keys.len());
        for key in keys {
            let expired = entries.get(key).is_some_and(|entry| entry.is_expired(now));
            if expired {
                entries.remove(key);
                values.push(None);
            } else {
                values.push(entries.get(key).map(|entry| entry.value.clone()));
            }
        }

        Ok(values)
    }

    async fn execute(&self, batch: CachePipeline) -> PlacehubResult<()> {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;
        for write in batch.into_writes() {
            match write {
                StagedWrite::Set { key, value } => {
                    entries.insert(
                        key,
                        Entry {
                            value,
                            expires_at: None,
                        },
                    );
                }
                StagedWrite::SetWithExpiry {
                    key,
                    value,
                    ttl_secs,
                } => {
                    entries.insert(
                        key,
                        Entry {
                            value,
                            expires_at: Some(now + Duration::from_secs(ttl_secs)),
                        },
                    );
                }
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore").finish_non_exhaustive()
    }
}
