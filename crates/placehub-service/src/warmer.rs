//! Cache warming pipelines for jobs and notices.
//!
//! Both pipelines read the authoritative rows, stage one cache write per
//! row into a [`CachePipeline`], and submit the batch in a single round
//! trip. They are fire-and-forget: every failure is logged and swallowed
//! so a cache outage never breaks the mutation that triggered the
//! refresh.

use async_trait::async_trait;
use chrono::Utc;
use placehub_cache::{keys, CachePipeline, CacheStore};
use placehub_core::{Interface, NoticeExpiry};
use placehub_db::{JobStore, NoticeStore};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Rebuilds the cached job and notice collections from the database.
#[async_trait]
pub trait CacheWarmer: Interface + Send + Sync {
    /// Re-caches every active job listing under its own key.
    async fn refresh_jobs(&self);

    /// Re-caches every public notice under its own key.
    async fn refresh_notices(&self);
}

/// Runs a job cache refresh on a background task.
pub fn spawn_refresh_jobs(warmer: Arc<dyn CacheWarmer>) {
    tokio::spawn(async move {
        warmer.refresh_jobs().await;
    });
}

/// Runs a notice cache refresh on a background task.
pub fn spawn_refresh_notices(warmer: Arc<dyn CacheWarmer>) {
    tokio::spawn(async move {
        warmer.refresh_notices().await;
    });
}

/// Cache warmer backed by the job and notice stores.
#[derive(Component)]
#[shaku(interface = CacheWarmer)]
pub struct CacheWarmerImpl {
    #[shaku(inject)]
    jobs: Arc<dyn JobStore>,

    #[shaku(inject)]
    notices: Arc<dyn NoticeStore>,

    #[shaku(inject)]
    cache: Arc<dyn CacheStore>,
}

impl CacheWarmerImpl {
    /// Creates a new cache warmer.
    pub fn new(
        jobs: Arc<dyn JobStore>,
        notices: Arc<dyn NoticeStore>,
        cache: Arc<dyn CacheStore>,
    ) -> Self {
        Self {
            jobs,
            notices,
            cache,
        }
    }
}

#[async_trait]
impl CacheWarmer for CacheWarmerImpl {
    async fn refresh_jobs(&self) {
        debug!("Refreshing job cache");

        let listings = match self.jobs.list_formatted().await {
            Ok(listings) => listings,
            Err(e) => {
                error!("Job cache refresh failed to load listings: {}", e);
                return;
            }
        };

        let now = Utc::now();
        let mut batch = CachePipeline::new();

        for listing in &listings {
            let key = keys::job_key(listing.id, listing.company.id);

            // Remaining lifetime of the posting, or the default when it
            // has no end date.
            let ttl = match u64::try_from(listing.ttl_seconds(now)) {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    debug!("Skipping job with key '{}': posting has expired", key);
                    continue;
                }
            };

            match serde_json::to_string(listing) {
                Ok(value) => batch.stage_set_with_expiry(key, value, ttl),
                Err(e) => error!("Failed to serialize job {}: {}", listing.id, e),
            }
        }

        if batch.is_empty() {
            info!("No active jobs to cache");
            return;
        }

        let staged = batch.len();
        match self.cache.execute(batch).await {
            Ok(()) => info!("Cached {} job listings", staged),
            Err(e) => error!("Job cache refresh failed: {}", e),
        }
    }

    async fn refresh_notices(&self) {
        debug!("Refreshing notice cache");

        let notices = match self.notices.list_public().await {
            Ok(notices) => notices,
            Err(e) => {
                error!("Notice cache refresh failed to load notices: {}", e);
                return;
            }
        };

        let now = Utc::now();
        let mut batch = CachePipeline::new();

        for notice in &notices {
            let key = keys::notice_key(notice.id);

            let value = match serde_json::to_string(notice) {
                Ok(value) => value,
                Err(e) => {
                    error!("Failed to serialize notice {}: {}", notice.id, e);
                    continue;
                }
            };

            match notice.expiry_at(now) {
                NoticeExpiry::None => batch.stage_set(key, value),
                NoticeExpiry::Unparseable => {
                    warn!(
                        "Notice {} has an unparseable expiry '{}'; caching without TTL",
                        notice.id,
                        notice.expires_at.as_deref().unwrap_or_default()
                    );
                    batch.stage_set(key, value);
                }
                NoticeExpiry::Expired => {
                    debug!("Skipping notice {}: already expired", notice.id);
                }
                NoticeExpiry::ExpiresIn(secs) => {
                    if let Ok(ttl) = u64::try_from(secs) {
                        batch.stage_set_with_expiry(key, value, ttl);
                    }
                }
            }
        }

        let staged = batch.len();
        match self.cache.execute(batch).await {
            Ok(()) => info!("Cached {} notices", staged),
            Err(e) => error!("Notice cache refresh failed: {}", e),
        }
    }
}

impl std::fmt::Debug for CacheWarmerImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheWarmerImpl").finish_non_exhaustive()
    }
}
