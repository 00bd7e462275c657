//! Notice board service.
//!
//! Creates and deletes go to the store and trigger a background cache
//! refresh; a delete also evicts the notice's own key so it disappears
//! immediately. The public listing is served from the cache when it
//! holds anything usable and falls back to the database otherwise.

use crate::dto::CreateNoticeRequest;
use crate::warmer::{spawn_refresh_notices, CacheWarmer};
use async_trait::async_trait;
use chrono::Utc;
use placehub_cache::{keys, CacheStore};
use placehub_core::{Interface, Notice, NoticeId, PlacehubError, PlacehubResult, ValidateExt};
use placehub_db::{NewNotice, NoticeStore};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Notice board use cases.
#[async_trait]
pub trait NoticeService: Interface + Send + Sync {
    /// Posts a notice.
    async fn create_notice(&self, request: CreateNoticeRequest) -> PlacehubResult<Notice>;

    /// Deletes a notice and evicts it from the cache.
    async fn delete_notice(&self, id: NoticeId) -> PlacehubResult<()>;

    /// Fetches a single notice.
    async fn get_notice(&self, id: NoticeId) -> PlacehubResult<Notice>;

    /// Lists public notices, cache first. Expired notices are dropped
    /// even when still cached.
    async fn list_notices(&self) -> Vec<Notice>;
}

/// Notice service implementation.
#[derive(Component)]
#[shaku(interface = NoticeService)]
pub struct NoticeServiceImpl {
    #[shaku(inject)]
    notices: Arc<dyn NoticeStore>,

    #[shaku(inject)]
    cache: Arc<dyn CacheStore>,

    #[shaku(inject)]
    warmer: Arc<dyn CacheWarmer>,
}

impl NoticeServiceImpl {
    /// Creates a new notice service.
    pub fn new(
        notices: Arc<dyn NoticeStore>,
        cache: Arc<dyn CacheStore>,
        warmer: Arc<dyn CacheWarmer>,
    ) -> Self {
        Self {
            notices,
            cache,
            warmer,
        }
    }

    /// Serves public notices from the cache. Returns `None` when the
    /// cache errors or holds nothing usable.
    async fn cached_notices(&self) -> Option<Vec<Notice>> {
        let keys = match self.cache.keys_matching(keys::NOTICE_SCAN_PATTERN).await {
            Ok(keys) => keys,
            Err(e) => {
                warn!("Notice cache scan failed: {}", e);
                return None;
            }
        };
        if keys.is_empty() {
            debug!("Notice cache is cold");
            return None;
        }

        let values = match self.cache.multi_get(&keys).await {
            Ok(values) => values,
            Err(e) => {
                warn!("Notice cache read failed: {}", e);
                return None;
            }
        };

        let now = Utc::now();
        let notices: Vec<Notice> = values
            .into_iter()
            .flatten()
            .filter_map(|raw| serde_json::from_str::<Notice>(&raw).ok())
            .filter(|notice| !notice.is_expired_at(now))
            .collect();

        if notices.is_empty() {
            debug!("Notice cache had no usable entries");
            return None;
        }

        info!("Serving {} notices from cache", notices.len());
        Some(notices)
    }

    async fn notices_from_database(&self) -> Vec<Notice> {
        debug!("Serving notices from the database");
        match self.notices.list_public().await {
            Ok(notices) => notices,
            Err(e) => {
                error!("Failed to load notices: {}", e);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl NoticeService for NoticeServiceImpl {
    async fn create_notice(&self, request: CreateNoticeRequest) -> PlacehubResult<Notice> {
        debug!("Creating notice from author {}", request.author);
        request.validate_request()?;

        let data = NewNotice {
            author: request.author,
            content: request.content,
            kind: request.kind,
            is_public: request.is_public,
            expires_at: request.expires_at,
        };

        let notice = self.notices.create(&data).await?;
        info!("Notice created: {}", notice.id);

        spawn_refresh_notices(Arc::clone(&self.warmer));
        Ok(notice)
    }

    async fn delete_notice(&self, id: NoticeId) -> PlacehubResult<()> {
        debug!("Deleting notice: {}", id);

        let deleted = self.notices.delete(id).await?;
        if !deleted {
            return Err(PlacehubError::not_found("Notice", id));
        }
        info!("Notice deleted: {}", id);

        spawn_refresh_notices(Arc::clone(&self.warmer));

        // Evict the key directly so the notice disappears before the
        // refresh lands.
        if let Err(e) = self.cache.delete(&keys::notice_key(id)).await {
            warn!("Failed to evict notice {} from cache: {}", id, e);
        }

        Ok(())
    }

    async fn get_notice(&self, id: NoticeId) -> PlacehubResult<Notice> {
        self.notices
            .find_by_id(id)
            .await?
            .ok_or_else(|| PlacehubError::not_found("Notice", id))
    }

    async fn list_notices(&self) -> Vec<Notice> {
        if let Some(notices) = self.cached_notices().await {
            return notices;
        }
        self.notices_from_database().await
    }
}

impl std::fmt::Debug for NoticeServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoticeServiceImpl").finish_non_exhaustive()
    }
}
