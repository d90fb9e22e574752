use std::sync::Arc;
use std::time::Duration;

use crate::{BookMetadata, MetadataCache, VolumeSource};

/// Retry policy for the fetch loop.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempts before giving up, including the first one.
    pub max_attempts: u32,
    /// Delay before attempt `n` is `base_delay * n`; attempt 0 runs
    /// immediately.
    pub base_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            base_delay: Duration::from_millis(200),
        }
    }
}

/// Cache-aside fetcher for normalized book metadata.
///
/// Retries are strictly sequential with a delay that grows per attempt.
/// Exhausting the budget is not an error from the caller's point of
/// view: `fetch` degrades to `None` and the caller renders a
/// placeholder. Concurrent callers missing on the same identifier are
/// not coalesced; both will hit the source.
pub struct BookMetadataFetcher {
    source: Arc<dyn VolumeSource>,
    cache: Arc<dyn MetadataCache>,
    retry: RetryConfig,
}

impl BookMetadataFetcher {
    pub fn new(source: Arc<dyn VolumeSource>, cache: Arc<dyn MetadataCache>) -> Self {
        Self {
            source,
            cache,
            retry: RetryConfig::default(),
        }
    }

    pub fn with_retry_config(
        source: Arc<dyn VolumeSource>,
        cache: Arc<dyn MetadataCache>,
        retry: RetryConfig,
    ) -> Self {
        Self {
            source,
            cache,
            retry,
        }
    }

    /// Fetch the metadata record for a volume.
    ///
    /// A cached record is returned as-is without touching the network.
    /// Otherwise the source is queried with bounded retries; a success
    /// is normalized and written back to the cache.
    pub async fn fetch(&self, volume_id: &str) -> Option<BookMetadata> {
        if let Some(cached) = self.cache.get(volume_id) {
            tracing::debug!("metadata cache hit for volume {}", volume_id);
            return Some(cached);
        }

        for attempt in 0..self.retry.max_attempts {
            if attempt > 0 {
                tokio::time::sleep(self.retry.base_delay * attempt).await;
            }

            match self.source.get_volume(volume_id).await {
                Ok(volume) => {
                    let metadata = BookMetadata::from_volume(volume);
                    self.cache.insert(volume_id, metadata.clone());
                    return Some(metadata);
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to fetch volume {} (attempt {}/{}): {}",
                        volume_id,
                        attempt + 1,
                        self.retry.max_attempts,
                        e
                    );
                }
            }
        }

        tracing::warn!(
            "Giving up on volume {} after {} attempts",
            volume_id,
            self.retry.max_attempts
        );
        None
    }
}
