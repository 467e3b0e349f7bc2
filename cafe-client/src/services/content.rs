//! Marketing content documents (popups, site copy)

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use shared::models::{POPUPS_KEY, SITE_CONTENT_KEY};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::content::ContentStore;
use crate::{ClientResult, HttpClient};

#[derive(Debug, Clone)]
pub struct ContentService {
    http: HttpClient,
}

impl ContentService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Raw document stored under `key`; `Null` when the backend has none
    pub async fn fetch(&self, key: &str) -> ClientResult<Value> {
        match self.http.get(&format!("api/content/{key}")).await {
            Ok(value) => Ok(value),
            Err(e) if e.is_not_found() => Ok(Value::Null),
            Err(e) => Err(e),
        }
    }

    pub async fn publish(&self, key: &str, value: &Value) -> ClientResult<()> {
        self.http.put(&format!("api/content/{key}"), value).await
    }

    /// Pull both documents into the local store
    ///
    /// Subscribers are only woken for documents that changed.
    pub async fn sync_into(&self, store: &ContentStore) -> ClientResult<()> {
        for key in [POPUPS_KEY, SITE_CONTENT_KEY] {
            let value = self.fetch(key).await?;
            let version = store.publish(key, value);
            tracing::debug!(key, version, "Content synced");
        }
        Ok(())
    }

    /// Re-pull both documents every `period` until `shutdown` is cancelled
    ///
    /// The first pull happens one period after the call. A failed pull is
    /// logged and the store keeps its previous documents.
    pub fn spawn_sync(
        self,
        store: Arc<ContentStore>,
        period: Duration,
        shutdown: CancellationToken,
    ) -> JoinHandle<()> {
        let period = period.max(Duration::from_millis(1));
        tokio::spawn(async move {
            let mut tick = tokio::time::interval_at(Instant::now() + period, period);
            tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;

                    _ = shutdown.cancelled() => break,
                    _ = tick.tick() => {
                        tokio::select! {
                            _ = shutdown.cancelled() => break,
                            result = self.sync_into(&store) => {
                                if let Err(e) = result {
                                    tracing::warn!(error = %e, "Content sync failed");
                                }
                            }
                        }
                    }
                }
            }
            tracing::debug!("Content sync stopped");
        })
    }

    /// Push the local document under `key` to the backend
    pub async fn push_from(&self, store: &ContentStore, key: &str) -> ClientResult<()> {
        match store.get(key) {
            Some(doc) => self.publish(key, &doc.value).await,
            None => Ok(()),
        }
    }
}
