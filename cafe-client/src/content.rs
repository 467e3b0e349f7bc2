//! Versioned content documents with change notification
//!
//! Admin screens and the public site read the same documents (popups, site
//! copy). Every key has a `watch` channel: publishing a changed value bumps
//! its version and wakes all subscribers, and a snapshot of every key can be
//! kept on disk.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::error::{AppError, ErrorCode};
use shared::models::{POPUPS_KEY, Popup, SITE_CONTENT_KEY, SiteContent};
use tokio::sync::watch;

use crate::ClientResult;

/// A document together with its version
///
/// Version 0 means "never published".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Versioned<T> {
    pub version: u64,
    pub value: T,
}

impl Versioned<Value> {
    fn empty() -> Self {
        Self {
            version: 0,
            value: Value::Null,
        }
    }
}

#[derive(Debug, Default)]
pub struct ContentStore {
    channels: RwLock<HashMap<String, watch::Sender<Versioned<Value>>>>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the document under `key` and return its version
    ///
    /// Publishing a value equal to the current one is a no-op and does not
    /// notify subscribers.
    pub fn publish(&self, key: &str, value: Value) -> u64 {
        let mut channels = self.channels.write();
        let sender = channels
            .entry(key.to_string())
            .or_insert_with(|| watch::Sender::new(Versioned::empty()));

        let mut version = 0;
        sender.send_if_modified(|doc| {
            if doc.version > 0 && doc.value == value {
                version = doc.version;
                return false;
            }
            doc.version += 1;
            doc.value = value;
            version = doc.version;
            true
        });
        version
    }

    /// Serialize `value` and publish it
    pub fn publish_typed<T: Serialize>(&self, key: &str, value: &T) -> ClientResult<u64> {
        let value = serde_json::to_value(value)?;
        Ok(self.publish(key, value))
    }

    /// Current document, `None` if nothing was published under `key`
    pub fn get(&self, key: &str) -> Option<Versioned<Value>> {
        let channels = self.channels.read();
        let doc = channels.get(key)?.borrow().clone();
        (doc.version > 0).then_some(doc)
    }

    /// Current document deserialized as `T`
    ///
    /// A document that does not match `T` is reported as
    /// [`ErrorCode::ContentSchemaInvalid`] rather than silently dropped.
    pub fn get_typed<T: DeserializeOwned>(&self, key: &str) -> ClientResult<Option<T>> {
        let Some(doc) = self.get(key) else {
            return Ok(None);
        };
        if doc.value.is_null() {
            return Ok(None);
        }
        serde_json::from_value(doc.value).map(Some).map_err(|e| {
            AppError::with_message(ErrorCode::ContentSchemaInvalid, e.to_string())
                .with_detail("key", key)
                .with_detail("version", doc.version)
                .into()
        })
    }

    /// Receiver that sees every future change of `key`
    pub fn subscribe(&self, key: &str) -> watch::Receiver<Versioned<Value>> {
        if let Some(sender) = self.channels.read().get(key) {
            return sender.subscribe();
        }
        self.channels
            .write()
            .entry(key.to_string())
            .or_insert_with(|| watch::Sender::new(Versioned::empty()))
            .subscribe()
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.channels.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    // ========== Known documents ==========

    pub fn popups(&self) -> ClientResult<Vec<Popup>> {
        Ok(self.get_typed(POPUPS_KEY)?.unwrap_or_default())
    }

    /// Popups that are enabled and inside their date window at `now`
    pub fn active_popups(&self, now: DateTime<Utc>) -> ClientResult<Vec<Popup>> {
        let mut popups = self.popups()?;
        popups.retain(|p| p.is_active_at(now));
        Ok(popups)
    }

    pub fn site_content(&self) -> ClientResult<SiteContent> {
        Ok(self.get_typed(SITE_CONTENT_KEY)?.unwrap_or_default())
    }

    // ========== Persistence ==========

    /// Write every published document to `path` as `{key: {version, value}}`
    pub fn save_to(&self, path: &Path) -> ClientResult<()> {
        let snapshot: BTreeMap<String, Versioned<Value>> = self
            .channels
            .read()
            .iter()
            .map(|(k, tx)| (k.clone(), tx.borrow().clone()))
            .filter(|(_, doc)| doc.version > 0)
            .collect();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(&snapshot)?;
        std::fs::write(path, json)?;
        tracing::debug!(path = %path.display(), documents = snapshot.len(), "Content snapshot saved");
        Ok(())
    }

    /// Load a snapshot written by [`save_to`](Self::save_to)
    ///
    /// A missing file yields an empty store. Versions are restored as saved.
    pub fn load_from(path: &Path) -> ClientResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No content snapshot, starting empty");
            return Ok(Self::new());
        }
        let bytes = std::fs::read(path)?;
        let snapshot: BTreeMap<String, Versioned<Value>> = serde_json::from_slice(&bytes)?;
        let channels = snapshot
            .into_iter()
            .map(|(k, doc)| (k, watch::Sender::new(doc)))
            .collect();
        Ok(Self {
            channels: RwLock::new(channels),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_publish_bumps_version() {
        let store = ContentStore::new();
        assert!(store.get("k").is_none());
        assert_eq!(store.publish("k", json!({"a": 1})), 1);
        assert_eq!(store.publish("k", json!({"a": 2})), 2);
        assert_eq!(store.get("k").unwrap().value, json!({"a": 2}));
    }

    #[test]
    fn test_publish_same_value_keeps_version() {
        let store = ContentStore::new();
        store.publish("k", json!([1, 2]));
        let mut rx = store.subscribe("k");
        drop(rx.borrow_and_update());
        assert_eq!(store.publish("k", json!([1, 2])), 1);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_schema_mismatch_is_reported() {
        let store = ContentStore::new();
        store.publish(POPUPS_KEY, json!({"not": "a list"}));
        let err = store.popups().unwrap_err();
        assert_eq!(err.code(), ErrorCode::ContentSchemaInvalid);
    }

    #[test]
    fn test_missing_documents_default() {
        let store = ContentStore::new();
        assert!(store.popups().unwrap().is_empty());
        assert_eq!(store.site_content().unwrap(), SiteContent::default());
    }
}
