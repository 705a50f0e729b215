//! Durable-store backends
//!
//! A collection is persisted as one JSON document under its name, the way
//! the original deployment kept each collection under a localStorage key.
//! Backends only move documents; (de)serialization of typed records happens
//! in the record store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;
use tokio::fs;
use tracing::debug;

/// Durable-store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt collection document for '{collection}': {source}")]
    Corrupt {
        collection: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Unified interface for durable collection storage
///
/// `load` returns `None` when the collection has never been written, which
/// is the signal the record store uses to seed demonstration data.
#[async_trait]
pub trait DurableStore: Send + Sync {
    /// Load the JSON document for a collection
    async fn load(&self, collection: &str) -> StoreResult<Option<String>>;

    /// Save the JSON document for a collection
    async fn save(&self, collection: &str, document: &str) -> StoreResult<()>;

    /// Backend name for logging
    fn name(&self) -> &str;
}

/// Filesystem backend: `<data_dir>/<collection>.json`
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{collection}.json"))
    }
}

#[async_trait]
impl DurableStore for JsonFileStore {
    async fn load(&self, collection: &str) -> StoreResult<Option<String>> {
        let path = self.collection_path(collection);
        match fs::read_to_string(&path).await {
            Ok(document) => {
                debug!(collection, path = %path.display(), "loaded collection");
                Ok(Some(document))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, collection: &str, document: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.root).await?;
        let path = self.collection_path(collection);
        // Write to a sibling temp file and rename so a crash mid-write
        // cannot truncate the collection.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, document).await?;
        fs::rename(&tmp, &path).await?;
        debug!(collection, path = %path.display(), "saved collection");
        Ok(())
    }

    fn name(&self) -> &str {
        "json-file"
    }
}

/// In-memory backend for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a collection document, as if a previous session had saved it
    pub fn preload(&self, collection: &str, document: impl Into<String>) {
        self.documents
            .lock()
            .insert(collection.to_string(), document.into());
    }
}

#[async_trait]
impl DurableStore for MemoryStore {
    async fn load(&self, collection: &str) -> StoreResult<Option<String>> {
        Ok(self.documents.lock().get(collection).cloned())
    }

    async fn save(&self, collection: &str, document: &str) -> StoreResult<()> {
        self.documents
            .lock()
            .insert(collection.to_string(), document.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// A backend whose writes always fail; used to exercise the
/// state-stays-authoritative policy in tests.
#[cfg(any(test, feature = "test-backends"))]
pub struct FailingStore;

#[cfg(any(test, feature = "test-backends"))]
#[async_trait]
impl DurableStore for FailingStore {
    async fn load(&self, _collection: &str) -> StoreResult<Option<String>> {
        Ok(None)
    }

    async fn save(&self, _collection: &str, _document: &str) -> StoreResult<()> {
        Err(StoreError::Backend("write refused".to_string()))
    }

    fn name(&self) -> &str {
        "failing"
    }
}
