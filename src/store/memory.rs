use super::types::{FetchFuture, ProviderStore};
use crate::catalog::types::{ProviderDocument, documents_from_json};

use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

/// In-memory provider collection with a full-snapshot change feed.
pub struct MemoryProviderStore {
    documents: DashMap<String, Value>,
    feed: watch::Sender<Vec<ProviderDocument>>,
}

impl MemoryProviderStore {
    pub fn new() -> Arc<Self> {
        Self::seeded(Vec::new())
    }

    pub fn seeded(docs: Vec<ProviderDocument>) -> Arc<Self> {
        let documents = DashMap::new();
        for doc in docs {
            documents.insert(doc.id, doc.data);
        }

        let (feed, _) = watch::channel(Vec::new());
        let store = Arc::new(Self { documents, feed });
        store.publish();
        store
    }

    /// Seeds the store from a JSON dataset (keyed `{"users": {...}}` or an array).
    pub fn from_seed_json(value: &Value) -> Arc<Self> {
        let docs = documents_from_json(value);
        tracing::info!("Seeding provider store with {} documents", docs.len());
        Self::seeded(docs)
    }

    /// Receives the current collection now and again after every write.
    pub fn subscribe(&self) -> watch::Receiver<Vec<ProviderDocument>> {
        self.feed.subscribe()
    }

    /// All documents, ordered by id.
    pub fn snapshot(&self) -> Vec<ProviderDocument> {
        let mut docs: Vec<ProviderDocument> = self
            .documents
            .iter()
            .map(|entry| ProviderDocument::new(entry.key().clone(), entry.value().clone()))
            .collect();
        docs.sort_by(|a, b| a.id.cmp(&b.id));
        docs
    }

    pub fn get(&self, id: &str) -> Option<Value> {
        self.documents.get(id).map(|entry| entry.value().clone())
    }

    pub fn upsert(&self, id: &str, data: Value) {
        self.documents.insert(id.to_string(), data);
        tracing::debug!("Stored provider {}", id);
        self.publish();
    }

    /// Stores a document under a freshly generated id and returns that id.
    pub fn insert_new(&self, data: Value) -> String {
        let id = Uuid::new_v4().to_string();
        self.upsert(&id, data);
        id
    }

    pub fn remove(&self, id: &str) -> bool {
        let removed = self.documents.remove(id).is_some();
        if removed {
            tracing::debug!("Removed provider {}", id);
            self.publish();
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn publish(&self) {
        self.feed.send_replace(self.snapshot());
    }
}

impl ProviderStore for MemoryProviderStore {
    fn fetch_all(&self) -> FetchFuture<'_> {
        Box::pin(async move { Ok(self.snapshot()) })
    }
}
