//! In-memory document store for development and tests.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::{
    sort_documents, BatchOp, Document, DocumentStore, Fields, Ordering, Subscription, WriteBatch,
};
use crate::error::{Result, StoreError};

const WATCH_CHANNEL_CAPACITY: usize = 16;

struct Watcher {
    sender: broadcast::Sender<Vec<Document>>,
    ordering: Ordering,
}

struct Inner {
    collections: HashMap<String, Vec<Document>>,
    watchers: HashMap<String, Vec<Watcher>>,
    /// Last timestamp handed out, kept strictly increasing so that
    /// `createdAt` is a total order within every collection.
    clock: DateTime<Utc>,
}

pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                collections: HashMap::new(),
                watchers: HashMap::new(),
                clock: Utc::now(),
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock only means another thread panicked; the data
        // is still usable for a development store.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let assigned = if now > self.clock {
            now
        } else {
            self.clock + Duration::milliseconds(1)
        };
        self.clock = assigned;
        assigned
    }

    fn document_mut(&mut self, collection: &str, id: &str) -> Result<&mut Document> {
        self.collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| d.id == id))
            .ok_or_else(|| StoreError::Write(format!("no document {id} in {collection}")))
    }

    /// Push the current snapshot of `collection` to every live watcher,
    /// dropping watchers whose receivers are all gone.
    fn notify(&mut self, collection: &str) {
        let docs = self
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default();
        if let Some(watchers) = self.watchers.get_mut(collection) {
            watchers.retain(|w| {
                let mut snapshot = docs.clone();
                sort_documents(&mut snapshot, &w.ordering);
                w.sender.send(snapshot).is_ok()
            });
        }
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn list(&self, collection: &str, ordering: &Ordering) -> Result<Vec<Document>> {
        let inner = self.lock();
        let mut docs = inner
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default();
        drop(inner);
        sort_documents(&mut docs, ordering);
        Ok(docs)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let inner = self.lock();
        Ok(inner
            .collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .cloned())
    }

    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Document>> {
        let inner = self.lock();
        let mut docs: Vec<Document> = inner
            .collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| d.fields.get(field) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        drop(inner);
        docs.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(docs)
    }

    async fn insert(&self, collection: &str, fields: Fields) -> Result<Document> {
        let mut inner = self.lock();
        let doc = Document {
            id: Uuid::new_v4().to_string(),
            fields,
            created_at: inner.next_timestamp(),
            updated_at: None,
        };
        inner
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(doc.clone());
        inner.notify(collection);
        Ok(doc)
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<()> {
        let mut inner = self.lock();
        let now = inner.next_timestamp();
        let doc = inner.document_mut(collection, id)?;
        for (key, value) in fields {
            doc.fields.insert(key, value);
        }
        doc.updated_at = Some(now);
        inner.notify(collection);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let mut inner = self.lock();
        let docs = inner
            .collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::Write(format!("no collection {collection}")))?;
        let before = docs.len();
        docs.retain(|d| d.id != id);
        if docs.len() == before {
            return Err(StoreError::Write(format!(
                "no document {id} in {collection}"
            )));
        }
        inner.notify(collection);
        Ok(())
    }

    async fn watch(&self, collection: &str, ordering: &Ordering) -> Result<Subscription> {
        let mut inner = self.lock();
        let (sender, rx) = broadcast::channel(WATCH_CHANNEL_CAPACITY);
        let mut snapshot = inner
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default();
        sort_documents(&mut snapshot, ordering);
        // The initial snapshot is delivered immediately, like a remote
        // feed's first onSnapshot callback.
        let _ = sender.send(snapshot);
        inner
            .watchers
            .entry(collection.to_string())
            .or_default()
            .push(Watcher {
                sender,
                ordering: ordering.clone(),
            });
        Ok(Subscription::new(rx, None))
    }

    async fn commit(&self, batch: WriteBatch) -> Result<()> {
        let mut inner = self.lock();

        // Validate every op before touching anything so a bad op cannot
        // leave a partially applied batch.
        for op in &batch.ops {
            let BatchOp::Update { collection, id, .. } = op;
            inner
                .collections
                .get(collection)
                .and_then(|docs| docs.iter().find(|d| d.id == *id))
                .ok_or_else(|| StoreError::Write(format!("no document {id} in {collection}")))?;
        }

        let now = inner.next_timestamp();
        let mut touched: Vec<String> = Vec::new();
        for op in batch.ops {
            let BatchOp::Update {
                collection,
                id,
                fields,
            } = op;
            let doc = inner.document_mut(&collection, &id)?;
            for (key, value) in fields {
                doc.fields.insert(key, value);
            }
            doc.updated_at = Some(now);
            if !touched.contains(&collection) {
                touched.push(collection);
            }
        }
        for collection in touched {
            inner.notify(&collection);
        }
        Ok(())
    }
}
