//! Remote document store abstraction.
//!
//! Collections are flat named sets of schemaless documents. The store
//! assigns document ids and creation timestamps; `createdAt` is the
//! ordering key for every list in the system.

pub mod http;
pub mod memory;

pub use http::HttpStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::error::Result;

pub type Fields = serde_json::Map<String, Value>;

/// A single schemaless document. `id` and `created_at` are assigned by
/// the store exactly once; `updated_at` is refreshed on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Document {
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    pub fn bool_field(&self, name: &str) -> Option<bool> {
        self.fields.get(name).and_then(Value::as_bool)
    }

    pub fn i64_field(&self, name: &str) -> Option<i64> {
        self.fields.get(name).and_then(Value::as_i64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

/// Sort order for a collection listing. Every list declares its order
/// explicitly; there is no implicit default.
#[derive(Debug, Clone, PartialEq)]
pub struct Ordering {
    pub field: String,
    pub direction: Direction,
}

impl Ordering {
    pub fn ascending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: Direction::Ascending,
        }
    }

    pub fn descending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: Direction::Descending,
        }
    }
}

/// An all-or-nothing set of field updates across one or more documents.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WriteBatch {
    pub ops: Vec<BatchOp>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum BatchOp {
    Update {
        collection: String,
        id: String,
        fields: Fields,
    },
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, collection: &str, id: &str, fields: Fields) {
        self.ops.push(BatchOp::Update {
            collection: collection.to_string(),
            id: id.to_string(),
            fields,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }
}

/// A realtime feed over one collection. Each message is the full,
/// re-ordered snapshot after a change. The feed is released when the
/// subscription is dropped; for polled transports that also aborts the
/// poll task.
pub struct Subscription {
    rx: broadcast::Receiver<Vec<Document>>,
    task: Option<JoinHandle<()>>,
}

impl Subscription {
    pub(crate) fn new(rx: broadcast::Receiver<Vec<Document>>, task: Option<JoinHandle<()>>) -> Self {
        Self { rx, task }
    }

    /// Wait for the next snapshot. Returns `None` once the feed is
    /// closed. A consumer that falls behind skips to the most recent
    /// snapshots rather than erroring.
    pub async fn next(&mut self) -> Option<Vec<Document>> {
        loop {
            match self.rx.recv().await {
                Ok(snapshot) => return Some(snapshot),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Trait for a remote schemaless document store.
///
/// Implementations must be `Send + Sync` and safe for concurrent access.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch every document in a collection, sorted by `ordering`.
    async fn list(&self, collection: &str, ordering: &Ordering) -> Result<Vec<Document>>;

    /// Fetch one document by id. Returns `None` if it does not exist.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// Fetch every document whose `field` equals `value`, oldest first.
    async fn query_eq(&self, collection: &str, field: &str, value: &Value)
        -> Result<Vec<Document>>;

    /// Write a new document. The store assigns the id and the creation
    /// timestamp, which is monotonically increasing per collection.
    async fn insert(&self, collection: &str, fields: Fields) -> Result<Document>;

    /// Merge `fields` into an existing document and refresh its
    /// `updatedAt` timestamp. Untouched fields keep their values.
    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<()>;

    /// Delete a document.
    async fn delete(&self, collection: &str, id: &str) -> Result<()>;

    /// Open a realtime feed over a collection.
    async fn watch(&self, collection: &str, ordering: &Ordering) -> Result<Subscription>;

    /// Apply a batch of updates atomically: either every op is applied
    /// or none is, with no observable intermediate state.
    async fn commit(&self, batch: WriteBatch) -> Result<()>;
}

/// Sort documents in place. `createdAt` compares on the server-assigned
/// timestamp; any other field compares on its JSON representation.
pub(crate) fn sort_documents(docs: &mut [Document], ordering: &Ordering) {
    docs.sort_by(|a, b| {
        let cmp = if ordering.field == "createdAt" {
            a.created_at.cmp(&b.created_at)
        } else {
            let av = a.fields.get(&ordering.field).map(Value::to_string);
            let bv = b.fields.get(&ordering.field).map(Value::to_string);
            av.cmp(&bv)
        };
        match ordering.direction {
            Direction::Ascending => cmp,
            Direction::Descending => cmp.reverse(),
        }
    });
}
