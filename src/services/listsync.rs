//! Validated CRUD over a remote collection, kept consistent with the
//! lists rendered from it.
//!
//! There is no optimistic local mutation: a write that fails leaves
//! every previously loaded snapshot untouched, and a successful write is
//! picked up by re-loading or by an active subscription. Validation
//! runs strictly before any network call, and a delete can only be
//! issued with an explicit confirmation value.

use std::sync::Arc;

use serde_json::Value;

use crate::error::{Result, StoreError};
use crate::services::upload::{MediaFile, MediaUploader};
use crate::store::{Document, DocumentStore, Fields, Ordering, Subscription};

/// A file submitted alongside a create or update, and the document
/// field that receives the uploaded URL (for example `imageURL` on blog
/// posts, `pdfUrl` on lessons).
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file: MediaFile,
    pub field: String,
}

impl Attachment {
    pub fn new(file: MediaFile, field: &str) -> Self {
        Self {
            file,
            field: field.to_string(),
        }
    }
}

/// Proof that the user confirmed a delete. Constructing it is the
/// confirmation step; `remove` cannot be called without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
}

pub struct ListSync<S> {
    store: Arc<S>,
    uploader: Option<Arc<dyn MediaUploader>>,
}

impl<S: DocumentStore> ListSync<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            uploader: None,
        }
    }

    pub fn with_uploader(store: Arc<S>, uploader: Arc<dyn MediaUploader>) -> Self {
        Self {
            store,
            uploader: Some(uploader),
        }
    }

    /// One-shot fetch of the full ordered collection. Retry policy is
    /// the caller's decision.
    pub async fn load(&self, collection: &str, ordering: &Ordering) -> Result<Vec<Document>> {
        self.store.list(collection, ordering).await
    }

    /// Open a realtime feed. The feed is released when the returned
    /// subscription is dropped.
    pub async fn subscribe(&self, collection: &str, ordering: &Ordering) -> Result<Subscription> {
        self.store.watch(collection, ordering).await
    }

    /// Validate, upload the attachment if present, then write a new
    /// document. The store assigns id and creation timestamp.
    pub async fn create(
        &self,
        collection: &str,
        mut fields: Fields,
        required: &[&str],
        attachment: Option<Attachment>,
    ) -> Result<Document> {
        validate(&fields, required)?;
        if let Some(attachment) = attachment {
            let url = self.upload(&attachment).await?;
            fields.insert(attachment.field, Value::String(url));
        }
        let doc = self.store.insert(collection, fields).await?;
        tracing::info!("created document {} in {}", doc.id, collection);
        Ok(doc)
    }

    /// Same validation and failure semantics as `create`, against an
    /// existing document. A new attachment replaces the stored media
    /// URL; without one the previous URL is left untouched (merge
    /// semantics never clear it).
    pub async fn update(
        &self,
        collection: &str,
        id: &str,
        mut fields: Fields,
        required: &[&str],
        attachment: Option<Attachment>,
    ) -> Result<()> {
        validate(&fields, required)?;
        if let Some(attachment) = attachment {
            let url = self.upload(&attachment).await?;
            fields.insert(attachment.field, Value::String(url));
        }
        self.store.update(collection, id, fields).await?;
        tracing::info!("updated document {} in {}", id, collection);
        Ok(())
    }

    /// Delete a document. The item stays in place if the remote delete
    /// fails.
    pub async fn remove(
        &self,
        collection: &str,
        id: &str,
        _confirm: Confirmation,
    ) -> Result<()> {
        self.store.delete(collection, id).await?;
        tracing::info!("removed document {} from {}", id, collection);
        Ok(())
    }

    async fn upload(&self, attachment: &Attachment) -> Result<String> {
        let uploader = self
            .uploader
            .as_ref()
            .ok_or_else(|| StoreError::Upload("no uploader configured".to_string()))?;
        uploader.upload(&attachment.file).await
    }
}

/// Every required field must be present, and string fields must be
/// non-empty after trimming. Non-string values count as present.
fn validate(fields: &Fields, required: &[&str]) -> Result<()> {
    for field in required {
        match fields.get(*field) {
            None | Some(Value::Null) => return Err(StoreError::validation(*field)),
            Some(Value::String(s)) if s.trim().is_empty() => {
                return Err(StoreError::validation(*field))
            }
            Some(_) => {}
        }
    }
    Ok(())
}
