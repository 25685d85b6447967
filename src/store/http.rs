//! REST transport for the document store.
//!
//! The service exposes one route per collection: `GET` lists (with
//! `orderBy`/`direction` query parameters) or filters (`field`/`equals`),
//! `POST` creates, `PATCH` merges, `DELETE` removes, and `POST /commit`
//! applies a batch atomically. The transport has no push channel, so
//! `watch` polls the list on a configured interval and broadcasts only
//! when the snapshot actually changed.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::sync::broadcast;
use url::Url;

use super::{Direction, Document, DocumentStore, Fields, Ordering, Subscription, WriteBatch};
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};

const WATCH_CHANNEL_CAPACITY: usize = 16;

pub struct HttpStore {
    client: Client,
    base: Url,
    poll_interval: Duration,
}

impl HttpStore {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| StoreError::Fetch(format!("invalid store base URL: {e}")))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| StoreError::Fetch(format!("could not build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base,
            poll_interval: Duration::from_secs(config.poll_interval_secs),
        })
    }

    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| StoreError::Fetch("store base URL cannot be a base".into()))?;
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }
}

fn direction_param(direction: Direction) -> &'static str {
    match direction {
        Direction::Ascending => "asc",
        Direction::Descending => "desc",
    }
}

/// Render a JSON value for an equality-filter query parameter. Strings
/// go over the wire bare, everything else as its JSON text.
fn filter_param(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

async fn fetch_list(
    client: &Client,
    url: Url,
    ordering: &Ordering,
) -> Result<Vec<Document>> {
    let response = client
        .get(url)
        .query(&[
            ("orderBy", ordering.field.as_str()),
            ("direction", direction_param(ordering.direction)),
        ])
        .send()
        .await
        .map_err(|e| StoreError::Fetch(e.to_string()))?
        .error_for_status()
        .map_err(|e| StoreError::Fetch(e.to_string()))?;
    response
        .json()
        .await
        .map_err(|e| StoreError::Fetch(format!("malformed list response: {e}")))
}

#[async_trait::async_trait]
impl DocumentStore for HttpStore {
    async fn list(&self, collection: &str, ordering: &Ordering) -> Result<Vec<Document>> {
        fetch_list(&self.client, self.url(&[collection])?, ordering).await
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let response = self
            .client
            .get(self.url(&[collection, id])?)
            .send()
            .await
            .map_err(|e| StoreError::Fetch(e.to_string()))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = response
            .error_for_status()
            .map_err(|e| StoreError::Fetch(e.to_string()))?;
        let doc = response
            .json()
            .await
            .map_err(|e| StoreError::Fetch(format!("malformed document response: {e}")))?;
        Ok(Some(doc))
    }

    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Document>> {
        let equals = filter_param(value);
        let response = self
            .client
            .get(self.url(&[collection])?)
            .query(&[("field", field), ("equals", equals.as_str())])
            .send()
            .await
            .map_err(|e| StoreError::Fetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| StoreError::Fetch(e.to_string()))?;
        response
            .json()
            .await
            .map_err(|e| StoreError::Fetch(format!("malformed query response: {e}")))
    }

    async fn insert(&self, collection: &str, fields: Fields) -> Result<Document> {
        let response = self
            .client
            .post(self.url(&[collection])?)
            .json(&fields)
            .send()
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?
            .error_for_status()
            .map_err(|e| StoreError::Write(e.to_string()))?;
        response
            .json()
            .await
            .map_err(|e| StoreError::Write(format!("malformed create response: {e}")))
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<()> {
        self.client
            .patch(self.url(&[collection, id])?)
            .json(&fields)
            .send()
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?
            .error_for_status()
            .map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        self.client
            .delete(self.url(&[collection, id])?)
            .send()
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?
            .error_for_status()
            .map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(())
    }

    async fn watch(&self, collection: &str, ordering: &Ordering) -> Result<Subscription> {
        let url = self.url(&[collection])?;
        let initial = fetch_list(&self.client, url.clone(), ordering).await?;

        let (sender, rx) = broadcast::channel(WATCH_CHANNEL_CAPACITY);
        let _ = sender.send(initial.clone());

        let client = self.client.clone();
        let ordering = ordering.clone();
        let interval = self.poll_interval;
        let collection = collection.to_string();
        let task = tokio::spawn(async move {
            let mut last = initial;
            loop {
                tokio::time::sleep(interval).await;
                match fetch_list(&client, url.clone(), &ordering).await {
                    Ok(snapshot) => {
                        if snapshot != last {
                            last = snapshot.clone();
                            if sender.send(snapshot).is_err() {
                                // Every receiver is gone.
                                return;
                            }
                        }
                    }
                    Err(e) => {
                        tracing::warn!("watch poll for {} failed: {}", collection, e);
                    }
                }
            }
        });

        Ok(Subscription::new(rx, Some(task)))
    }

    async fn commit(&self, batch: WriteBatch) -> Result<()> {
        if batch.is_empty() {
            return Ok(());
        }
        self.client
            .post(self.url(&["commit"])?)
            .json(&batch)
            .send()
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?
            .error_for_status()
            .map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(())
    }
}
