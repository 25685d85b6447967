//! Media upload client.
//!
//! Files are gated by media type before any network traffic: the site
//! accepts JPEG, PNG and WEBP images plus PDF documents, nothing else.
//! The service takes a multipart `file` field and answers with
//! `{ "url": ... }` (older deployments used `secure_url`); that URL is
//! stored verbatim on the owning document.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;
use url::Url;

use crate::config::UploadConfig;
use crate::error::{Result, StoreError};

pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/webp",
    "application/pdf",
];

/// A file picked up for upload, with its declared content type when the
/// caller knows it.
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl MediaFile {
    /// Read a file from disk, guessing the content type from its
    /// extension.
    pub fn read(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .map_err(|e| StoreError::Upload(format!("could not read {}: {}", path.display(), e)))?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let content_type = mime_guess::from_path(path)
            .first()
            .map(|m| m.essence_str().to_string());
        Ok(Self {
            filename,
            content_type,
            data,
        })
    }

    /// The declared content type, falling back to a guess from the
    /// filename.
    pub fn resolved_type(&self) -> Option<String> {
        self.content_type.clone().or_else(|| {
            mime_guess::from_path(&self.filename)
                .first()
                .map(|m| m.essence_str().to_string())
        })
    }
}

/// Reject anything that is not an accepted image or PDF. Runs before
/// any network call; an unknown type is rejected too.
pub fn check_media_type(file: &MediaFile) -> Result<String> {
    let mime = file.resolved_type().ok_or_else(|| StoreError::UnsupportedType {
        mime: "unknown".to_string(),
    })?;
    if !ALLOWED_MIME_TYPES.contains(&mime.as_str()) {
        return Err(StoreError::UnsupportedType { mime });
    }
    Ok(mime)
}

#[async_trait]
pub trait MediaUploader: Send + Sync {
    /// Upload a file and return a durable, publicly dereferenceable URL.
    async fn upload(&self, file: &MediaFile) -> Result<String>;
}

pub struct HttpUploader {
    client: reqwest::Client,
    endpoint: Url,
    max_file_size: usize,
}

impl HttpUploader {
    pub fn new(config: &UploadConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| StoreError::Upload(format!("invalid upload endpoint: {e}")))?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| StoreError::Upload(format!("could not build HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint,
            max_file_size: config.max_file_size,
        })
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    url: Option<String>,
    secure_url: Option<String>,
}

#[async_trait]
impl MediaUploader for HttpUploader {
    async fn upload(&self, file: &MediaFile) -> Result<String> {
        let mime = check_media_type(file)?;

        if file.data.len() > self.max_file_size {
            return Err(StoreError::Upload(format!(
                "file too large: {} bytes (max {} bytes)",
                file.data.len(),
                self.max_file_size
            )));
        }

        let part = multipart::Part::bytes(file.data.clone())
            .file_name(file.filename.clone())
            .mime_str(&mime)
            .map_err(|e| StoreError::Upload(e.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        tracing::debug!("uploading {} ({} bytes, {})", file.filename, file.data.len(), mime);

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| StoreError::Upload(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Upload(format!("{status}: {body}")));
        }

        let parsed: UploadResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Upload(format!("malformed upload response: {e}")))?;

        parsed
            .url
            .or(parsed.secure_url)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| StoreError::Upload("upload response missing url".to_string()))
    }
}
