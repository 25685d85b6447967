use thiserror::Error;

/// Failure taxonomy for every remote-facing operation. Each variant is
/// scoped to a single in-flight call: nothing here is fatal and nothing
/// is retried automatically.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field was missing or empty. Raised before any network
    /// call is attempted.
    #[error("required field `{field}` is missing or empty")]
    Validation { field: String },

    /// The file's media type is not accepted for upload. Raised before
    /// any network call is attempted.
    #[error("unsupported media type `{mime}`: only JPEG, PNG, WEBP and PDF are accepted")]
    UnsupportedType { mime: String },

    /// The upload service rejected or failed the request.
    #[error("upload failed: {0}")]
    Upload(String),

    /// A document create, update, delete or batch commit failed.
    #[error("write failed: {0}")]
    Write(String),

    /// A list, get or query against the document store failed.
    #[error("fetch failed: {0}")]
    Fetch(String),
}

impl StoreError {
    pub fn validation(field: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
