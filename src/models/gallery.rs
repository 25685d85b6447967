use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::store::{Document, Fields};

#[derive(Debug, Clone, Serialize)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author_name: String,
    pub url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl GalleryItem {
    pub const COLLECTION: &'static str = "hefGallery";
    pub const REQUIRED_FIELDS: &'static [&'static str] = &["title", "description"];
    pub const MEDIA_FIELD: &'static str = "url";

    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            title: doc
                .str_field("title")
                .filter(|s| !s.is_empty())
                .unwrap_or("Untitled")
                .to_string(),
            description: doc
                .str_field("description")
                .filter(|s| !s.is_empty())
                .unwrap_or("No description")
                .to_string(),
            author_name: doc
                .str_field("authorName")
                .filter(|s| !s.is_empty())
                .unwrap_or("Anonymous")
                .to_string(),
            url: doc
                .str_field(Self::MEDIA_FIELD)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            created_at: doc.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGalleryItem {
    pub title: String,
    pub description: String,
    pub author_name: String,
}

impl CreateGalleryItem {
    pub fn into_fields(self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("title".to_string(), json!(self.title));
        fields.insert("description".to_string(), json!(self.description));
        fields.insert("authorName".to_string(), json!(self.author_name));
        fields
    }
}
